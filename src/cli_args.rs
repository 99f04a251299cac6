use std::path::PathBuf;

use clap::Parser;

use crate::infra::config::{ConfigPaths, DEFAULT_LOCATIONS_PATH, DEFAULT_TRADE_GOODS_PATH};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// trade goods document (good name -> base price)
    #[arg(long, env("WARTALES_TRADE_GOODS"), default_value = DEFAULT_TRADE_GOODS_PATH)]
    pub trade_goods: PathBuf,
    /// locations document (sell lists and buy prices)
    #[arg(long, env("WARTALES_LOCATIONS"), default_value = DEFAULT_LOCATIONS_PATH)]
    pub locations: PathBuf,
    /// start without restoring the last selected location
    #[arg(long)]
    pub no_restore: bool,
}

impl Cli {
    pub fn config_paths(&self) -> ConfigPaths {
        ConfigPaths {
            trade_goods: self.trade_goods.clone(),
            locations: self.locations.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_bundled_data() {
        let cli = Cli::try_parse_from(["wartales_trade_helper"]).unwrap();
        assert_eq!(cli.config_paths(), ConfigPaths::default());
        assert_eq!(cli.trade_goods, PathBuf::from("data/trade_goods.yaml"));
        assert_eq!(cli.locations, PathBuf::from("data/locations.yaml"));
        assert!(!cli.no_restore);
    }

    #[test]
    fn paths_can_be_overridden() {
        let cli = Cli::try_parse_from([
            "wartales_trade_helper",
            "--trade-goods",
            "data/goods.json",
            "--locations",
            "data/locations.yml",
            "--no-restore",
        ])
        .unwrap();

        let paths = cli.config_paths();
        assert_eq!(paths.trade_goods, PathBuf::from("data/goods.json"));
        assert_eq!(paths.locations, PathBuf::from("data/locations.yml"));
        assert!(cli.no_restore);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
