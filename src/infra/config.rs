//! Loads the trade-goods and locations documents into a [`Catalog`].
//!
//! - YAML (`.yaml`, `.yml`) and JSON (`.json`) documents, picked by extension.
//! - Every good a location mentions must exist in the trade-goods document.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Catalog, Location, TradeGood};

pub const DEFAULT_TRADE_GOODS_PATH: &str = "data/trade_goods.yaml";
pub const DEFAULT_LOCATIONS_PATH: &str = "data/locations.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported document format for {}; expected .yaml, .yml or .json", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("malformed {document} document at `{path}`: {message}")]
    Malformed {
        document: DocumentKind,
        path: String,
        message: String,
    },
    #[error("location `{location}` references unknown trade good `{good}` in {field}")]
    UnknownGood {
        location: String,
        good: String,
        field: LocationField,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    TradeGoods,
    Locations,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::TradeGoods => f.write_str("trade goods"),
            DocumentKind::Locations => f.write_str("locations"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationField {
    TradeGoods,
    Buying,
}

impl std::fmt::Display for LocationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationField::TradeGoods => f.write_str("`Trade Goods`"),
            LocationField::Buying => f.write_str("`buying`"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// `{ good_name: base_price }`
pub type TradeGoodsDocument = BTreeMap<String, u32>;

/// `{ location_name: { "Trade Goods": [...], "buying": {...} } }`
pub type LocationsDocument = BTreeMap<String, LocationEntry>;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationEntry {
    #[serde(rename = "Trade Goods")]
    pub trade_goods: Vec<String>,
    /// Kept in document order.
    #[serde(deserialize_with = "prices_in_order")]
    pub buying: Vec<(String, u32)>,
}

fn prices_in_order<'de, D>(deserializer: D) -> Result<Vec<(String, u32)>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct OrderedPrices;

    impl<'de> serde::de::Visitor<'de> for OrderedPrices {
        type Value = Vec<(String, u32)>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a map of trade good names to prices")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            let mut prices: Vec<(String, u32)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((good, price)) = map.next_entry::<String, u32>()? {
                if prices.iter().any(|(known, _)| *known == good) {
                    return Err(serde::de::Error::custom(format!(
                        "duplicate trade good `{good}`"
                    )));
                }
                prices.push((good, price));
            }
            Ok(prices)
        }
    }

    deserializer.deserialize_map(OrderedPrices)
}

/// Where to find the two documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigPaths {
    pub trade_goods: PathBuf,
    pub locations: PathBuf,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self {
            trade_goods: PathBuf::from(DEFAULT_TRADE_GOODS_PATH),
            locations: PathBuf::from(DEFAULT_LOCATIONS_PATH),
        }
    }
}

pub fn parse_document<T: DeserializeOwned>(
    text: &str,
    format: DocumentFormat,
    document: DocumentKind,
) -> Result<T, ConfigError> {
    let malformed = |path: String, message: String| ConfigError::Malformed {
        document,
        path,
        message,
    };

    match format {
        DocumentFormat::Yaml => {
            serde_path_to_error::deserialize(serde_yaml::Deserializer::from_str(text))
                .map_err(|err| malformed(err.path().to_string(), err.inner().to_string()))
        }
        DocumentFormat::Json => {
            let deserializer = &mut serde_json::Deserializer::from_str(text);
            serde_path_to_error::deserialize(deserializer)
                .map_err(|err| malformed(err.path().to_string(), err.inner().to_string()))
        }
    }
}

pub fn load_trade_goods(doc: TradeGoodsDocument) -> BTreeMap<String, TradeGood> {
    doc.into_iter()
        .map(|(name, base_price)| (name.clone(), TradeGood::new(name, base_price)))
        .collect()
}

pub fn load_locations(
    doc: LocationsDocument,
    trade_goods: &BTreeMap<String, TradeGood>,
) -> Result<BTreeMap<String, Location>, ConfigError> {
    let mut locations = BTreeMap::new();

    for (name, entry) in doc {
        let resolve = |good: &str, field: LocationField| {
            trade_goods
                .get(good)
                .cloned()
                .ok_or_else(|| ConfigError::UnknownGood {
                    location: name.clone(),
                    good: good.to_string(),
                    field,
                })
        };

        let mut location = Location::new(name.clone());
        for good in &entry.trade_goods {
            location.add_good(resolve(good.as_str(), LocationField::TradeGoods)?);
        }
        location.buying = entry
            .buying
            .iter()
            .map(|(good, price)| Ok((resolve(good.as_str(), LocationField::Buying)?, *price)))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        debug!(
            location = %name,
            selling = location.trade_goods.len(),
            buying = location.buying.len(),
            "loaded location"
        );
        locations.insert(name, location);
    }

    Ok(locations)
}

fn read_document<T: DeserializeOwned>(path: &Path, document: DocumentKind) -> Result<T, ConfigError> {
    let format = DocumentFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text, format, document)
}

pub fn load_catalog(paths: &ConfigPaths) -> Result<Catalog, ConfigError> {
    let goods_doc: TradeGoodsDocument = read_document(&paths.trade_goods, DocumentKind::TradeGoods)?;
    let trade_goods = load_trade_goods(goods_doc);

    let locations_doc: LocationsDocument = read_document(&paths.locations, DocumentKind::Locations)?;
    let locations = load_locations(locations_doc, &trade_goods)?;

    info!(
        trade_goods = trade_goods.len(),
        locations = locations.len(),
        goods_path = %paths.trade_goods.display(),
        locations_path = %paths.locations.display(),
        "loaded trade data"
    );

    Ok(Catalog::new(trade_goods, locations))
}
