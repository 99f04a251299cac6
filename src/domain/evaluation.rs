use tracing::debug;

use super::entities::{Catalog, Location, TradeGood};

/// Profit made by selling a good at a target for its buy price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub profit: i64,
    /// `profit / base_price` as a ratio; `None` when the base price is zero.
    pub percent: Option<f64>,
}

impl Margin {
    pub fn is_loss(&self) -> bool {
        self.profit < 0
    }

    pub fn profit_label(&self) -> String {
        format!("{}g", self.profit)
    }

    pub fn percent_label(&self) -> String {
        match self.percent {
            Some(ratio) => format!("{:.2}%", ratio * 100.0),
            None => "n/a".to_string(),
        }
    }
}

pub fn compute_margin(base_price: u32, target_price: u32) -> Margin {
    let profit = i64::from(target_price) - i64::from(base_price);
    let percent = if base_price == 0 {
        None
    } else {
        Some(profit as f64 / f64::from(base_price))
    };

    Margin { profit, percent }
}

/// Price `target` pays for `good`, or `None` when it has no offer.
pub fn price_for_target(target: &Location, good: &TradeGood) -> Option<u32> {
    target.price_for(good)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub good: String,
    pub base_price: u32,
    pub target_price: u32,
    pub margin: Margin,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TargetComparison {
    pub target: String,
    pub rows: Vec<ComparisonRow>,
    /// Goods the origin sells that this target doesn't buy.
    pub not_buying: Vec<String>,
}

impl TargetComparison {
    /// Row with the highest profit; the first one wins ties.
    pub fn best_row(&self) -> Option<&ComparisonRow> {
        self.rows.iter().fold(None, |best: Option<&ComparisonRow>, row| match best {
            Some(current) if current.margin.profit >= row.margin.profit => Some(current),
            _ => Some(row),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BestTrade {
    pub target: String,
    pub row: ComparisonRow,
}

/// Everything the trade tab needs to draw the comparison for one origin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComparisonView {
    pub origin: Option<String>,
    pub targets: Vec<TargetComparison>,
}

impl ComparisonView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn best_trade(&self) -> Option<BestTrade> {
        let mut best: Option<BestTrade> = None;
        for target in &self.targets {
            let Some(row) = target.best_row() else {
                continue;
            };
            let better = best
                .as_ref()
                .map(|current| row.margin.profit > current.row.margin.profit)
                .unwrap_or(true);
            if better {
                best = Some(BestTrade {
                    target: target.target.clone(),
                    row: row.clone(),
                });
            }
        }
        best
    }
}

pub fn compare_targets(origin: &Location, target: &Location) -> TargetComparison {
    let mut rows = Vec::new();
    let mut not_buying = Vec::new();

    for good in origin.sorted_trade_goods() {
        match price_for_target(target, good) {
            Some(target_price) => rows.push(ComparisonRow {
                good: good.name.clone(),
                base_price: good.base_price,
                target_price,
                margin: compute_margin(good.base_price, target_price),
            }),
            None => not_buying.push(good.name.clone()),
        }
    }

    TargetComparison {
        target: target.name.clone(),
        rows,
        not_buying,
    }
}

/// Compares `origin` against every other location, sorted by target name.
/// Returns `None` when the origin isn't in the catalog.
pub fn compare_origin(catalog: &Catalog, origin: &str) -> Option<ComparisonView> {
    let Some(origin_location) = catalog.location(origin) else {
        debug!(origin, "origin not found in catalog");
        return None;
    };

    let targets = catalog
        .locations
        .values()
        .filter(|target| target.name != origin_location.name)
        .map(|target| compare_targets(origin_location, target))
        .collect::<Vec<_>>();

    debug!(
        origin,
        targets = targets.len(),
        "computed trade comparison"
    );

    Some(ComparisonView {
        origin: Some(origin_location.name.clone()),
        targets,
    })
}
