use std::{
    cmp::Ordering,
    collections::BTreeMap,
    hash::{Hash, Hasher},
};

/// A tradable commodity with its catalog-wide base price.
///
/// Goods are identified by name: two `TradeGood` values with the same name are
/// the same good even if they were loaded from different documents.
#[derive(Clone, Debug)]
pub struct TradeGood {
    pub name: String,
    pub base_price: u32,
}

impl TradeGood {
    pub fn new(name: impl Into<String>, base_price: u32) -> Self {
        Self {
            name: name.into(),
            base_price,
        }
    }
}

impl PartialEq for TradeGood {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TradeGood {}

impl Hash for TradeGood {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for TradeGood {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TradeGood {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// A place that sells some goods and buys others at its own price.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub name: String,
    /// Goods sold here, in document order.
    pub trade_goods: Vec<TradeGood>,
    /// Goods this location buys from the trader, with the price it pays.
    pub buying: Vec<(TradeGood, u32)>,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trade_goods: Vec::new(),
            buying: Vec::new(),
        }
    }

    pub fn add_good(&mut self, trade_good: TradeGood) {
        self.trade_goods.push(trade_good);
    }

    /// Price this location pays for `trade_good`, or `None` when it doesn't buy it.
    pub fn price_for(&self, trade_good: &TradeGood) -> Option<u32> {
        self.buying
            .iter()
            .find(|(good, _)| good == trade_good)
            .map(|(_, price)| *price)
    }

    /// Sold goods sorted by name.
    pub fn sorted_trade_goods(&self) -> Vec<&TradeGood> {
        let mut goods: Vec<_> = self.trade_goods.iter().collect();
        goods.sort();
        goods
    }
}

/// Everything loaded from the two data documents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub trade_goods: BTreeMap<String, TradeGood>,
    pub locations: BTreeMap<String, Location>,
}

impl Catalog {
    pub fn new(
        trade_goods: BTreeMap<String, TradeGood>,
        locations: BTreeMap<String, Location>,
    ) -> Self {
        Self {
            trade_goods,
            locations,
        }
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    /// Location names in alphabetical order.
    pub fn location_names(&self) -> Vec<String> {
        self.locations.keys().cloned().collect()
    }

    pub fn first_location(&self) -> Option<&str> {
        self.locations.keys().next().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goods_compare_by_name_only() {
        let loaded = TradeGood::new("Wheat", 10);
        let reloaded = TradeGood::new("Wheat", 12);
        assert_eq!(loaded, reloaded);
        assert_ne!(loaded, TradeGood::new("Iron", 10));
    }

    #[test]
    fn price_lookup_matches_goods_from_another_catalog() {
        let mut market = Location::new("Market");
        market.buying.push((TradeGood::new("Wheat", 10), 15));

        let duplicate = TradeGood::new("Wheat", 10);
        assert_eq!(market.price_for(&duplicate), Some(15));
        assert_eq!(market.price_for(&TradeGood::new("Iron", 50)), None);
    }

    #[test]
    fn add_good_appends_to_sell_list() {
        let mut farm = Location::new("Farm");
        farm.add_good(TradeGood::new("Wheat", 10));
        farm.add_good(TradeGood::new("Barley", 8));

        assert_eq!(farm.trade_goods.len(), 2);
        assert_eq!(farm.trade_goods[1], TradeGood::new("Barley", 0));
        let sorted: Vec<_> = farm
            .sorted_trade_goods()
            .into_iter()
            .map(|good| good.name.as_str())
            .collect();
        assert_eq!(sorted, vec!["Barley", "Wheat"]);
    }

    #[test]
    fn location_names_are_sorted() {
        let mut locations = BTreeMap::new();
        for name in ["Tiltren", "Arthes", "Vertruse"] {
            locations.insert(name.to_string(), Location::new(name));
        }
        let catalog = Catalog::new(BTreeMap::new(), locations);

        assert_eq!(catalog.location_names(), vec!["Arthes", "Tiltren", "Vertruse"]);
        assert_eq!(catalog.first_location(), Some("Arthes"));
    }
}
