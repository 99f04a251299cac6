use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    domain::{Catalog, Location},
    ui::components::price_list::{PriceEntry, PriceList},
};

#[derive(Clone, PartialEq)]
struct LocationCard {
    name: String,
    selling: Vec<PriceEntry>,
    buying: Vec<PriceEntry>,
}

impl From<&Location> for LocationCard {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            selling: location
                .trade_goods
                .iter()
                .map(|good| PriceEntry {
                    name: good.name.clone(),
                    price: good.base_price,
                })
                .collect(),
            buying: location
                .buying
                .iter()
                .map(|(good, price)| PriceEntry {
                    name: good.name.clone(),
                    price: *price,
                })
                .collect(),
        }
    }
}

#[component]
pub fn LocationsPage() -> Element {
    let catalog = use_context::<Arc<Catalog>>();
    let cards = catalog
        .locations
        .values()
        .map(LocationCard::from)
        .collect::<Vec<_>>();
    let is_empty = cards.is_empty();

    rsx! {
        div { class: "catalog-page",
            h2 { class: "page-title", "Manage Locations" }
            for card in cards {
                fieldset { key: "{card.name}", class: "panel location-card",
                    legend { "{card.name}" }
                    div { class: "location-columns",
                        PriceList {
                            title: "Selling".to_string(),
                            entries: card.selling.clone(),
                            empty_label: "Sells nothing.",
                        }
                        PriceList {
                            title: "Buying".to_string(),
                            entries: card.buying.clone(),
                            empty_label: "Buys nothing.",
                        }
                    }
                }
            }
            if is_empty {
                p { class: "panel muted", "No locations configured." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TradeGood;

    #[test]
    fn card_lists_sell_and_buy_prices() {
        let mut location = Location::new("Arthes");
        location.add_good(TradeGood::new("Wheat", 10));
        location.buying.push((TradeGood::new("Iron", 50), 64));

        let card = LocationCard::from(&location);
        assert_eq!(card.name, "Arthes");
        assert_eq!(card.selling.len(), 1);
        assert_eq!(card.selling[0].price, 10);
        assert_eq!(card.buying[0].name, "Iron");
        assert_eq!(card.buying[0].price, 64);
    }
}
