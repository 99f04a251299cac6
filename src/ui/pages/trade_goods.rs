use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    domain::Catalog,
    ui::components::price_list::{PriceEntry, PriceList},
};

#[component]
pub fn TradeGoodsPage() -> Element {
    let catalog = use_context::<Arc<Catalog>>();
    let entries = catalog
        .trade_goods
        .values()
        .map(|good| PriceEntry {
            name: good.name.clone(),
            price: good.base_price,
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "catalog-page",
            h2 { class: "page-title", "Manage Trade Goods" }
            PriceList {
                title: "Base prices".to_string(),
                entries,
                empty_label: "No trade goods configured.",
            }
        }
    }
}
