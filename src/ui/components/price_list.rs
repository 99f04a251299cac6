use dioxus::prelude::*;

use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct PriceEntry {
    pub name: String,
    pub price: u32,
}

/// A titled list of `name ... {price}g` lines.
#[component]
pub fn PriceList(title: String, entries: Vec<PriceEntry>, empty_label: &'static str) -> Element {
    let is_empty = entries.is_empty();

    rsx! {
        fieldset { class: "panel price-list",
            legend { "{title}" }
            for (idx, entry) in entries.into_iter().enumerate() {
                div { key: "{idx}-{entry.name}", class: "price-row",
                    span { class: "good-name", "{entry.name}" }
                    span { class: "price", {theme::gold(entry.price)} }
                }
            }
            if is_empty {
                p { class: "muted", "{empty_label}" }
            }
        }
    }
}
