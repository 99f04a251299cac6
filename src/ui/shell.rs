use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { class: "app-title", "{APP_NAME}" }
                nav { class: "tab-bar",
                    TabButton {
                        active: matches!(current_route, Route::Trade {}),
                        onclick: move |_| { nav.push(Route::Trade {}); },
                        label: "Trade",
                    }
                    TabButton {
                        active: matches!(current_route, Route::TradeGoods {}),
                        onclick: move |_| { nav.push(Route::TradeGoods {}); },
                        label: "Trade Goods",
                    }
                    TabButton {
                        active: matches!(current_route, Route::Locations {}),
                        onclick: move |_| { nav.push(Route::Locations {}); },
                        label: "Locations",
                    }
                }
            }
            main { class: "app-body", {children} }
            footer { class: "app-footer", "{version_label()}" }
        }
    }
}

#[component]
fn TabButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::tab_class(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
