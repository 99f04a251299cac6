//! Trade tab: pick an origin, see what every other location pays for its goods.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, BestTrade, Catalog, ComparisonView, Selection},
    ui::components::{
        kpi_card::KpiCard,
        location_profit::LocationProfit,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn TradePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let view = use_context::<Signal<ComparisonView>>();
    let catalog = use_context::<Arc<Catalog>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let location_names = catalog.location_names();
    if location_names.is_empty() {
        return rsx! {
            div { class: "panel muted", "No locations configured." }
        };
    }

    let (current, targets, best_summary) = view.with(|view| {
        (
            view.origin.clone().unwrap_or_default(),
            view.targets.clone(),
            view.best_trade().map(describe_best_trade),
        )
    });

    let on_select = {
        let catalog = catalog.clone();
        move |evt: Event<FormData>| {
            let mut state = state;
            let mut view = view;
            let name = evt.value();
            let selection = state.with_mut(|st| st.select_origin(&catalog, &name));
            match view.with_mut(|rendered| apply_selection(rendered, selection)) {
                None => persist_user_state(&state, toasts),
                Some(requested) => push_toast(
                    toasts,
                    ToastKind::Warning,
                    format!("No trade data for \"{requested}\"."),
                ),
            }
        }
    };

    rsx! {
        div { class: "trade-page",
            h2 { class: "page-title", "Trade Overview" }
            div { class: "trade-layout",
                aside { class: "panel origin-picker",
                    label { class: "label", r#for: "origin", "Location" }
                    select {
                        id: "origin",
                        value: "{current}",
                        onchange: on_select,
                        for name in location_names {
                            option {
                                key: "{name}",
                                value: "{name}",
                                selected: name == current,
                                "{name}"
                            }
                        }
                    }
                }
                section { class: "trade-view",
                    p { class: "current-location",
                        "Current Location: "
                        strong { "{current}" }
                    }
                    match best_summary {
                        Some((value, description)) => rsx! {
                            KpiCard {
                                title: "Best trade".to_string(),
                                value,
                                description: Some(description),
                            }
                        },
                        None => rsx! {
                            KpiCard {
                                title: "Best trade".to_string(),
                                value: "-".to_string(),
                                description: Some("Nobody buys what this location sells.".to_string()),
                            }
                        },
                    }
                    for comparison in targets {
                        LocationProfit { key: "{comparison.target}", comparison: comparison.clone() }
                    }
                }
            }
        }
    }
}

/// Replaces the rendered view with the one the selection carries. Returns the
/// rejected name when the selection was unknown.
fn apply_selection(view: &mut ComparisonView, selection: Selection) -> Option<String> {
    match selection {
        Selection::Changed(next) => {
            *view = next;
            None
        }
        Selection::Unknown {
            requested,
            view: kept,
        } => {
            *view = kept;
            Some(requested)
        }
    }
}

fn describe_best_trade(best: BestTrade) -> (String, String) {
    let value = format!("{} → {}", best.row.good, best.target);
    let description = format!(
        "{}g profit ({}) selling at {}g",
        best.row.margin.profit,
        best.row.margin.percent_label(),
        best.row.target_price
    );
    (value, description)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::{
        evaluation::{compare_origin, compute_margin},
        ComparisonRow, Location, TradeGood,
    };

    fn catalog() -> Catalog {
        let wheat = TradeGood::new("Wheat", 10);
        let iron = TradeGood::new("Iron", 50);
        let mut farm = Location::new("Farm");
        farm.add_good(wheat.clone());
        farm.buying.push((iron.clone(), 70));
        let mut mine = Location::new("Mine");
        mine.add_good(iron.clone());
        mine.buying.push((wheat.clone(), 15));

        let goods = BTreeMap::from([(wheat.name.clone(), wheat), (iron.name.clone(), iron)]);
        let locations = BTreeMap::from([(farm.name.clone(), farm), (mine.name.clone(), mine)]);
        Catalog::new(goods, locations)
    }

    #[test]
    fn rendered_view_comes_from_selection() {
        let catalog = catalog();
        let mut state = AppState::for_catalog(&catalog, None);
        let mut view = state.comparison(&catalog);
        assert_eq!(view.origin.as_deref(), Some("Farm"));

        let rejected = apply_selection(&mut view, state.select_origin(&catalog, "Mine"));
        assert_eq!(rejected, None);
        assert_eq!(view.origin.as_deref(), Some("Mine"));
        assert_eq!(Some(view.clone()), compare_origin(&catalog, "Mine"));
        assert_eq!(view.best_trade().map(|best| best.row.margin.profit), Some(20));
    }

    #[test]
    fn unknown_selection_keeps_rendered_view() {
        let catalog = catalog();
        let mut state = AppState::for_catalog(&catalog, None);
        let mut view = state.comparison(&catalog);
        let before = view.clone();

        let rejected = apply_selection(&mut view, state.select_origin(&catalog, "Atlantis"));
        assert_eq!(rejected.as_deref(), Some("Atlantis"));
        assert_eq!(view, before);
    }

    #[test]
    fn best_trade_summary_reads_naturally() {
        let best = BestTrade {
            target: "Tiltren".to_string(),
            row: ComparisonRow {
                good: "Wheat".to_string(),
                base_price: 10,
                target_price: 15,
                margin: compute_margin(10, 15),
            },
        };

        let (value, description) = describe_best_trade(best);
        assert_eq!(value, "Wheat → Tiltren");
        assert_eq!(description, "5g profit (50.00%) selling at 15g");
    }
}
