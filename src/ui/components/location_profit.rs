use dioxus::prelude::*;

use crate::domain::{ComparisonRow, TargetComparison};
use crate::ui::theme;

/// One target location: what it pays for each good the origin sells.
#[component]
pub fn LocationProfit(comparison: TargetComparison) -> Element {
    let best_good = comparison.best_row().map(|row| row.good.clone());
    let TargetComparison {
        target,
        rows,
        not_buying,
    } = comparison;
    let has_rows = !rows.is_empty();
    let has_missing = !not_buying.is_empty();
    let not_buying = not_buying.join(", ");

    rsx! {
        fieldset { class: "panel location-profit",
            legend { "{target}" }
            if has_rows {
                table { class: "profit-table",
                    thead {
                        tr {
                            th { "Good" }
                            th { class: "numeric", "Price" }
                            th { class: "numeric", "Profit" }
                            th { class: "numeric", "Margin" }
                        }
                    }
                    tbody {
                        for row in rows {
                            ProfitRow {
                                key: "{row.good}",
                                highlight: best_good.as_deref() == Some(row.good.as_str()),
                                row: row.clone(),
                            }
                        }
                    }
                }
            } else {
                p { class: "muted", "Buys nothing sold here." }
            }
            if has_rows && has_missing {
                p { class: "muted not-buying", "Not buying: {not_buying}" }
            }
        }
    }
}

#[component]
fn ProfitRow(row: ComparisonRow, highlight: bool) -> Element {
    rsx! {
        tr { class: "{theme::row_class(highlight)}",
            td { class: "good-name", "{row.good}" }
            td { class: "numeric", {theme::gold(row.target_price)} }
            td { class: "numeric {theme::margin_class(&row.margin)}", {row.margin.profit_label()} }
            td { class: "numeric {theme::margin_class(&row.margin)}", {row.margin.percent_label()} }
        }
    }
}
