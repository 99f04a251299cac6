//! Class helpers shared by the pages, backed by `assets/main.css`.

use crate::domain::Margin;

// ============================================
// NAVIGATION
// ============================================

pub fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab-active"
    } else {
        "tab"
    }
}

// ============================================
// PRICES
// ============================================

pub fn margin_class(margin: &Margin) -> &'static str {
    if margin.is_loss() {
        "price profit-loss"
    } else if margin.profit == 0 {
        "price profit-even"
    } else {
        "price profit-gain"
    }
}

pub fn row_class(highlight: bool) -> &'static str {
    if highlight {
        "price-row price-row-best"
    } else {
        "price-row"
    }
}

/// Prices are shown in gold, e.g. `15g`.
pub fn gold(price: impl std::fmt::Display) -> String {
    format!("{price}g")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::compute_margin;

    #[test]
    fn margin_tone_follows_profit_sign() {
        assert_eq!(margin_class(&compute_margin(10, 15)), "price profit-gain");
        assert_eq!(margin_class(&compute_margin(10, 10)), "price profit-even");
        assert_eq!(margin_class(&compute_margin(10, 4)), "price profit-loss");
    }

    #[test]
    fn gold_suffix() {
        assert_eq!(gold(15), "15g");
        assert_eq!(gold(-3), "-3g");
    }
}
