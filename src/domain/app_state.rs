use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::entities::Catalog;
use super::evaluation::{compare_origin, ComparisonView};

/// UI state for the trade tab. The catalog itself is immutable and lives in context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub selected_origin: Option<String>,
}

/// Outcome of a dropdown selection.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Changed(ComparisonView),
    /// The name wasn't in the catalog; the previous origin is kept.
    Unknown { requested: String, view: ComparisonView },
}

impl AppState {
    /// Initial state: the persisted origin if it still exists, otherwise the
    /// alphabetically first location.
    pub fn for_catalog(catalog: &Catalog, persisted: Option<PersistedState>) -> Self {
        let restored = persisted.and_then(|saved| saved.selected_origin).filter(|name| {
            let known = catalog.location(name).is_some();
            if !known {
                warn!(origin = %name, "saved origin is no longer in the catalog");
            }
            known
        });

        Self {
            selected_origin: restored.or_else(|| catalog.first_location().map(str::to_string)),
        }
    }

    pub fn select_origin(&mut self, catalog: &Catalog, name: &str) -> Selection {
        if catalog.location(name).is_none() {
            warn!(origin = name, "selected origin is not a known location");
            return Selection::Unknown {
                requested: name.to_string(),
                view: self.comparison(catalog),
            };
        }

        debug!(origin = name, "origin selected");
        self.selected_origin = Some(name.to_string());
        Selection::Changed(self.comparison(catalog))
    }

    pub fn comparison(&self, catalog: &Catalog) -> ComparisonView {
        self.selected_origin
            .as_deref()
            .and_then(|origin| compare_origin(catalog, origin))
            .unwrap_or_else(ComparisonView::empty)
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            selected_origin: self.selected_origin.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub selected_origin: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tracing_test::traced_test;

    use super::*;
    use crate::domain::entities::{Location, TradeGood};

    fn catalog() -> Catalog {
        let wheat = TradeGood::new("Wheat", 10);
        let mut farm = Location::new("Farm");
        farm.add_good(wheat.clone());
        let mut market = Location::new("Market");
        market.buying.push((wheat.clone(), 15));

        let goods = BTreeMap::from([(wheat.name.clone(), wheat)]);
        let locations = BTreeMap::from([
            (farm.name.clone(), farm),
            (market.name.clone(), market),
        ]);
        Catalog::new(goods, locations)
    }

    #[test]
    fn defaults_to_first_location() {
        let state = AppState::for_catalog(&catalog(), None);
        assert_eq!(state.selected_origin.as_deref(), Some("Farm"));
    }

    #[test]
    fn restores_saved_origin() {
        let saved = PersistedState {
            selected_origin: Some("Market".to_string()),
        };
        let state = AppState::for_catalog(&catalog(), Some(saved));
        assert_eq!(state.selected_origin.as_deref(), Some("Market"));
    }

    #[test]
    #[traced_test]
    fn stale_saved_origin_falls_back() {
        let saved = PersistedState {
            selected_origin: Some("Atlantis".to_string()),
        };
        let state = AppState::for_catalog(&catalog(), Some(saved));
        assert_eq!(state.selected_origin.as_deref(), Some("Farm"));
        assert!(logs_contain("saved origin is no longer in the catalog"));
    }

    #[test]
    fn selecting_origin_returns_fresh_view() {
        let catalog = catalog();
        let mut state = AppState::for_catalog(&catalog, None);

        let selection = state.select_origin(&catalog, "Farm");
        let Selection::Changed(view) = selection else {
            panic!("expected a changed selection");
        };
        assert_eq!(view.targets.len(), 1);
        assert_eq!(view.targets[0].rows[0].margin.profit, 5);

        state.select_origin(&catalog, "Market");
        assert_eq!(state.selected_origin.as_deref(), Some("Market"));
        assert_eq!(state.comparison(&catalog).best_trade(), None);
    }

    #[test]
    fn unknown_selection_keeps_previous_origin() {
        let catalog = catalog();
        let mut state = AppState::for_catalog(&catalog, None);

        let selection = state.select_origin(&catalog, "Atlantis");
        let Selection::Unknown { requested, view } = selection else {
            panic!("expected an unknown selection");
        };
        assert_eq!(requested, "Atlantis");
        assert_eq!(view.origin.as_deref(), Some("Farm"));
        assert_eq!(state.selected_origin.as_deref(), Some("Farm"));
    }

    #[test]
    fn empty_catalog_has_no_selection() {
        let state = AppState::for_catalog(&Catalog::default(), None);
        assert_eq!(state.selected_origin, None);
        assert_eq!(state.comparison(&Catalog::default()), ComparisonView::empty());
    }

    #[test]
    fn persisted_round_trip_keeps_selection() {
        let catalog = catalog();
        let mut state = AppState::for_catalog(&catalog, None);
        state.select_origin(&catalog, "Market");

        let restored = AppState::for_catalog(&catalog, Some(state.to_persisted()));
        assert_eq!(restored, state);
    }
}
