//! Trade goods, locations and the margin math between them.

pub mod app_state;
pub mod entities;
pub mod evaluation;

pub use app_state::{AppState, PersistedState, Selection};
pub use entities::{Catalog, Location, TradeGood};
pub use evaluation::{BestTrade, ComparisonRow, ComparisonView, Margin, TargetComparison};
