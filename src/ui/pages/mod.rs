pub mod locations;
pub mod trade;
pub mod trade_goods;

pub use locations::LocationsPage;
pub use trade::TradePage;
pub use trade_goods::TradeGoodsPage;
