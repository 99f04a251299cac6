pub mod kpi_card;
pub mod location_profit;
pub mod price_list;
pub mod toast;
