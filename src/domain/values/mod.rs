pub mod investor_profile;
pub mod price_series;
pub mod spending;
pub mod stock_symbol;
pub mod text_chunk;
