pub mod accounts;
pub mod assistant;
pub mod filings;
pub mod forecasts;
pub mod transactions;
