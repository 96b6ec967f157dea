//! Ports for the external forecast services.
//!
//! Each forecaster returns a historical series and a predicted series. The
//! models themselves run out of process; these traits only describe the
//! request/response contract.

use crate::domain::error::DomainError;
use crate::domain::values::price_series::PricePoint;
use async_trait::async_trait;
use serde::Serialize;

/// Historical observations followed by model predictions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForecastSeries {
    pub historical: Vec<PricePoint>,
    pub predictions: Vec<PricePoint>,
}

impl ForecastSeries {
    pub fn historical_prices(&self) -> Vec<f64> {
        self.historical.iter().map(|p| p.price).collect()
    }

    pub fn predicted_prices(&self) -> Vec<f64> {
        self.predictions.iter().map(|p| p.price).collect()
    }
}

/// Mutual fund NAV history and predicted NAVs.
#[async_trait]
pub trait FundForecaster: Send + Sync {
    /// Scheme codes the service has data for.
    async fn list_funds(&self) -> Result<Vec<String>, DomainError>;

    /// NAV series for one scheme. `NotFound` when the service does not know it.
    async fn fund_series(&self, scheme_code: &str) -> Result<ForecastSeries, DomainError>;
}

/// Gold price history and predicted prices.
#[async_trait]
pub trait GoldForecaster: Send + Sync {
    async fn gold_series(&self) -> Result<ForecastSeries, DomainError>;
}

/// Per-symbol stock close history and predicted closes.
#[async_trait]
pub trait StockForecaster: Send + Sync {
    async fn stock_series(&self, symbol: &str) -> Result<ForecastSeries, DomainError>;
}
