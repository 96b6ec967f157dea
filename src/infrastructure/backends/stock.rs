use super::{parse_backend_date, BackendError, HttpBackend};
use crate::domain::error::DomainError;
use crate::domain::ports::forecast::{ForecastSeries, StockForecaster};
use crate::domain::values::price_series::PricePoint;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_STOCK_URL: &str = "http://127.0.0.1:5003";

/// Client for the per-symbol LSTM stock forecast service.
pub struct HttpStockForecaster {
    http: HttpBackend,
}

impl HttpStockForecaster {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        Ok(Self {
            http: HttpBackend::new("stock_service", base_url, timeout)?,
        })
    }
}

#[derive(Debug, serde::Deserialize)]
struct PredictResponse {
    historical: IndexedPrices,
    predictions: IndexedPrices,
}

/// Parallel arrays of dates and prices.
#[derive(Debug, serde::Deserialize)]
struct IndexedPrices {
    indices: Vec<String>,
    prices: Vec<f64>,
}

impl IndexedPrices {
    fn into_points(self, label: &str) -> Result<Vec<PricePoint>, BackendError> {
        if self.indices.len() != self.prices.len() {
            return Err(BackendError::Parse(format!(
                "{label}: {} dates but {} prices",
                self.indices.len(),
                self.prices.len()
            )));
        }
        self.indices
            .iter()
            .zip(self.prices)
            .map(|(date, price)| Ok(PricePoint::new(parse_backend_date(date)?, price)))
            .collect()
    }
}

#[async_trait]
impl StockForecaster for HttpStockForecaster {
    async fn stock_series(&self, symbol: &str) -> Result<ForecastSeries, DomainError> {
        let url = self.http.url(&format!("/predict/{symbol}"));
        let resp: PredictResponse = self.http.send_json(self.http.client().get(url)).await?;
        Ok(ForecastSeries {
            historical: resp.historical.into_points("historical")?,
            predictions: resp.predictions.into_points("predictions")?,
        })
    }
}
