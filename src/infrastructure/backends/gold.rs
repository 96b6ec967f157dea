use super::{parse_backend_date, BackendError, HttpBackend};
use crate::domain::error::DomainError;
use crate::domain::ports::forecast::{ForecastSeries, GoldForecaster};
use crate::domain::values::price_series::PricePoint;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_GOLD_URL: &str = "http://127.0.0.1:5000";

/// Client for the gold price forecast service.
pub struct HttpGoldForecaster {
    http: HttpBackend,
}

impl HttpGoldForecaster {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        Ok(Self {
            http: HttpBackend::new("gold_service", base_url, timeout)?,
        })
    }
}

#[derive(Debug, serde::Deserialize)]
struct GoldPricesResponse {
    #[serde(default)]
    historical_data: Vec<GoldPrice>,
    #[serde(default)]
    future_predictions: Vec<GoldPrice>,
}

#[derive(Debug, serde::Deserialize)]
struct GoldPrice {
    #[serde(rename = "Date", alias = "date")]
    date: String,
    price: f64,
}

fn to_points(prices: Vec<GoldPrice>) -> Result<Vec<PricePoint>, BackendError> {
    prices
        .into_iter()
        .map(|p| Ok(PricePoint::new(parse_backend_date(&p.date)?, p.price)))
        .collect()
}

#[async_trait]
impl GoldForecaster for HttpGoldForecaster {
    async fn gold_series(&self) -> Result<ForecastSeries, DomainError> {
        let resp: GoldPricesResponse = self
            .http
            .send_json(self.http.client().get(self.http.url("/api/gold_prices")))
            .await?;
        Ok(ForecastSeries {
            historical: to_points(resp.historical_data)?,
            predictions: to_points(resp.future_predictions)?,
        })
    }
}
