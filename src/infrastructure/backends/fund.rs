use super::{parse_backend_date, BackendError, HttpBackend};
use crate::domain::error::DomainError;
use crate::domain::ports::forecast::{ForecastSeries, FundForecaster};
use crate::domain::values::price_series::PricePoint;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_FUND_URL: &str = "http://127.0.0.1:5002";

/// Client for the mutual fund NAV service.
pub struct HttpFundForecaster {
    http: HttpBackend,
}

impl HttpFundForecaster {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        Ok(Self {
            http: HttpBackend::new("fund_service", base_url, timeout)?,
        })
    }
}

#[derive(Debug, serde::Deserialize)]
struct FundsResponse {
    mutual_funds: Vec<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct FundDataResponse {
    #[serde(default)]
    historical_data: Vec<HistoricalNav>,
    #[serde(default)]
    future_predictions: Vec<PredictedNav>,
}

#[derive(Debug, serde::Deserialize)]
struct HistoricalNav {
    date: String,
    nav: f64,
}

#[derive(Debug, serde::Deserialize)]
struct PredictedNav {
    date: String,
    predicted_nav: f64,
}

/// Scheme codes come back as JSON numbers or strings depending on how the
/// dataset was loaded.
fn code_to_string(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The service compares against its dataset's native column type, so numeric
/// codes must be sent as numbers.
fn code_to_json(code: &str) -> serde_json::Value {
    code.parse::<i64>()
        .map(serde_json::Value::from)
        .unwrap_or_else(|_| serde_json::Value::String(code.to_string()))
}

impl FundDataResponse {
    fn into_series(self) -> Result<ForecastSeries, BackendError> {
        let historical = self
            .historical_data
            .into_iter()
            .map(|h| Ok(PricePoint::new(parse_backend_date(&h.date)?, h.nav)))
            .collect::<Result<Vec<_>, BackendError>>()?;
        let predictions = self
            .future_predictions
            .into_iter()
            .map(|p| Ok(PricePoint::new(parse_backend_date(&p.date)?, p.predicted_nav)))
            .collect::<Result<Vec<_>, BackendError>>()?;
        Ok(ForecastSeries {
            historical,
            predictions,
        })
    }
}

#[async_trait]
impl FundForecaster for HttpFundForecaster {
    async fn list_funds(&self) -> Result<Vec<String>, DomainError> {
        let resp: FundsResponse = self
            .http
            .send_json(self.http.client().get(self.http.url("/get_funds")))
            .await?;
        Ok(resp.mutual_funds.iter().map(code_to_string).collect())
    }

    async fn fund_series(&self, scheme_code: &str) -> Result<ForecastSeries, DomainError> {
        let body = serde_json::json!({ "fund_name": code_to_json(scheme_code) });
        let resp: FundDataResponse = self
            .http
            .send_json(self.http.client().post(self.http.url("/get_fund_data")).json(&body))
            .await?;
        let series = resp.into_series()?;
        tracing::debug!(
            scheme_code,
            historical = series.historical.len(),
            predictions = series.predictions.len(),
            "fetched fund series"
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_conversions() {
        assert_eq!(code_to_string(&serde_json::json!(119551)), "119551");
        assert_eq!(code_to_string(&serde_json::json!("ABC")), "ABC");
        assert_eq!(code_to_json("119551"), serde_json::json!(119551));
        assert_eq!(code_to_json("ABC-1"), serde_json::json!("ABC-1"));
    }

    #[test]
    fn test_response_into_series() {
        let resp: FundDataResponse = serde_json::from_value(serde_json::json!({
            "historical_data": [{"date": "Tue, 02 Jan 2024 00:00:00 GMT", "nav": 10.5}],
            "future_predictions": [{"date": "2024-01-03", "predicted_nav": 10.7}]
        }))
        .unwrap();
        let series = resp.into_series().unwrap();
        assert_eq!(series.historical[0].price, 10.5);
        assert_eq!(series.predictions[0].date.to_string(), "2024-01-03");
    }
}
