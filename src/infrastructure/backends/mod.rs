//! HTTP clients for the external forecast, chat, recommendation and news
//! services.

pub mod chat;
pub mod fund;
pub mod gold;
pub mod news;
pub mod recommender;
pub mod stock;

use crate::domain::error::DomainError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP or network error
    #[error("Network error: {0}")]
    Network(String),
    /// Non-success status from the service
    #[error("{service} returned {status}: {message}")]
    Status {
        service: String,
        status: u16,
        message: String,
    },
    /// Response parsing error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configuration error (missing API key, etc.)
    #[error("Config error: {0}")]
    Config(String),
}

impl From<BackendError> for DomainError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::Status {
                status: 404,
                message,
                ..
            } => DomainError::NotFound(message),
            other => DomainError::Backend(other.to_string()),
        }
    }
}

/// Shared plumbing for one JSON-over-HTTP service.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    service: &'static str,
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(
        service: &'static str,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Config(format!("{service}: cannot build HTTP client: {e}")))?;
        Ok(Self {
            service,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Sends a request and decodes a JSON body, turning error statuses into
    /// [`BackendError::Status`] with the service's `{"error": ...}` message
    /// when it provides one.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, BackendError> {
        let resp = request.send().await.map_err(|e| {
            tracing::warn!(service = self.service, error = %e, "backend request failed");
            BackendError::Network(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .or_else(|| v.get("message"))
                        .and_then(|m| m.as_str())
                        .map(String::from)
                })
                .unwrap_or(body);
            tracing::warn!(service = self.service, status = status.as_u16(), detail = %message, "backend error status");
            return Err(BackendError::Status {
                service: self.service.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| BackendError::Parse(format!("{}: {e}", self.service)))
    }
}

/// Decodes the date strings pandas-backed services emit: ISO dates, RFC 3339,
/// Flask's RFC 2822 rendering of datetimes, naive datetimes, and `DD-MM-YYYY`.
pub fn parse_backend_date(raw: &str) -> Result<NaiveDate, BackendError> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d-%m-%Y") {
        return Ok(d);
    }
    Err(BackendError::Parse(format!("Unrecognized date: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_backend_date_formats() {
        assert_eq!(parse_backend_date("2024-01-02").unwrap(), d(2024, 1, 2));
        assert_eq!(parse_backend_date("Tue, 02 Jan 2024 00:00:00 GMT").unwrap(), d(2024, 1, 2));
        assert_eq!(parse_backend_date("2024-01-02T00:00:00").unwrap(), d(2024, 1, 2));
        assert_eq!(parse_backend_date("2024-01-02T00:00:00Z").unwrap(), d(2024, 1, 2));
        assert_eq!(parse_backend_date("2024-01-02 00:00:00").unwrap(), d(2024, 1, 2));
        assert_eq!(parse_backend_date("02-01-2024").unwrap(), d(2024, 1, 2));
        assert!(parse_backend_date("yesterday").is_err());
    }

    #[test]
    fn test_url_join() {
        let b = HttpBackend::new("fund", "http://localhost:5002/", Duration::from_secs(1)).unwrap();
        assert_eq!(b.url("/get_funds"), "http://localhost:5002/get_funds");
        assert_eq!(b.url("predict/SBIN"), "http://localhost:5002/predict/SBIN");
    }

    #[test]
    fn test_status_404_maps_to_not_found() {
        let err: DomainError = BackendError::Status {
            service: "fund".into(),
            status: 404,
            message: "Fund not found!".into(),
        }
        .into();
        assert!(matches!(err, DomainError::NotFound(m) if m == "Fund not found!"));

        let err: DomainError = BackendError::Network("refused".into()).into();
        assert!(matches!(err, DomainError::Backend(_)));
    }
}
