//! Runtime settings, read from the environment (and `.env` when present).

use crate::domain::error::DomainError;
use crate::infrastructure::backends::chat::{DEFAULT_CHAT_URL, DEFAULT_MODEL_ENDPOINT};
use crate::infrastructure::backends::fund::DEFAULT_FUND_URL;
use crate::infrastructure::backends::gold::DEFAULT_GOLD_URL;
use crate::infrastructure::backends::news::DEFAULT_NEWS_URL;
use crate::infrastructure::backends::recommender::DEFAULT_RECOMMEND_URL;
use crate::infrastructure::backends::stock::DEFAULT_STOCK_URL;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_DB_PATH: &str = "./finboard.db";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub db_path: String,
    pub bind: SocketAddr,
    pub fund_url: String,
    pub gold_url: String,
    pub stock_url: String,
    pub chat_url: String,
    pub recommend_url: String,
    pub news_url: String,
    pub news_api_key: Option<String>,
    pub model_endpoint: String,
    pub http_timeout: Duration,
    pub embedding_provider: String,
    pub embedding_api_key: Option<String>,
    pub embedding_model: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let bind_raw = or("FINBOARD_BIND", DEFAULT_BIND);
        let bind = bind_raw
            .parse()
            .map_err(|e| DomainError::InvalidInput(format!("FINBOARD_BIND={bind_raw}: {e}")))?;

        let timeout_secs = match get("FINBOARD_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                DomainError::InvalidInput(format!("FINBOARD_HTTP_TIMEOUT_SECS={raw}: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            db_path: or("FINBOARD_DB", DEFAULT_DB_PATH),
            bind,
            fund_url: or("FINBOARD_FUND_URL", DEFAULT_FUND_URL),
            gold_url: or("FINBOARD_GOLD_URL", DEFAULT_GOLD_URL),
            stock_url: or("FINBOARD_STOCK_URL", DEFAULT_STOCK_URL),
            chat_url: or("FINBOARD_CHAT_URL", DEFAULT_CHAT_URL),
            recommend_url: or("FINBOARD_RECOMMEND_URL", DEFAULT_RECOMMEND_URL),
            news_url: or("FINBOARD_NEWS_URL", DEFAULT_NEWS_URL),
            news_api_key: get("FINBOARD_NEWS_API_KEY"),
            model_endpoint: or("FINBOARD_MODEL_ENDPOINT", DEFAULT_MODEL_ENDPOINT),
            http_timeout: Duration::from_secs(timeout_secs),
            embedding_provider: or("FINBOARD_EMBEDDING_PROVIDER", "noop"),
            embedding_api_key: get("FINBOARD_EMBEDDING_API_KEY"),
            embedding_model: get("FINBOARD_EMBEDDING_MODEL"),
        })
    }
}
