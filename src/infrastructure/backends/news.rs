use super::{BackendError, HttpBackend};
use crate::domain::error::DomainError;
use crate::domain::ports::news_source::{NewsArticle, NewsSource};
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_NEWS_URL: &str = "https://newsdata.io";

/// Indian business headlines from newsdata.io.
pub struct NewsDataSource {
    http: HttpBackend,
    api_key: Option<String>,
}

impl NewsDataSource {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        Ok(Self {
            http: HttpBackend::new("newsdata", base_url, timeout)?,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }
}

#[derive(Debug, serde::Deserialize)]
struct NewsResponse {
    #[serde(default)]
    results: Vec<RawArticle>,
}

#[derive(Debug, serde::Deserialize)]
struct RawArticle {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    source_id: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

impl RawArticle {
    fn into_article(self) -> Option<NewsArticle> {
        let title = self.title.filter(|t| !t.trim().is_empty())?;
        Some(NewsArticle {
            title,
            link: self.link,
            description: self.description,
            source_id: self.source_id,
            pub_date: self.pub_date,
        })
    }
}

#[async_trait]
impl NewsSource for NewsDataSource {
    fn name(&self) -> &str {
        "newsdata"
    }

    async fn business_news(&self) -> Result<Vec<NewsArticle>, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| BackendError::Config("FINBOARD_NEWS_API_KEY is not set".into()))?;

        let url = reqwest::Url::parse_with_params(
            &self.http.url("/api/1/news"),
            &[
                ("apikey", api_key),
                ("q", "business news"),
                ("country", "in"),
                ("language", "en,hi"),
                ("category", "business"),
            ],
        )
        .map_err(|e| BackendError::Config(format!("Invalid news URL: {e}")))?;

        let resp: NewsResponse = self.http.send_json(self.http.client().get(url)).await?;
        let articles: Vec<NewsArticle> = resp
            .results
            .into_iter()
            .filter_map(RawArticle::into_article)
            .collect();
        tracing::debug!(count = articles.len(), "fetched business news");
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_config_error() {
        let source = NewsDataSource::new(DEFAULT_NEWS_URL, Some("  ".into()), Duration::from_secs(1)).unwrap();
        let err = source.business_news().await.unwrap_err();
        assert!(matches!(err, DomainError::Backend(m) if m.contains("FINBOARD_NEWS_API_KEY")));
    }

    #[test]
    fn test_untitled_articles_dropped() {
        let resp: NewsResponse = serde_json::from_value(serde_json::json!({
            "status": "success",
            "results": [
                {"title": "Markets rally", "link": "https://x", "pubDate": "2024-05-01 10:00:00"},
                {"title": null, "link": "https://y"}
            ]
        }))
        .unwrap();
        let articles: Vec<_> = resp.results.into_iter().filter_map(RawArticle::into_article).collect();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].pub_date.as_deref(), Some("2024-05-01 10:00:00"));
    }
}
