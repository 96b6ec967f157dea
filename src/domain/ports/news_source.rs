use crate::domain::error::DomainError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub link: Option<String>,
    pub description: Option<String>,
    pub source_id: Option<String>,
    pub pub_date: Option<String>,
}

#[async_trait]
pub trait NewsSource: Send + Sync {
    fn name(&self) -> &str;

    async fn business_news(&self) -> Result<Vec<NewsArticle>, DomainError>;
}
