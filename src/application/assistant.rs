use crate::domain::error::DomainError;
use crate::domain::ports::assistant::FinanceAssistant;
use crate::domain::ports::news_source::{NewsArticle, NewsSource};
use crate::domain::ports::recommender::Recommender;
use crate::domain::values::investor_profile::InvestorProfile;
use std::sync::Arc;

pub struct AssistantUseCase {
    assistant: Arc<dyn FinanceAssistant>,
    recommender: Arc<dyn Recommender>,
    news: Arc<dyn NewsSource>,
}

impl AssistantUseCase {
    pub fn new(
        assistant: Arc<dyn FinanceAssistant>,
        recommender: Arc<dyn Recommender>,
        news: Arc<dyn NewsSource>,
    ) -> Self {
        Self {
            assistant,
            recommender,
            news,
        }
    }

    pub async fn ask(&self, query: &str) -> Result<String, DomainError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DomainError::InvalidInput("No query provided".into()));
        }
        self.assistant.ask(query).await
    }

    pub async fn recommend(&self, profile: &InvestorProfile) -> Result<Vec<String>, DomainError> {
        if profile.age == Some(0) {
            return Err(DomainError::InvalidInput("Age must be positive".into()));
        }
        if profile.loan.is_some_and(|l| l < 0.0) || profile.investment_amount.is_some_and(|a| a < 0.0) {
            return Err(DomainError::InvalidInput("Amounts must not be negative".into()));
        }
        let picks = self.recommender.recommend(profile).await?;
        tracing::info!(
            risk = %profile.risk_appetite,
            term = %profile.term,
            count = picks.len(),
            "recommendations fetched"
        );
        Ok(picks)
    }

    pub async fn news(&self) -> Result<Vec<NewsArticle>, DomainError> {
        let articles = self.news.business_news().await?;
        tracing::debug!(source = self.news.name(), count = articles.len(), "news fetched");
        Ok(articles)
    }
}
