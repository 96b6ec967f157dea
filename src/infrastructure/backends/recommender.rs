use super::{BackendError, HttpBackend};
use crate::domain::error::DomainError;
use crate::domain::ports::recommender::Recommender;
use crate::domain::values::investor_profile::InvestorProfile;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_RECOMMEND_URL: &str = "http://127.0.0.1:5008";

/// Client for the clustering recommender service.
pub struct HttpRecommender {
    http: HttpBackend,
}

impl HttpRecommender {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        Ok(Self {
            http: HttpBackend::new("recommender", base_url, timeout)?,
        })
    }
}

/// Feature names are the column names the model was fitted on.
#[derive(Debug, Serialize)]
struct RecommendRequest {
    #[serde(rename = "Risk Appetite")]
    risk_appetite: String,
    #[serde(rename = "Term")]
    term: String,
    #[serde(rename = "Age", skip_serializing_if = "Option::is_none")]
    age: Option<u32>,
    #[serde(rename = "Loan", skip_serializing_if = "Option::is_none")]
    loan: Option<f64>,
    #[serde(rename = "Investment Amount", skip_serializing_if = "Option::is_none")]
    investment_amount: Option<f64>,
}

impl From<&InvestorProfile> for RecommendRequest {
    fn from(p: &InvestorProfile) -> Self {
        Self {
            risk_appetite: p.risk_appetite.to_string(),
            term: p.term.to_string(),
            age: p.age,
            loan: p.loan,
            investment_amount: p.investment_amount,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct RecommendResponse {
    #[serde(default)]
    recommendations: Vec<String>,
}

#[async_trait]
impl Recommender for HttpRecommender {
    async fn recommend(&self, profile: &InvestorProfile) -> Result<Vec<String>, DomainError> {
        let body = RecommendRequest::from(profile);
        let resp: RecommendResponse = self
            .http
            .send_json(self.http.client().post(self.http.url("/recommend")).json(&body))
            .await?;
        Ok(resp.recommendations)
    }
}
