use crate::domain::error::DomainError;
use crate::domain::values::investor_profile::InvestorProfile;
use async_trait::async_trait;

#[async_trait]
pub trait Recommender: Send + Sync {
    /// Names of up to five investments matching the profile's cluster.
    async fn recommend(&self, profile: &InvestorProfile) -> Result<Vec<String>, DomainError>;
}
