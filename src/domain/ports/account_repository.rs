use crate::domain::entities::account::Account;
use crate::domain::error::DomainError;

/// Account persistence. Every lookup is scoped to the owning user; another
/// user's account is indistinguishable from a missing one.
pub trait AccountRepository: Send + Sync {
    fn add(&self, account: &Account) -> Result<(), DomainError>;
    fn list(&self, user_id: &str) -> Result<Vec<Account>, DomainError>;
    fn get(&self, user_id: &str, id: &str) -> Result<Option<Account>, DomainError>;
    fn rename(&self, user_id: &str, id: &str, name: &str) -> Result<Option<Account>, DomainError>;
    /// Deletes the listed accounts the user owns and returns the ids removed.
    fn delete_many(&self, user_id: &str, ids: &[String]) -> Result<Vec<String>, DomainError>;
}
