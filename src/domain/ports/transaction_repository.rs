use crate::domain::entities::transaction::Transaction;
use crate::domain::error::DomainError;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub account_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Transaction persistence, scoped through account ownership.
pub trait TransactionRepository: Send + Sync {
    fn add(&self, tx: &Transaction) -> Result<(), DomainError>;
    fn get(&self, user_id: &str, id: &str) -> Result<Option<Transaction>, DomainError>;
    fn update(&self, tx: &Transaction) -> Result<(), DomainError>;
    fn list(&self, user_id: &str, filter: &TransactionFilter) -> Result<Vec<Transaction>, DomainError>;
    fn delete_many(&self, user_id: &str, ids: &[String]) -> Result<Vec<String>, DomainError>;
}
