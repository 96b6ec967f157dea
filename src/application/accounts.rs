use crate::domain::entities::account::Account;
use crate::domain::error::DomainError;
use crate::domain::ports::account_repository::AccountRepository;
use std::sync::Arc;

pub struct AccountsUseCase {
    repo: Arc<dyn AccountRepository>,
}

impl AccountsUseCase {
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    pub fn list(&self, user_id: &str) -> Result<Vec<Account>, DomainError> {
        self.repo.list(user_id)
    }

    pub fn get(&self, user_id: &str, id: &str) -> Result<Account, DomainError> {
        self.repo
            .get(user_id, id)?
            .ok_or_else(|| DomainError::NotFound(format!("Account not found: {id}")))
    }

    pub fn create(&self, user_id: &str, name: &str) -> Result<Account, DomainError> {
        let account = Account::new(user_id, name)?;
        self.repo.add(&account)?;
        tracing::info!(user_id, account_id = %account.id, "account created");
        Ok(account)
    }

    pub fn rename(&self, user_id: &str, id: &str, name: &str) -> Result<Account, DomainError> {
        let name = Account::validate_name(name)?;
        self.repo
            .rename(user_id, id, &name)?
            .ok_or_else(|| DomainError::NotFound(format!("Account not found: {id}")))
    }

    pub fn delete(&self, user_id: &str, id: &str) -> Result<String, DomainError> {
        self.repo
            .delete_many(user_id, &[id.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::NotFound(format!("Account not found: {id}")))
    }

    /// Deletes whichever of `ids` the user owns. Unknown ids are skipped.
    pub fn bulk_delete(&self, user_id: &str, ids: &[String]) -> Result<Vec<String>, DomainError> {
        let deleted = self.repo.delete_many(user_id, ids)?;
        tracing::info!(user_id, requested = ids.len(), deleted = deleted.len(), "accounts deleted");
        Ok(deleted)
    }
}
