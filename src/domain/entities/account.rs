use crate::domain::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(user_id: &str, name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: Self::validate_name(name)?,
            created_at: Utc::now(),
        })
    }

    /// Trimmed account name; blank names are rejected.
    pub fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("Account name must not be empty".into()));
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_trims_name() {
        let acc = Account::new("user_1", "  Checking  ").unwrap();
        assert_eq!(acc.name, "Checking");
        assert_eq!(acc.user_id, "user_1");
        assert!(!acc.id.is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(matches!(
            Account::new("user_1", "   "),
            Err(DomainError::InvalidInput(_))
        ));
    }
}
