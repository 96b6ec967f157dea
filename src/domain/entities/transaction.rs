use crate::domain::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Largest accepted magnitude for a single amount: one trillion in major units.
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000_000_000;

/// A ledger line. Positive amounts are income, negative amounts are expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub amount_cents: i64,
    pub payee: String,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTransaction {
    pub account_id: String,
    pub amount_cents: i64,
    pub payee: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub date: NaiveDate,
}

/// Partial update. Absent fields are left unchanged; `Some("")` clears
/// category or notes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionPatch {
    pub account_id: Option<String>,
    pub amount_cents: Option<i64>,
    pub payee: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub date: Option<NaiveDate>,
}

impl Transaction {
    pub fn new(
        account_id: String,
        amount_cents: i64,
        payee: String,
        category: Option<String>,
        notes: Option<String>,
        date: NaiveDate,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            account_id,
            amount_cents: validate_amount(amount_cents)?,
            payee: validate_payee(&payee)?,
            category: normalize_optional(category),
            notes: normalize_optional(notes),
            date,
            created_at: Utc::now(),
        })
    }

    pub fn from_input(input: NewTransaction) -> Result<Self, DomainError> {
        Self::new(
            input.account_id,
            input.amount_cents,
            input.payee,
            input.category,
            input.notes,
            input.date,
        )
    }

    /// Applies a patch. Nothing changes when any patched field is invalid.
    pub fn apply(&mut self, patch: TransactionPatch) -> Result<(), DomainError> {
        let amount = patch.amount_cents.map(validate_amount).transpose()?;
        let payee = patch.payee.as_deref().map(validate_payee).transpose()?;

        if let Some(account_id) = patch.account_id {
            self.account_id = account_id;
        }
        if let Some(amount) = amount {
            self.amount_cents = amount;
        }
        if let Some(payee) = payee {
            self.payee = payee;
        }
        if patch.category.is_some() {
            self.category = normalize_optional(patch.category);
        }
        if patch.notes.is_some() {
            self.notes = normalize_optional(patch.notes);
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        Ok(())
    }

    pub fn is_expense(&self) -> bool {
        self.amount_cents < 0
    }
}

fn validate_amount(amount_cents: i64) -> Result<i64, DomainError> {
    if amount_cents.unsigned_abs() > MAX_AMOUNT_CENTS as u64 {
        return Err(DomainError::InvalidInput(format!(
            "Amount must be within ±{MAX_AMOUNT_CENTS} cents"
        )));
    }
    Ok(amount_cents)
}

fn validate_payee(payee: &str) -> Result<String, DomainError> {
    let trimmed = payee.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput("Payee must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_new_normalizes_fields() {
        let t = Transaction::new(
            "acc".into(),
            -1250,
            " Grocer ".into(),
            Some("  ".into()),
            Some(" weekly ".into()),
            date(),
        )
        .unwrap();
        assert_eq!(t.payee, "Grocer");
        assert_eq!(t.category, None);
        assert_eq!(t.notes.as_deref(), Some("weekly"));
        assert!(t.is_expense());
    }

    #[test]
    fn test_blank_payee_rejected() {
        let r = Transaction::new("acc".into(), 1, "".into(), None, None, date());
        assert!(matches!(r, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_amount_out_of_bounds_rejected() {
        for amount in [i64::MIN, i64::MAX, MAX_AMOUNT_CENTS + 1, -MAX_AMOUNT_CENTS - 1] {
            let r = Transaction::new("acc".into(), amount, "Payee".into(), None, None, date());
            assert!(matches!(r, Err(DomainError::InvalidInput(_))), "{amount} accepted");
        }
        assert!(Transaction::new("acc".into(), -MAX_AMOUNT_CENTS, "Payee".into(), None, None, date()).is_ok());

        let mut t = Transaction::new("acc".into(), 100, "Payee".into(), None, None, date()).unwrap();
        let r = t.apply(TransactionPatch {
            amount_cents: Some(i64::MIN),
            payee: Some("Other".into()),
            ..Default::default()
        });
        assert!(matches!(r, Err(DomainError::InvalidInput(_))));
        assert_eq!(t.amount_cents, 100);
        assert_eq!(t.payee, "Payee");
    }

    #[test]
    fn test_apply_patch() {
        let mut t = Transaction::new("acc".into(), 100, "Employer".into(), Some("Salary".into()), None, date())
            .unwrap();
        t.apply(TransactionPatch {
            amount_cents: Some(200),
            category: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(t.amount_cents, 200);
        assert_eq!(t.category, None);
        assert_eq!(t.payee, "Employer");
    }
}
