use crate::domain::entities::transaction::{NewTransaction, Transaction, TransactionPatch};
use crate::domain::error::DomainError;
use crate::domain::ports::account_repository::AccountRepository;
use crate::domain::ports::transaction_repository::{TransactionFilter, TransactionRepository};
use crate::domain::values::spending::{
    daily_totals, percentage_change, previous_period, top_categories, CategoryTotal, DailyTotal,
    PeriodTotals,
};
use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Length of the summary window when the caller gives at most one bound.
pub const DEFAULT_SUMMARY_DAYS: i64 = 30;
/// Longest summary window, in days including both ends.
pub const MAX_SUMMARY_DAYS: i64 = 5 * 366;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingSummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub income_cents: i64,
    pub expenses_cents: i64,
    pub remaining_cents: i64,
    pub income_change: f64,
    pub expenses_change: f64,
    pub remaining_change: f64,
    pub top_categories: Vec<CategoryTotal>,
    pub days: Vec<DailyTotal>,
}

pub struct TransactionsUseCase {
    repo: Arc<dyn TransactionRepository>,
    accounts: Arc<dyn AccountRepository>,
}

impl TransactionsUseCase {
    pub fn new(repo: Arc<dyn TransactionRepository>, accounts: Arc<dyn AccountRepository>) -> Self {
        Self { repo, accounts }
    }

    fn ensure_account(&self, user_id: &str, account_id: &str) -> Result<(), DomainError> {
        match self.accounts.get(user_id, account_id)? {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound(format!("Account not found: {account_id}"))),
        }
    }

    pub fn create(&self, user_id: &str, input: NewTransaction) -> Result<Transaction, DomainError> {
        self.ensure_account(user_id, &input.account_id)?;
        let tx = Transaction::from_input(input)?;
        self.repo.add(&tx)?;
        tracing::debug!(user_id, tx_id = %tx.id, amount_cents = tx.amount_cents, "transaction created");
        Ok(tx)
    }

    pub fn get(&self, user_id: &str, id: &str) -> Result<Transaction, DomainError> {
        self.repo
            .get(user_id, id)?
            .ok_or_else(|| DomainError::NotFound(format!("Transaction not found: {id}")))
    }

    pub fn update(&self, user_id: &str, id: &str, patch: TransactionPatch) -> Result<Transaction, DomainError> {
        let mut tx = self.get(user_id, id)?;
        if let Some(account_id) = &patch.account_id {
            self.ensure_account(user_id, account_id)?;
        }
        tx.apply(patch)?;
        self.repo.update(&tx)?;
        Ok(tx)
    }

    pub fn list(&self, user_id: &str, filter: &TransactionFilter) -> Result<Vec<Transaction>, DomainError> {
        if let (Some(from), Some(to)) = (filter.from, filter.to) {
            check_range(from, to)?;
        }
        self.repo.list(user_id, filter)
    }

    pub fn delete(&self, user_id: &str, id: &str) -> Result<String, DomainError> {
        self.repo
            .delete_many(user_id, &[id.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::NotFound(format!("Transaction not found: {id}")))
    }

    pub fn bulk_delete(&self, user_id: &str, ids: &[String]) -> Result<Vec<String>, DomainError> {
        let deleted = self.repo.delete_many(user_id, ids)?;
        tracing::info!(user_id, requested = ids.len(), deleted = deleted.len(), "transactions deleted");
        Ok(deleted)
    }

    /// Income, expenses and their changes against the preceding period of the
    /// same length, plus category and per-day breakdowns.
    pub fn summary(
        &self,
        user_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        account_id: Option<String>,
    ) -> Result<SpendingSummary, DomainError> {
        let (from, to) = resolve_range(from, to, Utc::now().date_naive())?;
        let (prev_from, prev_to) = previous_period(from, to)?;

        let current = self.repo.list(
            user_id,
            &TransactionFilter {
                account_id: account_id.clone(),
                from: Some(from),
                to: Some(to),
            },
        )?;
        let previous = self.repo.list(
            user_id,
            &TransactionFilter {
                account_id,
                from: Some(prev_from),
                to: Some(prev_to),
            },
        )?;

        let now = PeriodTotals::from_transactions(&current);
        let before = PeriodTotals::from_transactions(&previous);

        Ok(SpendingSummary {
            from,
            to,
            income_cents: now.income_cents,
            expenses_cents: now.expenses_cents,
            remaining_cents: now.remaining_cents,
            income_change: percentage_change(now.income_cents, before.income_cents),
            expenses_change: percentage_change(now.expenses_cents, before.expenses_cents),
            remaining_change: percentage_change(now.remaining_cents, before.remaining_cents),
            top_categories: top_categories(&current),
            days: daily_totals(&current, from, to),
        })
    }
}

fn check_range(from: NaiveDate, to: NaiveDate) -> Result<(), DomainError> {
    if from > to {
        return Err(DomainError::InvalidInput(format!(
            "Range start {from} is after end {to}"
        )));
    }
    Ok(())
}

/// Completes a missing bound so the window spans the default number of days,
/// then bounds the window's length.
fn resolve_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate), DomainError> {
    let span = Duration::days(DEFAULT_SUMMARY_DAYS - 1);
    let out_of_range = || DomainError::InvalidInput("Summary range is outside the supported dates".into());
    let (from, to) = match (from, to) {
        (Some(f), Some(t)) => (f, t),
        (Some(f), None) => (f, f.checked_add_signed(span).ok_or_else(out_of_range)?),
        (None, Some(t)) => (t.checked_sub_signed(span).ok_or_else(out_of_range)?, t),
        (None, None) => (today.checked_sub_signed(span).ok_or_else(out_of_range)?, today),
    };
    check_range(from, to)?;
    let days = (to - from).num_days() + 1;
    if days > MAX_SUMMARY_DAYS {
        return Err(DomainError::InvalidInput(format!(
            "Summary range spans {days} days; the limit is {MAX_SUMMARY_DAYS}"
        )));
    }
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_default_range_is_thirty_days() {
        let (from, to) = resolve_range(None, None, d(2024, 3, 30)).unwrap();
        assert_eq!(to, d(2024, 3, 30));
        assert_eq!(from, d(2024, 3, 1));
        assert_eq!((to - from).num_days() + 1, DEFAULT_SUMMARY_DAYS);
    }

    #[test]
    fn test_only_to_given() {
        let (from, to) = resolve_range(None, Some(d(2024, 1, 30)), d(2024, 6, 1)).unwrap();
        assert_eq!((from, to), (d(2024, 1, 1), d(2024, 1, 30)));
    }

    #[test]
    fn test_only_from_given() {
        let (from, to) = resolve_range(Some(d(2020, 1, 1)), None, d(2024, 6, 1)).unwrap();
        assert_eq!((from, to), (d(2020, 1, 1), d(2020, 1, 30)));
    }

    #[test]
    fn test_range_length_is_capped() {
        let today = d(2024, 6, 1);
        let start = d(2020, 1, 1);
        let end = start + Duration::days(MAX_SUMMARY_DAYS - 1);
        let (from, to) = resolve_range(Some(start), Some(end), today).unwrap();
        assert_eq!((to - from).num_days() + 1, MAX_SUMMARY_DAYS);

        let err = resolve_range(Some(d(1, 1, 1)), Some(d(9999, 12, 31)), today).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_extreme_dates_rejected() {
        let today = d(2024, 6, 1);
        for (from, to) in [
            (Some(NaiveDate::MIN), Some(d(2024, 1, 1))),
            (None, Some(NaiveDate::MIN)),
            (Some(NaiveDate::MAX), None),
        ] {
            let err = resolve_range(from, to, today).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)), "{from:?}..{to:?}");
        }
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = resolve_range(Some(d(2024, 2, 1)), Some(d(2024, 1, 1)), d(2024, 6, 1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
