//! Spending summary arithmetic over a date range of transactions.

use crate::domain::entities::transaction::Transaction;
use crate::domain::error::DomainError;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Categories kept by name before the remainder is folded into "Other".
pub const TOP_CATEGORY_COUNT: usize = 3;
pub const UNCATEGORIZED: &str = "Uncategorized";
pub const OTHER: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub value_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub income_cents: i64,
    pub expenses_cents: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PeriodTotals {
    pub income_cents: i64,
    pub expenses_cents: i64,
    pub remaining_cents: i64,
}

/// Sums are taken in `i128` and saturate on the way back to `i64`.
fn saturate(total: i128) -> i64 {
    i64::try_from(total).unwrap_or(if total < 0 { i64::MIN } else { i64::MAX })
}

impl PeriodTotals {
    pub fn from_transactions(txs: &[Transaction]) -> Self {
        let (mut income, mut expenses) = (0i128, 0i128);
        for t in txs {
            if t.is_expense() {
                expenses += i128::from(t.amount_cents);
            } else {
                income += i128::from(t.amount_cents);
            }
        }
        Self {
            income_cents: saturate(income),
            expenses_cents: saturate(expenses),
            remaining_cents: saturate(income + expenses),
        }
    }
}

/// Percentage change from `previous` to `current`.
///
/// A zero baseline yields 0 when nothing changed and 100 otherwise.
pub fn percentage_change(current: i64, previous: i64) -> f64 {
    if previous == 0 {
        return if current == 0 { 0.0 } else { 100.0 };
    }
    (current as f64 - previous as f64) / (previous as f64).abs() * 100.0
}

/// The period of equal length that ends the day before `from`.
pub fn previous_period(from: NaiveDate, to: NaiveDate) -> Result<(NaiveDate, NaiveDate), DomainError> {
    let out_of_range = || DomainError::InvalidInput(format!("No preceding period for {from}..{to}"));
    let prev_to = from.pred_opt().ok_or_else(out_of_range)?;
    let prev_from = prev_to
        .checked_sub_signed(Duration::days((to - from).num_days()))
        .ok_or_else(out_of_range)?;
    Ok((prev_from, prev_to))
}

/// Expense totals per category, largest first, with the tail folded into "Other".
pub fn top_categories(txs: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, i128> = HashMap::new();
    for t in txs.iter().filter(|t| t.is_expense()) {
        let name = t.category.as_deref().unwrap_or(UNCATEGORIZED);
        *totals.entry(name).or_default() += i128::from(t.amount_cents.unsigned_abs());
    }

    let mut sorted: Vec<(&str, i128)> = totals.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let rest: Option<i128> =
        (sorted.len() > TOP_CATEGORY_COUNT).then(|| sorted[TOP_CATEGORY_COUNT..].iter().map(|c| c.1).sum());
    sorted.truncate(TOP_CATEGORY_COUNT);

    let mut out: Vec<CategoryTotal> = sorted
        .into_iter()
        .map(|(name, total)| CategoryTotal {
            name: name.to_string(),
            value_cents: saturate(total),
        })
        .collect();
    if let Some(rest) = rest {
        out.push(CategoryTotal {
            name: OTHER.to_string(),
            value_cents: saturate(rest),
        });
    }
    out
}

/// One row per calendar day in `[from, to]`, zero-filled.
pub fn daily_totals(txs: &[Transaction], from: NaiveDate, to: NaiveDate) -> Vec<DailyTotal> {
    let mut by_day: BTreeMap<NaiveDate, (i128, i128)> = BTreeMap::new();
    for t in txs {
        let entry = by_day.entry(t.date).or_default();
        if t.is_expense() {
            entry.1 += i128::from(t.amount_cents.unsigned_abs());
        } else {
            entry.0 += i128::from(t.amount_cents);
        }
    }

    from.iter_days()
        .take_while(|d| *d <= to)
        .map(|date| {
            let (income, expenses) = by_day.get(&date).copied().unwrap_or_default();
            DailyTotal {
                date,
                income_cents: saturate(income),
                expenses_cents: saturate(expenses),
            }
        })
        .collect()
}
