mod common;

use common::{d, setup};
use finboard::domain::entities::transaction::{NewTransaction, MAX_AMOUNT_CENTS};
use finboard::domain::error::DomainError;
use finboard::FinBoard;

fn add(fb: &FinBoard, account: &str, cents: i64, category: Option<&str>, date: chrono::NaiveDate) {
    fb.create_transaction(
        "alice",
        NewTransaction {
            account_id: account.to_string(),
            amount_cents: cents,
            payee: "Someone".into(),
            category: category.map(String::from),
            notes: None,
            date,
        },
    )
    .unwrap();
}

fn seeded() -> (FinBoard, String) {
    let fb = setup();
    let acct = fb.create_account("alice", "Main").unwrap().id;

    // Current period: 2024-03-01..=2024-03-10
    add(&fb, &acct, 100_000, Some("Salary"), d(2024, 3, 1));
    add(&fb, &acct, -20_000, Some("Housing"), d(2024, 3, 2));
    add(&fb, &acct, -5_000, Some("Food"), d(2024, 3, 3));
    add(&fb, &acct, -3_000, Some("Food"), d(2024, 3, 5));
    add(&fb, &acct, -4_000, Some("Travel"), d(2024, 3, 5));
    add(&fb, &acct, -1_000, None, d(2024, 3, 9));
    add(&fb, &acct, -500, Some("Fun"), d(2024, 3, 10));
    add(&fb, &acct, 999, None, d(2024, 3, 11));

    // Previous period: 2024-02-20..=2024-02-29
    add(&fb, &acct, 50_000, Some("Salary"), d(2024, 2, 25));
    add(&fb, &acct, -10_000, Some("Housing"), d(2024, 2, 20));
    add(&fb, &acct, -77_777, Some("Housing"), d(2024, 2, 19));

    (fb, acct)
}

#[test]
fn test_totals_and_changes() {
    let (fb, _) = seeded();
    let s = fb.summary("alice", Some(d(2024, 3, 1)), Some(d(2024, 3, 10)), None).unwrap();

    assert_eq!(s.income_cents, 100_000);
    assert_eq!(s.expenses_cents, -33_500);
    assert_eq!(s.remaining_cents, 66_500);
    assert!((s.income_change - 100.0).abs() < 1e-9);
    assert!((s.expenses_change - -235.0).abs() < 1e-9);
    assert!((s.remaining_change - 66.25).abs() < 1e-9);
}

#[test]
fn test_top_categories_fold_into_other() {
    let (fb, _) = seeded();
    let s = fb.summary("alice", Some(d(2024, 3, 1)), Some(d(2024, 3, 10)), None).unwrap();

    let cats: Vec<(&str, i64)> = s.top_categories.iter().map(|c| (c.name.as_str(), c.value_cents)).collect();
    assert_eq!(
        cats,
        vec![("Housing", 20_000), ("Food", 8_000), ("Travel", 4_000), ("Other", 1_500)]
    );
}

#[test]
fn test_days_are_zero_filled() {
    let (fb, _) = seeded();
    let s = fb.summary("alice", Some(d(2024, 3, 1)), Some(d(2024, 3, 10)), None).unwrap();

    assert_eq!(s.days.len(), 10);
    assert_eq!(s.days[0].date, d(2024, 3, 1));
    assert_eq!(s.days[0].income_cents, 100_000);
    assert_eq!(s.days[3].date, d(2024, 3, 4));
    assert_eq!((s.days[3].income_cents, s.days[3].expenses_cents), (0, 0));
    assert_eq!(s.days[4].expenses_cents, 7_000);
    assert_eq!(s.days[9].date, d(2024, 3, 10));
}

#[test]
fn test_zero_baseline_change_is_hundred() {
    let (fb, _) = seeded();
    let other = fb.create_account("alice", "Other").unwrap().id;
    add(&fb, &other, -900, Some("Food"), d(2024, 3, 4));

    let s = fb
        .summary("alice", Some(d(2024, 3, 1)), Some(d(2024, 3, 10)), Some(other))
        .unwrap();
    assert_eq!(s.expenses_cents, -900);
    assert_eq!(s.income_cents, 0);
    assert_eq!(s.expenses_change, 100.0);
    assert_eq!(s.income_change, 0.0);
}

#[test]
fn test_default_range_is_last_thirty_days() {
    let fb = setup();
    let s = fb.summary("alice", None, None, None).unwrap();
    assert_eq!(s.to, chrono::Utc::now().date_naive());
    assert_eq!(s.days.len(), 30);
    assert_eq!(s.income_cents, 0);
    assert!(s.top_categories.is_empty());
}

#[test]
fn test_inverted_range_rejected() {
    let fb = setup();
    let err = fb
        .summary("alice", Some(d(2024, 3, 10)), Some(d(2024, 3, 1)), None)
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[test]
fn test_out_of_bounds_amounts_are_rejected_and_summary_stays_sound() {
    let fb = setup();
    let acct = fb.create_account("alice", "Main").unwrap().id;

    for amount in [i64::MIN, i64::MAX] {
        let err = fb
            .create_transaction(
                "alice",
                NewTransaction {
                    account_id: acct.clone(),
                    amount_cents: amount,
                    payee: "Someone".into(),
                    category: None,
                    notes: None,
                    date: d(2024, 1, 5),
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    add(&fb, &acct, MAX_AMOUNT_CENTS, None, d(2024, 1, 2));
    add(&fb, &acct, MAX_AMOUNT_CENTS, None, d(2024, 1, 3));
    add(&fb, &acct, -MAX_AMOUNT_CENTS, Some("Rent"), d(2024, 1, 4));

    let s = fb.summary("alice", Some(d(2024, 1, 1)), Some(d(2024, 1, 10)), None).unwrap();
    assert_eq!(s.income_cents, 2 * MAX_AMOUNT_CENTS);
    assert_eq!(s.expenses_cents, -MAX_AMOUNT_CENTS);
    assert_eq!(s.remaining_cents, MAX_AMOUNT_CENTS);
    assert_eq!(s.top_categories[0].value_cents, MAX_AMOUNT_CENTS);
}

#[test]
fn test_unbounded_ranges_are_invalid_input() {
    let fb = setup();
    let err = fb
        .summary("alice", Some(chrono::NaiveDate::MIN), Some(d(2024, 1, 1)), None)
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let err = fb
        .summary("alice", Some(d(1, 1, 1)), Some(d(9999, 12, 31)), None)
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[test]
fn test_from_only_spans_thirty_days() {
    let (fb, _) = seeded();
    let s = fb.summary("alice", Some(d(2024, 2, 20)), None, None).unwrap();
    assert_eq!(s.to, d(2024, 3, 20));
    assert_eq!(s.days.len(), 30);
}
