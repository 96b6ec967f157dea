mod common;

use common::setup;
use finboard::domain::error::DomainError;
use finboard::domain::values::investor_profile::{InvestmentTerm, InvestorProfile, RiskAppetite};

#[tokio::test]
async fn test_ask_trims_and_rejects_blank() {
    let fb = setup();
    assert_eq!(fb.ask("  What is a SIP? ").await.unwrap(), "You asked: What is a SIP?");
    assert!(matches!(fb.ask("   ").await, Err(DomainError::InvalidInput(_))));
}

#[tokio::test]
async fn test_recommend() {
    let fb = setup();
    let profile = InvestorProfile {
        risk_appetite: RiskAppetite::Low,
        term: InvestmentTerm::Short,
        age: Some(40),
        loan: Some(0.0),
        investment_amount: Some(10_000.0),
    };
    assert_eq!(fb.recommend(&profile).await.unwrap(), vec!["Low - Short Term Fund"]);

    let bad = InvestorProfile {
        investment_amount: Some(-1.0),
        ..InvestorProfile::default()
    };
    assert!(matches!(fb.recommend(&bad).await, Err(DomainError::InvalidInput(_))));
}

#[tokio::test]
async fn test_news() {
    let fb = setup();
    let news = fb.news().await.unwrap();
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].title, "Sensex closes higher");
}
