mod common;

use common::{d, setup, setup_with_fakes};
use finboard::domain::error::DomainError;
use finboard::domain::values::price_series::TrendDirection;

#[tokio::test]
async fn test_fund_with_trend() {
    let fb = setup();
    assert_eq!(fb.funds().await.unwrap(), vec!["119551", "120503"]);

    let fund = fb.fund(" 119551 ").await.unwrap();
    assert_eq!(fund.scheme_code, "119551");
    assert_eq!(fund.historical.len(), 2);
    let trend = fund.trend.unwrap();
    assert_eq!(trend.direction, TrendDirection::Up);
    assert!((trend.percent - 10.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_fund_errors() {
    let fb = setup();
    assert!(matches!(fb.fund("999").await, Err(DomainError::NotFound(_))));
    assert!(matches!(fb.fund("  ").await, Err(DomainError::InvalidInput(_))));
}

#[tokio::test]
async fn test_gold_dashboard() {
    let fb = setup();
    let g = fb.gold_at(d(2024, 1, 3)).await.unwrap();

    assert_eq!(g.stats.current_price, 101.0);
    assert_eq!(g.stats.change_24h, -1.0);

    let buy = g.buy_sell.buy.unwrap();
    let sell = g.buy_sell.sell.unwrap();
    assert_eq!((buy.date, buy.price), (d(2024, 1, 6), 98.0));
    assert_eq!((sell.date, sell.price), (d(2024, 1, 7), 105.0));
    assert_eq!(g.buy_sell.potential_profit, 7.0);

    let window = g.best_window.unwrap();
    assert_eq!((window.buy_day, window.sell_day), (2, 3));
    assert_eq!(window.profit, 7.0);
    assert_eq!(g.optimal_day, 2);
}

#[tokio::test]
async fn test_gold_returns() {
    let fb = setup();
    let r = fb.gold_returns(1000.0, 0, 3).await.unwrap();
    assert_eq!((r.buy_price, r.sell_price), (99.0, 105.0));
    let expected = 1000.0 / 99.0 * 105.0 - 1000.0;
    assert!((r.returns - expected).abs() < 1e-9);
    assert!((r.percent_change - expected / 10.0).abs() < 1e-9);

    assert!(matches!(fb.gold_returns(1000.0, 0, 9).await, Err(DomainError::InvalidInput(_))));
    assert!(matches!(fb.gold_returns(f64::NAN, 0, 1).await, Err(DomainError::InvalidInput(_))));
}

#[tokio::test]
async fn test_stock_resolves_symbol_and_trims_history() {
    let (fb, fakes) = setup_with_fakes();
    let s = fb.stock("sbin").await.unwrap();

    assert_eq!(s.symbol, "SBIN");
    assert_eq!(s.label, "State Bank of India (SBI)");
    assert_eq!(s.historical.len(), 60);
    assert_eq!(s.historical.last().unwrap().price, 569.0);
    let stats = s.stats.unwrap();
    assert_eq!(stats.current_price, 569.0);
    assert_eq!(stats.next_predicted_price, 575.0);
    let window = s.best_window.unwrap();
    assert_eq!((window.buy_day, window.sell_day), (1, 2));

    fb.stock("AXISBANK").await.unwrap();
    assert_eq!(*fakes.stocks.requested.lock().unwrap(), vec!["SBIN", "axisbank"]);
}

#[tokio::test]
async fn test_unknown_symbol_never_reaches_backend() {
    let (fb, fakes) = setup_with_fakes();
    assert!(matches!(fb.stock("AAPL").await, Err(DomainError::InvalidInput(_))));
    assert!(fakes.stocks.requested.lock().unwrap().is_empty());
    assert_eq!(fb.stocks().len(), 73);
}
