//! Price series analytics.
//!
//! Small numeric helpers run over the historical and predicted series that
//! the forecast backends return:
//!
//! - [`analyze_buy_sell`]: cheapest entry in the next three months and the
//!   best predicted exit after it
//! - [`best_trade_window`]: single best buy/sell pair in one pass
//! - [`volatility`] / [`market_stats`]: standard deviation of simple returns
//! - [`potential_returns`]: what an amount invested on one predicted day is
//!   worth on another
//!
//! All helpers are total: empty or degenerate input yields an empty or zeroed
//! result rather than an error.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of trailing prices used for the volatility figure.
pub const VOLATILITY_WINDOW: usize = 30;

/// Number of historical points shown ahead of a stock forecast.
pub const STOCK_CHART_HISTORY: usize = 60;

/// Months ahead of today searched for a buy opportunity.
const BUY_HORIZON_MONTHS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuySellAnalysis {
    pub buy: Option<PricePoint>,
    pub sell: Option<PricePoint>,
    pub potential_profit: f64,
    pub profit_percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeWindow {
    pub buy_day: usize,
    pub sell_day: usize,
    pub buy_price: f64,
    pub sell_price: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarketStats {
    pub current_price: f64,
    pub change_24h: f64,
    pub change_pct_24h: f64,
    pub volatility_30d: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PotentialReturns {
    pub buy_price: f64,
    pub sell_price: f64,
    pub returns: f64,
    pub percent_change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trend {
    /// Absolute percentage change from the first to the last prediction.
    pub percent: f64,
    pub direction: TrendDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockStats {
    pub current_price: f64,
    pub previous_price: f64,
    pub daily_change: f64,
    pub daily_change_pct: f64,
    pub next_predicted_price: f64,
    pub expected_change: f64,
    pub expected_change_pct: f64,
    pub min_30d: f64,
    pub max_30d: f64,
}

/// Percentage of `change` relative to `base`, 0 when `base` is zero.
fn pct_of(change: f64, base: f64) -> f64 {
    if base == 0.0 {
        0.0
    } else {
        change / base * 100.0
    }
}

/// Last `n` items of a slice (the whole slice when shorter).
pub fn trailing<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Finds the cheapest point between `today` and three months out across both
/// series, then the most expensive *predicted* point strictly after it.
pub fn analyze_buy_sell(
    historical: &[PricePoint],
    predictions: &[PricePoint],
    today: NaiveDate,
) -> BuySellAnalysis {
    if historical.is_empty() || predictions.is_empty() {
        return BuySellAnalysis::default();
    }

    let horizon = today
        .checked_add_months(Months::new(BUY_HORIZON_MONTHS))
        .unwrap_or(NaiveDate::MAX);

    // Strict comparison keeps the earliest point on ties.
    let buy = historical
        .iter()
        .chain(predictions.iter())
        .filter(|p| p.date >= today && p.date <= horizon)
        .fold(None::<PricePoint>, |best, p| match best {
            Some(b) if b.price <= p.price => Some(b),
            _ => Some(*p),
        });

    let Some(buy) = buy else {
        return BuySellAnalysis::default();
    };

    let sell = predictions
        .iter()
        .filter(|p| p.date > buy.date)
        .fold(None::<PricePoint>, |best, p| match best {
            Some(b) if b.price >= p.price => Some(b),
            _ => Some(*p),
        });

    match sell {
        None => BuySellAnalysis {
            buy: Some(buy),
            ..Default::default()
        },
        Some(sell) => {
            let profit = sell.price - buy.price;
            BuySellAnalysis {
                buy: Some(buy),
                sell: Some(sell),
                potential_profit: profit,
                profit_percentage: (buy.price != 0.0).then(|| profit / buy.price * 100.0),
            }
        }
    }
}

/// Best single buy-then-sell pair over a price list, or `None` when no pair
/// makes a positive profit.
pub fn best_trade_window(prices: &[f64]) -> Option<TradeWindow> {
    let first = *prices.first()?;
    let mut min_price = first;
    let mut min_day = 0;
    let mut best: Option<TradeWindow> = None;

    for (day, &price) in prices.iter().enumerate().skip(1) {
        let profit = price - min_price;
        if profit > best.as_ref().map_or(0.0, |w| w.profit) {
            best = Some(TradeWindow {
                buy_day: min_day,
                sell_day: day,
                buy_price: min_price,
                sell_price: price,
                profit,
            });
        }
        if price < min_price {
            min_price = price;
            min_day = day;
        }
    }
    best
}

/// Population standard deviation of simple returns over the last `window`
/// prices, in percent.
pub fn volatility(prices: &[f64], window: usize) -> f64 {
    let recent = trailing(prices, window);
    let returns: Vec<f64> = recent
        .windows(2)
        .filter(|w| w[0] > 0.0)
        .map(|w| w[1] / w[0] - 1.0)
        .collect();

    if returns.is_empty() {
        return 0.0;
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt() * 100.0
}

pub fn market_stats(historical: &[PricePoint]) -> MarketStats {
    let Some(last) = historical.last() else {
        return MarketStats::default();
    };

    let current = last.price;
    let previous = historical
        .len()
        .checked_sub(2)
        .map(|i| historical[i].price)
        .unwrap_or(current);
    let change = current - previous;
    let prices: Vec<f64> = historical.iter().map(|p| p.price).collect();

    MarketStats {
        current_price: current,
        change_24h: change,
        change_pct_24h: pct_of(change, previous),
        volatility_30d: volatility(&prices, VOLATILITY_WINDOW),
    }
}

/// Index of the cheapest predicted day; 0 for an empty series.
pub fn optimal_investment_day(predictions: &[PricePoint]) -> usize {
    predictions
        .iter()
        .enumerate()
        .fold((0, f64::MAX), |(best_i, best_p), (i, p)| {
            if p.price < best_p {
                (i, p.price)
            } else {
                (best_i, best_p)
            }
        })
        .0
}

/// Value of investing `amount` on predicted day `buy_day` and selling on
/// `sell_day`. Out-of-range days give a zeroed result.
pub fn potential_returns(
    amount: f64,
    buy_day: usize,
    sell_day: usize,
    predictions: &[PricePoint],
) -> PotentialReturns {
    let (Some(buy), Some(sell)) = (predictions.get(buy_day), predictions.get(sell_day)) else {
        return PotentialReturns::default();
    };
    if buy.price <= 0.0 || amount <= 0.0 {
        return PotentialReturns::default();
    }

    let units = amount / buy.price;
    let future_value = units * sell.price;
    let returns = future_value - amount;

    PotentialReturns {
        buy_price: buy.price,
        sell_price: sell.price,
        returns,
        percent_change: returns / amount * 100.0,
    }
}

pub fn projected_trend(predictions: &[f64]) -> Option<Trend> {
    if predictions.len() < 2 {
        return None;
    }
    let first = predictions[0];
    let last = predictions[predictions.len() - 1];
    if first == 0.0 {
        return None;
    }
    let change = (last - first) / first * 100.0;
    Some(Trend {
        percent: change.abs(),
        direction: if change >= 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        },
    })
}

pub fn stock_stats(historical: &[f64], predictions: &[f64]) -> Option<StockStats> {
    if historical.len() < 2 {
        return None;
    }
    let next = *predictions.first()?;
    let current = historical[historical.len() - 1];
    let previous = historical[historical.len() - 2];

    let recent = trailing(historical, 30);
    let min_30d = recent.iter().copied().fold(f64::INFINITY, f64::min);
    let max_30d = recent.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let daily_change = current - previous;
    let expected_change = next - current;

    Some(StockStats {
        current_price: current,
        previous_price: previous,
        daily_change,
        daily_change_pct: pct_of(daily_change, previous),
        next_predicted_price: next,
        expected_change,
        expected_change_pct: pct_of(expected_change, current),
        min_30d,
        max_30d,
    })
}
