use crate::domain::error::DomainError;
use crate::domain::ports::forecast::{FundForecaster, GoldForecaster, StockForecaster};
use crate::domain::values::price_series::{
    analyze_buy_sell, best_trade_window, market_stats, optimal_investment_day, potential_returns,
    projected_trend, stock_stats, trailing, BuySellAnalysis, MarketStats, PotentialReturns,
    PricePoint, StockStats, TradeWindow, Trend, STOCK_CHART_HISTORY,
};
use crate::domain::values::stock_symbol::{resolve_symbol, StockListing, STOCK_CATALOG};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundForecast {
    pub scheme_code: String,
    pub historical: Vec<PricePoint>,
    pub predictions: Vec<PricePoint>,
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoldDashboard {
    pub historical: Vec<PricePoint>,
    pub predictions: Vec<PricePoint>,
    pub stats: MarketStats,
    pub buy_sell: BuySellAnalysis,
    pub best_window: Option<TradeWindow>,
    /// Index into `predictions` of the cheapest predicted day.
    pub optimal_day: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockForecast {
    pub symbol: String,
    pub label: String,
    pub historical: Vec<PricePoint>,
    pub predictions: Vec<PricePoint>,
    pub stats: Option<StockStats>,
    pub best_window: Option<TradeWindow>,
}

pub struct ForecastsUseCase {
    funds: Arc<dyn FundForecaster>,
    gold: Arc<dyn GoldForecaster>,
    stocks: Arc<dyn StockForecaster>,
}

impl ForecastsUseCase {
    pub fn new(
        funds: Arc<dyn FundForecaster>,
        gold: Arc<dyn GoldForecaster>,
        stocks: Arc<dyn StockForecaster>,
    ) -> Self {
        Self { funds, gold, stocks }
    }

    pub async fn list_funds(&self) -> Result<Vec<String>, DomainError> {
        self.funds.list_funds().await
    }

    pub async fn fund(&self, scheme_code: &str) -> Result<FundForecast, DomainError> {
        let code = scheme_code.trim();
        if code.is_empty() {
            return Err(DomainError::InvalidInput("Scheme code is required".into()));
        }
        let series = self.funds.fund_series(code).await?;
        let trend = projected_trend(&series.predicted_prices());
        tracing::info!(scheme_code = code, points = series.historical.len(), "fund forecast loaded");
        Ok(FundForecast {
            scheme_code: code.to_string(),
            historical: series.historical,
            predictions: series.predictions,
            trend,
        })
    }

    pub async fn gold(&self) -> Result<GoldDashboard, DomainError> {
        self.gold_at(Utc::now().date_naive()).await
    }

    /// Gold dashboard with the buy window anchored at `today`.
    pub async fn gold_at(&self, today: NaiveDate) -> Result<GoldDashboard, DomainError> {
        let series = self.gold.gold_series().await?;
        let predicted = series.predicted_prices();
        Ok(GoldDashboard {
            stats: market_stats(&series.historical),
            buy_sell: analyze_buy_sell(&series.historical, &series.predictions, today),
            best_window: best_trade_window(&predicted),
            optimal_day: optimal_investment_day(&series.predictions),
            historical: series.historical,
            predictions: series.predictions,
        })
    }

    /// Returns from investing `amount` on predicted day `buy_day` and selling
    /// on `sell_day`.
    pub async fn gold_returns(
        &self,
        amount: f64,
        buy_day: usize,
        sell_day: usize,
    ) -> Result<PotentialReturns, DomainError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::InvalidInput(format!("Invalid amount: {amount}")));
        }
        let series = self.gold.gold_series().await?;
        if buy_day >= series.predictions.len() || sell_day >= series.predictions.len() {
            return Err(DomainError::InvalidInput(format!(
                "Days must be below {}",
                series.predictions.len()
            )));
        }
        Ok(potential_returns(amount, buy_day, sell_day, &series.predictions))
    }

    pub fn stocks(&self) -> &'static [StockListing] {
        STOCK_CATALOG
    }

    pub async fn stock(&self, symbol: &str) -> Result<StockForecast, DomainError> {
        let listing = resolve_symbol(symbol)
            .ok_or_else(|| DomainError::InvalidInput(format!("Unknown stock symbol: {symbol}")))?;
        let series = self.stocks.stock_series(listing.symbol).await?;
        let historical_prices = series.historical_prices();
        let predicted = series.predicted_prices();
        tracing::info!(symbol = listing.symbol, predictions = predicted.len(), "stock forecast loaded");

        Ok(StockForecast {
            symbol: listing.symbol.to_string(),
            label: listing.label.to_string(),
            stats: stock_stats(&historical_prices, &predicted),
            best_window: best_trade_window(&predicted),
            historical: trailing(&series.historical, STOCK_CHART_HISTORY).to_vec(),
            predictions: series.predictions,
        })
    }
}
