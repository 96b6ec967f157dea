//! Shared test helpers: in-process fakes for every external service.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use finboard::domain::error::DomainError;
use finboard::domain::ports::assistant::{ContextModel, FinanceAssistant};
use finboard::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use finboard::domain::ports::forecast::{ForecastSeries, FundForecaster, GoldForecaster, StockForecaster};
use finboard::domain::ports::news_source::{NewsArticle, NewsSource};
use finboard::domain::ports::recommender::Recommender;
use finboard::domain::values::investor_profile::InvestorProfile;
use finboard::domain::values::price_series::PricePoint;
use finboard::infrastructure::embeddings::noop::NoopProvider;
use finboard::{FinBoard, Providers};
use std::sync::{Arc, Mutex};

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn points(start: NaiveDate, prices: &[f64]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, p)| PricePoint::new(start + chrono::Duration::days(i as i64), *p))
        .collect()
}

pub struct FakeFunds {
    pub codes: Vec<String>,
    pub series: ForecastSeries,
}

#[async_trait]
impl FundForecaster for FakeFunds {
    async fn list_funds(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.codes.clone())
    }

    async fn fund_series(&self, scheme_code: &str) -> Result<ForecastSeries, DomainError> {
        if self.codes.iter().any(|c| c == scheme_code) {
            Ok(self.series.clone())
        } else {
            Err(DomainError::NotFound("Fund not found!".into()))
        }
    }
}

pub struct FakeGold {
    pub series: ForecastSeries,
}

#[async_trait]
impl GoldForecaster for FakeGold {
    async fn gold_series(&self) -> Result<ForecastSeries, DomainError> {
        Ok(self.series.clone())
    }
}

#[derive(Default)]
pub struct FakeStocks {
    pub series: ForecastSeries,
    pub requested: Mutex<Vec<String>>,
}

#[async_trait]
impl StockForecaster for FakeStocks {
    async fn stock_series(&self, symbol: &str) -> Result<ForecastSeries, DomainError> {
        self.requested.lock().unwrap().push(symbol.to_string());
        Ok(self.series.clone())
    }
}

pub struct EchoAssistant;

#[async_trait]
impl FinanceAssistant for EchoAssistant {
    async fn ask(&self, query: &str) -> Result<String, DomainError> {
        Ok(format!("You asked: {query}"))
    }
}

#[derive(Default)]
pub struct RecordingModel {
    pub calls: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl ContextModel for RecordingModel {
    async fn answer(&self, question: &str, context: &str) -> Result<String, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((question.to_string(), context.to_string()));
        Ok("From the filing.".to_string())
    }
}

pub struct FakeRecommender;

#[async_trait]
impl Recommender for FakeRecommender {
    async fn recommend(&self, profile: &InvestorProfile) -> Result<Vec<String>, DomainError> {
        Ok(vec![format!("{} - {} Fund", profile.risk_appetite, profile.term)])
    }
}

pub struct FakeNews;

#[async_trait]
impl NewsSource for FakeNews {
    fn name(&self) -> &str {
        "fake"
    }

    async fn business_news(&self) -> Result<Vec<NewsArticle>, DomainError> {
        Ok(vec![NewsArticle {
            title: "Sensex closes higher".into(),
            link: Some("https://example.com/sensex".into()),
            description: None,
            source_id: Some("wire".into()),
            pub_date: Some("2024-05-01 10:00:00".into()),
        }])
    }
}

/// Bag-of-words embedder over a tiny fixed vocabulary.
pub struct VocabEmbedder;

pub const VOCAB: [&str; 4] = ["revenue", "risk", "debt", "dividend"];

#[async_trait]
impl EmbeddingProvider for VocabEmbedder {
    async fn embed(&self, texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts
            .iter()
            .map(|t| {
                let lower = t.to_lowercase();
                let mut v: Vec<f32> = VOCAB.iter().map(|w| lower.matches(w).count() as f32).collect();
                v.push(0.1);
                v
            })
            .collect())
    }

    fn dimension(&self) -> usize {
        VOCAB.len() + 1
    }
}

pub fn gold_series() -> ForecastSeries {
    ForecastSeries {
        historical: points(d(2024, 1, 1), &[100.0, 102.0, 101.0]),
        predictions: points(d(2024, 1, 4), &[99.0, 103.0, 98.0, 105.0]),
    }
}

pub fn fund_series() -> ForecastSeries {
    ForecastSeries {
        historical: points(d(2024, 1, 1), &[10.0, 10.2]),
        predictions: points(d(2024, 1, 3), &[10.0, 10.5, 11.0]),
    }
}

pub fn stock_series() -> ForecastSeries {
    let history: Vec<f64> = (0..70).map(|i| 500.0 + i as f64).collect();
    ForecastSeries {
        historical: points(d(2024, 1, 1), &history),
        predictions: points(d(2024, 3, 11), &[575.0, 560.0, 590.0]),
    }
}

pub struct Fakes {
    pub stocks: Arc<FakeStocks>,
    pub model: Arc<RecordingModel>,
}

pub fn providers_with(embedder: Arc<dyn EmbeddingProvider>) -> (Providers, Fakes) {
    let stocks = Arc::new(FakeStocks {
        series: stock_series(),
        ..Default::default()
    });
    let model = Arc::new(RecordingModel::default());
    let providers = Providers {
        funds: Arc::new(FakeFunds {
            codes: vec!["119551".into(), "120503".into()],
            series: fund_series(),
        }),
        gold: Arc::new(FakeGold { series: gold_series() }),
        stocks: stocks.clone(),
        assistant: Arc::new(EchoAssistant),
        context_model: model.clone(),
        recommender: Arc::new(FakeRecommender),
        news: Arc::new(FakeNews),
        embedder,
    };
    (providers, Fakes { stocks, model })
}

pub fn setup() -> FinBoard {
    setup_with_fakes().0
}

pub fn setup_with_fakes() -> (FinBoard, Fakes) {
    let (providers, fakes) = providers_with(Arc::new(NoopProvider));
    (FinBoard::with_providers(":memory:", providers).unwrap(), fakes)
}
