pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod server;

use crate::application::accounts::AccountsUseCase;
use crate::application::assistant::AssistantUseCase;
use crate::application::filings::{FilingAnswer, FilingsUseCase};
use crate::application::forecasts::{FundForecast, ForecastsUseCase, GoldDashboard, StockForecast};
use crate::application::transactions::{SpendingSummary, TransactionsUseCase};
use crate::config::Settings;
use crate::domain::entities::account::Account;
use crate::domain::entities::transaction::{NewTransaction, Transaction, TransactionPatch};
use crate::domain::error::DomainError;
use crate::domain::ports::account_repository::AccountRepository;
use crate::domain::ports::assistant::{ContextModel, FinanceAssistant};
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::filing_store::FilingStore;
use crate::domain::ports::forecast::{FundForecaster, GoldForecaster, StockForecaster};
use crate::domain::ports::news_source::{NewsArticle, NewsSource};
use crate::domain::ports::recommender::Recommender;
use crate::domain::ports::transaction_repository::{TransactionFilter, TransactionRepository};
use crate::domain::values::investor_profile::InvestorProfile;
use crate::domain::values::price_series::PotentialReturns;
use crate::domain::values::stock_symbol::StockListing;
use crate::infrastructure::backends::chat::{HttpContextModel, HttpFinanceAssistant};
use crate::infrastructure::backends::fund::HttpFundForecaster;
use crate::infrastructure::backends::gold::HttpGoldForecaster;
use crate::infrastructure::backends::news::NewsDataSource;
use crate::infrastructure::backends::recommender::HttpRecommender;
use crate::infrastructure::backends::stock::HttpStockForecaster;
use crate::infrastructure::embeddings::provider_from_name;
use crate::infrastructure::sqlite::account_repo::SqliteAccountRepo;
use crate::infrastructure::sqlite::filing_store::SqliteFilingStore;
use crate::infrastructure::sqlite::open_database;
use crate::infrastructure::sqlite::transaction_repo::SqliteTransactionRepo;
use chrono::NaiveDate;
use std::sync::Arc;

/// The external services a [`FinBoard`] talks to.
#[derive(Clone)]
pub struct Providers {
    pub funds: Arc<dyn FundForecaster>,
    pub gold: Arc<dyn GoldForecaster>,
    pub stocks: Arc<dyn StockForecaster>,
    pub assistant: Arc<dyn FinanceAssistant>,
    pub context_model: Arc<dyn ContextModel>,
    pub recommender: Arc<dyn Recommender>,
    pub news: Arc<dyn NewsSource>,
    pub embedder: Arc<dyn EmbeddingProvider>,
}

impl Providers {
    /// HTTP clients configured from settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, DomainError> {
        let timeout = settings.http_timeout;
        Ok(Self {
            funds: Arc::new(HttpFundForecaster::new(&settings.fund_url, timeout)?),
            gold: Arc::new(HttpGoldForecaster::new(&settings.gold_url, timeout)?),
            stocks: Arc::new(HttpStockForecaster::new(&settings.stock_url, timeout)?),
            assistant: Arc::new(HttpFinanceAssistant::new(&settings.chat_url, timeout)?),
            context_model: Arc::new(HttpContextModel::new(&settings.model_endpoint, timeout)?),
            recommender: Arc::new(HttpRecommender::new(&settings.recommend_url, timeout)?),
            news: Arc::new(NewsDataSource::new(
                &settings.news_url,
                settings.news_api_key.clone(),
                timeout,
            )?),
            embedder: provider_from_name(
                &settings.embedding_provider,
                settings.embedding_api_key.clone(),
                settings.embedding_model.clone(),
            ),
        })
    }
}

pub struct FinBoard {
    accounts_uc: AccountsUseCase,
    transactions_uc: TransactionsUseCase,
    forecasts_uc: ForecastsUseCase,
    assistant_uc: AssistantUseCase,
    filings_uc: FilingsUseCase,
}

impl FinBoard {
    pub fn new(settings: &Settings) -> Result<Self, DomainError> {
        Self::with_providers(&settings.db_path, Providers::from_settings(settings)?)
    }

    pub fn with_providers(db_path: &str, providers: Providers) -> Result<Self, DomainError> {
        let conn = open_database(db_path)?;

        let account_repo: Arc<dyn AccountRepository> = Arc::new(SqliteAccountRepo::new(conn.clone()));
        let transaction_repo: Arc<dyn TransactionRepository> =
            Arc::new(SqliteTransactionRepo::new(conn.clone()));
        let filing_store: Arc<dyn FilingStore> = Arc::new(SqliteFilingStore::new(conn));

        tracing::debug!(db_path, embedding_dim = providers.embedder.dimension(), "finboard initialized");

        Ok(Self {
            accounts_uc: AccountsUseCase::new(account_repo.clone()),
            transactions_uc: TransactionsUseCase::new(transaction_repo, account_repo),
            forecasts_uc: ForecastsUseCase::new(providers.funds, providers.gold, providers.stocks),
            assistant_uc: AssistantUseCase::new(providers.assistant, providers.recommender, providers.news),
            filings_uc: FilingsUseCase::new(filing_store, providers.embedder, providers.context_model),
        })
    }

    // Accounts
    pub fn accounts(&self, user_id: &str) -> Result<Vec<Account>, DomainError> {
        self.accounts_uc.list(user_id)
    }

    pub fn account(&self, user_id: &str, id: &str) -> Result<Account, DomainError> {
        self.accounts_uc.get(user_id, id)
    }

    pub fn create_account(&self, user_id: &str, name: &str) -> Result<Account, DomainError> {
        self.accounts_uc.create(user_id, name)
    }

    pub fn rename_account(&self, user_id: &str, id: &str, name: &str) -> Result<Account, DomainError> {
        self.accounts_uc.rename(user_id, id, name)
    }

    pub fn delete_account(&self, user_id: &str, id: &str) -> Result<String, DomainError> {
        self.accounts_uc.delete(user_id, id)
    }

    pub fn bulk_delete_accounts(&self, user_id: &str, ids: &[String]) -> Result<Vec<String>, DomainError> {
        self.accounts_uc.bulk_delete(user_id, ids)
    }

    // Transactions
    pub fn transactions(&self, user_id: &str, filter: &TransactionFilter) -> Result<Vec<Transaction>, DomainError> {
        self.transactions_uc.list(user_id, filter)
    }

    pub fn transaction(&self, user_id: &str, id: &str) -> Result<Transaction, DomainError> {
        self.transactions_uc.get(user_id, id)
    }

    pub fn create_transaction(&self, user_id: &str, input: NewTransaction) -> Result<Transaction, DomainError> {
        self.transactions_uc.create(user_id, input)
    }

    pub fn update_transaction(
        &self,
        user_id: &str,
        id: &str,
        patch: TransactionPatch,
    ) -> Result<Transaction, DomainError> {
        self.transactions_uc.update(user_id, id, patch)
    }

    pub fn delete_transaction(&self, user_id: &str, id: &str) -> Result<String, DomainError> {
        self.transactions_uc.delete(user_id, id)
    }

    pub fn bulk_delete_transactions(&self, user_id: &str, ids: &[String]) -> Result<Vec<String>, DomainError> {
        self.transactions_uc.bulk_delete(user_id, ids)
    }

    pub fn summary(
        &self,
        user_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        account_id: Option<String>,
    ) -> Result<SpendingSummary, DomainError> {
        self.transactions_uc.summary(user_id, from, to, account_id)
    }

    // Forecasts
    pub async fn funds(&self) -> Result<Vec<String>, DomainError> {
        self.forecasts_uc.list_funds().await
    }

    pub async fn fund(&self, scheme_code: &str) -> Result<FundForecast, DomainError> {
        self.forecasts_uc.fund(scheme_code).await
    }

    pub async fn gold(&self) -> Result<GoldDashboard, DomainError> {
        self.forecasts_uc.gold().await
    }

    pub async fn gold_at(&self, today: NaiveDate) -> Result<GoldDashboard, DomainError> {
        self.forecasts_uc.gold_at(today).await
    }

    pub async fn gold_returns(&self, amount: f64, buy_day: usize, sell_day: usize) -> Result<PotentialReturns, DomainError> {
        self.forecasts_uc.gold_returns(amount, buy_day, sell_day).await
    }

    pub fn stocks(&self) -> &'static [StockListing] {
        self.forecasts_uc.stocks()
    }

    pub async fn stock(&self, symbol: &str) -> Result<StockForecast, DomainError> {
        self.forecasts_uc.stock(symbol).await
    }

    // Assistant
    pub async fn ask(&self, query: &str) -> Result<String, DomainError> {
        self.assistant_uc.ask(query).await
    }

    pub async fn recommend(&self, profile: &InvestorProfile) -> Result<Vec<String>, DomainError> {
        self.assistant_uc.recommend(profile).await
    }

    pub async fn news(&self) -> Result<Vec<NewsArticle>, DomainError> {
        self.assistant_uc.news().await
    }

    // Filings
    pub async fn ingest_filing(&self, ticker: &str, text: &str) -> Result<usize, DomainError> {
        self.filings_uc.ingest(ticker, text).await
    }

    pub async fn ask_filing(&self, ticker: &str, question: &str) -> Result<FilingAnswer, DomainError> {
        self.filings_uc.ask(ticker, question).await
    }
}
