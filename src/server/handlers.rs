use super::error::ApiError;
use super::extract::{ApiJson, ApiQuery, AuthUser};
use super::AppState;
use crate::domain::entities::transaction::{NewTransaction, TransactionPatch};
use crate::domain::error::DomainError;
use crate::domain::ports::transaction_repository::TransactionFilter;
use crate::domain::values::investor_profile::InvestorProfile;
use crate::FinBoard;
use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

fn data<T>(data: T) -> ApiResult<T> {
    Ok(Json(Envelope { data }))
}

/// Runs a ledger call on the blocking pool. The sqlite connection sits behind
/// a std mutex and must not hold up async workers.
async fn ledger<T, F>(board: AppState, call: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&FinBoard) -> Result<T, DomainError> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || call(&board))
        .await
        .map_err(|e| DomainError::Database(format!("Ledger task failed: {e}")))?;
    data(result?)
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: String,
}

fn deleted(ids: Vec<String>) -> Vec<Deleted> {
    ids.into_iter().map(|id| Deleted { id }).collect()
}

#[derive(Debug, Deserialize)]
pub struct NameBody {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct IdsBody {
    pub ids: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub account_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GoldReturnsBody {
    pub amount: f64,
    pub buy_day: usize,
    pub sell_day: usize,
}

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct FilingBody {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct IngestReply {
    pub ticker: String,
    pub chunks: usize,
}

#[derive(Debug, Deserialize)]
pub struct QuestionBody {
    pub question: String,
}

pub async fn health() -> &'static str {
    "OK"
}

// Accounts

pub async fn list_accounts(State(board): State<AppState>, AuthUser(user): AuthUser) -> ApiResult<impl Serialize> {
    ledger(board, move |b| b.accounts(&user)).await
}

pub async fn create_account(
    State(board): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(body): ApiJson<NameBody>,
) -> ApiResult<impl Serialize> {
    ledger(board, move |b| b.create_account(&user, &body.name)).await
}

pub async fn get_account(
    State(board): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl Serialize> {
    ledger(board, move |b| b.account(&user, &id)).await
}

pub async fn rename_account(
    State(board): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<NameBody>,
) -> ApiResult<impl Serialize> {
    ledger(board, move |b| b.rename_account(&user, &id, &body.name)).await
}

pub async fn delete_account(
    State(board): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl Serialize> {
    ledger(board, move |b| b.delete_account(&user, &id).map(|id| Deleted { id })).await
}

pub async fn bulk_delete_accounts(
    State(board): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(body): ApiJson<IdsBody>,
) -> ApiResult<impl Serialize> {
    ledger(board, move |b| b.bulk_delete_accounts(&user, &body.ids).map(deleted)).await
}

// Transactions

pub async fn list_transactions(
    State(board): State<AppState>,
    AuthUser(user): AuthUser,
    ApiQuery(q): ApiQuery<RangeQuery>,
) -> ApiResult<impl Serialize> {
    let filter = TransactionFilter {
        account_id: q.account_id,
        from: q.from,
        to: q.to,
    };
    ledger(board, move |b| b.transactions(&user, &filter)).await
}

pub async fn create_transaction(
    State(board): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(body): ApiJson<NewTransaction>,
) -> ApiResult<impl Serialize> {
    ledger(board, move |b| b.create_transaction(&user, body)).await
}

pub async fn get_transaction(
    State(board): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl Serialize> {
    ledger(board, move |b| b.transaction(&user, &id)).await
}

pub async fn update_transaction(
    State(board): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<TransactionPatch>,
) -> ApiResult<impl Serialize> {
    ledger(board, move |b| b.update_transaction(&user, &id, patch)).await
}

pub async fn delete_transaction(
    State(board): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<impl Serialize> {
    ledger(board, move |b| b.delete_transaction(&user, &id).map(|id| Deleted { id })).await
}

pub async fn bulk_delete_transactions(
    State(board): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(body): ApiJson<IdsBody>,
) -> ApiResult<impl Serialize> {
    ledger(board, move |b| b.bulk_delete_transactions(&user, &body.ids).map(deleted)).await
}

pub async fn summary(
    State(board): State<AppState>,
    AuthUser(user): AuthUser,
    ApiQuery(q): ApiQuery<RangeQuery>,
) -> ApiResult<impl Serialize> {
    ledger(board, move |b| b.summary(&user, q.from, q.to, q.account_id)).await
}

// Forecasts

pub async fn list_funds(State(board): State<AppState>, _user: AuthUser) -> ApiResult<impl Serialize> {
    data(board.funds().await?)
}

pub async fn fund(
    State(board): State<AppState>,
    _user: AuthUser,
    Path(code): Path<String>,
) -> ApiResult<impl Serialize> {
    data(board.fund(&code).await?)
}

pub async fn gold(State(board): State<AppState>, _user: AuthUser) -> ApiResult<impl Serialize> {
    data(board.gold().await?)
}

pub async fn gold_returns(
    State(board): State<AppState>,
    _user: AuthUser,
    ApiJson(body): ApiJson<GoldReturnsBody>,
) -> ApiResult<impl Serialize> {
    data(board.gold_returns(body.amount, body.buy_day, body.sell_day).await?)
}

pub async fn list_stocks(State(board): State<AppState>) -> ApiResult<impl Serialize> {
    data(board.stocks())
}

pub async fn stock(
    State(board): State<AppState>,
    _user: AuthUser,
    Path(symbol): Path<String>,
) -> ApiResult<impl Serialize> {
    data(board.stock(&symbol).await?)
}

// Assistant

pub async fn chat(
    State(board): State<AppState>,
    _user: AuthUser,
    ApiJson(body): ApiJson<ChatBody>,
) -> ApiResult<impl Serialize> {
    data(ChatReply {
        response: board.ask(&body.query).await?,
    })
}

pub async fn recommendations(
    State(board): State<AppState>,
    _user: AuthUser,
    ApiJson(profile): ApiJson<InvestorProfile>,
) -> ApiResult<impl Serialize> {
    data(board.recommend(&profile).await?)
}

pub async fn news(State(board): State<AppState>, _user: AuthUser) -> ApiResult<impl Serialize> {
    data(board.news().await?)
}

// Filings

pub async fn ingest_filing(
    State(board): State<AppState>,
    _user: AuthUser,
    Path(ticker): Path<String>,
    ApiJson(body): ApiJson<FilingBody>,
) -> ApiResult<impl Serialize> {
    let chunks = board.ingest_filing(&ticker, &body.text).await?;
    data(IngestReply {
        ticker: ticker.trim().to_uppercase(),
        chunks,
    })
}

pub async fn ask_filing(
    State(board): State<AppState>,
    _user: AuthUser,
    Path(ticker): Path<String>,
    ApiJson(body): ApiJson<QuestionBody>,
) -> ApiResult<impl Serialize> {
    data(board.ask_filing(&ticker, &body.question).await?)
}
