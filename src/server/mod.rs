//! JSON HTTP API over a [`FinBoard`].

pub mod error;
pub mod extract;
pub mod handlers;

use crate::FinBoard;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub type AppState = Arc<FinBoard>;

pub fn router(board: AppState) -> Router {
    let api = Router::new()
        .route("/accounts", get(handlers::list_accounts).post(handlers::create_account))
        .route("/accounts/bulk-delete", post(handlers::bulk_delete_accounts))
        .route(
            "/accounts/:id",
            get(handlers::get_account)
                .patch(handlers::rename_account)
                .delete(handlers::delete_account),
        )
        .route(
            "/transactions",
            get(handlers::list_transactions).post(handlers::create_transaction),
        )
        .route("/transactions/bulk-delete", post(handlers::bulk_delete_transactions))
        .route(
            "/transactions/:id",
            get(handlers::get_transaction)
                .patch(handlers::update_transaction)
                .delete(handlers::delete_transaction),
        )
        .route("/summary", get(handlers::summary))
        .route("/funds", get(handlers::list_funds))
        .route("/funds/:code", get(handlers::fund))
        .route("/gold", get(handlers::gold))
        .route("/gold/returns", post(handlers::gold_returns))
        .route("/stocks", get(handlers::list_stocks))
        .route("/stocks/:symbol", get(handlers::stock))
        .route("/chat", post(handlers::chat))
        .route("/recommendations", post(handlers::recommendations))
        .route("/news", get(handlers::news))
        .route("/filings/:ticker", post(handlers::ingest_filing))
        .route("/filings/:ticker/ask", post(handlers::ask_filing));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .with_state(board)
}

/// Serves on an already-bound listener until the process is stopped.
pub async fn serve(listener: TcpListener, board: AppState) -> std::io::Result<()> {
    tracing::info!(addr = %listener.local_addr()?, "server listening");
    axum::serve(listener, router(board)).await
}

pub async fn run(board: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, board).await
}
