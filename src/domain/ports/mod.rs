pub mod account_repository;
pub mod assistant;
pub mod embedding_port;
pub mod filing_store;
pub mod forecast;
pub mod news_source;
pub mod recommender;
pub mod transaction_repository;
