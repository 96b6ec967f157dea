pub mod backends;
pub mod embeddings;
pub mod sqlite;
