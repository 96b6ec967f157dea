use super::{db_err, lock, SharedConnection};
use crate::domain::error::DomainError;
use crate::domain::ports::filing_store::{FilingChunk, FilingStore};
use rusqlite::params;

pub struct SqliteFilingStore {
    conn: SharedConnection,
}

impl SqliteFilingStore {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }
        let mut dot = 0.0_f64;
        let mut norm_a = 0.0_f64;
        let mut norm_b = 0.0_f64;
        for (x, y) in a.iter().zip(b.iter()) {
            let x = *x as f64;
            let y = *y as f64;
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        let denom = norm_a.sqrt() * norm_b.sqrt();
        if denom == 0.0 { 0.0 } else { dot / denom }
    }

    fn serialize_vector(v: &[f32]) -> Vec<u8> {
        v.iter().flat_map(|f| f.to_le_bytes()).collect()
    }

    fn deserialize_vector(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }

    fn row_to_chunk(row: &rusqlite::Row) -> Result<FilingChunk, rusqlite::Error> {
        let index: i64 = row.get(1)?;
        let blob: Vec<u8> = row.get(3)?;
        Ok(FilingChunk {
            ticker: row.get(0)?,
            chunk_index: index as usize,
            content: row.get(2)?,
            vector: Self::deserialize_vector(&blob),
        })
    }
}

impl FilingStore for SqliteFilingStore {
    fn replace(&self, ticker: &str, chunks: &[FilingChunk]) -> Result<(), DomainError> {
        let mut conn = lock(&self.conn)?;
        let tx = conn.transaction().map_err(db_err)?;
        tx.execute("DELETE FROM filing_chunks WHERE ticker = ?1", params![ticker])
            .map_err(db_err)?;
        for chunk in chunks {
            tx.execute(
                "INSERT INTO filing_chunks (ticker, chunk_index, content, vector) VALUES (?1, ?2, ?3, ?4)",
                params![
                    ticker,
                    chunk.chunk_index as i64,
                    chunk.content,
                    Self::serialize_vector(&chunk.vector),
                ],
            )
            .map_err(|e| DomainError::Database(format!("Failed to store filing chunk: {e}")))?;
        }
        tx.commit().map_err(db_err)
    }

    fn chunks(&self, ticker: &str) -> Result<Vec<FilingChunk>, DomainError> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn
            .prepare(
                "SELECT ticker, chunk_index, content, vector FROM filing_chunks
                 WHERE ticker = ?1 ORDER BY chunk_index",
            )
            .map_err(db_err)?;
        let chunks = stmt
            .query_map(params![ticker], Self::row_to_chunk)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(chunks)
    }

    fn search_similar(
        &self,
        ticker: &str,
        vector: &[f32],
        limit: usize,
    ) -> Result<Vec<(FilingChunk, f64)>, DomainError> {
        let mut results: Vec<(FilingChunk, f64)> = self
            .chunks(ticker)?
            .into_iter()
            .map(|chunk| {
                let sim = Self::cosine_similarity(vector, &chunk.vector);
                (chunk, sim)
            })
            .collect();

        results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(limit);
        Ok(results)
    }
}
