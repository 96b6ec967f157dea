use super::{db_err, lock, parse_date_col, parse_timestamp_col, placeholders, SharedConnection};
use crate::domain::entities::transaction::Transaction;
use crate::domain::error::DomainError;
use crate::domain::ports::transaction_repository::{TransactionFilter, TransactionRepository};
use rusqlite::params;

const SELECT_COLS: &str =
    "t.id, t.account_id, t.amount_cents, t.payee, t.category, t.notes, t.date, t.created_at";

const DATE_FMT: &str = "%Y-%m-%d";

pub struct SqliteTransactionRepo {
    conn: SharedConnection,
}

impl SqliteTransactionRepo {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    fn row_to_transaction(row: &rusqlite::Row) -> Result<Transaction, rusqlite::Error> {
        let date_str: String = row.get(6)?;
        let created_str: String = row.get(7)?;
        Ok(Transaction {
            id: row.get(0)?,
            account_id: row.get(1)?,
            amount_cents: row.get(2)?,
            payee: row.get(3)?,
            category: row.get(4)?,
            notes: row.get(5)?,
            date: parse_date_col(6, &date_str)?,
            created_at: parse_timestamp_col(7, &created_str)?,
        })
    }
}

impl TransactionRepository for SqliteTransactionRepo {
    fn add(&self, tx: &Transaction) -> Result<(), DomainError> {
        let conn = lock(&self.conn)?;
        conn.execute(
            "INSERT INTO transactions (id, account_id, amount_cents, payee, category, notes, date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                tx.id,
                tx.account_id,
                tx.amount_cents,
                tx.payee,
                tx.category,
                tx.notes,
                tx.date.format(DATE_FMT).to_string(),
                tx.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add transaction: {e}")))?;
        Ok(())
    }

    fn get(&self, user_id: &str, id: &str) -> Result<Option<Transaction>, DomainError> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLS} FROM transactions t
                 JOIN accounts a ON a.id = t.account_id
                 WHERE a.user_id = ?1 AND t.id = ?2"
            ))
            .map_err(db_err)?;
        let mut rows = stmt
            .query_map(params![user_id, id], Self::row_to_transaction)
            .map_err(db_err)?;
        rows.next().transpose().map_err(db_err)
    }

    fn update(&self, tx: &Transaction) -> Result<(), DomainError> {
        let conn = lock(&self.conn)?;
        let rows = conn
            .execute(
                "UPDATE transactions SET account_id = ?1, amount_cents = ?2, payee = ?3, category = ?4, notes = ?5, date = ?6
                 WHERE id = ?7",
                params![
                    tx.account_id,
                    tx.amount_cents,
                    tx.payee,
                    tx.category,
                    tx.notes,
                    tx.date.format(DATE_FMT).to_string(),
                    tx.id,
                ],
            )
            .map_err(|e| DomainError::Database(format!("Failed to update transaction: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Transaction not found: {}", tx.id)));
        }
        Ok(())
    }

    fn list(&self, user_id: &str, filter: &TransactionFilter) -> Result<Vec<Transaction>, DomainError> {
        let conn = lock(&self.conn)?;
        let mut sql = format!(
            "SELECT {SELECT_COLS} FROM transactions t
             JOIN accounts a ON a.id = t.account_id
             WHERE a.user_id = ?1"
        );
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = vec![Box::new(user_id.to_string())];

        if let Some(account_id) = &filter.account_id {
            sql.push_str(&format!(" AND t.account_id = ?{}", param_values.len() + 1));
            param_values.push(Box::new(account_id.clone()));
        }
        if let Some(from) = &filter.from {
            sql.push_str(&format!(" AND t.date >= ?{}", param_values.len() + 1));
            param_values.push(Box::new(from.format(DATE_FMT).to_string()));
        }
        if let Some(to) = &filter.to {
            sql.push_str(&format!(" AND t.date <= ?{}", param_values.len() + 1));
            param_values.push(Box::new(to.format(DATE_FMT).to_string()));
        }
        sql.push_str(" ORDER BY t.date DESC, t.created_at DESC");

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn.prepare(&sql).map_err(db_err)?;
        let txs = stmt
            .query_map(params_refs.as_slice(), Self::row_to_transaction)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(txs)
    }

    fn delete_many(&self, user_id: &str, ids: &[String]) -> Result<Vec<String>, DomainError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let conn = lock(&self.conn)?;
        let sql = format!(
            "DELETE FROM transactions
             WHERE id IN ({})
               AND account_id IN (SELECT id FROM accounts WHERE user_id = ?1)
             RETURNING id",
            placeholders(1, ids.len())
        );
        let mut param_values: Vec<&dyn rusqlite::types::ToSql> = vec![&user_id];
        param_values.extend(ids.iter().map(|id| id as &dyn rusqlite::types::ToSql));

        let mut stmt = conn.prepare(&sql).map_err(db_err)?;
        let deleted = stmt
            .query_map(param_values.as_slice(), |row| row.get::<_, String>(0))
            .map_err(|e| DomainError::Database(format!("Failed to delete transactions: {e}")))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(deleted)
    }
}
