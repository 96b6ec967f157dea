use super::{db_err, lock, parse_timestamp_col, placeholders, SharedConnection};
use crate::domain::entities::account::Account;
use crate::domain::error::DomainError;
use crate::domain::ports::account_repository::AccountRepository;
use rusqlite::params;

const SELECT_COLS: &str = "id, user_id, name, created_at";

pub struct SqliteAccountRepo {
    conn: SharedConnection,
}

impl SqliteAccountRepo {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    fn row_to_account(row: &rusqlite::Row) -> Result<Account, rusqlite::Error> {
        let created_str: String = row.get(3)?;
        Ok(Account {
            id: row.get(0)?,
            user_id: row.get(1)?,
            name: row.get(2)?,
            created_at: parse_timestamp_col(3, &created_str)?,
        })
    }
}

impl AccountRepository for SqliteAccountRepo {
    fn add(&self, account: &Account) -> Result<(), DomainError> {
        let conn = lock(&self.conn)?;
        conn.execute(
            "INSERT INTO accounts (id, user_id, name, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                account.id,
                account.user_id,
                account.name,
                account.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add account: {e}")))?;
        Ok(())
    }

    fn list(&self, user_id: &str) -> Result<Vec<Account>, DomainError> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLS} FROM accounts WHERE user_id = ?1 ORDER BY name, id"
            ))
            .map_err(db_err)?;
        let accounts = stmt
            .query_map(params![user_id], Self::row_to_account)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(accounts)
    }

    fn get(&self, user_id: &str, id: &str) -> Result<Option<Account>, DomainError> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLS} FROM accounts WHERE user_id = ?1 AND id = ?2"
            ))
            .map_err(db_err)?;
        let mut rows = stmt
            .query_map(params![user_id, id], Self::row_to_account)
            .map_err(db_err)?;
        rows.next().transpose().map_err(db_err)
    }

    fn rename(&self, user_id: &str, id: &str, name: &str) -> Result<Option<Account>, DomainError> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn
            .prepare(&format!(
                "UPDATE accounts SET name = ?1 WHERE user_id = ?2 AND id = ?3 RETURNING {SELECT_COLS}"
            ))
            .map_err(db_err)?;
        let mut rows = stmt
            .query_map(params![name, user_id, id], Self::row_to_account)
            .map_err(|e| DomainError::Database(format!("Failed to rename account: {e}")))?;
        rows.next().transpose().map_err(db_err)
    }

    fn delete_many(&self, user_id: &str, ids: &[String]) -> Result<Vec<String>, DomainError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let conn = lock(&self.conn)?;
        let sql = format!(
            "DELETE FROM accounts WHERE user_id = ?1 AND id IN ({}) RETURNING id",
            placeholders(1, ids.len())
        );
        let mut param_values: Vec<&dyn rusqlite::types::ToSql> = vec![&user_id];
        param_values.extend(ids.iter().map(|id| id as &dyn rusqlite::types::ToSql));

        let mut stmt = conn.prepare(&sql).map_err(db_err)?;
        let deleted = stmt
            .query_map(param_values.as_slice(), |row| row.get::<_, String>(0))
            .map_err(|e| DomainError::Database(format!("Failed to delete accounts: {e}")))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(deleted)
    }
}
