//! State blob repository contract and SQLite key/value implementation.
//!
//! # Responsibility
//! - Persist logs-by-date, the weight list and the profile as JSON blobs.
//! - Keep SQL and serde details inside the persistence boundary.
//!
//! # Invariants
//! - Blob keys are fixed (`coach_logs`, `coach_weights`, `coach_profile`).
//! - Loaded weight lists are re-sorted and de-duplicated by date.
//! - `save_all` writes the three blobs atomically: all or none.

use crate::db::DbError;
use crate::model::daily_log::DailyLog;
use crate::model::profile::UserProfile;
use crate::model::weight::{WeightEntry, WeightHistory};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const LOGS_KEY: &str = "coach_logs";
pub const WEIGHTS_KEY: &str = "coach_weights";
pub const PROFILE_KEY: &str = "coach_profile";

pub type LogsByDate = BTreeMap<NaiveDate, DailyLog>;
pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for state blob reads and writes.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Encoding {
        key: &'static str,
        source: serde_json::Error,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encoding { key, source } => write!(f, "invalid json in `{key}`: {source}"),
            Self::InvalidData(message) => write!(f, "invalid persisted state: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encoding { source, .. } => Some(source),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the persisted tracker state.
pub trait StateRepository {
    fn load_logs(&self) -> RepoResult<Option<LogsByDate>>;
    fn save_logs(&self, logs: &LogsByDate) -> RepoResult<()>;
    fn load_weights(&self) -> RepoResult<Option<WeightHistory>>;
    fn save_weights(&self, weights: &WeightHistory) -> RepoResult<()>;
    fn load_profile(&self) -> RepoResult<Option<UserProfile>>;
    fn save_profile(&self, profile: &UserProfile) -> RepoResult<()>;

    /// Writes all three blobs as one unit.
    ///
    /// The default writes them one after another; storage backends that can
    /// should override it so a failure leaves every blob untouched.
    fn save_all(
        &self,
        logs: &LogsByDate,
        weights: &WeightHistory,
        profile: &UserProfile,
    ) -> RepoResult<()> {
        self.save_logs(logs)?;
        self.save_weights(weights)?;
        self.save_profile(profile)
    }

    /// Deletes every persisted blob.
    fn purge(&self) -> RepoResult<()>;
}

/// SQLite `kv_store`-backed state repository.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Raw JSON text stored under `key`, if any.
    pub fn raw(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Replaces the raw JSON text stored under `key`.
    pub fn put_raw(&self, key: &str, value: &str) -> RepoResult<()> {
        upsert(self.conn, key, value)
    }

    fn load_json<T: DeserializeOwned>(&self, key: &'static str) -> RepoResult<Option<T>> {
        match self.raw(key)? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|source| RepoError::Encoding { key, source }),
            None => Ok(None),
        }
    }

    fn save_json<T: Serialize + ?Sized>(&self, key: &'static str, value: &T) -> RepoResult<()> {
        self.put_raw(key, &encode(key, value)?)
    }
}

fn encode<T: Serialize + ?Sized>(key: &'static str, value: &T) -> RepoResult<String> {
    serde_json::to_string(value).map_err(|source| RepoError::Encoding { key, source })
}

fn upsert(conn: &Connection, key: &str, value: &str) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at;",
        params![key, value],
    )?;
    Ok(())
}

impl StateRepository for SqliteStateRepository<'_> {
    fn load_logs(&self) -> RepoResult<Option<LogsByDate>> {
        let Some(logs) = self.load_json::<LogsByDate>(LOGS_KEY)? else {
            return Ok(None);
        };
        if let Some((key, log)) = logs.iter().find(|(key, log)| **key != log.date) {
            return Err(RepoError::InvalidData(format!(
                "log keyed `{key}` carries date `{}`",
                log.date
            )));
        }
        Ok(Some(logs))
    }

    fn save_logs(&self, logs: &LogsByDate) -> RepoResult<()> {
        self.save_json(LOGS_KEY, logs)
    }

    fn load_weights(&self) -> RepoResult<Option<WeightHistory>> {
        let entries = self.load_json::<Vec<WeightEntry>>(WEIGHTS_KEY)?;
        Ok(entries.map(WeightHistory::from_entries))
    }

    fn save_weights(&self, weights: &WeightHistory) -> RepoResult<()> {
        self.save_json(WEIGHTS_KEY, weights.entries())
    }

    fn load_profile(&self) -> RepoResult<Option<UserProfile>> {
        self.load_json(PROFILE_KEY)
    }

    fn save_profile(&self, profile: &UserProfile) -> RepoResult<()> {
        self.save_json(PROFILE_KEY, profile)
    }

    fn save_all(
        &self,
        logs: &LogsByDate,
        weights: &WeightHistory,
        profile: &UserProfile,
    ) -> RepoResult<()> {
        let blobs = [
            (LOGS_KEY, encode(LOGS_KEY, logs)?),
            (WEIGHTS_KEY, encode(WEIGHTS_KEY, weights.entries())?),
            (PROFILE_KEY, encode(PROFILE_KEY, profile)?),
        ];

        // Dropping the transaction on an early return rolls it back.
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        for (key, text) in &blobs {
            upsert(&tx, key, text)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn purge(&self) -> RepoResult<()> {
        self.conn.execute(
            "DELETE FROM kv_store WHERE key IN (?1, ?2, ?3);",
            params![LOGS_KEY, WEIGHTS_KEY, PROFILE_KEY],
        )?;
        Ok(())
    }
}
