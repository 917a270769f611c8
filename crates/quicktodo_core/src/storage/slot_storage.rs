//! Slot storage contract and SQLite implementation.
//!
//! # Responsibility
//! - Serialize the full ordered todo sequence into one key-value slot.
//! - Keep SQL and JSON encoding details inside the persistence boundary.
//!
//! # Invariants
//! - `save` replaces the whole payload under [`TODOS_SLOT_KEY`] in one write.
//! - `load` degrades to an empty list for an absent or unparseable slot;
//!   storage-transport failures remain errors.

use crate::db::{migrations, DbError};
use crate::model::todo::TodoItem;
use log::warn;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed well-known key of the todo slot.
pub const TODOS_SLOT_KEY: &str = "todos";

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence-layer error for slot reads and writes.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Encode(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode todo payload: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection has no applied schema: user_version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Persistence contract for the todo sequence.
///
/// `save` receives the full ordered sequence after every mutation; `load`
/// returns the same shape, or an empty list when the slot is absent or
/// unreadable.
pub trait TodoStorage {
    fn save(&self, items: &[TodoItem]) -> StorageResult<()>;
    fn load(&self) -> StorageResult<Vec<TodoItem>>;
}

/// SQLite-backed slot storage.
pub struct SqliteSlotStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStorage<'conn> {
    /// Constructs the adapter from a migrated, ready connection.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TodoStorage for SqliteSlotStorage<'_> {
    fn save(&self, items: &[TodoItem]) -> StorageResult<()> {
        let payload = serde_json::to_string(items)?;
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![TODOS_SLOT_KEY, payload],
        )?;
        Ok(())
    }

    fn load(&self) -> StorageResult<Vec<TodoItem>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM slots WHERE key = ?1;")?;
        let mut rows = stmt.query([TODOS_SLOT_KEY])?;

        let Some(row) = rows.next()? else {
            return Ok(Vec::new());
        };

        let payload: String = row.get(0)?;
        match serde_json::from_str(&payload) {
            Ok(items) => Ok(items),
            Err(err) => {
                // A corrupt payload must not block startup; the slot is
                // rewritten by the next mutation anyway.
                warn!(
                    "event=slot_load module=storage status=degraded key={TODOS_SLOT_KEY} error={err}"
                );
                Ok(Vec::new())
            }
        }
    }
}

fn ensure_connection_ready(conn: &Connection) -> StorageResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version == 0 {
        return Err(StorageError::UninitializedConnection {
            expected_version: migrations::latest_version(),
            actual_version,
        });
    }

    let has_slots: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'slots'
        );",
        [],
        |row| row.get(0),
    )?;
    if has_slots != 1 {
        return Err(StorageError::MissingRequiredTable("slots"));
    }

    Ok(())
}
