//! Persistent store layer.
//!
//! # Responsibility
//! - Define the key/value storage contract the note collection persists to.
//! - Isolate SQLite details from collection/UI orchestration.
//!
//! # Invariants
//! - Values are overwritten wholesale; there are no partial updates and no
//!   transactions spanning multiple keys.
//! - A malformed persisted payload never escapes `NoteStore::load` as an
//!   error; it reads back as an empty collection.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
mod notes;
pub mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use notes::{NoteStore, NOTES_KEY};
pub use sqlite::SqliteKeyValueStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for key/value transport and payload encoding.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Schema is at the right version but a required table is absent.
    MissingRequiredTable(&'static str),
    /// The collection could not be serialized for writing.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::Encode(err) => write!(f, "failed to encode note collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Origin-scoped key/value storage contract.
///
/// Implementations hold one text value per key and overwrite on every set.
/// `get` distinguishes "no value stored" (`None`) from transport failure.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
