//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the per-entity persistence contract (`save`, `find_all`,
//!   `find_by_id`) plus explicit entity-specific finders.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Every write goes through the entity's mapping table, which rejects
//!   `NULL` for non-nullable columns before SQL runs.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod mapping;
pub mod pet_repo;
pub mod post_repo;
pub mod sqlite;
pub mod user_pet_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by every entity repository.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound { table: &'static str, id: i64 },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { table, id } => write!(f, "{table} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidData(_) => None,
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

/// Persistence contract for one entity type.
pub trait Repository<T> {
    /// Inserts `entity` when it has no id and returns it with the generated
    /// id; otherwise updates the row with that id.
    ///
    /// # Errors
    /// - `NotFound` when updating an id that has no row.
    /// - `InvalidData` when a non-nullable column would receive `NULL`.
    /// - `Db` on store failures and constraint violations.
    fn save(&self, entity: &T) -> RepoResult<T>;
    /// Returns every row ordered by ascending id. An empty table yields an
    /// empty vector.
    fn find_all(&self) -> RepoResult<Vec<T>>;
    fn find_by_id(&self, id: i64) -> RepoResult<Option<T>>;
}
