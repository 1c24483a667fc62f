//! Pet mapping and repository.
//!
//! # Invariants
//! - `find_by_type` returns the lowest-id match, or `None` when nothing
//!   matches. It never errors on multiple matches.

use crate::model::pet::Pet;
use crate::repo::mapping::{quote_ident, ColumnMapping, Entity, RowDecoder, TableMapping};
use crate::repo::sqlite::SqliteRepository;
use crate::repo::{RepoResult, Repository};
use rusqlite::types::Value;

const TYPE_COLUMN: ColumnMapping = ColumnMapping::required("kind", "type");

impl Entity for Pet {
    const MAPPING: TableMapping = TableMapping {
        table: "pet",
        id_column: "id",
        columns: &[TYPE_COLUMN],
    };

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn encode(&self) -> Vec<Value> {
        vec![Value::Text(self.kind.clone())]
    }

    fn decode(row: &RowDecoder<'_, '_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(row.id()?),
            kind: row.required(TYPE_COLUMN.field)?,
        })
    }
}

/// Repository interface for pets.
pub trait PetRepository: Repository<Pet> {
    /// Returns the first pet (by ascending id) whose type equals `kind`.
    fn find_by_type(&self, kind: &str) -> RepoResult<Option<Pet>>;
}

/// SQLite-backed pet repository.
pub type SqlitePetRepository<'conn> = SqliteRepository<'conn, Pet>;

impl PetRepository for SqliteRepository<'_, Pet> {
    fn find_by_type(&self, kind: &str) -> RepoResult<Option<Pet>> {
        let clause = format!(
            "WHERE {} = ?1 ORDER BY {} ASC LIMIT 1",
            quote_ident(TYPE_COLUMN.column),
            quote_ident(Pet::MAPPING.id_column)
        );
        Ok(self.select_where(&clause, [kind])?.into_iter().next())
    }
}
