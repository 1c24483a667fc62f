//! Generic SQLite repository over any mapped [`Entity`].
//!
//! # Responsibility
//! - Implement the shared `Repository` contract once for every entity.
//! - Offer row-query helpers to entity-specific finders.
//!
//! # Invariants
//! - Construction requires a fully migrated connection.
//! - Inserts never bind a caller id; the store assigns it.

use crate::db::migrations::ensure_latest;
use crate::repo::mapping::{quote_ident, Entity, RowDecoder, TableMapping};
use crate::repo::{RepoError, RepoResult, Repository};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Params};
use std::marker::PhantomData;

/// SQLite-backed repository for entity `T`.
pub struct SqliteRepository<'conn, T> {
    conn: &'conn Connection,
    _entity: PhantomData<fn() -> T>,
}

impl<'conn, T: Entity> SqliteRepository<'conn, T> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_latest(conn)?;
        Ok(Self {
            conn,
            _entity: PhantomData,
        })
    }

    pub(crate) fn connection(&self) -> &'conn Connection {
        self.conn
    }

    /// Runs `SELECT <mapped columns> FROM <table> <clause>`.
    pub(crate) fn select_where<P: Params>(&self, clause: &str, params: P) -> RepoResult<Vec<T>> {
        let sql = format!("{} {clause};", T::MAPPING.select_sql());
        query_entities(self.conn, &sql, params)
    }

    fn ordered_by_id(&self) -> String {
        format!("ORDER BY {} ASC", quote_ident(T::MAPPING.id_column))
    }
}

impl<T: Entity> Repository<T> for SqliteRepository<'_, T> {
    fn save(&self, entity: &T) -> RepoResult<T> {
        let mapping: &TableMapping = &T::MAPPING;
        let mut values = entity.encode();
        mapping.check_values(&values)?;

        match entity.id() {
            None => {
                self.conn
                    .execute(&mapping.insert_sql(), params_from_iter(values))?;
                let mut saved = entity.clone();
                saved.set_id(self.conn.last_insert_rowid());
                Ok(saved)
            }
            Some(id) => {
                values.push(Value::Integer(id));
                let changed = self
                    .conn
                    .execute(&mapping.update_sql(), params_from_iter(values))?;
                if changed == 0 {
                    return Err(RepoError::NotFound {
                        table: mapping.table,
                        id,
                    });
                }
                Ok(entity.clone())
            }
        }
    }

    fn find_all(&self) -> RepoResult<Vec<T>> {
        self.select_where(&self.ordered_by_id(), [])
    }

    fn find_by_id(&self, id: i64) -> RepoResult<Option<T>> {
        let clause = format!("WHERE {} = ?1", quote_ident(T::MAPPING.id_column));
        Ok(self.select_where(&clause, [id])?.into_iter().next())
    }
}

/// Runs `sql` and decodes every row as `U` through `U::MAPPING`.
pub(crate) fn query_entities<U: Entity, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RepoResult<Vec<U>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut entities = Vec::new();

    while let Some(row) = rows.next()? {
        entities.push(U::decode(&RowDecoder::new(&U::MAPPING, row))?);
    }

    Ok(entities)
}
