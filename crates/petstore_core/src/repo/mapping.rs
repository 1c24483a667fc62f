//! Explicit entity-to-table mapping.
//!
//! # Responsibility
//! - Describe each table as an id column plus ordered field → column
//!   entries carrying a nullability flag.
//! - Generate the SQL used by generic repositories from that description.
//! - Check values against nullability on encode and decode.
//!
//! # Invariants
//! - `Entity::encode` yields values in `TableMapping::columns` order.
//! - Identifiers are always emitted quoted.

use crate::repo::{RepoError, RepoResult};
use rusqlite::types::{FromSql, Value};
use rusqlite::Row;

/// Maps one entity field to one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub field: &'static str,
    pub column: &'static str,
    pub nullable: bool,
}

impl ColumnMapping {
    pub const fn required(field: &'static str, column: &'static str) -> Self {
        Self {
            field,
            column,
            nullable: false,
        }
    }

    pub const fn optional(field: &'static str, column: &'static str) -> Self {
        Self {
            field,
            column,
            nullable: true,
        }
    }
}

/// Maps one entity type to one table.
#[derive(Debug, Clone, Copy)]
pub struct TableMapping {
    pub table: &'static str,
    pub id_column: &'static str,
    /// Non-id columns. Order defines bind order for insert/update.
    pub columns: &'static [ColumnMapping],
}

impl TableMapping {
    pub fn column(&self, field: &str) -> Option<&ColumnMapping> {
        self.columns.iter().find(|mapping| mapping.field == field)
    }

    /// Comma-separated id + mapped columns, optionally qualified by `alias`.
    pub fn column_list(&self, alias: Option<&str>) -> String {
        std::iter::once(self.id_column)
            .chain(self.columns.iter().map(|mapping| mapping.column))
            .map(|column| match alias {
                Some(alias) => format!("{alias}.{}", quote_ident(column)),
                None => quote_ident(column),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn select_sql(&self) -> String {
        format!(
            "SELECT {} FROM {}",
            self.column_list(None),
            quote_ident(self.table)
        )
    }

    pub fn insert_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|mapping| quote_ident(mapping.column))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=self.columns.len())
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({columns}) VALUES ({placeholders});",
            quote_ident(self.table)
        )
    }

    /// Update statement binding mapped columns first and the id last.
    pub fn update_sql(&self) -> String {
        let assignments = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, mapping)| format!("{} = ?{}", quote_ident(mapping.column), index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {assignments} WHERE {} = ?{};",
            quote_ident(self.table),
            quote_ident(self.id_column),
            self.columns.len() + 1
        )
    }

    /// Checks encoded values against the mapping before they reach SQL.
    pub fn check_values(&self, values: &[Value]) -> RepoResult<()> {
        if values.len() != self.columns.len() {
            return Err(RepoError::InvalidData(format!(
                "{} expects {} values, got {}",
                self.table,
                self.columns.len(),
                values.len()
            )));
        }

        for (mapping, value) in self.columns.iter().zip(values) {
            if !mapping.nullable && matches!(value, Value::Null) {
                return Err(RepoError::InvalidData(format!(
                    "NULL for non-nullable column {}.{}",
                    self.table, mapping.column
                )));
            }
        }

        Ok(())
    }
}

/// An entity with an explicit table mapping.
pub trait Entity: Clone + Sized {
    const MAPPING: TableMapping;

    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: i64);
    /// Encodes non-id fields in `MAPPING.columns` order.
    fn encode(&self) -> Vec<Value>;
    fn decode(row: &RowDecoder<'_, '_>) -> RepoResult<Self>;
}

/// Reads one row through a table mapping.
pub struct RowDecoder<'a, 'stmt> {
    mapping: &'a TableMapping,
    row: &'a Row<'stmt>,
}

impl<'a, 'stmt> RowDecoder<'a, 'stmt> {
    pub fn new(mapping: &'a TableMapping, row: &'a Row<'stmt>) -> Self {
        Self { mapping, row }
    }

    pub fn id(&self) -> RepoResult<i64> {
        self.row
            .get::<_, Option<i64>>(self.mapping.id_column)?
            .ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "NULL id in {}.{}",
                    self.mapping.table, self.mapping.id_column
                ))
            })
    }

    /// Reads a non-nullable field; `NULL` is invalid data.
    pub fn required<T: FromSql>(&self, field: &str) -> RepoResult<T> {
        let mapping = self.lookup(field)?;
        self.row.get::<_, Option<T>>(mapping.column)?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "NULL in non-nullable column {}.{}",
                self.mapping.table, mapping.column
            ))
        })
    }

    pub fn optional<T: FromSql>(&self, field: &str) -> RepoResult<Option<T>> {
        let mapping = self.lookup(field)?;
        if !mapping.nullable {
            return Err(RepoError::InvalidData(format!(
                "column {}.{} is not nullable",
                self.mapping.table, mapping.column
            )));
        }
        Ok(self.row.get::<_, Option<T>>(mapping.column)?)
    }

    /// Reads a required text field and parses it with `parse`.
    pub fn parsed<T>(&self, field: &str, parse: impl FnOnce(&str) -> Option<T>) -> RepoResult<T> {
        let text: String = self.required(field)?;
        parse(&text).ok_or_else(|| {
            let column = self.lookup(field).map_or(field, |mapping| mapping.column);
            RepoError::InvalidData(format!(
                "invalid value `{text}` in {}.{column}",
                self.mapping.table
            ))
        })
    }

    fn lookup(&self, field: &str) -> RepoResult<&'a ColumnMapping> {
        self.mapping.column(field).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "field `{field}` is not mapped on {}",
                self.mapping.table
            ))
        })
    }
}

/// Quotes an SQL identifier, doubling embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub(crate) fn text_or_null(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |text| Value::Text(text.to_string()))
}
