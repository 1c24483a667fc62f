//! User mapping and repository.
//!
//! # Invariants
//! - `role` is written as its enumeration name and read back only if it
//!   names a declared `Role`; anything else is `InvalidData`.

use crate::model::user::{Role, User};
use crate::repo::mapping::{quote_ident, ColumnMapping, Entity, RowDecoder, TableMapping};
use crate::repo::sqlite::SqliteRepository;
use crate::repo::{RepoResult, Repository};
use rusqlite::types::Value;

const USERNAME_COLUMN: ColumnMapping = ColumnMapping::required("username", "username");
const PASSWORD_HASH_COLUMN: ColumnMapping =
    ColumnMapping::required("password_hash", "password_hash");
const ROLE_COLUMN: ColumnMapping = ColumnMapping::required("role", "role");

impl Entity for User {
    const MAPPING: TableMapping = TableMapping {
        table: "user",
        id_column: "id",
        columns: &[USERNAME_COLUMN, PASSWORD_HASH_COLUMN, ROLE_COLUMN],
    };

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn encode(&self) -> Vec<Value> {
        vec![
            Value::Text(self.username.clone()),
            Value::Text(self.password_hash.clone()),
            Value::Text(self.role.name().to_string()),
        ]
    }

    fn decode(row: &RowDecoder<'_, '_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(row.id()?),
            username: row.required(USERNAME_COLUMN.field)?,
            password_hash: row.required(PASSWORD_HASH_COLUMN.field)?,
            role: row.parsed(ROLE_COLUMN.field, Role::from_name)?,
        })
    }
}

/// Repository interface for users.
pub trait UserRepository: Repository<User> {
    /// Returns the first user (by ascending id) with exactly this username.
    fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;
}

pub type SqliteUserRepository<'conn> = SqliteRepository<'conn, User>;

impl UserRepository for SqliteRepository<'_, User> {
    fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let clause = format!(
            "WHERE {} = ?1 ORDER BY {} ASC LIMIT 1",
            quote_ident(USERNAME_COLUMN.column),
            quote_ident(User::MAPPING.id_column)
        );
        Ok(self.select_where(&clause, [username])?.into_iter().next())
    }
}
