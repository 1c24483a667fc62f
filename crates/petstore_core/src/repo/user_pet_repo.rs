//! User/pet association mapping and repository.

use crate::model::pet::Pet;
use crate::model::user::UserId;
use crate::model::user_pet::UserPet;
use crate::repo::mapping::{quote_ident, ColumnMapping, Entity, RowDecoder, TableMapping};
use crate::repo::sqlite::{query_entities, SqliteRepository};
use crate::repo::{RepoResult, Repository};
use rusqlite::types::Value;

const USER_ID_COLUMN: ColumnMapping = ColumnMapping::required("user_id", "user_id");
const PET_ID_COLUMN: ColumnMapping = ColumnMapping::required("pet_id", "pet_id");

impl Entity for UserPet {
    const MAPPING: TableMapping = TableMapping {
        table: "user_pet",
        id_column: "id",
        columns: &[USER_ID_COLUMN, PET_ID_COLUMN],
    };

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn encode(&self) -> Vec<Value> {
        vec![Value::Integer(self.user_id), Value::Integer(self.pet_id)]
    }

    fn decode(row: &RowDecoder<'_, '_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(row.id()?),
            user_id: row.required(USER_ID_COLUMN.field)?,
            pet_id: row.required(PET_ID_COLUMN.field)?,
        })
    }
}

/// Repository interface for user/pet associations.
pub trait UserPetRepository: Repository<UserPet> {
    /// Associations of one user, ordered by association id.
    fn find_by_user_id(&self, user_id: UserId) -> RepoResult<Vec<UserPet>>;
    /// Pets joined through the association table, ordered by association id.
    /// A pet linked twice appears twice.
    fn find_pets_by_user_id(&self, user_id: UserId) -> RepoResult<Vec<Pet>>;
}

pub type SqliteUserPetRepository<'conn> = SqliteRepository<'conn, UserPet>;

impl UserPetRepository for SqliteRepository<'_, UserPet> {
    fn find_by_user_id(&self, user_id: UserId) -> RepoResult<Vec<UserPet>> {
        let clause = format!(
            "WHERE {} = ?1 ORDER BY {} ASC",
            quote_ident(USER_ID_COLUMN.column),
            quote_ident(UserPet::MAPPING.id_column)
        );
        self.select_where(&clause, [user_id])
    }

    fn find_pets_by_user_id(&self, user_id: UserId) -> RepoResult<Vec<Pet>> {
        let link = UserPet::MAPPING;
        let pet = Pet::MAPPING;
        let sql = format!(
            "SELECT {columns}
             FROM {pet_table} AS p
             JOIN {link_table} AS up ON up.{pet_id} = p.{id}
             WHERE up.{user_id} = ?1
             ORDER BY up.{link_id} ASC;",
            columns = pet.column_list(Some("p")),
            pet_table = quote_ident(pet.table),
            link_table = quote_ident(link.table),
            pet_id = quote_ident(PET_ID_COLUMN.column),
            id = quote_ident(pet.id_column),
            user_id = quote_ident(USER_ID_COLUMN.column),
            link_id = quote_ident(link.id_column),
        );
        query_entities(self.connection(), &sql, [user_id])
    }
}
