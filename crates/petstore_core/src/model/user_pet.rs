//! User/pet association entity.
//!
//! # Invariants
//! - Rows model a many-to-many join; duplicates are allowed.
//! - `user_id`/`pet_id` integrity is owned by store foreign keys.

use crate::model::pet::PetId;
use crate::model::user::UserId;
use serde::{Deserialize, Serialize};

pub type UserPetId = i64;

/// One row of the `user_pet` join table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPet {
    pub id: Option<UserPetId>,
    pub user_id: UserId,
    pub pet_id: PetId,
}

impl UserPet {
    pub fn new(user_id: UserId, pet_id: PetId) -> Self {
        Self {
            id: None,
            user_id,
            pet_id,
        }
    }
}
