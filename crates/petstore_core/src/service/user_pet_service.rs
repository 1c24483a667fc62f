//! User/pet association service.

use crate::model::pet::{Pet, PetId};
use crate::model::user::UserId;
use crate::model::user_pet::UserPet;
use crate::repo::user_pet_repo::UserPetRepository;
use crate::repo::RepoResult;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPetDto {
    pub user_id: UserId,
    pub pet_id: PetId,
}

pub struct UserPetService<R: UserPetRepository> {
    repo: R,
}

impl<R: UserPetRepository> UserPetService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_user_pet(&self, dto: &CreateUserPetDto) -> RepoResult<UserPet> {
        let link = self.repo.save(&UserPet::new(dto.user_id, dto.pet_id))?;
        debug!(
            "event=user_pet_create module=service status=ok id={:?} user_id={} pet_id={}",
            link.id, link.user_id, link.pet_id
        );
        Ok(link)
    }

    pub fn find_all_user_pets(&self) -> RepoResult<Vec<UserPet>> {
        self.repo.find_all()
    }

    pub fn find_pets_of_user(&self, user_id: UserId) -> RepoResult<Vec<Pet>> {
        self.repo.find_pets_by_user_id(user_id)
    }
}
