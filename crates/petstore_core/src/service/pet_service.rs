//! Pet use-case service.

use crate::model::pet::{Pet, PetId};
use crate::repo::pet_repo::PetRepository;
use crate::repo::RepoResult;
use log::debug;
use serde::{Deserialize, Serialize};

/// Creation input for a pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePetDto {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Use-case service wrapper for pet operations.
pub struct PetService<R: PetRepository> {
    repo: R,
}

impl<R: PetRepository> PetService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a pet and returns it with the store-assigned id.
    pub fn create_pet(&self, dto: &CreatePetDto) -> RepoResult<Pet> {
        let pet = self.repo.save(&Pet::new(dto.kind.clone()))?;
        debug!(
            "event=pet_create module=service status=ok id={:?}",
            pet.id
        );
        Ok(pet)
    }

    /// Returns the lowest-id pet of this type, or `None`.
    pub fn find_pet_by_type(&self, kind: &str) -> RepoResult<Option<Pet>> {
        self.repo.find_by_type(kind)
    }

    pub fn find_all_pets(&self) -> RepoResult<Vec<Pet>> {
        self.repo.find_all()
    }

    pub fn find_pet_by_id(&self, id: PetId) -> RepoResult<Option<Pet>> {
        self.repo.find_by_id(id)
    }
}
