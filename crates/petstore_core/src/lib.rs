//! Core domain logic for the pet store service.
//! Entities, their explicit table mappings, repositories and services live
//! here; the HTTP edge lives in `petstore_server`.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::pet::{Pet, PetId};
pub use model::post::{Post, PostId};
pub use model::user::{Role, User, UserId};
pub use model::user_pet::{UserPet, UserPetId};
pub use repo::mapping::{ColumnMapping, Entity, TableMapping};
pub use repo::pet_repo::{PetRepository, SqlitePetRepository};
pub use repo::post_repo::SqlitePostRepository;
pub use repo::sqlite::SqliteRepository;
pub use repo::user_pet_repo::{SqliteUserPetRepository, UserPetRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult, Repository};
pub use service::pet_service::{CreatePetDto, PetService};
pub use service::post_service::{CreatePostDto, PostService};
pub use service::user_pet_service::{CreateUserPetDto, UserPetService};
pub use service::user_service::{CreateUserDto, UserService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
