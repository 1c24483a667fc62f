//! User use-case service.
//!
//! Password hashing happens before this layer; the DTO already carries the
//! hash that will be stored.

use crate::model::user::{Role, User, UserId};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoResult;
use log::debug;
use serde::{Deserialize, Serialize};

/// Creation input for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub username: String,
    pub password_hash: String,
    /// Defaults to `Role::User`.
    #[serde(default)]
    pub role: Option<Role>,
}

pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_user(&self, dto: &CreateUserDto) -> RepoResult<User> {
        let user = User::new(
            dto.username.clone(),
            dto.password_hash.clone(),
            dto.role.unwrap_or_default(),
        );
        let user = self.repo.save(&user)?;
        debug!(
            "event=user_create module=service status=ok id={:?} role={}",
            user.id,
            user.role.name()
        );
        Ok(user)
    }

    pub fn find_all_users(&self) -> RepoResult<Vec<User>> {
        self.repo.find_all()
    }

    pub fn find_user_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        self.repo.find_by_id(id)
    }

    pub fn find_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        self.repo.find_by_username(username)
    }
}
