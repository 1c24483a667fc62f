//! Post use-case service.

use crate::model::post::{Post, PostId};
use crate::model::user::UserId;
use crate::repo::{RepoResult, Repository};
use chrono::{NaiveDateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Creation input for a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDto {
    pub user_id: UserId,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    /// Defaults to the current UTC time when absent.
    #[serde(default)]
    pub post_at: Option<NaiveDateTime>,
}

pub struct PostService<R: Repository<Post>> {
    repo: R,
}

impl<R: Repository<Post>> PostService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a post; `post_date`/`post_time` are split from `post_at`.
    pub fn create_post(&self, dto: &CreatePostDto) -> RepoResult<Post> {
        let post_at = dto.post_at.unwrap_or_else(|| Utc::now().naive_utc());
        let post = Post::new(dto.user_id, dto.title.clone(), dto.content.clone(), post_at);
        let post = self.repo.save(&post)?;
        debug!(
            "event=post_create module=service status=ok id={:?} user_id={}",
            post.id, post.user_id
        );
        Ok(post)
    }

    pub fn find_all_posts(&self) -> RepoResult<Vec<Post>> {
        self.repo.find_all()
    }

    pub fn find_post_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.repo.find_by_id(id)
    }
}
