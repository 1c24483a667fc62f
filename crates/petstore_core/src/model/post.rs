//! Post entity.
//!
//! # Invariants
//! - `user_id` references an existing user; enforced by the store.
//! - `post_date` and `post_time` are stored independently of `post_at`.

use crate::model::user::UserId;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub type PostId = i64;

/// One row of the `post` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Option<PostId>,
    pub user_id: UserId,
    pub title: Option<String>,
    pub content: String,
    pub post_at: NaiveDateTime,
    pub post_date: NaiveDate,
    pub post_time: NaiveTime,
}

impl Post {
    /// Creates an unsaved post whose date/time columns are split from `post_at`.
    pub fn new(
        user_id: UserId,
        title: Option<String>,
        content: impl Into<String>,
        post_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: None,
            user_id,
            title,
            content: content.into(),
            post_at,
            post_date: post_at.date(),
            post_time: post_at.time(),
        }
    }
}
