//! Entity records for the pet/user/post domain.
//!
//! # Responsibility
//! - Define plain data holders mapped one-to-one with table rows.
//! - Keep wire naming (camelCase) separate from storage naming (snake_case).
//!
//! # Invariants
//! - `id` is `None` until the store assigns one on first persist.
//! - Ids are never chosen by callers of create paths.

pub mod pet;
pub mod post;
pub mod user;
pub mod user_pet;
