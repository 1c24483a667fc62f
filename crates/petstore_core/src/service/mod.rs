//! Use-case services.
//!
//! # Responsibility
//! - Turn creation DTOs into entities and delegate to repositories.
//! - Keep the HTTP layer decoupled from storage details.
//!
//! # Invariants
//! - Services add no validation beyond DTO field types.
//! - Repository errors propagate unchanged.

pub mod pet_service;
pub mod post_service;
pub mod user_pet_service;
pub mod user_service;
