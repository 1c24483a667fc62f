//! HTTP controllers: one scope per resource.
//!
//! # Responsibility
//! - Map verbs/paths to service calls and (de)serialize bodies.
//! - Translate absent records into `404` and everything else into the
//!   error mapping in `errors`.

pub mod pets;
pub mod posts;
pub mod user_pets;
pub mod users;

use actix_web::web;

/// Registers every resource scope.
pub fn configure_services(cfg: &mut web::ServiceConfig) {
    cfg.service(pets::scope())
        .service(users::scope())
        .service(posts::scope())
        .service(user_pets::scope());
}
