//! Shared store handle for request handlers.
//!
//! # Invariants
//! - One SQLite connection is shared; requests are serialized on its lock.
//! - Store work runs on actix's blocking pool, never on the async workers.

use crate::errors::{ApiError, ApiResult};
use actix_web::web;
use petstore_core::RepoResult;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct DbConnection {
    conn: Arc<Mutex<Connection>>,
}

impl DbConnection {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `job` against the connection on the blocking pool.
    pub async fn run<T, F>(&self, job: F) -> ApiResult<T>
    where
        F: FnOnce(&Connection) -> RepoResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        web::block(move || {
            let guard = conn.lock().map_err(|_| ApiError::PoisonedConnection)?;
            job(&*guard).map_err(ApiError::from)
        })
        .await?
    }
}
