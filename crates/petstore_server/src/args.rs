//! Command-line and environment configuration for the server binary.

use clap::Parser;
use petstore_core::db::{open_db, open_db_in_memory, DbResult};
use rusqlite::Connection;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Pet/user/post CRUD service", long_about = None)]
pub struct RunArgs {
    /// Address to bind.
    #[arg(short, long, env = "PETSTORE_ADDRESS", default_value = "127.0.0.1")]
    pub address: String,
    #[arg(short, long, env = "PETSTORE_PORT", default_value_t = 8080)]
    pub port: u16,
    /// SQLite database file, created and migrated on startup.
    #[arg(long, env = "PETSTORE_DB", default_value = "petstore.sqlite3")]
    pub db: PathBuf,
    /// Use a throwaway in-memory database instead of `--db`.
    #[arg(long, env = "PETSTORE_MEMORY", conflicts_with = "db")]
    pub memory: bool,
    /// trace|debug|info|warn|error
    #[arg(long, env = "PETSTORE_LOG_LEVEL", default_value = petstore_core::default_log_level())]
    pub log_level: String,
    /// Absolute directory for rolling log files; logs go to stderr when unset.
    #[arg(long, env = "PETSTORE_LOG_DIR")]
    pub log_dir: Option<String>,
}

impl RunArgs {
    /// Opens the configured store with migrations applied.
    pub fn open_store(&self) -> DbResult<Connection> {
        if self.memory {
            open_db_in_memory()
        } else {
            open_db(&self.db)
        }
    }
}
