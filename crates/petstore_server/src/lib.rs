//! HTTP edge for the pet store.
//! Controllers map requests onto `petstore_core` services; store access runs
//! on the blocking pool through [`DbConnection`].

pub mod args;
pub mod controller;
pub mod errors;
pub mod state;

use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use args::RunArgs;
use log::info;
use rusqlite::Connection;

pub use controller::configure_services;
pub use errors::{ApiError, ApiResult};
pub use state::DbConnection;

/// Builds the server bound to `args.address:args.port` over `conn`.
pub fn create_server(args: &RunArgs, conn: Connection) -> std::io::Result<Server> {
    let db = web::Data::new(DbConnection::new(conn));

    info!(
        "event=server_bind module=http status=start address={} port={}",
        args.address, args.port
    );
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(db.clone())
            .configure(configure_services)
            .wrap(Logger::default())
    })
    .bind((args.address.as_str(), args.port))?
    .run())
}
