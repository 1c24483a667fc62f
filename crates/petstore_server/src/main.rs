use clap::Parser;
use log::{error, info};
use petstore_server::args::RunArgs;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let args = RunArgs::parse();
    petstore_core::init_logging(&args.log_level, args.log_dir.as_deref())
        .map_err(io::Error::other)?;

    let conn = args.open_store().map_err(|err| {
        error!(
            "event=server_start module=http status=error error_code=store_open_failed error={err}"
        );
        io::Error::other(err)
    })?;

    info!(
        "event=server_start module=http status=ok version={} store={}",
        petstore_core::core_version(),
        if args.memory {
            "memory".to_string()
        } else {
            args.db.display().to_string()
        }
    );
    petstore_server::create_server(&args, conn)?.await
}
