use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

mod handler;
mod http;
mod logger;
mod query;
mod server;

use logger::Logger;

/// Fixed listen port; the service reads no environment or CLI configuration.
const PORT: u16 = 3000;

/// Relative directory holding the append-only log files.
const LOG_DIR: &str = "logs";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Opening the log files is a startup precondition: if the log
    // directory cannot be created or written, the process exits here.
    let logger = Arc::new(Logger::open(Path::new(LOG_DIR))?);

    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = server::create_listener(addr)?;

    logger.info(format!("Server is running at http://localhost:{PORT}"));

    server::run(listener, logger).await;
    Ok(())
}
