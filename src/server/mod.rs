//! Server module
//!
//! Provides listener creation and the accept loop. Each accepted
//! connection is served independently in a spawned task; the only state
//! shared across requests is the logger handle.

mod connection;
mod listener;

pub use listener::create_listener;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::logger::Logger;

/// Accept connections until the process is terminated.
///
/// Accept errors are logged and the loop continues; a single failed
/// accept must not take the service down.
pub async fn run(listener: TcpListener, logger: Arc<Logger>) {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                connection::handle(stream, Arc::clone(&logger));
            }
            Err(err) => {
                logger.error(format!("Failed to accept connection: {err}"));
            }
        }
    }
}
