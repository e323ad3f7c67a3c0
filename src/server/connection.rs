// Connection handling
// Serves a single accepted TCP connection over HTTP/1.1.

use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::handler;
use crate::logger::Logger;

/// Serve one connection in a spawned task.
///
/// Request handling itself is infallible; only transport-level failures
/// surface here, and they are logged rather than propagated.
pub fn handle(stream: TcpStream, logger: Arc<Logger>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let request_logger = Arc::clone(&logger);
        let service = service_fn(move |req| {
            let logger = Arc::clone(&request_logger);
            async move { handler::handle_request(&req, &logger) }
        });

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        if let Err(err) = builder.serve_connection(io, service).await {
            logger.error(format!("Failed to serve connection: {err:?}"));
        }
    });
}
