//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, and dispatch to the operation handlers.

use std::convert::Infallible;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};

use crate::handler::ops::{self, Operation};
use crate::http;
use crate::logger::Logger;

/// Static help text served on the root path.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Calculator Microservice, Please provide two numbers as query parameters!";

/// Main entry point for HTTP request handling.
pub fn handle_request(
    req: &Request<hyper::body::Incoming>,
    logger: &Logger,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (status, body) = dispatch(req.method(), req.uri().path(), req.uri().query(), logger);
    Ok(http::build_text_response(status, &body))
}

/// Route a request by method and path, producing the response status
/// and body.
pub fn dispatch(
    method: &Method,
    path: &str,
    query: Option<&str>,
    logger: &Logger,
) -> (StatusCode, String) {
    // Only GET routes exist; other methods fall through to not-found
    if method != Method::GET {
        return not_found();
    }

    // Root endpoint: static welcome text, no logging
    if path == "/" {
        return (StatusCode::OK, WELCOME_MESSAGE.to_string());
    }

    match Operation::from_path(path) {
        Some(op) => ops::execute(op, query, logger),
        None => not_found(),
    }
}

fn not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, "404 Not Found".to_string())
}
