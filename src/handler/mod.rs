//! Request handler module
//!
//! Routing dispatch and the arithmetic operation handlers.

pub mod ops;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
