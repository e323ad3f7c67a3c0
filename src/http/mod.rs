//! HTTP protocol layer module
//!
//! Response builders decoupled from the business logic.

pub mod response;

pub use response::build_text_response;
