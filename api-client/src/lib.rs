// API client library for Looker Export
//
// This crate provides the HTTP call the browser-based export form
// makes to the relay endpoint.

pub mod errors;
pub mod http_client;

// Re-export commonly used items
pub use errors::ApiError;
pub use http_client::{fetch_and_send, get_api_base_url, submit_export};
