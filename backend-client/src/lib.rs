// Export backend client library
//
// This crate provides the outbound HTTP call the relay makes
// to the external export backend.

mod client;
mod errors;

pub use client::ExportBackendClient;
pub use errors::ClientError;
