// Looker Export API server
//
// Relays export requests from the browser form to the export backend.

pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod telemetry;

pub use app::{build_router, AppState, SharedState};
pub use config::ServerConfig;
pub use errors::RelayError;
