// Looker Export - Core Library

pub mod form;
pub mod models;
pub mod validation;

pub use form::*;
pub use models::*;
pub use validation::*;
