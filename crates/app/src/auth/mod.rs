//! Principal authentication.

pub mod errors;
pub mod models;
mod repository;
pub mod service;
pub mod token;

pub use errors::AuthServiceError;
pub use service::*;
