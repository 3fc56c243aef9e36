//! Carts

pub mod errors;
pub mod models;
pub mod service;
pub mod store;

pub use errors::CartsServiceError;
pub use service::*;
pub use store::{InMemorySessionStore, SessionStore, SessionStoreError};
