//! Carts

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

pub use errors::{CartsServiceError, ErrorKind};
pub use repository::{CartsRepository, MockCartsRepository, PgCartsRepository};
pub use service::*;
pub use validation::ValidationError;
