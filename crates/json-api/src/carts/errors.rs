//! Errors

use tracing::error;

use cart_app::domain::carts::{CartsServiceError, ErrorKind};

use crate::errors::ApiError;

impl From<CartsServiceError> for ApiError {
    fn from(error: CartsServiceError) -> Self {
        match error.kind() {
            ErrorKind::NotFound => ApiError::not_found(error),
            ErrorKind::Validation => ApiError::request(error),
            ErrorKind::Inconsistency | ErrorKind::Transport => {
                match std::error::Error::source(&error) {
                    Some(source) => error!("cart operation failed: {error}: {source}"),
                    None => error!("cart operation failed: {error}"),
                }

                ApiError::process(error)
            }
        }
    }
}
