//! Cart Errors

use sqlx::Error;
use thiserror::Error;

use crate::domain::carts::validation::ValidationError;

/// Broad category of a [`CartsServiceError`], used when mapping across layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Inconsistency,
    Transport,
}

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("update of cart '{cart_id}' matched {matched} records")]
    Inconsistency { cart_id: String, matched: u64 },

    #[error("storage error")]
    Sql(#[source] Error),
}

impl CartsServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Inconsistency { .. } => ErrorKind::Inconsistency,
            Self::Sql(_) => ErrorKind::Transport,
        }
    }
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}

/// Enforce that an update statement touched exactly one cart.
pub(crate) fn expect_single_match(cart_id: &str, matched: u64) -> Result<(), CartsServiceError> {
    match matched {
        1 => Ok(()),
        0 => Err(CartsServiceError::NotFound),
        _ => Err(CartsServiceError::Inconsistency {
            cart_id: cart_id.to_string(),
            matched,
        }),
    }
}
