//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;

use crate::errors::ApiError;

/// Helpers for mapping depot extraction failures to error responses.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>()
            .map_err(|_ignored| ApiError::process("application state is unavailable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_is_process_error() {
        let depot = Depot::new();

        let error = depot
            .obtain_or_500::<String>()
            .expect_err("empty depot has no values");

        assert_eq!(error.body().code, 1);
        assert_eq!(
            error.body().reason,
            "failed to process request: application state is unavailable"
        );
    }

    #[test]
    fn present_value_is_returned() {
        let mut depot = Depot::new();
        depot.inject(42_u32);

        assert_eq!(depot.obtain_or_500::<u32>().ok(), Some(&42));
    }
}
