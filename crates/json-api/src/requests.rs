//! Request decoding

use salvo::{Request, http::ParseError};
use serde::de::DeserializeOwned;
use thiserror::Error;

use cart_app::domain::carts::ValidationError;

use crate::errors::ApiError;

/// Largest request body accepted unless configured otherwise.
pub(crate) const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Error)]
pub(crate) enum RequestError {
    #[error("could not decode query parameters: {0}")]
    Query(#[source] ParseError),

    #[error("could not read request body: {0}")]
    Body(#[source] ParseError),

    #[error("could not decode request body: {0}")]
    Json(#[source] serde_json::Error),

    #[error("{0} cannot be empty")]
    Missing(&'static str),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl From<RequestError> for ApiError {
    fn from(error: RequestError) -> Self {
        ApiError::request(error)
    }
}

/// A request shape that can be decoded from an HTTP request and then checked.
pub(crate) trait RequestContract: Sized {
    /// Whether decoding needs the request body.
    const READS_BODY: bool = false;

    fn decode(req: &mut Request, body: Option<&[u8]>) -> Result<Self, RequestError>;

    fn validate(&self) -> Result<(), RequestError>;
}

/// Decodes and validates [`RequestContract`]s.
///
/// Built once at startup and handed to handlers through the shared state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestDecoder {
    max_body_bytes: usize,
}

impl Default for RequestDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BODY_BYTES)
    }
}

impl RequestDecoder {
    pub(crate) fn new(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }

    pub(crate) async fn decode<C: RequestContract>(
        &self,
        req: &mut Request,
    ) -> Result<C, RequestError> {
        let body = if C::READS_BODY {
            Some(
                req.payload_with_max_size(self.max_body_bytes)
                    .await
                    .map_err(RequestError::Body)?
                    .clone(),
            )
        } else {
            None
        };

        let contract = C::decode(req, body.as_deref())?;

        contract.validate()?;

        Ok(contract)
    }
}

pub(crate) fn query<T: DeserializeOwned>(req: &mut Request) -> Result<T, RequestError> {
    req.parse_queries::<T>().map_err(RequestError::Query)
}

pub(crate) fn json_body<T: DeserializeOwned>(body: Option<&[u8]>) -> Result<T, RequestError> {
    serde_json::from_slice(body.unwrap_or_default()).map_err(RequestError::Json)
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), RequestError> {
    if value.is_empty() {
        return Err(RequestError::Missing(field));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn require_rejects_empty_values() {
        let error = require("cart_id", "").expect_err("empty value must fail");

        assert_eq!(error.to_string(), "cart_id cannot be empty");
    }

    #[test]
    fn require_accepts_present_values() {
        assert!(require("cart_id", "abc").is_ok());
    }

    #[test]
    fn json_body_decodes_payload() -> Result<(), RequestError> {
        let named: Named = json_body(Some(br#"{"name":"cart"}"#))?;

        assert_eq!(named.name, "cart");

        Ok(())
    }

    #[test]
    fn missing_body_is_a_decode_error() {
        let result = json_body::<Named>(None);

        assert!(matches!(result, Err(RequestError::Json(_))));
    }

    #[test]
    fn request_errors_become_bad_requests() {
        let error = ApiError::from(RequestError::Missing("cart_item_id"));

        assert_eq!(
            error.body().reason,
            "invalid request: cart_item_id cannot be empty"
        );
    }
}
