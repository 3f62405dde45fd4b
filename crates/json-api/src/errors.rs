//! Error responses

use std::fmt::Display;

use salvo::{http::StatusCode, prelude::*};
use serde::{Deserialize, Serialize};

/// Numeric error category reported in every error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    Encode = 0,
    Process = 1,
    Request = 2,
}

impl ErrorCode {
    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }
}

/// JSON body of every error response.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: u8,
    pub reason: String,
}

/// An error response: status code plus `{ code, reason }` body.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, code: ErrorCode, reason: String) -> Self {
        Self {
            status,
            body: ErrorBody {
                code: code.as_u8(),
                reason,
            },
        }
    }

    /// The response body could not be serialized.
    pub(crate) fn encode(error: impl Display) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Encode,
            format!("failed to encode response: {error}"),
        )
    }

    /// The request was well formed but could not be carried out.
    pub(crate) fn process(error: impl Display) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Process,
            format!("failed to process request: {error}"),
        )
    }

    /// The request could not be decoded or failed validation.
    pub(crate) fn request(error: impl Display) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::Request,
            format!("invalid request: {error}"),
        )
    }

    pub(crate) fn not_found(error: impl Display) -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorCode::Request, error.to_string())
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub(crate) fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(self.body));
    }
}
