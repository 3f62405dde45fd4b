//! Successful JSON responses

use salvo::{http::StatusCode, prelude::*, writing::Text};
use serde::Serialize;
use tracing::error;

use crate::errors::ApiError;

/// A JSON body sent with a status code.
///
/// The body is serialized before anything is written, so a serialization
/// failure turns into an encode [`ApiError`] instead of a partial success.
#[derive(Debug)]
pub(crate) struct JsonReply<T> {
    status: StatusCode,
    body: T,
}

impl<T> JsonReply<T> {
    pub(crate) fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub(crate) fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }
}

impl<T> Scribe for JsonReply<T>
where
    T: Serialize,
{
    fn render(self, res: &mut Response) {
        match serde_json::to_string(&self.body) {
            Ok(json) => {
                res.status_code(self.status);
                res.render(Text::Json(json));
            }
            Err(source) => {
                error!("failed to encode response body: {source}");

                ApiError::encode(source).render(res);
            }
        }
    }
}
