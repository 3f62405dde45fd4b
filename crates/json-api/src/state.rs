//! State

use std::{sync::Arc, time::Duration};

use cart_app::context::AppContext;

use crate::{config::ServerConfig, requests::RequestDecoder};

/// Shared, read-only state handed to every handler through the depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) decoder: RequestDecoder,
    pub(crate) slow_request_threshold: Duration,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        app: AppContext,
        decoder: RequestDecoder,
        slow_request_threshold: Duration,
    ) -> Self {
        Self {
            app,
            decoder,
            slow_request_threshold,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, config: &ServerConfig) -> Arc<Self> {
        Arc::new(Self::new(
            app,
            RequestDecoder::new(config.server.max_body_bytes),
            Duration::from_millis(config.logging.slow_request_threshold_ms),
        ))
    }
}
