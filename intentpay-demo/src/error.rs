//! Error type for the demo flows.

use intentpay::proto::RequestError;
use intentpay::{BridgeError, HydrateError};
use intentpay_http::ApiClientError;

use crate::config::ConfigError;

/// Any failure a demo command can report.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The route could not be resolved.
    #[error("routing failed: {0}")]
    Bridge(#[from] BridgeError),

    /// The resolved route could not be turned into a request.
    #[error("invalid payment request: {0}")]
    Request(#[from] RequestError),

    /// The payment API call failed.
    #[error("payment API error: {0}")]
    Api(#[from] ApiClientError),

    /// The payment record could not be hydrated.
    #[error("hydration failed: {0}")]
    Hydrate(#[from] HydrateError),

    /// Output could not be encoded.
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}
