//! HTTP client for the intentpay payment API.
//!
//! [`ApiClient`] wraps `reqwest` with an explicit [`ApiConfig`]: base URL,
//! bearer token, API version and timeout. Nothing is global; two clients
//! with different configs can run side by side.
//!
//! The API version picks a [`RequestShape`], which decides the endpoint
//! paths and how a [`intentpay::proto::PaymentRequest`] is laid out on the
//! wire.
//!
//! # Modules
//!
//! - [`constants`] - endpoint paths and defaults
//! - [`error`] - client error type
//! - [`version`] - API versions and their request shapes
//! - [`client`] - the client itself

pub mod client;
pub mod constants;
pub mod error;
pub mod version;

pub use client::{ApiClient, ApiConfig, ApiResponse, PaymentsApi, RequestOptions};
pub use error::ApiClientError;
pub use version::{ApiVersion, RequestShape};
