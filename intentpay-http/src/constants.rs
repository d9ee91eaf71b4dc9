//! Endpoint paths and client defaults.

use std::time::Duration;

/// Payment collection path used by the V1 API.
pub const V1_PAYMENT_PATH: &str = "payment-api/payment";

/// Payment collection path used by the V2 and V4 APIs.
pub const PAYMENTS_PATH: &str = "payments";

/// Public API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.intentpay.dev/";

/// Timeout applied when the config does not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
