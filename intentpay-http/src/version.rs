//! API versions and their wire shapes.
//!
//! Every version lives under its own prefix of the base URL (`v1/`, `v2/`,
//! `v4/`). V1 posts the flattened [`PaymentRequestV1`] body to
//! `payment-api/payment`; V2 and V4 post the nested [`PaymentRequest`] body
//! to `payments`.

use std::fmt;
use std::str::FromStr;

use intentpay::proto::PaymentRequest;
use intentpay::proto::v1::PaymentRequestV1;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{PAYMENTS_PATH, V1_PAYMENT_PATH};

/// A payment API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Legacy flattened API.
    V1,
    /// Nested source/destination API.
    #[default]
    V2,
    /// Current API. Same body as V2.
    V4,
}

impl ApiVersion {
    /// Lowercase name, which is also the URL prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V4 => "v4",
        }
    }

    /// The request shape for this version.
    #[must_use]
    pub fn shape(self) -> &'static dyn RequestShape {
        match self {
            Self::V1 => &LEGACY,
            Self::V2 => &NESTED_V2,
            Self::V4 => &NESTED_V4,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown API version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown API version {0:?}, expected v1, v2 or v4")]
pub struct UnknownApiVersion(pub String);

impl FromStr for ApiVersion {
    type Err = UnknownApiVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().trim_start_matches('v') {
            "1" => Ok(Self::V1),
            "2" => Ok(Self::V2),
            "4" => Ok(Self::V4),
            _ => Err(UnknownApiVersion(s.to_owned())),
        }
    }
}

/// How one API version lays out payment requests.
pub trait RequestShape: Send + Sync {
    /// The version this shape serves.
    fn version(&self) -> ApiVersion;

    /// Path of the payment collection, relative to the versioned base URL.
    fn payments_path(&self) -> &'static str;

    /// Serializes a creation request into this version's body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the body cannot be encoded.
    fn create_body(&self, request: &PaymentRequest) -> Result<serde_json::Value, serde_json::Error>;

    /// Path of the creation endpoint, including the version prefix.
    fn create_path(&self) -> String {
        format!("{}/{}", self.version(), self.payments_path())
    }

    /// URL of a single payment under `base`.
    ///
    /// The id is appended as one percent-encoded path segment, so `/`, `?`
    /// and `#` in it stay part of the id.
    ///
    /// # Errors
    ///
    /// Returns a parse error if `base` cannot carry a path.
    fn payment_url(&self, base: &Url, id: &str) -> Result<Url, url::ParseError> {
        let mut url = base.join(&self.create_path())?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

impl fmt::Debug for dyn RequestShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestShape")
            .field("version", &self.version())
            .finish()
    }
}

static LEGACY: LegacyShape = LegacyShape;
static NESTED_V2: NestedShape = NestedShape(ApiVersion::V2);
static NESTED_V4: NestedShape = NestedShape(ApiVersion::V4);

#[derive(Debug, Clone, Copy)]
struct LegacyShape;

impl RequestShape for LegacyShape {
    fn version(&self) -> ApiVersion {
        ApiVersion::V1
    }

    fn payments_path(&self) -> &'static str {
        V1_PAYMENT_PATH
    }

    fn create_body(&self, request: &PaymentRequest) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(PaymentRequestV1::from(request))
    }
}

#[derive(Debug, Clone, Copy)]
struct NestedShape(ApiVersion);

impl RequestShape for NestedShape {
    fn version(&self) -> ApiVersion {
        self.0
    }

    fn payments_path(&self) -> &'static str {
        PAYMENTS_PATH
    }

    fn create_body(&self, request: &PaymentRequest) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(request)
    }
}
