//! Payment creation requests.
//!
//! [`PaymentRequest`] is built from a resolved [`RoutingResult`] and
//! serializes as the nested body used by the V2 and V4 APIs. See
//! [`super::v1`] for the older flattened body.

use serde::{Deserialize, Serialize};

use crate::bridge::RoutingResult;
use crate::chain::ChainId;

/// Which side of the payment absorbs fees.
///
/// Passed through to the backend untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeeType {
    /// The payer sends exactly the quoted amount; fees reduce the payout.
    ExactIn,
    /// The payee receives exactly the quoted amount; fees are added on top.
    #[default]
    ExactOut,
}

impl std::str::FromStr for FeeType {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exactIn" | "exact_in" | "exact-in" => Ok(Self::ExactIn),
            "exactOut" | "exact_out" | "exact-out" => Ok(Self::ExactOut),
            other => Err(RequestError::InvalidFeeType(other.into())),
        }
    }
}

/// Error returned when a request cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// A leg carried a chain id that is not an integer.
    #[error("Invalid chain id {0:?}")]
    InvalidChainId(String),
    /// The destination leg has no payout address.
    #[error("Destination address is missing")]
    MissingDestinationAddress,
    /// Unrecognized fee type name.
    #[error("Invalid fee type {0:?}")]
    InvalidFeeType(String),
}

/// Human-facing description of the payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDisplay {
    /// Fiat currency the amount is displayed in (e.g. `"USD"`).
    pub currency: String,
    /// Short title shown to the payer.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PaymentDisplay {
    /// A USD display block with the given title.
    #[must_use]
    pub fn usd(title: impl Into<String>) -> Self {
        Self {
            currency: "USD".into(),
            title: title.into(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Funding side of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSpec {
    /// Funding chain id.
    pub chain_id: ChainId,
    /// Funding token symbol.
    pub token_symbol: String,
    /// Funding token identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
    /// Amount to send; omitted to let the backend quote it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// Payout side of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSpec {
    /// Payout chain id.
    pub chain_id: ChainId,
    /// Payout token symbol.
    pub token_symbol: String,
    /// Payout token identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
    /// Amount the payee receives, in human units.
    pub amount: String,
    /// Payee address.
    pub receiver_address: String,
    /// Payee memo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_memo: Option<String>,
}

/// A version-neutral payment creation request.
///
/// Serializes as the V2/V4 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Display block.
    pub display: PaymentDisplay,
    /// Funding side.
    pub source: SourceSpec,
    /// Payout side.
    pub destination: DestinationSpec,
    /// Free-form metadata stored with the payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Caller-supplied idempotency key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Fee handling.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<FeeType>,
    /// Webhook notified on status changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Shared secret used to sign webhook calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
}

fn parse_chain_id(s: &str) -> Result<ChainId, RequestError> {
    s.parse()
        .map_err(|_| RequestError::InvalidChainId(s.to_owned()))
}

impl PaymentRequest {
    /// Builds a request from a resolved route.
    ///
    /// The destination amount is passed in human units; the source leg
    /// carries no amount so the backend quotes it.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidChainId`] if a leg's chain id is not an
    /// integer and [`RequestError::MissingDestinationAddress`] if the route
    /// has no payout address.
    pub fn from_routing(
        routing: &RoutingResult,
        display: PaymentDisplay,
    ) -> Result<Self, RequestError> {
        let preferred = &routing.preferred;
        let destination = &routing.destination;
        let receiver_address = destination
            .destination_address
            .clone()
            .ok_or(RequestError::MissingDestinationAddress)?;

        Ok(Self {
            display,
            source: SourceSpec {
                chain_id: parse_chain_id(&preferred.preferred_chain)?,
                token_symbol: preferred.preferred_token.clone(),
                token_address: Some(preferred.preferred_token_address.clone()),
                amount: None,
            },
            destination: DestinationSpec {
                chain_id: parse_chain_id(&destination.chain_id)?,
                token_symbol: destination.token_symbol.clone(),
                token_address: Some(destination.token_address.clone()),
                amount: destination.amount_units.clone(),
                receiver_address,
                receiver_memo: None,
            },
            metadata: None,
            order_id: None,
            fee_type: None,
            webhook_url: None,
            webhook_secret: None,
        })
    }

    /// Sets the payout memo (Stellar).
    #[must_use]
    pub fn with_receiver_memo(mut self, memo: impl Into<String>) -> Self {
        self.destination.receiver_memo = Some(memo.into());
        self
    }

    /// Sets free-form metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Sets the idempotency key.
    #[must_use]
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Sets the fee type.
    #[must_use]
    pub fn with_fee_type(mut self, fee_type: FeeType) -> Self {
        self.fee_type = Some(fee_type);
        self
    }

    /// Sets the webhook URL and its signing secret.
    #[must_use]
    pub fn with_webhook(mut self, url: impl Into<String>, secret: Option<String>) -> Self {
        self.webhook_url = Some(url.into());
        self.webhook_secret = secret;
        self
    }
}
