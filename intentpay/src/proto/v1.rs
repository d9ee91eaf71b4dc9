//! Version 1 payment request body.
//!
//! V1 predates the nested `source` object. The funding preference travels as
//! top-level `preferredChain` / `preferredToken` / `preferredTokenAddress`
//! fields, the display title is called `intent`, and the destination carries
//! `amountUnits` and `destinationAddress`.

use serde::{Deserialize, Serialize};

use crate::proto::request::{FeeType, PaymentRequest};

/// V1 display block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayV1 {
    /// Fiat currency.
    pub currency: String,
    /// Title shown to the payer.
    pub intent: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// V1 destination block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationV1 {
    /// Payout chain id, as a string.
    pub chain_id: String,
    /// Payout token symbol.
    pub token_symbol: String,
    /// Payout token identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
    /// Amount in human units.
    pub amount_units: String,
    /// Payee address.
    pub destination_address: String,
    /// Payee memo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_memo: Option<String>,
}

/// V1 payment creation body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestV1 {
    /// Display block.
    pub display: DisplayV1,
    /// Payout side.
    pub destination: DestinationV1,
    /// Funding chain id, as a string.
    pub preferred_chain: String,
    /// Funding token symbol.
    pub preferred_token: String,
    /// Funding token identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_token_address: Option<String>,
    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Idempotency key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Fee handling.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<FeeType>,
    /// Webhook URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Webhook signing secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
}

impl From<&PaymentRequest> for PaymentRequestV1 {
    fn from(request: &PaymentRequest) -> Self {
        Self {
            display: DisplayV1 {
                currency: request.display.currency.clone(),
                intent: request.display.title.clone(),
                description: request.display.description.clone(),
            },
            destination: DestinationV1 {
                chain_id: request.destination.chain_id.to_string(),
                token_symbol: request.destination.token_symbol.clone(),
                token_address: request.destination.token_address.clone(),
                amount_units: request.destination.amount.clone(),
                destination_address: request.destination.receiver_address.clone(),
                receiver_memo: request.destination.receiver_memo.clone(),
            },
            preferred_chain: request.source.chain_id.to_string(),
            preferred_token: request.source.token_symbol.clone(),
            preferred_token_address: request.source.token_address.clone(),
            metadata: request.metadata.clone(),
            order_id: request.order_id.clone(),
            fee_type: request.fee_type,
            webhook_url: request.webhook_url.clone(),
            webhook_secret: request.webhook_secret.clone(),
        }
    }
}
