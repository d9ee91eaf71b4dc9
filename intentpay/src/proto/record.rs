//! Backend payment records.
//!
//! Records are produced by the remote service and read, never modified, by
//! the SDK. Every field is optional: older API versions omit some of them and
//! the hydrator decides which absences are fatal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use std::fmt;

use crate::chain::ChainId;
use crate::proto::request::PaymentDisplay;

/// Backend-side payment status.
///
/// Hydration does not consult this value; it is kept so callers can show the
/// status the backend reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Created, no funds received.
    PaymentUnpaid,
    /// Payer funds detected.
    PaymentStarted,
    /// Pay-in settled.
    PaymentPayinCompleted,
    /// Payout settled.
    PaymentPayoutCompleted,
    /// Payment bounced back to the payer.
    PaymentBounced,
    /// Payment window elapsed.
    PaymentExpired,
    /// Payment refunded.
    PaymentRefunded,
    /// Any status this SDK version does not know.
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    /// Returns `true` for statuses after which nothing else happens.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::PaymentPayoutCompleted
                | Self::PaymentBounced
                | Self::PaymentExpired
                | Self::PaymentRefunded
        )
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PaymentUnpaid => "payment_unpaid",
            Self::PaymentStarted => "payment_started",
            Self::PaymentPayinCompleted => "payment_payin_completed",
            Self::PaymentPayoutCompleted => "payment_payout_completed",
            Self::PaymentBounced => "payment_bounced",
            Self::PaymentExpired => "payment_expired",
            Self::PaymentRefunded => "payment_refunded",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Destination side of a payment record.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDestination {
    /// Payout chain id.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub chain_id: Option<ChainId>,
    /// Payout token identifier.
    pub token_address: Option<String>,
    /// Payout token symbol.
    pub token_symbol: Option<String>,
    /// Payout amount in human units.
    pub amount: Option<String>,
    /// Payee address.
    pub receiver_address: Option<String>,
    /// Payee memo.
    pub receiver_memo: Option<String>,
    /// Payout transaction.
    pub tx_hash: Option<String>,
}

/// Source side of a payment record.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSource {
    /// Funding chain id.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub chain_id: Option<ChainId>,
    /// Funding token identifier.
    pub token_address: Option<String>,
    /// Funding token symbol.
    pub token_symbol: Option<String>,
    /// Amount the payer must send, in human units.
    pub amount: Option<String>,
    /// Payer address, once known.
    pub sender_address: Option<String>,
    /// Deposit address the payer sends to.
    pub receiver_address: Option<String>,
    /// Memo the payer must attach.
    pub receiver_memo: Option<String>,
    /// Funding transaction.
    pub tx_hash: Option<String>,
}

/// A payment record as returned by the payment API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPaymentRecord {
    /// Backend payment id.
    pub id: Option<String>,
    /// Backend status.
    pub status: Option<PaymentStatus>,
    /// Destination side.
    pub destination: RawDestination,
    /// Source side.
    pub source: RawSource,
    /// Free-form metadata. May carry `receivingAddress`, `memo`,
    /// `preferredChain` and `preferredTokenAddress`.
    pub metadata: Option<serde_json::Value>,
    /// Display block echoed from the request.
    pub display: Option<PaymentDisplay>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Deadline for funding.
    pub expires_at: Option<DateTime<Utc>>,
    /// Owning organization.
    pub org_id: Option<String>,
    /// Caller reference (the request's `orderId`).
    pub external_id: Option<String>,
    /// Metadata supplied by the end user.
    pub user_metadata: Option<serde_json::Value>,
    /// Backend nonce, as a number or a decimal/hex string.
    pub nonce: Option<serde_json::Value>,
}

impl RawPaymentRecord {
    /// Returns a metadata field as text.
    ///
    /// Strings are trimmed and numbers are rendered in decimal. Empty strings,
    /// other JSON types and non-object metadata yield `None`.
    #[must_use]
    pub fn metadata_text(&self, key: &str) -> Option<String> {
        match self.metadata.as_ref()?.get(key)? {
            serde_json::Value::String(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_owned())
            }
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
