//! The canonical order model.
//!
//! A [`CanonicalOrder`] is the single, flattened view of a payment that
//! callers render and track. It is produced by [`crate::hydrate`] from a
//! backend [`crate::proto::RawPaymentRecord`] and is never mutated afterwards.
//!
//! Big integers (`amount`, `nonce`, `expirationTs`, `id`) serialize as
//! decimal strings.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::chain::{ChainId, TokenInfo};
use crate::timestamp::UnixTimestamp;

/// How an order came into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderMode {
    /// Built from a backend payment record.
    #[default]
    Hydrated,
}

/// Overall lifecycle of the payment intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentStatus {
    /// Created; no funds observed yet.
    #[default]
    Unpaid,
    /// Source funds observed.
    Started,
    /// Destination payout completed.
    Completed,
    /// Funds returned to the payer.
    Refunded,
    /// The payment window elapsed.
    Expired,
}

/// Lifecycle of the source (pay-in) leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceStatus {
    /// Waiting for the payer's transfer.
    #[default]
    WaitingPayment,
    /// Transfer seen, not yet processed.
    PendingProcessing,
    /// Start transaction submitted.
    StartSubmitted,
    /// Source leg settled.
    Processed,
}

/// Lifecycle of the destination (payout) leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DestinationStatus {
    /// Payout not yet sent.
    #[default]
    Pending,
    /// Payout fronted before the source leg settled.
    FastFinished,
    /// Payout claimed.
    Claimed,
}

/// Token metadata carried by an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderToken {
    /// Chain the token is deployed on.
    pub chain_id: ChainId,
    /// Chain-specific identifier.
    pub token: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Base-unit decimals.
    pub decimals: u8,
    /// ISO code of the tracked fiat currency.
    pub fiat_iso: String,
    /// Optional logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl From<&TokenInfo> for OrderToken {
    fn from(info: &TokenInfo) -> Self {
        Self {
            chain_id: info.chain_id,
            token: info.token.to_owned(),
            symbol: info.symbol.to_owned(),
            name: info.name.to_owned(),
            decimals: info.decimals,
            fiat_iso: info.fiat_iso.to_owned(),
            logo_uri: info.logo_uri.map(str::to_owned),
        }
    }
}

/// A token amount in base units, with its USD equivalent.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTokenAmount {
    /// Token the amount is denominated in.
    pub token: OrderToken,
    /// Amount in the token's smallest unit.
    #[serde_as(as = "DisplayFromStr")]
    pub amount: U256,
    /// USD value. Tokens are assumed to be USD-pegged; no FX is applied.
    #[serde(with = "rust_decimal::serde::float")]
    pub usd: Decimal,
}

/// The call executed on the destination chain when the order completes.
///
/// Hydrated orders carry a plain transfer placeholder: zero value, empty data.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalCall {
    /// Recipient.
    pub to: String,
    /// Native value attached to the call.
    #[serde_as(as = "DisplayFromStr")]
    pub value: U256,
    /// Hex-encoded call data.
    pub data: String,
}

impl FinalCall {
    /// A transfer to `to` with no value and no call data.
    #[must_use]
    pub fn transfer(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            value: U256::ZERO,
            data: "0x".to_owned(),
        }
    }
}

/// Minimal organization descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgSummary {
    /// Organization id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    /// Organization display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A payment order in canonical, render-ready form.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalOrder {
    /// Client-local identifier. Unrelated to the backend payment id.
    #[serde_as(as = "DisplayFromStr")]
    pub id: u64,
    /// Always [`OrderMode::Hydrated`] for orders built from records.
    pub mode: OrderMode,
    /// Address the payer sends funds to.
    pub intent_addr: String,
    /// Memo the payer must attach, for chains that use one.
    pub intent_memo: Option<String>,
    /// Chain the payer funds from.
    pub preferred_chain_id: Option<ChainId>,
    /// Token the payer funds with.
    pub preferred_token_address: Option<String>,
    /// What the payee receives.
    pub dest_final_call_token_amount: OrderTokenAmount,
    /// Destination call placeholder.
    pub dest_final_call: FinalCall,
    /// Where refunds go, if known.
    pub refund_addr: Option<String>,
    /// Backend nonce.
    #[serde_as(as = "DisplayFromStr")]
    pub nonce: U256,
    /// Address that fulfilled the source leg.
    pub source_fulfiller_address: Option<String>,
    /// What the payer actually sent.
    pub source_token_amount: Option<OrderTokenAmount>,
    /// Payer's funding transaction.
    pub source_initiate_tx_hash: Option<String>,
    /// Intent start transaction.
    pub source_start_tx_hash: Option<String>,
    /// Source leg status.
    pub source_status: SourceStatus,
    /// Destination leg status.
    pub dest_status: DestinationStatus,
    /// Overall status.
    pub intent_status: IntentStatus,
    /// Fronted payout transaction.
    pub dest_fast_finish_tx_hash: Option<String>,
    /// Claim transaction.
    pub dest_claim_tx_hash: Option<String>,
    /// Final recipient when the payout was forwarded.
    pub passed_to_address: Option<String>,
    /// Creation time.
    pub created_at: UnixTimestamp,
    /// Last update time.
    pub updated_at: UnixTimestamp,
    /// Unix seconds after which the payment can no longer be funded.
    #[serde_as(as = "DisplayFromStr")]
    pub expiration_ts: U256,
    /// Owning organization id.
    pub org_id: Option<String>,
    /// Owning organization.
    pub org: OrgSummary,
    /// Caller-supplied reference.
    pub external_id: Option<String>,
    /// Record metadata merged with user metadata and the resolved intent fields.
    pub metadata: serde_json::Map<String, serde_json::Value>,
    /// User metadata exactly as the record carried it.
    pub user_metadata: Option<serde_json::Value>,
}

impl CanonicalOrder {
    /// Returns `true` once the expiration time has passed.
    #[must_use]
    pub fn is_expired_at(&self, now: UnixTimestamp) -> bool {
        self.expiration_ts <= U256::from(now.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&IntentStatus::Unpaid).unwrap(),
            "\"UNPAID\""
        );
        assert_eq!(
            serde_json::to_string(&SourceStatus::WaitingPayment).unwrap(),
            "\"WAITING_PAYMENT\""
        );
        assert_eq!(
            serde_json::to_string(&DestinationStatus::FastFinished).unwrap(),
            "\"FAST_FINISHED\""
        );
        assert_eq!(serde_json::to_string(&OrderMode::Hydrated).unwrap(), "\"hydrated\"");
    }

    #[test]
    fn test_initial_statuses_are_defaults() {
        assert_eq!(IntentStatus::default(), IntentStatus::Unpaid);
        assert_eq!(SourceStatus::default(), SourceStatus::WaitingPayment);
        assert_eq!(DestinationStatus::default(), DestinationStatus::Pending);
    }

    #[test]
    fn test_final_call_transfer() {
        let call = FinalCall::transfer("0xabc");
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["to"], "0xabc");
        assert_eq!(json["value"], "0");
        assert_eq!(json["data"], "0x");
    }

    #[test]
    fn test_token_amount_serialization() {
        let amount = OrderTokenAmount {
            token: OrderToken {
                chain_id: 8453,
                token: "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913".into(),
                symbol: "USDC".into(),
                name: "USD Coin".into(),
                decimals: 6,
                fiat_iso: "USD".into(),
                logo_uri: None,
            },
            amount: U256::from(1_500_000u64),
            usd: Decimal::new(15, 1),
        };
        let json = serde_json::to_value(&amount).unwrap();
        assert_eq!(json["amount"], "1500000");
        assert_eq!(json["usd"], 1.5);
        assert_eq!(json["token"]["chainId"], 8453);
        assert!(json["token"].get("logoUri").is_none());
    }
}
