//! Payment record hydration.
//!
//! Converts a backend [`RawPaymentRecord`] into a [`CanonicalOrder`].
//!
//! Hydration always describes a payment that has just been created: the
//! status fields are set to [`IntentStatus::Unpaid`],
//! [`SourceStatus::WaitingPayment`] and [`DestinationStatus::Pending`]
//! whatever the record's own `status` says. Only the destination token is
//! required; every other missing field falls back to an empty default.
//! Blank strings count as missing, and amounts finer than the destination
//! token's decimals are rounded half away from zero.
//!
//! # Metadata precedence
//!
//! [`merge_metadata`] builds the order metadata from, lowest to highest:
//!
//! 1. `record.metadata`
//! 2. `record.userMetadata`
//! 3. the resolved `receivingAddress` and `memo`
//!
//! Later sources replace earlier keys. Nested objects are not merged.

use alloy_primitives::U256;
use serde_json::{Map, Value};

use crate::amount::MoneyAmount;
use crate::chain::{BASE_MAINNET, STELLAR_USDC};
use crate::error::HydrateError;
use crate::order::{
    CanonicalOrder, DestinationStatus, FinalCall, IntentStatus, OrderMode, OrderTokenAmount,
    OrgSummary, SourceStatus,
};
use crate::proto::{FeeType, RawPaymentRecord};
use crate::registry::TokenRegistry;
use crate::timestamp::UnixTimestamp;

/// Seconds a hydrated order stays payable when the record has no expiry.
pub const DEFAULT_EXPIRY_SECS: u64 = 300;

/// Metadata key holding the address the payer sends to.
pub const RECEIVING_ADDRESS_KEY: &str = "receivingAddress";

/// Metadata key holding the memo the payer must attach.
pub const MEMO_KEY: &str = "memo";

/// Builds canonical orders from backend records.
#[derive(Debug, Clone, Copy)]
pub struct OrderHydrator<'a, R: ?Sized> {
    registry: &'a R,
}

impl<'a, R: TokenRegistry + ?Sized> OrderHydrator<'a, R> {
    /// Creates a hydrator over a borrowed registry.
    pub const fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Hydrates a record using the current time.
    ///
    /// # Errors
    ///
    /// See [`Self::hydrate_at`].
    pub fn hydrate(&self, record: &RawPaymentRecord) -> Result<CanonicalOrder, HydrateError> {
        self.hydrate_at(record, UnixTimestamp::now())
    }

    /// Hydrates a record created with a known fee type.
    ///
    /// The fee type does not change the result.
    ///
    /// # Errors
    ///
    /// See [`Self::hydrate_at`].
    pub fn hydrate_with_fee_type(
        &self,
        record: &RawPaymentRecord,
        fee_type: FeeType,
    ) -> Result<CanonicalOrder, HydrateError> {
        #[cfg(feature = "telemetry")]
        tracing::debug!(?fee_type, "Hydrating payment record");
        #[cfg(not(feature = "telemetry"))]
        let _ = fee_type;
        self.hydrate(record)
    }

    /// Hydrates a record, taking `now` as the current time.
    ///
    /// # Errors
    ///
    /// - [`HydrateError::UnsupportedToken`] if the destination token is not in the registry
    /// - [`HydrateError::Amount`] if the amount is not a valid decimal for the token
    /// - [`HydrateError::InvalidNonce`] if the nonce is present but not an integer
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(
            name = "intentpay.hydrate",
            skip_all,
            fields(payment_id = record.id.as_deref()),
            err
        )
    )]
    pub fn hydrate_at(
        &self,
        record: &RawPaymentRecord,
        now: UnixTimestamp,
    ) -> Result<CanonicalOrder, HydrateError> {
        let amount = settlement_amount(record);

        let intent_addr = record
            .metadata_text(RECEIVING_ADDRESS_KEY)
            .or_else(|| non_empty(record.source.receiver_address.as_deref()))
            .unwrap_or_default();
        let intent_memo = record
            .metadata_text(MEMO_KEY)
            .or_else(|| non_empty(record.source.receiver_memo.as_deref()));

        let dest_chain = record.destination.chain_id.unwrap_or_default();
        let dest_token_id = record.destination.token_address.as_deref().unwrap_or_default();
        let dest_token = self
            .registry
            .known_token(dest_chain, dest_token_id)
            .ok_or_else(|| HydrateError::UnsupportedToken {
                chain_id: dest_chain,
                token: dest_token_id.to_owned(),
            })?;

        let source_chain = record.source.chain_id.unwrap_or(BASE_MAINNET);
        let source_token_id = if source_chain == STELLAR_USDC.chain_id {
            Some(STELLAR_USDC.token)
        } else {
            record.source.token_address.as_deref()
        };
        let source_token =
            source_token_id.and_then(|token| self.registry.known_token(source_chain, token));

        let money: MoneyAmount = amount.parse()?;
        let token_amount = OrderTokenAmount {
            token: dest_token.into(),
            amount: money.round_to(dest_token.decimals).to_base_units(dest_token.decimals)?,
            usd: money.as_decimal(),
        };

        let nonce = parse_nonce(record.nonce.as_ref())?;
        let expiration_ts = record
            .expires_at
            .map_or(now + DEFAULT_EXPIRY_SECS, UnixTimestamp::from);

        let metadata = merge_metadata(
            record.metadata.as_ref(),
            record.user_metadata.as_ref(),
            &intent_addr,
            intent_memo.as_deref(),
        );

        Ok(CanonicalOrder {
            id: rand::random::<u64>(),
            mode: OrderMode::Hydrated,
            intent_addr,
            intent_memo,
            preferred_chain_id: source_token
                .map(|t| t.chain_id)
                .or(record.source.chain_id),
            preferred_token_address: source_token
                .map(|t| t.token.to_owned())
                .or_else(|| record.source.token_address.clone()),
            dest_final_call_token_amount: token_amount,
            dest_final_call: FinalCall::transfer(
                record
                    .destination
                    .receiver_address
                    .clone()
                    .unwrap_or_default(),
            ),
            refund_addr: None,
            nonce,
            source_fulfiller_address: None,
            source_token_amount: None,
            source_initiate_tx_hash: None,
            source_start_tx_hash: None,
            source_status: SourceStatus::WaitingPayment,
            dest_status: DestinationStatus::Pending,
            intent_status: IntentStatus::Unpaid,
            dest_fast_finish_tx_hash: None,
            dest_claim_tx_hash: None,
            passed_to_address: None,
            created_at: record.created_at.map_or(now, UnixTimestamp::from),
            updated_at: record.updated_at.map_or(now, UnixTimestamp::from),
            expiration_ts: U256::from(expiration_ts.as_secs()),
            org_id: record.org_id.clone(),
            org: OrgSummary {
                org_id: record.org_id.clone(),
                name: None,
            },
            external_id: record.external_id.clone(),
            metadata,
            user_metadata: record.user_metadata.clone(),
        })
    }
}

/// Hydrates a record in one call.
///
/// # Errors
///
/// See [`OrderHydrator::hydrate_at`].
pub fn hydrate_order<R: TokenRegistry + ?Sized>(
    registry: &R,
    record: &RawPaymentRecord,
) -> Result<CanonicalOrder, HydrateError> {
    OrderHydrator::new(registry).hydrate(record)
}

/// `source.amount`, then `destination.amount`, then `"0"`. Empty strings count as absent.
fn settlement_amount(record: &RawPaymentRecord) -> &str {
    [&record.source.amount, &record.destination.amount]
        .into_iter()
        .filter_map(|a| a.as_deref())
        .map(str::trim)
        .find(|a| !a.is_empty())
        .unwrap_or("0")
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

/// Parses a nonce given as a JSON number, a decimal string or a `0x` hex string.
fn parse_nonce(value: Option<&Value>) -> Result<U256, HydrateError> {
    match value {
        None | Some(Value::Null) => Ok(U256::ZERO),
        Some(Value::Number(n)) => {
            let s = n.to_string();
            U256::from_str_radix(&s, 10).map_err(|_| HydrateError::InvalidNonce(s))
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(U256::ZERO);
            }
            let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(hex) => U256::from_str_radix(hex, 16),
                None => U256::from_str_radix(s, 10),
            };
            parsed.map_err(|_| HydrateError::InvalidNonce(s.to_owned()))
        }
        Some(other) => Err(HydrateError::InvalidNonce(other.to_string())),
    }
}

/// Merges record metadata, user metadata and the resolved intent fields.
///
/// Non-object inputs are ignored. `receivingAddress` is always set to
/// `receiving_address`; `memo` is set when `memo` is `Some` and removed
/// otherwise.
#[must_use]
pub fn merge_metadata(
    metadata: Option<&Value>,
    user_metadata: Option<&Value>,
    receiving_address: &str,
    memo: Option<&str>,
) -> Map<String, Value> {
    let mut merged = Map::new();
    for layer in [metadata, user_metadata].into_iter().flatten() {
        if let Value::Object(map) = layer {
            merged.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
    merged.insert(
        RECEIVING_ADDRESS_KEY.to_owned(),
        Value::String(receiving_address.to_owned()),
    );
    match memo {
        Some(memo) => {
            merged.insert(MEMO_KEY.to_owned(), Value::String(memo.to_owned()));
        }
        None => {
            merged.remove(MEMO_KEY);
        }
    }
    merged
}
