//! Payment bridge resolution.
//!
//! The resolver turns a human-specified destination (chain, token, address,
//! amount) and a funding preference (chain, token) into a validated
//! [`RoutingResult`]: what the payer sends, what the payee receives, and
//! whether the backend has to bridge between the two.
//!
//! Resolution is pure. It reads a [`TokenRegistry`] snapshot and calls an
//! [`AddressValidator`], and does no I/O.
//!
//! # Destination canonicalization
//!
//! Stellar and Solana payouts always settle in the canonical USDC of that
//! chain ([`STELLAR_USDC`], [`SOLANA_USDC`]), whatever supported token the
//! caller named. EVM destinations keep the requested token.
//!
//! # Intent classification
//!
//! A payment is an *intent payment* when the preferred chain differs from the
//! destination chain **and** the preferred token differs from the destination
//! token. A chain-only or token-only difference is not classified as an
//! intent. This matches what the payment service has historically received;
//! see `test_token_only_difference_is_not_intent`.

use serde::{Deserialize, Serialize};

use crate::address::AddressValidator;
use crate::chain::{ChainFamily, ChainId, SOLANA_USDC, STELLAR_USDC, TokenDescriptor};
use crate::error::BridgeError;
use crate::registry::TokenRegistry;

/// Input to the bridge resolver. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRequest {
    /// Destination chain id.
    pub to_chain: ChainId,
    /// Destination token identifier (contract, mint, or `CODE:ISSUER`).
    pub to_token: String,
    /// Address that receives the payout.
    pub to_address: String,
    /// Amount to deliver, as a human-readable decimal string.
    pub to_units: String,
    /// Chain the payer prefers to fund from.
    pub preferred_chain: ChainId,
    /// Token the payer prefers to fund with.
    pub preferred_token: String,
}

/// What the payer will send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferredLeg {
    /// Source chain id, in string form.
    pub preferred_chain: String,
    /// Source token symbol.
    pub preferred_token: String,
    /// Source token identifier.
    pub preferred_token_address: String,
}

/// What the payee will receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationLeg {
    /// Payout address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_address: Option<String>,
    /// Destination chain id, in string form.
    pub chain_id: String,
    /// Amount in human-readable units, unchanged from the request.
    pub amount_units: String,
    /// Destination token symbol.
    pub token_symbol: String,
    /// Destination token identifier.
    pub token_address: String,
}

impl DestinationLeg {
    fn canonicalize(&mut self, descriptor: TokenDescriptor) {
        self.chain_id = descriptor.chain_id.to_string();
        self.token_symbol = descriptor.symbol.to_owned();
        self.token_address = descriptor.token.to_owned();
    }
}

/// A validated routing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingResult {
    /// Source side.
    pub preferred: PreferredLeg,
    /// Destination side.
    pub destination: DestinationLeg,
    /// `true` when both the chain and the token differ between the legs.
    pub is_intent_payment: bool,
}

impl RoutingResult {
    fn classify(preferred: PreferredLeg, destination: DestinationLeg) -> Self {
        let is_intent_payment = preferred.preferred_chain != destination.chain_id
            && preferred.preferred_token_address != destination.token_address;
        Self {
            preferred,
            destination,
            is_intent_payment,
        }
    }
}

/// Resolves routing requests against a registry and an address validator.
#[derive(Debug, Clone, Copy)]
pub struct BridgeResolver<'a, R: ?Sized, V: ?Sized> {
    registry: &'a R,
    validator: &'a V,
}

impl<'a, R, V> BridgeResolver<'a, R, V>
where
    R: TokenRegistry + ?Sized,
    V: AddressValidator + ?Sized,
{
    /// Creates a resolver over borrowed registry and validator.
    pub const fn new(registry: &'a R, validator: &'a V) -> Self {
        Self {
            registry,
            validator,
        }
    }

    /// Resolves a routing request.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::UnsupportedChain`] if either chain is not registered
    /// - [`BridgeError::UnsupportedToken`] if the destination token is unknown
    /// - [`BridgeError::InvalidAddress`] if the destination address has the wrong format
    /// - [`BridgeError::UnknownToken`] if the preferred token is unknown
    /// - [`BridgeError::UnsupportedRoute`] if the destination pair is not a payout route
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(
            name = "intentpay.bridge.resolve",
            skip_all,
            fields(to_chain = request.to_chain, preferred_chain = request.preferred_chain),
            err
        )
    )]
    pub fn resolve(&self, request: &RoutingRequest) -> Result<RoutingResult, BridgeError> {
        let dest_chain = self
            .registry
            .chain_by_id(request.to_chain)
            .map_err(|_| BridgeError::UnsupportedChain(request.to_chain))?;
        let dest_token = self
            .registry
            .known_token(request.to_chain, &request.to_token)
            .ok_or_else(|| BridgeError::UnsupportedToken {
                chain_id: request.to_chain,
                token: request.to_token.clone(),
            })?;

        if !self
            .validator
            .validate_address_for_chain(request.to_chain, &request.to_address)
        {
            return Err(BridgeError::InvalidAddress {
                chain_id: request.to_chain,
                address: request.to_address.clone(),
            });
        }

        self.registry
            .chain_by_id(request.preferred_chain)
            .map_err(|_| BridgeError::UnsupportedChain(request.preferred_chain))?;
        let pref_token = self
            .registry
            .known_token(request.preferred_chain, &request.preferred_token)
            .ok_or_else(|| BridgeError::UnknownToken {
                chain_id: request.preferred_chain,
                token: request.preferred_token.clone(),
            })?;

        let mut preferred = PreferredLeg {
            preferred_chain: request.preferred_chain.to_string(),
            preferred_token: pref_token.symbol.to_owned(),
            preferred_token_address: pref_token.token.to_owned(),
        };
        let mut destination = DestinationLeg {
            destination_address: Some(request.to_address.clone()),
            chain_id: request.to_chain.to_string(),
            amount_units: request.to_units.clone(),
            token_symbol: dest_token.symbol.to_owned(),
            token_address: dest_token.token.to_owned(),
        };

        let routable = self.registry.is_chain_supported(request.to_chain, None)
            && self
                .registry
                .is_token_supported(request.to_chain, &request.to_token);
        if !routable {
            return Err(BridgeError::UnsupportedRoute {
                chain_id: request.to_chain,
                token: request.to_token.clone(),
            });
        }

        // Sourcing follows the chain the resolved token lives on.
        preferred.preferred_chain = pref_token.chain_id.to_string();
        match dest_chain.family {
            ChainFamily::Stellar => destination.canonicalize(STELLAR_USDC),
            ChainFamily::Solana => destination.canonicalize(SOLANA_USDC),
            ChainFamily::Evm => {}
        }

        let result = RoutingResult::classify(preferred, destination);

        #[cfg(feature = "telemetry")]
        tracing::debug!(
            preferred_chain = %result.preferred.preferred_chain,
            destination_chain = %result.destination.chain_id,
            is_intent_payment = result.is_intent_payment,
            "Resolved payment bridge"
        );

        Ok(result)
    }
}

/// Resolves a routing request in one call.
///
/// Shorthand for `BridgeResolver::new(registry, validator).resolve(request)`.
///
/// # Errors
///
/// See [`BridgeResolver::resolve`].
pub fn resolve_payment_bridge<R, V>(
    registry: &R,
    validator: &V,
    request: &RoutingRequest,
) -> Result<RoutingResult, BridgeError>
where
    R: TokenRegistry + ?Sized,
    V: AddressValidator + ?Sized,
{
    BridgeResolver::new(registry, validator).resolve(request)
}
