//! Error types for routing and order hydration.

use crate::amount::AmountError;
use crate::chain::ChainId;

/// Base error type for intentpay core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Routing request could not be resolved.
    #[error("{0}")]
    Bridge(#[from] BridgeError),

    /// Payment record could not be hydrated.
    #[error("{0}")]
    Hydrate(#[from] HydrateError),
}

/// Error raised by the bridge resolver.
///
/// Every variant is terminal: the resolver has no recovery path and callers
/// are expected to surface the message to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// A chain referenced by the request is not in the registry.
    #[error("Unsupported chain {0}")]
    UnsupportedChain(ChainId),

    /// The destination token is not known on the destination chain.
    #[error("Unsupported token {token} on chain {chain_id}")]
    UnsupportedToken {
        /// Destination chain id.
        chain_id: ChainId,
        /// Requested token identifier.
        token: String,
    },

    /// The destination address does not match the destination chain's family.
    #[error("Invalid address {address} for chain {chain_id}")]
    InvalidAddress {
        /// Destination chain id.
        chain_id: ChainId,
        /// Rejected address.
        address: String,
    },

    /// The preferred source token is not known on the preferred chain.
    #[error("Unknown token {token} on chain {chain_id}")]
    UnknownToken {
        /// Preferred chain id.
        chain_id: ChainId,
        /// Requested token identifier.
        token: String,
    },

    /// The destination chain/token pair is not a supported payout route.
    #[error("Unsupported route: token {token} on chain {chain_id}")]
    UnsupportedRoute {
        /// Destination chain id.
        chain_id: ChainId,
        /// Destination token identifier.
        token: String,
    },
}

/// Error raised by the order hydrator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HydrateError {
    /// The record's destination token is not in the registry.
    #[error("Unsupported token {token} on chain {chain_id}")]
    UnsupportedToken {
        /// Destination chain id from the record.
        chain_id: ChainId,
        /// Destination token identifier from the record.
        token: String,
    },

    /// The record's amount could not be scaled to base units.
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),

    /// The record's nonce is not a decimal or `0x` hex integer.
    #[error("Invalid nonce {0:?}")]
    InvalidNonce(String),
}
