//! Chain and token primitives.
//!
//! Chains are identified by the numeric ids the payment service uses. EVM
//! networks use their EIP-155 chain id; Solana and Stellar have service-assigned
//! ids ([`SOLANA_MAINNET`], [`STELLAR_MAINNET`]).
//!
//! - [`ChainFamily`] - The address/token format family a chain belongs to
//! - [`ChainInfo`] - Static metadata for a chain
//! - [`TokenInfo`] - Static metadata for a token deployment
//! - [`TokenDescriptor`] - A canonical (chain, symbol, identifier) triple

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric chain id (e.g., 8453 for Base, 900 for Solana).
pub type ChainId = u64;

/// Base Mainnet chain id. Used as the default source chain during hydration.
pub const BASE_MAINNET: ChainId = 8453;

/// Solana Mainnet, as numbered by the payment service.
pub const SOLANA_MAINNET: ChainId = 900;

/// Stellar Mainnet (Pubnet), as numbered by the payment service.
pub const STELLAR_MAINNET: ChainId = 1500;

/// Canonical USDC on Stellar: the Circle-issued `USDC` asset.
pub const STELLAR_USDC: TokenDescriptor = TokenDescriptor {
    chain_id: STELLAR_MAINNET,
    symbol: "USDC",
    token: "USDC:GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN",
};

/// Canonical USDC on Solana: the Circle SPL mint.
pub const SOLANA_USDC: TokenDescriptor = TokenDescriptor {
    chain_id: SOLANA_MAINNET,
    symbol: "USDC",
    token: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
};

/// The family a chain belongs to.
///
/// The family determines the address format and how token identifiers are
/// compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    /// EIP-155 compatible chains. Tokens are contract addresses.
    Evm,
    /// Solana. Tokens are SPL mint addresses.
    Solana,
    /// Stellar. Tokens are `CODE:ISSUER` asset strings.
    Stellar,
}

impl ChainFamily {
    /// Returns the lowercase family name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Evm => "evm",
            Self::Solana => "solana",
            Self::Stellar => "stellar",
        }
    }

    /// Returns `true` if two token identifiers name the same token on this family.
    ///
    /// EVM contract addresses compare case-insensitively (checksum casing is
    /// presentation only). Solana and Stellar identifiers are case-sensitive.
    #[must_use]
    pub fn same_token(self, a: &str, b: &str) -> bool {
        match self {
            Self::Evm => a.eq_ignore_ascii_case(b),
            Self::Solana | Self::Stellar => a == b,
        }
    }
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown chain family name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown chain family {0}")]
pub struct ChainFamilyParseError(String);

impl FromStr for ChainFamily {
    type Err = ChainFamilyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "evm" | "eip155" => Ok(Self::Evm),
            "solana" | "svm" => Ok(Self::Solana),
            "stellar" => Ok(Self::Stellar),
            _ => Err(ChainFamilyParseError(s.into())),
        }
    }
}

/// Static metadata for a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    /// Numeric chain id.
    pub chain_id: ChainId,
    /// Human-readable chain name (e.g., "Base").
    pub name: &'static str,
    /// Address/token format family.
    pub family: ChainFamily,
    /// Whether the payment service pays out on this chain.
    pub supported: bool,
}

/// Static metadata for a token deployment on a specific chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Chain the token is deployed on.
    pub chain_id: ChainId,
    /// Chain-specific identifier: contract address, mint, or `CODE:ISSUER`.
    pub token: &'static str,
    /// Ticker symbol (e.g., "USDC").
    pub symbol: &'static str,
    /// Display name (e.g., "USD Coin").
    pub name: &'static str,
    /// Number of decimals in the token's base unit.
    pub decimals: u8,
    /// ISO code of the fiat currency the token tracks.
    pub fiat_iso: &'static str,
    /// Optional logo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<&'static str>,
    /// Whether the payment service accepts this token as a payout destination.
    pub supported: bool,
}

impl TokenInfo {
    /// Returns the canonical descriptor for this token.
    #[must_use]
    pub const fn descriptor(&self) -> TokenDescriptor {
        TokenDescriptor {
            chain_id: self.chain_id,
            symbol: self.symbol,
            token: self.token,
        }
    }
}

/// A (chain, symbol, identifier) triple naming a token without its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDescriptor {
    /// Chain the token is deployed on.
    pub chain_id: ChainId,
    /// Ticker symbol.
    pub symbol: &'static str,
    /// Chain-specific identifier.
    pub token: &'static str,
}
