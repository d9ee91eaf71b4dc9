//! Well-known Solana chain and token definitions.
//!
//! The payment service numbers Solana mainnet as chain `900`.

use intentpay::chain::{ChainFamily, ChainInfo, SOLANA_MAINNET, TokenInfo};
use solana_pubkey::{Pubkey, pubkey};

pub use intentpay::chain::{SOLANA_MAINNET as SOLANA_CHAIN_ID, SOLANA_USDC};

/// Native Circle USDC mint on Solana mainnet.
pub const USDC_SOLANA: Pubkey = pubkey!("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");

/// Tether USDT mint on Solana mainnet.
pub const USDT_SOLANA: Pubkey = pubkey!("Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB");

/// Known Solana chains.
pub static SOLANA_CHAINS: &[ChainInfo] = &[ChainInfo {
    chain_id: SOLANA_MAINNET,
    name: "Solana",
    family: ChainFamily::Solana,
    supported: true,
}];

/// Known SPL stablecoin mints.
///
/// Payouts on Solana always settle in USDC; USDT is listed so routes naming
/// it resolve and get canonicalized.
pub static SOLANA_TOKENS: &[TokenInfo] = &[
    TokenInfo {
        chain_id: SOLANA_MAINNET,
        token: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
        symbol: "USDC",
        name: "USD Coin",
        decimals: 6,
        fiat_iso: "USD",
        logo_uri: Some("https://assets.coingecko.com/coins/images/6319/large/usdc.png"),
        supported: true,
    },
    TokenInfo {
        chain_id: SOLANA_MAINNET,
        token: "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB",
        symbol: "USDT",
        name: "Tether USD",
        decimals: 6,
        fiat_iso: "USD",
        logo_uri: Some("https://assets.coingecko.com/coins/images/325/large/Tether.png"),
        supported: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_mints_match_table() {
        let usdc = Pubkey::from_str(SOLANA_TOKENS[0].token).unwrap();
        let usdt = Pubkey::from_str(SOLANA_TOKENS[1].token).unwrap();
        assert_eq!(usdc, USDC_SOLANA);
        assert_eq!(usdt, USDT_SOLANA);
    }

    #[test]
    fn test_canonical_usdc_is_listed() {
        let listed = SOLANA_TOKENS
            .iter()
            .find(|t| t.token == SOLANA_USDC.token)
            .unwrap();
        assert_eq!(listed.chain_id, SOLANA_USDC.chain_id);
        assert_eq!(listed.symbol, SOLANA_USDC.symbol);
        assert!(listed.supported);
    }

    #[test]
    fn test_chain_id() {
        assert_eq!(SOLANA_CHAIN_ID, 900);
        assert!(SOLANA_TOKENS.iter().all(|t| t.chain_id == SOLANA_CHAIN_ID));
    }
}
