//! Well-known Stellar chain and asset definitions.
//!
//! The payment service numbers Stellar pubnet as chain `1500`. Stellar
//! amounts carry 7 decimal places.

use intentpay::chain::{ChainFamily, ChainInfo, STELLAR_MAINNET, TokenInfo};

pub use intentpay::chain::{STELLAR_MAINNET as STELLAR_CHAIN_ID, STELLAR_USDC};

/// Decimal places of every classic Stellar asset.
pub const STELLAR_DECIMALS: u8 = 7;

/// Circle's USDC issuing account.
pub const USDC_ISSUER: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";

/// Circle's EURC issuing account.
pub const EURC_ISSUER: &str = "GDHU6WRG4IEQXM5NZ4BMPKOXHW76MZM4Y2IEMFDVXBSDP6SJY4ITNPP2";

/// Known Stellar chains.
pub static STELLAR_CHAINS: &[ChainInfo] = &[ChainInfo {
    chain_id: STELLAR_MAINNET,
    name: "Stellar",
    family: ChainFamily::Stellar,
    supported: true,
}];

/// Known Stellar assets.
///
/// Payouts on Stellar always settle in USDC. EURC is listed for funding
/// lookups only.
pub static STELLAR_TOKENS: &[TokenInfo] = &[
    TokenInfo {
        chain_id: STELLAR_MAINNET,
        token: "USDC:GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN",
        symbol: "USDC",
        name: "USD Coin",
        decimals: STELLAR_DECIMALS,
        fiat_iso: "USD",
        logo_uri: Some("https://assets.coingecko.com/coins/images/6319/large/usdc.png"),
        supported: true,
    },
    TokenInfo {
        chain_id: STELLAR_MAINNET,
        token: "EURC:GDHU6WRG4IEQXM5NZ4BMPKOXHW76MZM4Y2IEMFDVXBSDP6SJY4ITNPP2",
        symbol: "EURC",
        name: "Euro Coin",
        decimals: STELLAR_DECIMALS,
        fiat_iso: "EUR",
        logo_uri: None,
        supported: false,
    },
];
