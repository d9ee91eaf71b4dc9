//! Fixtures shared by the unit tests of this crate.
//!
//! The tables mirror a small slice of production data so resolver and
//! hydrator tests do not depend on the family crates.

use crate::address::{AddressFormat, FamilyValidator};
use crate::chain::{
    BASE_MAINNET, ChainFamily, ChainInfo, SOLANA_MAINNET, SOLANA_USDC, STELLAR_MAINNET,
    STELLAR_USDC, TokenInfo,
};
use crate::registry::StaticRegistry;

pub const POLYGON: u64 = 137;
pub const OPTIMISM: u64 = 10;

pub const BASE_USDC: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
pub const BASE_USDT: &str = "0xfde4C96c8593536E31F229EA8f37b2ADa2699bb2";
pub const POLYGON_USDC: &str = "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359";
pub const OPTIMISM_USDC: &str = "0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85";

pub const VALID_EVM: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
pub const VALID_SOLANA: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";
pub const VALID_STELLAR: &str = "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7";

static CHAINS: &[ChainInfo] = &[
    ChainInfo {
        chain_id: BASE_MAINNET,
        name: "Base",
        family: ChainFamily::Evm,
        supported: true,
    },
    ChainInfo {
        chain_id: POLYGON,
        name: "Polygon",
        family: ChainFamily::Evm,
        supported: true,
    },
    ChainInfo {
        chain_id: OPTIMISM,
        name: "Optimism",
        family: ChainFamily::Evm,
        supported: false,
    },
    ChainInfo {
        chain_id: SOLANA_MAINNET,
        name: "Solana",
        family: ChainFamily::Solana,
        supported: true,
    },
    ChainInfo {
        chain_id: STELLAR_MAINNET,
        name: "Stellar",
        family: ChainFamily::Stellar,
        supported: true,
    },
];

const fn usd_token(
    chain_id: u64,
    token: &'static str,
    symbol: &'static str,
    decimals: u8,
    supported: bool,
) -> TokenInfo {
    TokenInfo {
        chain_id,
        token,
        symbol,
        name: symbol,
        decimals,
        fiat_iso: "USD",
        logo_uri: None,
        supported,
    }
}

static TOKENS: &[TokenInfo] = &[
    usd_token(BASE_MAINNET, BASE_USDC, "USDC", 6, true),
    usd_token(BASE_MAINNET, BASE_USDT, "USDT", 6, false),
    usd_token(POLYGON, POLYGON_USDC, "USDC", 6, true),
    usd_token(OPTIMISM, OPTIMISM_USDC, "USDC", 6, true),
    usd_token(SOLANA_MAINNET, SOLANA_USDC.token, "USDC", 6, true),
    usd_token(
        SOLANA_MAINNET,
        "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB",
        "USDT",
        6,
        true,
    ),
    usd_token(STELLAR_MAINNET, STELLAR_USDC.token, "USDC", 7, true),
    usd_token(
        STELLAR_MAINNET,
        "EURC:GDHU6WRG4IEQXM5NZ4BMPKOXHW76MZM4Y2IEMFDVXBSDP6SJY4ITNPP2",
        "EURC",
        7,
        true,
    ),
];

pub fn fixture_registry() -> StaticRegistry {
    StaticRegistry::from_chains(CHAINS).with_tokens(TOKENS)
}

pub fn fixture_validator(registry: &StaticRegistry) -> FamilyValidator<&StaticRegistry> {
    FamilyValidator::new(registry)
        .with_format(StubEvmFormat)
        .with_format(StubSolanaFormat)
        .with_format(StubStellarFormat)
}

/// `0x` followed by 40 hex digits; no checksum.
pub struct StubEvmFormat;

impl AddressFormat for StubEvmFormat {
    fn family(&self) -> ChainFamily {
        ChainFamily::Evm
    }
    fn is_valid(&self, address: &str) -> bool {
        address
            .strip_prefix("0x")
            .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
    }
}

/// 32 to 44 base58 characters.
pub struct StubSolanaFormat;

impl AddressFormat for StubSolanaFormat {
    fn family(&self) -> ChainFamily {
        ChainFamily::Solana
    }
    fn is_valid(&self, address: &str) -> bool {
        (32..=44).contains(&address.len())
            && address
                .chars()
                .all(|c| c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l'))
    }
}

/// `G` followed by 55 base32 characters.
pub struct StubStellarFormat;

impl AddressFormat for StubStellarFormat {
    fn family(&self) -> ChainFamily {
        ChainFamily::Stellar
    }
    fn is_valid(&self, address: &str) -> bool {
        address.len() == 56
            && address.starts_with('G')
            && address
                .chars()
                .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c))
    }
}
