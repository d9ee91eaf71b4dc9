//! Known EVM chains and stablecoin deployments.
//!
//! Identifiers in [`EVM_TOKENS`] are EIP-55 checksummed strings; the typed
//! [`Address`] constants below carry the same values for callers that need
//! bytes.

use alloy_primitives::{Address, address};
use intentpay::chain::{ChainFamily, ChainId, ChainInfo, TokenInfo};

/// Ethereum Mainnet chain ID.
pub const ETHEREUM_MAINNET: ChainId = 1;

/// Optimism Mainnet chain ID.
pub const OPTIMISM_MAINNET: ChainId = 10;

/// BNB Smart Chain chain ID.
pub const BSC_MAINNET: ChainId = 56;

/// Polygon Mainnet chain ID.
pub const POLYGON_MAINNET: ChainId = 137;

/// Arbitrum One chain ID.
pub const ARBITRUM_MAINNET: ChainId = 42161;

/// Avalanche C-Chain chain ID.
pub const AVALANCHE_MAINNET: ChainId = 43114;

/// Base Mainnet chain ID.
pub use intentpay::chain::BASE_MAINNET;

/// USDC contract address on Ethereum Mainnet.
pub const USDC_ETHEREUM: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

/// USDT contract address on Ethereum Mainnet.
pub const USDT_ETHEREUM: Address = address!("dAC17F958D2ee523a2206206994597C13D831ec7");

/// USDC contract address on Base Mainnet.
pub const USDC_BASE: Address = address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");

/// USDT contract address on Base Mainnet.
pub const USDT_BASE: Address = address!("fde4C96c8593536E31F229EA8f37b2ADa2699bb2");

/// USDC contract address on Polygon Mainnet.
pub const USDC_POLYGON: Address = address!("3c499c542cEF5E3811e1192ce70d8cC03d5c3359");

/// USDT contract address on Polygon Mainnet.
pub const USDT_POLYGON: Address = address!("c2132D05D31c914a87C6611C10748AEb04B58e8F");

/// USDC contract address on Arbitrum One.
pub const USDC_ARBITRUM: Address = address!("af88d065e77c8cC2239327C5EDb3A432268e5831");

/// USDT contract address on Arbitrum One.
pub const USDT_ARBITRUM: Address = address!("Fd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9");

/// USDC contract address on Optimism.
pub const USDC_OPTIMISM: Address = address!("0b2C639c533813f4Aa9D7837CAf62653d097Ff85");

/// USDC contract address on BNB Smart Chain (18 decimals).
pub const USDC_BSC: Address = address!("8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d");

/// USDT contract address on BNB Smart Chain (18 decimals).
pub const USDT_BSC: Address = address!("55d398326f99059fF775485246999027B3197955");

/// USDC contract address on Avalanche C-Chain.
pub const USDC_AVALANCHE: Address = address!("B97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E");

/// Known EVM chains.
///
/// Avalanche is known for funding lookups but the service does not pay out there.
pub static EVM_CHAINS: &[ChainInfo] = &[
    evm_chain(ETHEREUM_MAINNET, "Ethereum", true),
    evm_chain(OPTIMISM_MAINNET, "Optimism", true),
    evm_chain(BSC_MAINNET, "BNB Smart Chain", true),
    evm_chain(POLYGON_MAINNET, "Polygon", true),
    evm_chain(BASE_MAINNET, "Base", true),
    evm_chain(ARBITRUM_MAINNET, "Arbitrum One", true),
    evm_chain(AVALANCHE_MAINNET, "Avalanche", false),
];

/// Known EVM stablecoin deployments.
pub static EVM_TOKENS: &[TokenInfo] = &[
    usdc(ETHEREUM_MAINNET, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6),
    usdt(ETHEREUM_MAINNET, "0xdAC17F958D2ee523a2206206994597C13D831ec7", 6, true),
    usdc(OPTIMISM_MAINNET, "0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85", 6),
    usdc(BSC_MAINNET, "0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d", 18),
    usdt(BSC_MAINNET, "0x55d398326f99059fF775485246999027B3197955", 18, true),
    usdc(POLYGON_MAINNET, "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359", 6),
    usdt(POLYGON_MAINNET, "0xc2132D05D31c914a87C6611C10748AEb04B58e8F", 6, false),
    usdc(BASE_MAINNET, "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913", 6),
    usdt(BASE_MAINNET, "0xfde4C96c8593536E31F229EA8f37b2ADa2699bb2", 6, false),
    usdc(ARBITRUM_MAINNET, "0xaf88d065e77c8cC2239327C5EDb3A432268e5831", 6),
    usdt(ARBITRUM_MAINNET, "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9", 6, false),
    usdc(AVALANCHE_MAINNET, "0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E", 6),
];

const fn evm_chain(chain_id: ChainId, name: &'static str, supported: bool) -> ChainInfo {
    ChainInfo {
        chain_id,
        name,
        family: ChainFamily::Evm,
        supported,
    }
}

const fn usdc(chain_id: ChainId, token: &'static str, decimals: u8) -> TokenInfo {
    TokenInfo {
        chain_id,
        token,
        symbol: "USDC",
        name: "USD Coin",
        decimals,
        fiat_iso: "USD",
        logo_uri: Some("https://assets.coingecko.com/coins/images/6319/large/usdc.png"),
        supported: true,
    }
}

const fn usdt(chain_id: ChainId, token: &'static str, decimals: u8, supported: bool) -> TokenInfo {
    TokenInfo {
        chain_id,
        token,
        symbol: "USDT",
        name: "Tether USD",
        decimals,
        fiat_iso: "USD",
        logo_uri: Some("https://assets.coingecko.com/coins/images/325/large/Tether.png"),
        supported,
    }
}

/// Returns the typed USDC address on a chain, if known.
#[must_use]
pub const fn usdc_address(chain_id: ChainId) -> Option<Address> {
    match chain_id {
        ETHEREUM_MAINNET => Some(USDC_ETHEREUM),
        OPTIMISM_MAINNET => Some(USDC_OPTIMISM),
        BSC_MAINNET => Some(USDC_BSC),
        POLYGON_MAINNET => Some(USDC_POLYGON),
        BASE_MAINNET => Some(USDC_BASE),
        ARBITRUM_MAINNET => Some(USDC_ARBITRUM),
        AVALANCHE_MAINNET => Some(USDC_AVALANCHE),
        _ => None,
    }
}
