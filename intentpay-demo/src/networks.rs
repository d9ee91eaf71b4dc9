//! Registry and address validator covering every chain family.

use intentpay::address::FamilyValidator;
use intentpay::registry::StaticRegistry;
use intentpay_evm::{EVM_CHAINS, EVM_TOKENS, EvmAddressFormat};
use intentpay_stellar::{STELLAR_CHAINS, STELLAR_TOKENS, StellarAddressFormat};
use intentpay_svm::{SOLANA_CHAINS, SOLANA_TOKENS, SolanaAddressFormat};

/// Builds a registry holding every known EVM, Solana and Stellar chain and token.
#[must_use]
pub fn full_registry() -> StaticRegistry {
    StaticRegistry::from_chains(EVM_CHAINS)
        .with_chains(SOLANA_CHAINS)
        .with_chains(STELLAR_CHAINS)
        .with_tokens(EVM_TOKENS)
        .with_tokens(SOLANA_TOKENS)
        .with_tokens(STELLAR_TOKENS)
}

/// Builds a validator with an address format for every family.
#[must_use]
pub fn full_validator(registry: &StaticRegistry) -> FamilyValidator<&StaticRegistry> {
    FamilyValidator::new(registry)
        .with_format(EvmAddressFormat)
        .with_format(SolanaAddressFormat)
        .with_format(StellarAddressFormat)
}
