//! Chain and token lookup.
//!
//! The resolver and hydrator never reach for global tables; they take a
//! [`TokenRegistry`] by reference. [`StaticRegistry`] is the standard
//! implementation, assembled at startup from the slices the family crates
//! export:
//!
//! - `intentpay-evm` provides `EVM_CHAINS` / `EVM_TOKENS`
//! - `intentpay-svm` provides `SOLANA_CHAINS` / `SOLANA_TOKENS`
//! - `intentpay-stellar` provides `STELLAR_CHAINS` / `STELLAR_TOKENS`
//!
//! # Example
//!
//! ```ignore
//! use intentpay::registry::StaticRegistry;
//!
//! let registry = StaticRegistry::from_chains(intentpay_evm::EVM_CHAINS)
//!     .with_chains(intentpay_svm::SOLANA_CHAINS)
//!     .with_tokens(intentpay_evm::EVM_TOKENS)
//!     .with_tokens(intentpay_svm::SOLANA_TOKENS);
//!
//! let base = registry.chain_by_id(8453)?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::chain::{ChainFamily, ChainId, ChainInfo, TokenInfo};

/// Error returned by registry lookups that must succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The chain id is not present in the registry.
    #[error("unknown chain {0}")]
    UnknownChain(ChainId),
}

/// Read-only chain and token metadata.
///
/// Implementations are expected to be immutable snapshots; every method is a
/// pure lookup.
pub trait TokenRegistry {
    /// Returns metadata for a chain.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownChain`] if the chain is not registered.
    fn chain_by_id(&self, chain_id: ChainId) -> Result<&ChainInfo, RegistryError>;

    /// Returns metadata for a token on a chain, if known.
    ///
    /// Identifier comparison follows the chain's family rules (see
    /// [`ChainFamily::same_token`]).
    fn known_token(&self, chain_id: ChainId, token: &str) -> Option<&TokenInfo>;

    /// Returns `true` if the chain is known and marked as a payout chain.
    ///
    /// When `family` is given, the chain must also belong to it.
    fn is_chain_supported(&self, chain_id: ChainId, family: Option<ChainFamily>) -> bool;

    /// Returns `true` if the chain is supported and the token is a payout token on it.
    fn is_token_supported(&self, chain_id: ChainId, token: &str) -> bool;
}

impl<T: TokenRegistry + ?Sized> TokenRegistry for &T {
    fn chain_by_id(&self, chain_id: ChainId) -> Result<&ChainInfo, RegistryError> {
        (**self).chain_by_id(chain_id)
    }
    fn known_token(&self, chain_id: ChainId, token: &str) -> Option<&TokenInfo> {
        (**self).known_token(chain_id, token)
    }
    fn is_chain_supported(&self, chain_id: ChainId, family: Option<ChainFamily>) -> bool {
        (**self).is_chain_supported(chain_id, family)
    }
    fn is_token_supported(&self, chain_id: ChainId, token: &str) -> bool {
        (**self).is_token_supported(chain_id, token)
    }
}

impl<T: TokenRegistry + ?Sized> TokenRegistry for Arc<T> {
    fn chain_by_id(&self, chain_id: ChainId) -> Result<&ChainInfo, RegistryError> {
        (**self).chain_by_id(chain_id)
    }
    fn known_token(&self, chain_id: ChainId, token: &str) -> Option<&TokenInfo> {
        (**self).known_token(chain_id, token)
    }
    fn is_chain_supported(&self, chain_id: ChainId, family: Option<ChainFamily>) -> bool {
        (**self).is_chain_supported(chain_id, family)
    }
    fn is_token_supported(&self, chain_id: ChainId, token: &str) -> bool {
        (**self).is_token_supported(chain_id, token)
    }
}

/// Registry backed by static chain and token tables.
///
/// Tokens registered for a chain that has no [`ChainInfo`] are kept but can
/// never be resolved, since identifier comparison needs the chain family.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    chains: HashMap<ChainId, ChainInfo>,
    tokens: HashMap<ChainId, Vec<TokenInfo>>,
}

impl StaticRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated from a chain slice.
    #[must_use]
    pub fn from_chains(chains: &[ChainInfo]) -> Self {
        let mut registry = Self::new();
        registry.register_chains(chains);
        registry
    }

    /// Registers additional chains. Later entries replace earlier ones with the same id.
    pub fn register_chains(&mut self, chains: &[ChainInfo]) {
        for info in chains {
            self.chains.insert(info.chain_id, *info);
        }
    }

    /// Registers additional tokens.
    pub fn register_tokens(&mut self, tokens: &[TokenInfo]) {
        for info in tokens {
            self.tokens.entry(info.chain_id).or_default().push(*info);
        }
    }

    /// Builder-style method: registers additional chains and returns `self`.
    #[must_use]
    pub fn with_chains(mut self, chains: &[ChainInfo]) -> Self {
        self.register_chains(chains);
        self
    }

    /// Builder-style method: registers additional tokens and returns `self`.
    #[must_use]
    pub fn with_tokens(mut self, tokens: &[TokenInfo]) -> Self {
        self.register_tokens(tokens);
        self
    }

    /// Iterates over all registered chains in ascending chain id order.
    pub fn chains(&self) -> impl Iterator<Item = &ChainInfo> {
        let mut chains: Vec<&ChainInfo> = self.chains.values().collect();
        chains.sort_by_key(|c| c.chain_id);
        chains.into_iter()
    }

    /// Returns every token registered on a chain.
    #[must_use]
    pub fn tokens_on(&self, chain_id: ChainId) -> &[TokenInfo] {
        self.tokens.get(&chain_id).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of registered chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Returns `true` if no chains are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl TokenRegistry for StaticRegistry {
    fn chain_by_id(&self, chain_id: ChainId) -> Result<&ChainInfo, RegistryError> {
        self.chains
            .get(&chain_id)
            .ok_or(RegistryError::UnknownChain(chain_id))
    }

    fn known_token(&self, chain_id: ChainId, token: &str) -> Option<&TokenInfo> {
        let family = self.chains.get(&chain_id)?.family;
        self.tokens_on(chain_id)
            .iter()
            .find(|t| family.same_token(t.token, token))
    }

    fn is_chain_supported(&self, chain_id: ChainId, family: Option<ChainFamily>) -> bool {
        self.chains
            .get(&chain_id)
            .is_some_and(|c| c.supported && family.is_none_or(|f| f == c.family))
    }

    fn is_token_supported(&self, chain_id: ChainId, token: &str) -> bool {
        self.is_chain_supported(chain_id, None)
            && self.known_token(chain_id, token).is_some_and(|t| t.supported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        BASE_USDC, BASE_USDT, OPTIMISM, POLYGON_USDC, fixture_registry,
    };

    #[test]
    fn test_chain_by_id() {
        let registry = fixture_registry();
        assert_eq!(registry.chain_by_id(8453).unwrap().name, "Base");
        assert_eq!(
            registry.chain_by_id(999_999),
            Err(RegistryError::UnknownChain(999_999))
        );
    }

    #[test]
    fn test_known_token_evm_case_insensitive() {
        let registry = fixture_registry();
        let token = registry
            .known_token(8453, &BASE_USDC.to_ascii_lowercase())
            .unwrap();
        assert_eq!(token.token, BASE_USDC);
        assert_eq!(token.decimals, 6);
    }

    #[test]
    fn test_known_token_wrong_chain() {
        let registry = fixture_registry();
        assert!(registry.known_token(137, BASE_USDC).is_none());
        assert!(registry.known_token(137, POLYGON_USDC).is_some());
    }

    #[test]
    fn test_chain_supported_with_family() {
        let registry = fixture_registry();
        assert!(registry.is_chain_supported(8453, None));
        assert!(registry.is_chain_supported(8453, Some(ChainFamily::Evm)));
        assert!(!registry.is_chain_supported(8453, Some(ChainFamily::Solana)));
        assert!(!registry.is_chain_supported(OPTIMISM, None));
        assert!(!registry.is_chain_supported(42, None));
    }

    #[test]
    fn test_token_supported() {
        let registry = fixture_registry();
        assert!(registry.is_token_supported(8453, BASE_USDC));
        // Known for sourcing, but not a payout token.
        assert!(registry.known_token(8453, BASE_USDT).is_some());
        assert!(!registry.is_token_supported(8453, BASE_USDT));
    }

    #[test]
    fn test_chains_sorted() {
        let registry = fixture_registry();
        let ids: Vec<ChainId> = registry.chains().map(|c| c.chain_id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(registry.len(), ids.len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_arc_registry_delegates() {
        let registry = Arc::new(fixture_registry());
        assert!(registry.is_token_supported(8453, BASE_USDC));
        assert_eq!(registry.chain_by_id(137).unwrap().name, "Polygon");
    }
}
