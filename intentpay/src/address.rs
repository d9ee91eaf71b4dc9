//! Address format validation by chain family.
//!
//! Each family crate implements [`AddressFormat`] for its own address syntax.
//! [`FamilyValidator`] looks up a chain's family in a [`TokenRegistry`] and
//! dispatches to the matching format, which gives the resolver a single
//! [`AddressValidator`] capability to call into.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::chain::{ChainFamily, ChainId};
use crate::registry::TokenRegistry;

/// Syntax check for the addresses of one chain family.
pub trait AddressFormat: Send + Sync {
    /// The family this format applies to.
    fn family(&self) -> ChainFamily;

    /// Returns `true` if `address` is well formed for this family.
    fn is_valid(&self, address: &str) -> bool;
}

/// Checks whether an address can receive funds on a given chain.
pub trait AddressValidator {
    /// Returns `true` if `address` matches the format of `chain_id`'s family.
    fn validate_address_for_chain(&self, chain_id: ChainId, address: &str) -> bool;
}

impl<T: AddressValidator + ?Sized> AddressValidator for &T {
    fn validate_address_for_chain(&self, chain_id: ChainId, address: &str) -> bool {
        (**self).validate_address_for_chain(chain_id, address)
    }
}

impl<T: AddressValidator + ?Sized> AddressValidator for Arc<T> {
    fn validate_address_for_chain(&self, chain_id: ChainId, address: &str) -> bool {
        (**self).validate_address_for_chain(chain_id, address)
    }
}

/// [`AddressValidator`] that dispatches on the chain family recorded in a registry.
///
/// Unknown chains and families without a registered format never validate.
pub struct FamilyValidator<R> {
    registry: R,
    formats: HashMap<ChainFamily, Box<dyn AddressFormat>>,
}

impl<R> FamilyValidator<R> {
    /// Creates a validator with no registered formats.
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            formats: HashMap::new(),
        }
    }

    /// Registers a family format, replacing any previous one for the same family.
    pub fn register<F: AddressFormat + 'static>(&mut self, format: F) {
        self.formats.insert(format.family(), Box::new(format));
    }

    /// Registers a family format and returns self for chaining.
    #[must_use]
    pub fn with_format<F: AddressFormat + 'static>(mut self, format: F) -> Self {
        self.register(format);
        self
    }

    /// Returns the format registered for a family, if any.
    #[must_use]
    pub fn format(&self, family: ChainFamily) -> Option<&dyn AddressFormat> {
        self.formats.get(&family).map(|f| &**f)
    }
}

impl<R> fmt::Debug for FamilyValidator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let families: Vec<&str> = self.formats.keys().map(|k| k.as_str()).collect();
        f.debug_struct("FamilyValidator")
            .field("families", &families)
            .finish_non_exhaustive()
    }
}

impl<R: TokenRegistry> AddressValidator for FamilyValidator<R> {
    fn validate_address_for_chain(&self, chain_id: ChainId, address: &str) -> bool {
        let Ok(chain) = self.registry.chain_by_id(chain_id) else {
            return false;
        };
        self.format(chain.family)
            .is_some_and(|format| format.is_valid(address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        StubEvmFormat, StubSolanaFormat, VALID_EVM, VALID_SOLANA, VALID_STELLAR,
        fixture_registry, fixture_validator,
    };

    #[test]
    fn test_dispatch_by_family() {
        let registry = fixture_registry();
        let validator = fixture_validator(&registry);
        assert!(validator.validate_address_for_chain(8453, VALID_EVM));
        assert!(validator.validate_address_for_chain(900, VALID_SOLANA));
        assert!(validator.validate_address_for_chain(1500, VALID_STELLAR));

        assert!(!validator.validate_address_for_chain(8453, VALID_SOLANA));
        assert!(!validator.validate_address_for_chain(900, VALID_EVM));
        assert!(!validator.validate_address_for_chain(1500, VALID_EVM));
    }

    #[test]
    fn test_unknown_chain_rejected() {
        let registry = fixture_registry();
        let validator = fixture_validator(&registry);
        assert!(!validator.validate_address_for_chain(424_242, VALID_EVM));
    }

    #[test]
    fn test_missing_family_format_rejected() {
        let registry = fixture_registry();
        let validator = FamilyValidator::new(&registry)
            .with_format(StubEvmFormat)
            .with_format(StubSolanaFormat);
        assert!(validator.format(ChainFamily::Stellar).is_none());
        assert!(!validator.validate_address_for_chain(1500, VALID_STELLAR));
    }
}
