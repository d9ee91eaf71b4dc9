#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! EIP-155 (EVM) chain support for intentpay.
//!
//! Provides the static chain and token tables for the EVM networks the
//! payment service knows about, and [`EvmAddressFormat`], the EVM address
//! check plugged into [`intentpay::address::FamilyValidator`].
//!
//! # Example
//!
//! ```ignore
//! use intentpay::registry::StaticRegistry;
//! use intentpay::address::FamilyValidator;
//! use intentpay_evm::{EVM_CHAINS, EVM_TOKENS, EvmAddressFormat};
//!
//! let registry = StaticRegistry::from_chains(EVM_CHAINS).with_tokens(EVM_TOKENS);
//! let validator = FamilyValidator::new(&registry).with_format(EvmAddressFormat);
//! ```

mod address;
mod networks;

pub use address::EvmAddressFormat;
pub use networks::*;
