#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Solana support for intentpay.
//!
//! Provides the Solana chain and SPL token tables and
//! [`SolanaAddressFormat`], which accepts base58 public keys that lie on the
//! ed25519 curve. Program-derived addresses are off-curve and are rejected.

mod address;
mod networks;

pub use address::SolanaAddressFormat;
pub use networks::*;
