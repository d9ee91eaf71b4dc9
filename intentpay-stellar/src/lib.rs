#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Stellar support for intentpay.
//!
//! Provides the Stellar chain and asset tables and [`StellarAddressFormat`],
//! a strkey validator for account (`G…`), muxed account (`M…`) and contract
//! (`C…`) addresses.
//!
//! Stellar assets are identified as `CODE:ISSUER` strings; see
//! [`parse_asset`].

mod address;
mod networks;

pub use address::{StellarAddressFormat, StrKeyKind, parse_asset};
pub use networks::*;
