#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for cross-chain payment intents.
//!
//! This crate turns human-specified payment parameters into validated routing
//! configurations and normalizes backend payment records into a single
//! canonical order shape. It is chain-agnostic: concrete chain and token
//! tables, and per-family address checks, live in the `intentpay-evm`,
//! `intentpay-svm` and `intentpay-stellar` crates.
//!
//! # Overview
//!
//! A payer funds a payment from a *preferred* chain/token; the payee receives
//! on a *destination* chain/token/address. The [`bridge`] resolver validates
//! both sides against a [`registry::TokenRegistry`] and an
//! [`address::AddressValidator`], and decides whether the payment needs
//! cross-chain routing. Once the remote service has created the payment, the
//! [`hydrate`] module converts its record into an [`order::CanonicalOrder`].
//!
//! # Modules
//!
//! - [`address`] - Address format checks dispatched by chain family
//! - [`amount`] - Human-readable amount parsing and base-unit scaling
//! - [`bridge`] - Routing resolution for destination and preferred legs
//! - [`chain`] - Chain ids, chain families, chain and token metadata
//! - [`error`] - Error types for routing and hydration
//! - [`format`] - Small display helpers
//! - [`hydrate`] - Raw payment record to canonical order conversion
//! - [`order`] - The canonical order model and its status enums
//! - [`proto`] - Wire types exchanged with the payment API
//! - [`registry`] - Chain/token lookup contract and a static implementation
//! - [`timestamp`] - Unix timestamps
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod address;
pub mod amount;
pub mod bridge;
pub mod chain;
pub mod error;
pub mod format;
pub mod hydrate;
pub mod order;
pub mod proto;
pub mod registry;
pub mod timestamp;

#[cfg(test)]
pub(crate) mod testing;

pub use bridge::{BridgeResolver, RoutingRequest, RoutingResult, resolve_payment_bridge};
pub use error::{BridgeError, Error, HydrateError};
pub use hydrate::{OrderHydrator, hydrate_order};
pub use order::CanonicalOrder;
