//! Wire types exchanged with the payment API.
//!
//! # Key Types
//!
//! - [`RawPaymentRecord`] - Payment record as returned by the backend
//! - [`PaymentStatus`] - Backend status enum, passed through untouched
//! - [`PaymentRequest`] - Version-neutral payment creation request
//! - [`FeeType`] - Which side of the payment absorbs fees
//!
//! # Versions
//!
//! The request body shape depends on the API version. [`PaymentRequest`]
//! serializes directly as the nested V2/V4 body; [`v1`] holds the flattened
//! V1 body and the conversion into it.
//!
//! # Wire Format
//!
//! All types serialize to JSON using camelCase field names. Chain ids are
//! accepted as either numbers or numeric strings.

pub mod record;
pub mod request;
pub mod v1;

pub use record::{PaymentStatus, RawDestination, RawPaymentRecord, RawSource};
pub use request::{
    DestinationSpec, FeeType, PaymentDisplay, PaymentRequest, RequestError, SourceSpec,
};
