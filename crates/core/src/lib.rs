//! Paydesk Core - Order resource types and decoders.
//!
//! This crate mirrors the payment API's order resource as native Rust types:
//! - `types` - Inbound resource shapes (orders, line items, shipping, returns)
//! - `params` - Outbound parameter shapes for create/update/pay/return/list
//! - `form` - Flattening of parameter structs into bracketed form pairs
//!
//! # Architecture
//!
//! The core crate contains only types and pure encode/decode logic - no I/O,
//! no HTTP clients. The `paydesk-client` crate layers transport on top.
//!
//! # Expandable references
//!
//! The API returns related resources either as a bare ID string or, when the
//! caller asks for expansion, as the full nested object. [`Expandable`] models
//! both shapes and decodes them in a single pass.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod de;
pub mod form;
pub mod params;
pub mod types;

pub use form::FormError;
pub use params::*;
pub use types::*;
