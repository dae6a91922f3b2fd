//! Declarative binary codec for fixed-width on-chain account records.
//!
//! On-chain account state is stored as packed little-endian structs with a
//! fixed field order and no padding. This crate describes such a record
//! once, as an ordered list of named field descriptors, and derives both
//! decoding and encoding from that single declaration, so the two
//! directions cannot fall out of sync.
//!
//! The codec is pure and synchronous: layouts are immutable after
//! construction and safe to share across any number of concurrent
//! decode/encode calls.

pub mod error;
pub mod layout;
pub mod record;

// Re-export key public types for ergonomic imports.
pub use error::LayoutError;
pub use layout::{Field, StructLayout, PUBLIC_KEY_SPAN};
pub use record::{Record, Value};
