//! Exact fixed-point arithmetic for on-chain token quantities.
//!
//! On-chain balances are unsigned 64-bit integers scaled by a per-token
//! power of ten. This crate keeps that representation exact end to end:
//! native `u64` raw quantities, checked `u128` intermediates, rational
//! percentages as integer pairs, and digit-string rendering. No floating
//! point is used anywhere.
//!
//! Everything is pure and synchronous; amounts and fractions are immutable
//! value types safe to share freely across threads.

pub mod amount;
pub mod error;
pub mod format;
pub mod fraction;
pub mod token;

// Re-export key public types for ergonomic imports.
pub use amount::{TokenAmount, MAX_U64};
pub use error::AmountError;
pub use format::{strip_trailing_zeros, NumberFormat};
pub use fraction::{Fraction, Percent, Rounding};
pub use token::Token;
