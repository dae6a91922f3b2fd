//! Client-side view of an on-chain stableswap program.
//!
//! This crate is the thin composition layer over the two cores: the
//! declarative account codec (`account-layout`) decodes the fixed 363-byte
//! swap account, and the raw integers it produces are wrapped into exact
//! `token-math` values for arithmetic and display. Transport and token
//! metadata stay behind the [`AccountLoader`] and [`TokenRegistry`] traits.

pub mod address;
pub mod error;
pub mod fees;
pub mod provider;
pub mod state;

// Re-export key public types for ergonomic imports.
pub use address::{from_base58, to_base58};
pub use error::ClientError;
pub use fees::Fees;
pub use provider::{load_swap_state, pool_tokens, AccountLoader, TokenRegistry};
pub use state::{StableSwapState, SWAP_STATE_SPAN};
