//! Token identity.
//!
//! A token is identified by its 32-byte mint address plus its decimal
//! scale. Two amounts may only be combined arithmetically when both parts
//! match; this is what stops a 6-decimal quantity from being added to a
//! 9-decimal one.

/// Identity of a token: mint address and decimal scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    mint: [u8; 32],
    decimals: u8,
}

impl Token {
    pub fn new(mint: [u8; 32], decimals: u8) -> Self {
        Self { mint, decimals }
    }

    pub fn mint(&self) -> &[u8; 32] {
        &self.mint
    }

    /// The power-of-ten exponent relating raw units to the human-readable
    /// quantity (raw / 10^decimals).
    pub fn decimals(&self) -> u8 {
        self.decimals
    }
}
