//! Base58 rendering of 32-byte account identities.
//!
//! Account keys in swap state are opaque 32-byte blobs; Base58 is only a
//! display/input convenience at the client boundary.

use crate::error::ClientError;

/// Encode a 32-byte account key as a Base58 address string.
pub fn to_base58(key: &[u8; 32]) -> String {
    bs58::encode(key).into_string()
}

/// Decode a Base58 address string into its 32-byte key.
pub fn from_base58(address: &str) -> Result<[u8; 32], ClientError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| ClientError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    bytes.try_into().map_err(|v: Vec<u8>| {
        ClientError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
    })
}
