//! Typed stableswap account state.
//!
//! The on-chain account is a packed little-endian record with no padding:
//!
//! ```text
//! SwapState (363 bytes):
//!   is_initialized          u8
//!   is_paused               u8
//!   nonce                   u8
//!   initial_amp_factor      u64 LE
//!   target_amp_factor       u64 LE
//!   start_ramp_ts           i64 LE
//!   stop_ramp_ts            i64 LE
//!   future_admin_deadline   i64 LE
//!   admin_account           32 bytes
//!   token_account_a         32 bytes
//!   token_account_b         32 bytes
//!   pool_token_mint         32 bytes
//!   mint_a                  32 bytes
//!   mint_b                  32 bytes
//!   admin_fee_account_a     32 bytes
//!   admin_fee_account_b     32 bytes
//!   fees                    8 * u64 LE (64 bytes)
//! ```
//!
//! Field order and widths are an external on-chain contract: any reorder,
//! width change, or added padding is a breaking change, not a bug fix.

use std::sync::OnceLock;

use account_layout::{Field, Record, StructLayout, Value};

use crate::error::ClientError;
use crate::fees::Fees;

/// Total wire span of a swap account record.
pub const SWAP_STATE_SPAN: usize = 363;

/// Decoded swap account state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StableSwapState {
    pub is_initialized: bool,
    pub is_paused: bool,
    /// Nonce used to derive the swap authority program address.
    pub nonce: u8,
    pub initial_amp_factor: u64,
    pub target_amp_factor: u64,
    pub start_ramp_ts: i64,
    pub stop_ramp_ts: i64,
    pub future_admin_deadline: i64,
    pub admin_account: [u8; 32],
    pub token_account_a: [u8; 32],
    pub token_account_b: [u8; 32],
    pub pool_token_mint: [u8; 32],
    pub mint_a: [u8; 32],
    pub mint_b: [u8; 32],
    pub admin_fee_account_a: [u8; 32],
    pub admin_fee_account_b: [u8; 32],
    pub fees: Fees,
}

impl StableSwapState {
    /// The shared record layout, built once and reused by every call.
    pub fn layout() -> &'static StructLayout {
        static LAYOUT: OnceLock<StructLayout> = OnceLock::new();
        LAYOUT.get_or_init(|| {
            StructLayout::new(vec![
                Field::u8("is_initialized"),
                Field::u8("is_paused"),
                Field::u8("nonce"),
                Field::u64("initial_amp_factor"),
                Field::u64("target_amp_factor"),
                Field::i64("start_ramp_ts"),
                Field::i64("stop_ramp_ts"),
                Field::i64("future_admin_deadline"),
                Field::public_key("admin_account"),
                Field::public_key("token_account_a"),
                Field::public_key("token_account_b"),
                Field::public_key("pool_token_mint"),
                Field::public_key("mint_a"),
                Field::public_key("mint_b"),
                Field::public_key("admin_fee_account_a"),
                Field::public_key("admin_fee_account_b"),
                Field::nested("fees", Fees::layout()),
            ])
        })
    }

    /// Decode a swap account's raw data.
    pub fn decode(data: &[u8]) -> Result<Self, ClientError> {
        let (record, _) = Self::layout().decode(data, 0)?;
        Ok(Self {
            is_initialized: decode_flag("is_initialized", record.uint("is_initialized")?)?,
            is_paused: decode_flag("is_paused", record.uint("is_paused")?)?,
            nonce: record.uint("nonce")? as u8,
            initial_amp_factor: record.uint("initial_amp_factor")?,
            target_amp_factor: record.uint("target_amp_factor")?,
            start_ramp_ts: record.int("start_ramp_ts")?,
            stop_ramp_ts: record.int("stop_ramp_ts")?,
            future_admin_deadline: record.int("future_admin_deadline")?,
            admin_account: record.public_key("admin_account")?,
            token_account_a: record.public_key("token_account_a")?,
            token_account_b: record.public_key("token_account_b")?,
            pool_token_mint: record.public_key("pool_token_mint")?,
            mint_a: record.public_key("mint_a")?,
            mint_b: record.public_key("mint_b")?,
            admin_fee_account_a: record.public_key("admin_fee_account_a")?,
            admin_fee_account_b: record.public_key("admin_fee_account_b")?,
            fees: Fees::from_record(record.nested("fees")?)?,
        })
    }

    /// Encode back into the exact 363-byte wire form.
    pub fn encode(&self) -> Result<Vec<u8>, ClientError> {
        let record = Record::new()
            .with("is_initialized", Value::Uint(self.is_initialized as u64))
            .with("is_paused", Value::Uint(self.is_paused as u64))
            .with("nonce", Value::Uint(self.nonce as u64))
            .with("initial_amp_factor", Value::Uint(self.initial_amp_factor))
            .with("target_amp_factor", Value::Uint(self.target_amp_factor))
            .with("start_ramp_ts", Value::Int(self.start_ramp_ts))
            .with("stop_ramp_ts", Value::Int(self.stop_ramp_ts))
            .with("future_admin_deadline", Value::Int(self.future_admin_deadline))
            .with("admin_account", Value::PublicKey(self.admin_account))
            .with("token_account_a", Value::PublicKey(self.token_account_a))
            .with("token_account_b", Value::PublicKey(self.token_account_b))
            .with("pool_token_mint", Value::PublicKey(self.pool_token_mint))
            .with("mint_a", Value::PublicKey(self.mint_a))
            .with("mint_b", Value::PublicKey(self.mint_b))
            .with(
                "admin_fee_account_a",
                Value::PublicKey(self.admin_fee_account_a),
            )
            .with(
                "admin_fee_account_b",
                Value::PublicKey(self.admin_fee_account_b),
            )
            .with("fees", Value::Struct(self.fees.to_record()));
        Ok(Self::layout().encode(&record)?)
    }
}

fn decode_flag(name: &str, value: u64) -> Result<bool, ClientError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(ClientError::InvalidAccountData(format!(
            "flag `{name}` must be 0 or 1, got {other}"
        ))),
    }
}
