use account_layout::LayoutError;
use thiserror::Error;
use token_math::AmountError;

/// Stableswap client errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid account data: {0}")]
    InvalidAccountData(String),

    #[error("account not found")]
    AccountNotFound,

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Math(#[from] AmountError),
}
