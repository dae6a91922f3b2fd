//! Upstream collaborator contracts.
//!
//! The client implements neither RPC transport nor token metadata lookup;
//! it consumes both through these traits and only sequences the calls.

use token_math::Token;

use crate::error::ClientError;
use crate::state::StableSwapState;

/// Supplies raw account bytes for an address. The RPC transport seam.
pub trait AccountLoader {
    fn account_data(&self, address: &[u8; 32]) -> Result<Vec<u8>, ClientError>;
}

/// Supplies the token identity (mint + decimals) for a mint address.
pub trait TokenRegistry {
    fn token(&self, mint: &[u8; 32]) -> Result<Token, ClientError>;
}

/// Load and decode a swap account in one step.
pub fn load_swap_state(
    loader: &impl AccountLoader,
    swap_account: &[u8; 32],
) -> Result<StableSwapState, ClientError> {
    let data = loader.account_data(swap_account)?;
    StableSwapState::decode(&data)
}

/// Resolve the two pool token identities from a decoded state.
pub fn pool_tokens(
    state: &StableSwapState,
    registry: &impl TokenRegistry,
) -> Result<(Token, Token), ClientError> {
    Ok((registry.token(&state.mint_a)?, registry.token(&state.mint_b)?))
}
