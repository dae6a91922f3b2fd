//! Cross-crate integration tests exercising the full pipeline:
//! fetch account bytes -> decode swap state -> resolve token identities ->
//! wrap raw integers into exact amounts -> apply fees -> format.
//!
//! These tests use only the public API of the three crates to catch
//! regressions at crate boundaries.

use std::collections::HashMap;

use stableswap_client::{
    from_base58, load_swap_state, pool_tokens, to_base58, AccountLoader, ClientError, Fees,
    StableSwapState, TokenRegistry, SWAP_STATE_SPAN,
};
use token_math::{NumberFormat, Rounding, Token, TokenAmount};

struct InMemoryLoader {
    accounts: HashMap<[u8; 32], Vec<u8>>,
}

impl AccountLoader for InMemoryLoader {
    fn account_data(&self, address: &[u8; 32]) -> Result<Vec<u8>, ClientError> {
        self.accounts
            .get(address)
            .cloned()
            .ok_or(ClientError::AccountNotFound)
    }
}

struct StaticRegistry {
    tokens: HashMap<[u8; 32], Token>,
}

impl TokenRegistry for StaticRegistry {
    fn token(&self, mint: &[u8; 32]) -> Result<Token, ClientError> {
        self.tokens
            .get(mint)
            .copied()
            .ok_or(ClientError::AccountNotFound)
    }
}

fn fixture_state() -> StableSwapState {
    StableSwapState {
        is_initialized: true,
        is_paused: false,
        nonce: 254,
        initial_amp_factor: 1_000,
        target_amp_factor: 2_000,
        start_ramp_ts: 1_650_000_000,
        stop_ramp_ts: 1_650_086_400,
        future_admin_deadline: 0,
        admin_account: [0x0A; 32],
        token_account_a: [0x0B; 32],
        token_account_b: [0x0C; 32],
        pool_token_mint: [0x0D; 32],
        mint_a: [0x05; 32],
        mint_b: [0x06; 32],
        admin_fee_account_a: [0x0E; 32],
        admin_fee_account_b: [0x0F; 32],
        fees: Fees {
            trade_fee_numerator: 30,
            trade_fee_denominator: 10_000,
            withdraw_fee_numerator: 50,
            withdraw_fee_denominator: 10_000,
            admin_trade_fee_numerator: 1,
            admin_trade_fee_denominator: 2,
            admin_withdraw_fee_numerator: 1,
            admin_withdraw_fee_denominator: 4,
        },
    }
}

// ─── fetch -> decode -> amounts -> fees -> format ──────────────────────

#[test]
fn full_pipeline_trade_fee_on_decoded_state() {
    let swap_account = [0x42; 32];
    let state = fixture_state();

    // 1. Store the encoded account and load it back through the contract.
    let loader = InMemoryLoader {
        accounts: HashMap::from([(swap_account, state.encode().unwrap())]),
    };
    let decoded = load_swap_state(&loader, &swap_account).unwrap();
    assert_eq!(decoded, state);

    // 2. Resolve the pool's token identities.
    let registry = StaticRegistry {
        tokens: HashMap::from([
            ([0x05; 32], Token::new([0x05; 32], 6)),
            ([0x06; 32], Token::new([0x06; 32], 6)),
        ]),
    };
    let (token_a, _token_b) = pool_tokens(&decoded, &registry).unwrap();

    // 3. Wrap a raw input quantity and apply the 0.3% trade fee.
    let input = TokenAmount::parse(token_a, "1000").unwrap();
    assert_eq!(input.raw(), 1_000_000_000);

    let fee = decoded.fees.trade_fee().unwrap();
    let output = input.reduce_by_percent(&fee, Rounding::Down).unwrap();
    assert_eq!(output.raw(), 997_000_000);

    // 4. Format for display.
    assert_eq!(output.format(None), "997");
    assert_eq!(output.to_fixed(2, Rounding::Down).unwrap(), "997.00");
    assert_eq!(
        output.format(Some(&NumberFormat::default())),
        "997"
    );
}

#[test]
fn full_pipeline_pool_share_ratio() {
    let token = Token::new([0x05; 32], 6);
    let deposit = TokenAmount::parse(token, "250").unwrap();
    let reserve = TokenAmount::parse(token, "1000").unwrap();

    let share = deposit.divide_by_amount(&reserve).unwrap();
    assert_eq!(share.numerator(), 250_000_000);
    assert_eq!(share.denominator(), 1_000_000_000);

    // Applying the share back to the reserve reproduces the deposit.
    let replayed = reserve.mul_percent(&share, Rounding::Down).unwrap();
    assert_eq!(replayed, deposit);
}

// ─── wire-format fidelity ──────────────────────────────────────────────

#[test]
fn encoded_prefix_matches_wire_contract() {
    let buf = fixture_state().encode().unwrap();
    assert_eq!(buf.len(), SWAP_STATE_SPAN);

    // is_initialized=1, is_paused=0, nonce=254, initial_amp_factor=1000 LE.
    assert_eq!(hex::encode(&buf[..11]), "0100fee803000000000000");
}

#[test]
fn all_zero_account_is_the_zero_state() {
    let zeros = vec![0u8; SWAP_STATE_SPAN];
    let state = StableSwapState::decode(&zeros).unwrap();

    assert!(!state.is_initialized);
    assert_eq!(state.nonce, 0);
    assert_eq!(to_base58(&state.admin_account), "11111111111111111111111111111111");
    assert_eq!(state.fees, Fees::default());

    assert_eq!(state.encode().unwrap(), zeros);
}

#[test]
fn truncated_account_fails_and_consumes_nothing() {
    let swap_account = [0x42; 32];
    let loader = InMemoryLoader {
        accounts: HashMap::from([(swap_account, vec![0u8; SWAP_STATE_SPAN - 1])]),
    };
    let err = load_swap_state(&loader, &swap_account).unwrap_err();
    assert!(matches!(err, ClientError::Layout(_)));
}

// ─── address rendering ─────────────────────────────────────────────────

#[test]
fn identity_fields_render_as_base58() {
    let mint = from_base58("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v").unwrap();
    let mut state = fixture_state();
    state.mint_a = mint;

    let decoded = StableSwapState::decode(&state.encode().unwrap()).unwrap();
    assert_eq!(
        to_base58(&decoded.mint_a),
        "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"
    );
}
