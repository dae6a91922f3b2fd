//! Property tests for the codec round-trip laws: any record satisfying the
//! field constraints survives encode -> decode unchanged, and any buffer of
//! exactly the layout's span survives decode -> encode byte-for-byte.

use account_layout::{Field, LayoutError, Record, StructLayout, Value};
use proptest::prelude::*;

/// A layout exercising every field kind, shaped like a small swap account.
fn swap_like_layout() -> StructLayout {
    let fee = StructLayout::new(vec![Field::u64("num"), Field::u64("den")]);
    StructLayout::new(vec![
        Field::u8("flag"),
        Field::u16("count"),
        Field::u32("slot"),
        Field::u64("amount"),
        Field::i64("ts"),
        Field::public_key("owner"),
        Field::nested("fee", fee),
    ])
}

// 1 + 2 + 4 + 8 + 8 + 32 + 16
const SPAN: usize = 71;

proptest! {
    #[test]
    fn encode_then_decode_reproduces_record(
        flag in 0u64..=0xFF,
        count in 0u64..=0xFFFF,
        slot in 0u64..=0xFFFF_FFFF,
        amount in any::<u64>(),
        ts in any::<i64>(),
        owner in any::<[u8; 32]>(),
        num in any::<u64>(),
        den in any::<u64>(),
    ) {
        let layout = swap_like_layout();
        let record = Record::new()
            .with("flag", Value::Uint(flag))
            .with("count", Value::Uint(count))
            .with("slot", Value::Uint(slot))
            .with("amount", Value::Uint(amount))
            .with("ts", Value::Int(ts))
            .with("owner", Value::PublicKey(owner))
            .with(
                "fee",
                Value::Struct(
                    Record::new()
                        .with("num", Value::Uint(num))
                        .with("den", Value::Uint(den)),
                ),
            );

        let buf = layout.encode(&record).unwrap();
        prop_assert_eq!(buf.len(), SPAN);

        let (decoded, consumed) = layout.decode(&buf, 0).unwrap();
        prop_assert_eq!(consumed, SPAN);
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn decode_then_encode_reproduces_bytes(buf in prop::collection::vec(any::<u8>(), SPAN)) {
        let layout = swap_like_layout();
        let (record, consumed) = layout.decode(&buf, 0).unwrap();
        prop_assert_eq!(consumed, SPAN);
        prop_assert_eq!(layout.encode(&record).unwrap(), buf);
    }

    #[test]
    fn short_buffers_never_partially_decode(len in 0usize..SPAN) {
        let layout = swap_like_layout();
        let buf = vec![0u8; len];
        prop_assert_eq!(
            layout.decode(&buf, 0),
            Err(LayoutError::BufferTooShort { needed: SPAN, available: len })
        );
    }
}

#[test]
fn layout_span_matches_manual_arithmetic() {
    assert_eq!(swap_like_layout().span(), SPAN);
}
