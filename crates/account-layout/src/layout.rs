//! Declarative fixed-width account layouts.
//!
//! On-chain account records are packed little-endian structs: no padding,
//! fixed field order, fixed widths. A [`StructLayout`] describes such a
//! record once; `decode` and `encode` walk the same field list, so the two
//! directions cannot drift apart. Offsets are derived from declaration
//! order, never hand-maintained.
//!
//! ```text
//! Field:
//!   uint(w)      little-endian unsigned integer, w in 1..=8 bytes
//!   i64          little-endian signed 64-bit integer
//!   public_key   opaque 32-byte identity blob
//!   nested       sub-layout occupying one contiguous region
//! ```
//!
//! Layouts are built once and reused; they hold no per-call state and are
//! safe to share across threads behind a `&'static` or `OnceLock`.

use crate::error::LayoutError;
use crate::record::{Record, Value};

/// Byte width of a public-key (identity) field.
pub const PUBLIC_KEY_SPAN: usize = 32;

#[derive(Debug, Clone)]
enum FieldKind {
    Uint { width: usize },
    Int64,
    PublicKey,
    Struct(StructLayout),
}

/// A named, fixed-width field descriptor.
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    kind: FieldKind,
}

impl Field {
    /// Little-endian unsigned integer field of `width` bytes (1..=8).
    ///
    /// Panics on an invalid width: layouts are static schema declarations,
    /// so a bad width is a programming error, not runtime input.
    pub fn uint(name: &'static str, width: usize) -> Self {
        assert!(
            (1..=8).contains(&width),
            "uint field width must be 1..=8 bytes"
        );
        Self {
            name,
            kind: FieldKind::Uint { width },
        }
    }

    pub fn u8(name: &'static str) -> Self {
        Self::uint(name, 1)
    }

    pub fn u16(name: &'static str) -> Self {
        Self::uint(name, 2)
    }

    pub fn u32(name: &'static str) -> Self {
        Self::uint(name, 4)
    }

    pub fn u64(name: &'static str) -> Self {
        Self::uint(name, 8)
    }

    /// Little-endian signed 64-bit integer field (Unix timestamps).
    pub fn i64(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Int64,
        }
    }

    /// Opaque 32-byte identity field (account key or mint address).
    pub fn public_key(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::PublicKey,
        }
    }

    /// Compose a sub-layout as a single named field of the parent. The
    /// sub-layout's span was computed at its construction and is reused.
    pub fn nested(name: &'static str, layout: StructLayout) -> Self {
        Self {
            name,
            kind: FieldKind::Struct(layout),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fixed byte length of this field.
    pub fn span(&self) -> usize {
        match &self.kind {
            FieldKind::Uint { width } => *width,
            FieldKind::Int64 => 8,
            FieldKind::PublicKey => PUBLIC_KEY_SPAN,
            FieldKind::Struct(layout) => layout.span(),
        }
    }
}

/// An ordered list of named fields decoded/encoded as one contiguous
/// byte region.
#[derive(Debug, Clone)]
pub struct StructLayout {
    fields: Vec<Field>,
    span: usize,
}

impl StructLayout {
    /// Build a layout from ordered fields. The total span is computed here,
    /// once, and reused by every decode/encode call.
    ///
    /// Panics on a duplicate field name: a repeated name would make one
    /// slot shadow the other and break the decode/encode round trip, so a
    /// misdeclared schema fails at construction like a bad field width.
    pub fn new(fields: Vec<Field>) -> Self {
        for (i, field) in fields.iter().enumerate() {
            assert!(
                !fields[..i].iter().any(|f| f.name == field.name),
                "duplicate field name `{}` in layout",
                field.name
            );
        }
        let span = fields.iter().map(Field::span).sum();
        Self { fields, span }
    }

    /// Total byte length this layout consumes from / produces into a buffer.
    pub fn span(&self) -> usize {
        self.span
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Byte offset of a direct field, derived from declaration order.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        let mut offset = 0;
        for field in &self.fields {
            if field.name == name {
                return Some(offset);
            }
            offset += field.span();
        }
        None
    }

    /// Decode `span` bytes of `buf` starting at `offset`.
    ///
    /// Returns the decoded record and the number of bytes consumed (always
    /// exactly the layout's span). Fails with [`LayoutError::BufferTooShort`]
    /// before reading anything if fewer than `span` bytes remain.
    pub fn decode(&self, buf: &[u8], offset: usize) -> Result<(Record, usize), LayoutError> {
        let available = buf.len().saturating_sub(offset);
        if available < self.span {
            return Err(LayoutError::BufferTooShort {
                needed: self.span,
                available,
            });
        }

        let mut record = Record::new();
        let mut cursor = offset;
        for field in &self.fields {
            let value = match &field.kind {
                FieldKind::Uint { width } => {
                    let mut le = [0u8; 8];
                    le[..*width].copy_from_slice(&buf[cursor..cursor + width]);
                    Value::Uint(u64::from_le_bytes(le))
                }
                FieldKind::Int64 => {
                    let mut le = [0u8; 8];
                    le.copy_from_slice(&buf[cursor..cursor + 8]);
                    Value::Int(i64::from_le_bytes(le))
                }
                FieldKind::PublicKey => {
                    let mut key = [0u8; PUBLIC_KEY_SPAN];
                    key.copy_from_slice(&buf[cursor..cursor + PUBLIC_KEY_SPAN]);
                    Value::PublicKey(key)
                }
                FieldKind::Struct(layout) => {
                    let (nested, _) = layout.decode(buf, cursor)?;
                    Value::Struct(nested)
                }
            };
            record.set(field.name, value);
            cursor += field.span();
        }

        Ok((record, self.span))
    }

    /// Encode a record into a fresh buffer of exactly `span` bytes.
    ///
    /// Fields are written in declaration order at their derived offsets.
    /// Fails with [`LayoutError::FieldOutOfRange`] when an integer value
    /// does not fit its declared width; nothing is ever truncated.
    pub fn encode(&self, record: &Record) -> Result<Vec<u8>, LayoutError> {
        let mut out = Vec::with_capacity(self.span);
        self.encode_into(record, &mut out)?;
        Ok(out)
    }

    fn encode_into(&self, record: &Record, out: &mut Vec<u8>) -> Result<(), LayoutError> {
        for field in &self.fields {
            let value = record
                .get(field.name)
                .ok_or(LayoutError::MissingField(field.name))?;

            match (&field.kind, value) {
                (FieldKind::Uint { width }, Value::Uint(v)) => {
                    if *width < 8 && *v >> (width * 8) != 0 {
                        return Err(LayoutError::FieldOutOfRange {
                            field: field.name,
                            reason: format!("{v} does not fit in {width} byte(s)"),
                        });
                    }
                    out.extend_from_slice(&v.to_le_bytes()[..*width]);
                }
                (FieldKind::Int64, Value::Int(v)) => {
                    out.extend_from_slice(&v.to_le_bytes());
                }
                (FieldKind::PublicKey, Value::PublicKey(key)) => {
                    out.extend_from_slice(key);
                }
                (FieldKind::Struct(layout), Value::Struct(nested)) => {
                    layout.encode_into(nested, out)?;
                }
                _ => return Err(LayoutError::TypeMismatch(field.name)),
            }
        }
        Ok(())
    }
}
