//! Decoded record values.
//!
//! A [`Record`] is an ordered name -> value mapping produced by decoding a
//! [`StructLayout`](crate::layout::StructLayout) (and consumed by encoding
//! one). Entry order follows the layout's declaration order, which is what
//! makes `decode` then `encode` reproduce the original bytes exactly.

use crate::error::LayoutError;
use crate::layout::PUBLIC_KEY_SPAN;

/// A single decoded field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Unsigned little-endian integer (widened to u64 regardless of the
    /// field's declared byte width).
    Uint(u64),
    /// Signed little-endian 64-bit integer (Unix timestamps).
    Int(i64),
    /// Opaque 32-byte identity blob; never interpreted as a number.
    PublicKey([u8; PUBLIC_KEY_SPAN]),
    /// A nested sub-record.
    Struct(Record),
}

/// An ordered collection of named field values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    entries: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any existing entry with the same name.
    pub fn set(&mut self, name: &'static str, value: Value) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Builder-style [`set`](Self::set), for constructing records to encode.
    pub fn with(mut self, name: &'static str, value: Value) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Read an unsigned integer field.
    pub fn uint(&self, name: &'static str) -> Result<u64, LayoutError> {
        match self.get(name) {
            Some(Value::Uint(v)) => Ok(*v),
            Some(_) => Err(LayoutError::TypeMismatch(name)),
            None => Err(LayoutError::MissingField(name)),
        }
    }

    /// Read a signed 64-bit integer field.
    pub fn int(&self, name: &'static str) -> Result<i64, LayoutError> {
        match self.get(name) {
            Some(Value::Int(v)) => Ok(*v),
            Some(_) => Err(LayoutError::TypeMismatch(name)),
            None => Err(LayoutError::MissingField(name)),
        }
    }

    /// Read a 32-byte identity field.
    pub fn public_key(&self, name: &'static str) -> Result<[u8; PUBLIC_KEY_SPAN], LayoutError> {
        match self.get(name) {
            Some(Value::PublicKey(key)) => Ok(*key),
            Some(_) => Err(LayoutError::TypeMismatch(name)),
            None => Err(LayoutError::MissingField(name)),
        }
    }

    /// Read a nested sub-record.
    pub fn nested(&self, name: &'static str) -> Result<&Record, LayoutError> {
        match self.get(name) {
            Some(Value::Struct(record)) => Ok(record),
            Some(_) => Err(LayoutError::TypeMismatch(name)),
            None => Err(LayoutError::MissingField(name)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
