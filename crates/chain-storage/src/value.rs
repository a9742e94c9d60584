//! Dynamic decoded values and key tuples.
//!
//! The wire codec is a collaborator concern: by the time data reaches this
//! crate it has already been decoded into the dynamic [`Value`] shape.
//! This module defines that shape, the [`KeyTuple`] produced by key
//! enumeration, and the tagged [`Lookup`] result of a value fetch.
//!
//! The three-state [`Lookup`] is deliberate. A storage read can find a
//! decoded value, find nothing, or find bytes it cannot interpret — and
//! the last two must never be confused. Callers that only need the first
//! two states use [`Lookup::decoded`], which converts `Malformed` into a
//! [`StorageError::Decode`](crate::StorageError::Decode).

use std::collections::BTreeMap;

use bytes::Bytes;

use crate::error::{StorageError, StorageResult};

/// A decoded chain-storage value.
///
/// Covers the scalar and aggregate shapes the pallet's storage entries use
/// after wire decoding. Accessors return `Option` so callers can attach
/// their own context when a shape mismatch turns into a decode error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// 32-bit unsigned integer (collection and item identifiers).
    U32(u32),
    /// 64-bit unsigned integer.
    U64(u64),
    /// 128-bit unsigned integer (balances, deposits).
    U128(u128),
    /// Boolean flag.
    Bool(bool),
    /// Opaque byte payload (metadata blobs, attribute keys/values).
    Bytes(Bytes),
    /// An account reference in the chain's string form.
    AccountId(String),
    /// A decoded `Option` layer.
    Option(Option<Box<Value>>),
    /// An ordered, positional aggregate.
    Tuple(Vec<Value>),
    /// A named-field aggregate.
    Composite(BTreeMap<String, Value>),
}

impl Value {
    /// Interprets this value as a `u32` identifier.
    ///
    /// Wider integer encodings are accepted when the value fits; anything
    /// else is `None`.
    #[must_use]
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::U32(v) => Some(*v),
            Value::U64(v) => u32::try_from(*v).ok(),
            Value::U128(v) => u32::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Interprets this value as a `u128` amount.
    #[must_use]
    pub fn as_u128(&self) -> Option<u128> {
        match self {
            Value::U32(v) => Some(u128::from(*v)),
            Value::U64(v) => Some(u128::from(*v)),
            Value::U128(v) => Some(*v),
            _ => None,
        }
    }

    /// Interprets this value as a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Interprets this value as a byte payload.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Interprets this value as an account reference.
    #[must_use]
    pub fn as_account(&self) -> Option<&str> {
        match self {
            Value::AccountId(a) => Some(a),
            _ => None,
        }
    }

    /// Interprets this value as a decoded `Option` layer.
    ///
    /// Returns `None` when the value is not an `Option` at all;
    /// `Some(None)` when it is an empty one.
    #[must_use]
    pub fn as_option(&self) -> Option<Option<&Value>> {
        match self {
            Value::Option(inner) => Some(inner.as_deref()),
            _ => None,
        }
    }

    /// Looks up a named field of a composite value.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Composite(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Builds a [`Value::Composite`] from `(name, value)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniques_chain_storage::Value;
    ///
    /// let v = Value::composite([("is_frozen", Value::Bool(false))]);
    /// assert_eq!(v.field("is_frozen").and_then(Value::as_bool), Some(false));
    /// ```
    pub fn composite<'a>(fields: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        Value::Composite(fields.into_iter().map(|(k, v)| (k.to_owned(), v)).collect())
    }

    /// Short name of this value's shape, for decode-error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::U128(_) => "u128",
            Value::Bool(_) => "bool",
            Value::Bytes(_) => "bytes",
            Value::AccountId(_) => "account",
            Value::Option(_) => "option",
            Value::Tuple(_) => "tuple",
            Value::Composite(_) => "composite",
        }
    }
}

/// One stored entry's key, decomposed into fixed-position components.
///
/// Within one enumeration call all tuples share the same shape: the same
/// number of components with the same meaning at each position. For the
/// pallet's `Asset` entry, for example, component 0 is the collection id
/// and component 1 the item id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyTuple(Vec<Value>);

impl KeyTuple {
    /// Creates a key tuple from its components.
    #[must_use]
    pub fn new(components: Vec<Value>) -> Self {
        Self(components)
    }

    /// Returns the component at `index`, if present.
    #[must_use]
    pub fn component(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Number of components in this tuple.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this tuple has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the components in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// All components as a slice.
    #[must_use]
    pub fn components(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for KeyTuple {
    fn from(components: Vec<Value>) -> Self {
        Self::new(components)
    }
}

/// Tagged result of fetching and decoding one stored value.
///
/// | Variant | Meaning |
/// |---------|---------|
/// | `Decoded` | The entry exists and decoded cleanly |
/// | `Absent` | No value is stored at the key (normal, not an error) |
/// | `Malformed` | Bytes are stored but could not be decoded |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The entry exists and decoded to a [`Value`].
    Decoded(Value),
    /// No value is stored at the key.
    Absent,
    /// Stored bytes could not be interpreted as the entry's type.
    Malformed {
        /// Why decoding failed.
        reason: String,
    },
}

impl Lookup {
    /// Collapses the tagged result into `Option<Value>`, surfacing
    /// `Malformed` as a [`StorageError::Decode`] in `context`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Decode`] when the lookup is `Malformed`.
    pub fn decoded(self, context: &str) -> StorageResult<Option<Value>> {
        match self {
            Lookup::Decoded(value) => Ok(Some(value)),
            Lookup::Absent => Ok(None),
            Lookup::Malformed { reason } => Err(StorageError::decode(context, reason)),
        }
    }

    /// Whether this lookup found a decoded value.
    #[must_use]
    pub fn is_decoded(&self) -> bool {
        matches!(self, Lookup::Decoded(_))
    }
}
