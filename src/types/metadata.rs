//! Read-only metadata attached to an [`Error`](crate::Error).
//!
//! [`Metadata`] is an ordered map from string keys to [`MetadataValue`]s. Once
//! built it exposes no mutating API, so a map shared through an error can be
//! handed across threads without locking. Keys are kept sorted, which makes
//! rendering and hashing deterministic.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{metadata, MetadataValue};
//!
//! let meta = metadata! { "severity" => "error", "attempt" => 3 };
//! assert_eq!(meta.get("attempt"), Some(&MetadataValue::Integer(3)));
//! assert_eq!(meta.to_string(), "{attempt=3, severity=error}");
//! ```
use crate::types::alloc_type::{BTreeMap, String};
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single metadata value.
///
/// `Integer` and `Unsigned` compare and hash by numeric value, so `Integer(3)`
/// equals `Unsigned(3)`. Unsigned conversions only produce `Unsigned` above
/// `i64::MAX`.
///
/// `Float` compares and hashes by its bit pattern so that the whole map can be
/// `Eq` and `Hash`; `NaN` equals itself and `0.0` differs from `-0.0`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MetadataValue {
    Boolean(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl MetadataValue {
    /// Returns the text if this is a `Text` value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as `i64` when it is an integer that fits.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Unsigned(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Returns the value if this is a `Boolean`.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl PartialEq for MetadataValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Unsigned(a), Self::Unsigned(b)) => a == b,
            (Self::Integer(a), Self::Unsigned(b)) | (Self::Unsigned(b), Self::Integer(a)) => {
                i128::from(*a) == i128::from(*b)
            },
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for MetadataValue {}

impl Hash for MetadataValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Boolean(b) => {
                0u8.hash(state);
                b.hash(state);
            },
            // Both integer variants share one tag so equal numbers hash alike.
            Self::Integer(v) => {
                1u8.hash(state);
                i128::from(*v).hash(state);
            },
            Self::Unsigned(v) => {
                1u8.hash(state);
                i128::from(*v).hash(state);
            },
            Self::Float(v) => {
                2u8.hash(state);
                v.to_bits().hash(state);
            },
            Self::Text(s) => {
                3u8.hash(state);
                s.hash(state);
            },
        }
    }
}

impl Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Unsigned(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MetadataValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for MetadataValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for MetadataValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for MetadataValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for MetadataValue {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::Integer(value as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for MetadataValue {
            #[inline]
            fn from(value: $ty) -> Self {
                let value = value as u64;
                i64::try_from(value).map_or(Self::Unsigned(value), Self::Integer)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64, usize);

/// Immutable, ordered string-keyed metadata map.
///
/// An error without metadata holds `None`, not an empty `Metadata`; the two
/// render differently (`null` vs `{}`) and compare unequal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Metadata {
    entries: BTreeMap<String, MetadataValue>,
}

impl Metadata {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Returns a copy of this map with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        f.write_str("}")
    }
}

impl From<BTreeMap<String, MetadataValue>> for Metadata {
    #[inline]
    fn from(entries: BTreeMap<String, MetadataValue>) -> Self {
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    #[inline]
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
