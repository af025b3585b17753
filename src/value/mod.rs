//! The dynamic value model.
//!
//! [`Value`] is an owned, dynamically-typed tree with five representable
//! states: a keyed mapping, an ordered sequence, a scalar leaf, a stored
//! null, and the *absent marker*.
//!
//! # Absent vs. null
//!
//! The two "empty" states are deliberately distinct and never collapse into
//! each other:
//!
//! - [`Value::Null`] is a value somebody stored. Resolving a path that lands
//!   on it returns it; a fallback is *not* substituted.
//! - [`Value::Absent`] means "no value here". It is what resolution yields for
//!   a missing key, an out-of-range index, or traversal through a dead end,
//!   and it is the only state a fallback replaces.
//!
//! ```
//! use dotpath::{Value, value};
//!
//! let root = value!({ "set": null });
//! let fallback = Value::from("default");
//!
//! // A stored null resolves to null.
//! assert_eq!(root.resolve_or("set", &fallback), &Value::Null);
//! // A missing key resolves to the fallback.
//! assert_eq!(root.resolve_or("unset", &fallback), &fallback);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod from;
mod scalar;

pub use scalar::Scalar;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

// -----------------------------------------------------------------------------
// Map alias

/// The mapping container used by [`Value::Map`].
///
/// String keys, hashed with a fixed-seed *foldhash* state, so lookups need no
/// runtime RNG and work without `std`.
pub type Map = hashbrown::HashMap<String, Value, foldhash::fast::FixedState>;

// -----------------------------------------------------------------------------
// Value

/// An owned, dynamically-typed value.
///
/// Construct values with the [`From`] conversions or the [`value!`] macro,
/// then read them back with the borrowing accessors or by resolving a path
/// (see [`Value::resolve`]).
///
/// # Examples
///
/// ```
/// use dotpath::{Value, value};
///
/// let root = value!({
///     "user": { "name": "ada", "tags": ["admin", "ops"] },
/// });
///
/// assert_eq!(root.resolve("user.name").as_str(), Some("ada"));
/// assert_eq!(root.resolve("user.tags.1").as_str(), Some("ops"));
/// assert!(root.resolve("user.email").is_absent());
/// ```
///
/// [`value!`]: crate::value!
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent marker: no value here. Distinct from [`Value::Null`].
    #[default]
    Absent,
    /// A stored null.
    Null,
    /// A leaf datum. See [`Scalar`].
    Scalar(Scalar),
    /// An ordered sequence, indexable by position.
    Seq(Vec<Value>),
    /// A keyed mapping with string keys.
    Map(Map),
}

impl Value {
    /// Returns which of the five states this value is in.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Absent => ValueKind::Absent,
            Self::Null => ValueKind::Null,
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Seq(_) => ValueKind::Seq,
            Self::Map(_) => ValueKind::Map,
        }
    }

    /// Returns `true` if this is the absent marker.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if this is a stored null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the inner scalar, if any.
    #[inline]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the inner sequence, if any.
    #[inline]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    /// Returns the inner mapping, if any.
    #[inline]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the inner boolean, if this is a boolean scalar.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    /// Returns the inner integer, if this is an integer scalar.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_i64)
    }

    /// Returns this value as a float, widening integer scalars.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    /// Returns the inner string slice, if this is a string scalar.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// Looks up `key` in a mapping.
    ///
    /// Returns `None` when this value is not a mapping or the key is missing.
    /// This is a single shallow step; for nested lookups see
    /// [`Value::resolve`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::value;
    ///
    /// let root = value!({ "a": 1 });
    /// assert_eq!(root.get("a").and_then(|v| v.as_i64()), Some(1));
    /// assert_eq!(root.get("b"), None);
    /// ```
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Looks up a position in a sequence, bounds-checked.
    ///
    /// Returns `None` when this value is not a sequence or the index is out
    /// of range.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_seq().and_then(|seq| seq.get(index))
    }
}

// -----------------------------------------------------------------------------
// Kind

/// The state of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Absent,
    Null,
    Scalar,
    Seq,
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Absent => "absent",
            Self::Null => "null",
            Self::Scalar => "scalar",
            Self::Seq => "seq",
            Self::Map => "map",
        })
    }
}

// -----------------------------------------------------------------------------
// Tests
