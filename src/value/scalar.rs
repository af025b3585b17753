use alloc::string::String;
use core::fmt;

// -----------------------------------------------------------------------------
// Scalar

/// A leaf value: a single non-container datum.
///
/// Scalars terminate traversal — stepping *through* a scalar always fails,
/// even when the scalar is a string.
///
/// # Examples
///
/// ```
/// use dotpath::{Scalar, Value};
///
/// let value = Value::from("hello");
/// assert_eq!(value.as_scalar(), Some(&Scalar::Str("hello".into())));
/// assert_eq!(value.as_str(), Some("hello"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Returns the inner boolean, if this is a [`Scalar::Bool`].
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the inner integer, if this is a [`Scalar::Int`].
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns this scalar as a float.
    ///
    /// Integers are widened; this is lossy above 2^53.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the inner string slice, if this is a [`Scalar::Str`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => fmt::Display::fmt(value, f),
            Self::Int(value) => fmt::Display::fmt(value, f),
            Self::Float(value) => fmt::Display::fmt(value, f),
            Self::Str(value) => fmt::Display::fmt(value, f),
        }
    }
}
