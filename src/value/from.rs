//! Conversions into [`Value`].

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::value::{Map, Scalar, Value};

// -----------------------------------------------------------------------------
// Scalars

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Scalar(Scalar::Int(value as i64))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, isize, u8, u16, u32);

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Value::Scalar(Scalar::Int(value))
    }
}

impl From<u64> for Value {
    /// Stores the integer when it fits in `i64`, otherwise widens to a float.
    #[inline]
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Value::Scalar(Scalar::Int(value)),
            Err(_) => Value::Scalar(Scalar::Float(value as f64)),
        }
    }
}

impl From<usize> for Value {
    #[inline]
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Bool(value))
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Scalar(Scalar::Float(value.into()))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::Str(value.into()))
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::Str(value))
    }
}

impl From<Cow<'_, str>> for Value {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Value::Scalar(Scalar::Str(value.into_owned()))
    }
}

impl From<Scalar> for Value {
    #[inline]
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

// -----------------------------------------------------------------------------
// Containers

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Value::Seq(value)
    }
}

impl From<Map> for Value {
    #[inline]
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

/// `None` converts to a stored null, not to the absent marker.
impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    #[inline]
    fn from_iter<I: IntoIterator<Item = V>>(items: I) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, V)>>(items: I) -> Self {
        let mut map = Map::default();
        for (key, value) in items {
            map.insert(key.into(), value.into());
        }
        Value::Map(map)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn int_widening() {
        assert_eq!(Value::from(7_u8), Value::Scalar(Scalar::Int(7)));
        assert_eq!(Value::from(-7_i32), Value::Scalar(Scalar::Int(-7)));
        assert_eq!(Value::from(7_u64), Value::Scalar(Scalar::Int(7)));

        // Beyond i64, integers degrade to floats rather than failing.
        let big = u64::MAX;
        assert_eq!(Value::from(big), Value::Scalar(Scalar::Float(big as f64)));
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Value::from(Some(1)), Value::Scalar(Scalar::Int(1)));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn collecting() {
        let seq: Value = [1, 2, 3].into_iter().collect();
        assert_eq!(seq, Value::Seq(vec![1.into(), 2.into(), 3.into()]));

        let map: Value = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map.get("b").and_then(Value::as_i64), Some(2));
    }
}
