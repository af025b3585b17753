/// Builds a [`Value`] tree from a literal description.
///
/// Supported forms:
///
/// - `value!(null)` — a stored null.
/// - `value!(absent)` — the absent marker.
/// - `value!([elem, ...])` — a sequence; each element is itself a `value!`
///   form.
/// - `value!({ "key": elem, ... })` — a mapping with string-literal keys.
/// - `value!(expr)` — anything with an `Into<Value>` conversion.
///
/// Trailing commas are accepted in sequences and mappings.
///
/// # Examples
///
/// ```
/// use dotpath::{Value, value};
///
/// let root = value!({
///     "name": "ada",
///     "scores": [1, 2, 3],
///     "retired": null,
/// });
///
/// assert_eq!(root.resolve("name"), &Value::from("ada"));
/// assert_eq!(root.resolve("scores.2"), &Value::from(3));
/// assert!(root.resolve("retired").is_null());
/// ```
///
/// [`Value`]: crate::Value
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };
    (absent) => {
        $crate::Value::Absent
    };
    ([ $( $elem:tt ),* $(,)? ]) => {{
        #[allow(unused_mut)]
        let mut seq = $crate::__macro_exports::Vec::new();
        $( seq.push($crate::value!($elem)); )*
        $crate::Value::Seq(seq)
    }};
    ({ $( $key:literal : $val:tt ),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut map = <$crate::__macro_exports::Map as ::core::default::Default>::default();
        $( map.insert($crate::__macro_exports::String::from($key), $crate::value!($val)); )*
        $crate::Value::Map(map)
    }};
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::value::{Map, Scalar, Value};

    #[test]
    fn leaf_forms() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(absent), Value::Absent);
        assert_eq!(value!(3), Value::Scalar(Scalar::Int(3)));
        assert_eq!(value!(true), Value::Scalar(Scalar::Bool(true)));
        assert_eq!(value!("s"), Value::Scalar(Scalar::Str("s".into())));
    }

    #[test]
    fn empty_containers() {
        assert_eq!(value!([]), Value::Seq(vec![]));
        assert_eq!(value!({}), Value::Map(Map::default()));
    }

    #[test]
    fn nested_containers() {
        let built = value!({ "a": [1, { "b": null }], "c": absent });

        let mut inner = Map::default();
        inner.insert("b".into(), Value::Null);

        let mut map = Map::default();
        map.insert("a".into(), Value::Seq(vec![1.into(), Value::Map(inner)]));
        map.insert("c".into(), Value::Absent);

        assert_eq!(built, Value::Map(map));
    }

    #[test]
    fn trailing_commas() {
        let built = value!({ "a": [1, 2,], });
        assert_eq!(built.resolve("a.1"), &Value::from(2));
    }
}
