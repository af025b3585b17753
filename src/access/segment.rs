//! Provide single-layer path accessing support.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use crate::value::Value;

// -----------------------------------------------------------------------------
// Segment

/// A **singular** step within a path: one key name or index string.
///
/// How a segment is applied depends on the value it is applied *to*, not on
/// the segment itself:
///
/// - Mapping: the segment text is looked up as a key.
/// - Sequence: the segment is used as a position, but only when it is a
///   canonical base-10 index (see [`Segment::as_index`]).
/// - Scalar, null, absent: the step fails.
///
/// A failed step is an ordinary miss, never an error.
///
/// # Examples
///
/// ```
/// use dotpath::{Segment, value};
///
/// let root = value!({ "items": [10, 20, 30] });
///
/// let seg = Segment::borrowed("items");
/// let items = seg.step(&root).unwrap();
///
/// assert_eq!(Segment::borrowed("1").step(items).unwrap().as_i64(), Some(20));
/// assert_eq!(Segment::borrowed("9").step(items), None);
/// assert_eq!(Segment::borrowed("x").step(items), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment<'a>(Cow<'a, str>);

impl<'a> Segment<'a> {
    /// Creates a segment borrowing its text.
    #[inline]
    pub fn borrowed(text: &'a str) -> Self {
        Self(Cow::Borrowed(text))
    }

    /// Creates a segment owning its text.
    #[inline]
    pub fn owned(text: String) -> Self {
        Self(Cow::Owned(text))
    }

    /// Returns the segment text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts this into an "owned" value.
    #[inline]
    pub fn into_owned(self) -> Segment<'static> {
        Segment(Cow::Owned(self.0.into_owned()))
    }

    /// Interprets the segment as a sequence index.
    ///
    /// Only canonical decimal forms count: non-empty, ASCII digits only, and
    /// no leading zero (except `"0"` itself). `"02"` is a key, not index 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::Segment;
    ///
    /// assert_eq!(Segment::borrowed("0").as_index(), Some(0));
    /// assert_eq!(Segment::borrowed("12").as_index(), Some(12));
    /// assert_eq!(Segment::borrowed("02").as_index(), None);
    /// assert_eq!(Segment::borrowed("-1").as_index(), None);
    /// assert_eq!(Segment::borrowed("").as_index(), None);
    /// ```
    pub fn as_index(&self) -> Option<usize> {
        let text = self.as_str();
        if text.is_empty() || (text.len() > 1 && text.starts_with('0')) {
            return None;
        }
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse().ok()
    }

    /// Applies this segment to `base`, descending one layer.
    ///
    /// Returns `None` on any miss: missing key, out-of-range index,
    /// non-index segment against a sequence, or a non-container `base`.
    pub fn step<'r>(&self, base: &'r Value) -> Option<&'r Value> {
        match base {
            Value::Map(map) => map.get(self.as_str()),
            Value::Seq(seq) => self.as_index().and_then(|index| seq.get(index)),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Segment<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Self::borrowed(text)
    }
}

impl fmt::Display for Segment<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::Segment;
    use crate::value;
    use crate::value::Value;

    #[test]
    fn index_forms() {
        assert_eq!(Segment::borrowed("0").as_index(), Some(0));
        assert_eq!(Segment::borrowed("10").as_index(), Some(10));

        // Non-canonical forms are keys, not indices.
        assert_eq!(Segment::borrowed("01").as_index(), None);
        assert_eq!(Segment::borrowed("+1").as_index(), None);
        assert_eq!(Segment::borrowed("1.0").as_index(), None);
        assert_eq!(Segment::borrowed(" 1").as_index(), None);
        assert_eq!(Segment::borrowed("").as_index(), None);
    }

    #[test]
    fn step_dispatches_on_base_kind() {
        let map = value!({ "a": 1, "0": "zero-key" });
        let seq = value!(["x", "y"]);

        assert_eq!(Segment::borrowed("a").step(&map).and_then(Value::as_i64), Some(1));
        // Against a map, a digit segment is still a key.
        assert_eq!(
            Segment::borrowed("0").step(&map).and_then(Value::as_str),
            Some("zero-key"),
        );

        assert_eq!(Segment::borrowed("0").step(&seq).and_then(Value::as_str), Some("x"));
        assert_eq!(Segment::borrowed("2").step(&seq), None);
        assert_eq!(Segment::borrowed("a").step(&seq), None);
    }

    #[test]
    fn step_fails_on_leaves() {
        let seg = Segment::borrowed("anything");
        assert_eq!(seg.step(&Value::Absent), None);
        assert_eq!(seg.step(&Value::Null), None);
        assert_eq!(seg.step(&value!("string")), None);
        assert_eq!(seg.step(&value!(5)), None);
    }

    #[test]
    fn owned_and_borrowed_forms_are_equal() {
        let owned = Segment::owned(String::from("key"));
        assert_eq!(owned, Segment::borrowed("key"));

        let seg = Segment::borrowed("key").into_owned();
        assert_eq!(seg.as_str(), "key");
        assert_eq!(seg, owned);
    }
}
