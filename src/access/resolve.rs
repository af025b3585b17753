//! Provide multi-layer path accessing support.

use crate::access::PathKey;
use crate::value::Value;

/// Resolution failures borrow this instead of allocating.
static ABSENT: Value = Value::Absent;

impl Value {
    /// Resolves `path` against this value.
    ///
    /// Traverses segments left to right, descending one layer per segment.
    /// Returns the reached value — which may legitimately be [`Value::Null`],
    /// `0`, `false`, or an empty string — or [`Value::Absent`] on any
    /// non-resolution:
    ///
    /// - the path is empty,
    /// - a key is missing or a sequence index is out of range,
    /// - traversal hits a scalar, a null, or an absent marker before the
    ///   path is consumed.
    ///
    /// No input errors: malformed segments and wrong-shaped intermediates
    /// miss, they never panic.
    ///
    /// For string-form paths, the whole string is first tried as one literal
    /// key of the root mapping, so a key that contains the delimiter (such as
    /// `"dot.key"`) stays reachable. Splitting on `.` is otherwise
    /// unconditional.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::{Value, value};
    ///
    /// let root = value!({ "a": { "b": { "c": "value" } } });
    ///
    /// assert_eq!(root.resolve("a.b.c").as_str(), Some("value"));
    /// assert_eq!(root.resolve(["a", "b", "c"]).as_str(), Some("value"));
    /// assert!(root.resolve("a.b.x").is_absent());
    /// ```
    pub fn resolve<'p>(&self, path: impl PathKey<'p>) -> &Value {
        // The whole-string key wins before any splitting.
        if let Some(key) = path.literal_key()
            && let Some(found) = self.get(key)
        {
            return found;
        }

        let mut segments = path.to_segments().peekable();
        if segments.peek().is_none() {
            return &ABSENT;
        }

        let mut current = self;
        for segment in segments {
            if matches!(current, Value::Null | Value::Absent) {
                return &ABSENT;
            }
            current = match segment.step(current) {
                Some(value) => value,
                None => return &ABSENT,
            };
        }
        current
    }

    /// Resolves `path`, substituting `fallback` on non-resolution.
    ///
    /// The fallback replaces only the absent marker. A resolved
    /// [`Value::Null`] is a real value and is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::{Value, value};
    ///
    /// let root = value!({ "a": { "b": null } });
    /// let fallback = Value::from("default");
    ///
    /// assert_eq!(root.resolve_or("a.x", &fallback).as_str(), Some("default"));
    /// assert_eq!(root.resolve_or("a.b", &fallback), &Value::Null);
    /// ```
    #[inline]
    pub fn resolve_or<'r, 'p>(&'r self, path: impl PathKey<'p>, fallback: &'r Value) -> &'r Value {
        match self.resolve(path) {
            Value::Absent => fallback,
            found => found,
        }
    }

    /// Resolves `path`, returning `None` instead of the absent marker.
    #[inline]
    pub fn resolve_opt<'p>(&self, path: impl PathKey<'p>) -> Option<&Value> {
        match self.resolve(path) {
            Value::Absent => None,
            found => Some(found),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
