//! Provide serialization and deserialization support for [`Value`].
//!
//! The implementations are written directly against `serde_core`, so any
//! self-describing format works.
//!
//! # Absent values on the wire
//!
//! Wire formats have a null; none of them has an absent marker. The mapping
//! is one-way:
//!
//! - Serializing: a mapping entry holding [`Value::Absent`] is skipped
//!   entirely; an absent element of a sequence (or a bare absent root)
//!   serializes as the format's null, the same as [`Value::Null`].
//! - Deserializing: a wire null becomes [`Value::Null`], never
//!   [`Value::Absent`]. The absent marker only arises from failed resolution
//!   or explicit construction.
//!
//! # Examples
//!
//! ```
//! use dotpath::{Value, value};
//!
//! let root = value!({ "keep": null, "drop": absent });
//! let json = serde_json::to_string(&root).unwrap();
//! assert_eq!(json, r#"{"keep":null}"#);
//!
//! let back: Value = serde_json::from_str(&json).unwrap();
//! assert!(back.resolve("keep").is_null());
//! assert!(back.resolve("drop").is_absent());
//! ```
//!
//! [`Value`]: crate::value::Value
//! [`Value::Absent`]: crate::value::Value::Absent
//! [`Value::Null`]: crate::value::Value::Null

// -----------------------------------------------------------------------------
// Modules

mod de;
mod ser;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::value;
    use crate::value::Value;

    #[test]
    fn json_round_trip() {
        let root = value!({
            "a": { "b": { "c": "value" } },
            "arr": [1, 2.5, true, null],
            "name": "ada",
        });

        let json = serde_json::to_string(&root).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn absent_map_entries_are_dropped() {
        let root = value!({ "undef": absent });
        assert_eq!(serde_json::to_string(&root).unwrap(), "{}");
    }

    #[test]
    fn absent_sequence_elements_become_null() {
        let root = value!([1, absent, 3]);
        assert_eq!(serde_json::to_string(&root).unwrap(), "[1,null,3]");
        assert_eq!(serde_json::to_string(&Value::Absent).unwrap(), "null");
    }

    #[test]
    fn wire_null_is_stored_null() {
        let back: Value = serde_json::from_str(r#"{"a": null}"#).unwrap();
        assert!(back.resolve("a").is_null());
        assert!(!back.resolve("a").is_absent());
    }

    #[test]
    fn big_unsigned_degrades_to_float() {
        let json = alloc::format!("{}", u64::MAX);
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_f64(), Some(u64::MAX as f64));
    }

    #[test]
    fn ron_round_trip() {
        let root = value!({ "speed": 2.5, "tags": ["a", "b"] });

        let text = ron::to_string(&root).unwrap();
        let back: Value = ron::from_str(&text).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn resolve_after_deserialize() {
        let json = r#"{"data": {"items": [{"id": 1}, {"id": 2}]}}"#;
        let root: Value = serde_json::from_str(json).unwrap();

        assert_eq!(root.resolve("data.items.1.id"), &Value::from(2));
        assert!(root.resolve("data.items.5.id").is_absent());

        let key: String = "data".into();
        assert!(!root.get(&key).unwrap().is_absent());
    }
}
