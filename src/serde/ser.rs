use serde_core::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::{Scalar, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Absent has no wire form of its own; bare and in-sequence
            // occurrences fall back to the format's null.
            Value::Absent | Value::Null => serializer.serialize_unit(),
            Value::Scalar(scalar) => scalar.serialize(serializer),
            Value::Seq(seq) => {
                let mut state = serializer.serialize_seq(Some(seq.len()))?;
                for value in seq {
                    state.serialize_element(value)?;
                }
                state.end()
            }
            Value::Map(map) => {
                // Length is unknown up front: absent entries are skipped.
                let mut state = serializer.serialize_map(None)?;
                for (key, value) in map {
                    if value.is_absent() {
                        continue;
                    }
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Bool(value) => serializer.serialize_bool(*value),
            Scalar::Int(value) => serializer.serialize_i64(*value),
            Scalar::Float(value) => serializer.serialize_f64(*value),
            Scalar::Str(value) => serializer.serialize_str(value),
        }
    }
}
