//! Provide path-based access into [`Value`] trees.
//!
//! This module implements nested lookup with a compact, human-readable path
//! syntax: segments joined by literal `.` characters, where each segment is a
//! mapping key or a sequence position. Three path forms are accepted
//! (see [`PathKey`]):
//!
//! - a string, split on `.`;
//! - a pre-split sequence of segment strings;
//! - a reusable parsed [`Path`], for running the same path many times.
//!
//! Lookup is defensive by design: missing keys, out-of-range indices,
//! wrong-shaped intermediates, empty paths, and null or absent roots all
//! degrade to the absent marker. Nothing on this surface returns an error or
//! panics. See [`Value::resolve`] and [`Value::resolve_or`].
//!
//! # Examples
//!
//! ```
//! use dotpath::{Value, value};
//!
//! let root = value!({
//!     "a": { "b": { "c": "value" } },
//!     "arr": [1, 2, { "x": "test" }],
//! });
//!
//! assert_eq!(root.resolve("a.b.c").as_str(), Some("value"));
//! assert_eq!(root.resolve("arr.2.x").as_str(), Some("test"));
//!
//! let fallback = Value::from("default");
//! assert_eq!(root.resolve_or("a.b.missing", &fallback).as_str(), Some("default"));
//! ```
//!
//! [`Value`]: crate::value::Value
//! [`Value::resolve`]: crate::value::Value::resolve
//! [`Value::resolve_or`]: crate::value::Value::resolve_or

// -----------------------------------------------------------------------------
// Modules

mod path;
mod resolve;
mod segment;

// -----------------------------------------------------------------------------
// Exports

pub use path::{Path, PathKey};
pub use segment::Segment;
