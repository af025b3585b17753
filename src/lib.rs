#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod macros;

pub mod access;
pub mod serde;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use access::{Path, PathKey, Segment};
pub use value::{Map, Scalar, Value, ValueKind};

// -----------------------------------------------------------------------------
// Macro support

#[doc(hidden)]
pub mod __macro_exports {
    pub use alloc::string::String;
    pub use alloc::vec::Vec;

    pub use crate::value::Map;
}
