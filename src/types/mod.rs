//! XMP value types
//!
//! This module defines the value types stored in extracted records.

pub mod value;

pub use value::{XmpEntry, XmpValue};
