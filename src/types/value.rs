//! XMP value types
//!
//! This module defines the values produced when flattening an XMP packet:
//! a single coerced value ([`XmpValue`]) and the slot that accumulates one or
//! more of them under a key ([`XmpEntry`]).

use std::fmt;

/// A single coerced XMP text value
#[derive(Debug, Clone, PartialEq)]
pub enum XmpValue {
    /// Text passed through unchanged (after trimming)
    String(String),
    /// Integer value (ratings)
    Integer(i64),
    /// Floating-point value (region areas)
    Float(f64),
    /// Numeric tag whose text did not start with a number
    NotANumber,
}

impl XmpValue {
    /// Get the value as a string, if it is a string type
    pub fn as_str(&self) -> Option<&str> {
        match self {
            XmpValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is an integer type
    pub fn as_int(&self) -> Option<i64> {
        match self {
            XmpValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float.
    ///
    /// Integers widen to `f64` and [`XmpValue::NotANumber`] becomes `f64::NAN`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            XmpValue::Integer(i) => Some(*i as f64),
            XmpValue::Float(f) => Some(*f),
            XmpValue::NotANumber => Some(f64::NAN),
            XmpValue::String(_) => None,
        }
    }

    /// Whether this is the not-a-number sentinel
    pub fn is_nan(&self) -> bool {
        matches!(self, XmpValue::NotANumber)
    }
}

impl fmt::Display for XmpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmpValue::String(s) => write!(f, "{}", s),
            XmpValue::Integer(i) => write!(f, "{}", i),
            XmpValue::Float(v) => write!(f, "{}", v),
            XmpValue::NotANumber => write!(f, "NaN"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Serialize for XmpValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            XmpValue::String(s) => serializer.serialize_str(s),
            XmpValue::Integer(i) => serializer.serialize_i64(*i),
            XmpValue::Float(v) => serializer.serialize_f64(*v),
            XmpValue::NotANumber => serializer.serialize_f64(f64::NAN),
        }
    }
}

impl From<String> for XmpValue {
    fn from(s: String) -> Self {
        XmpValue::String(s)
    }
}

impl From<&str> for XmpValue {
    fn from(s: &str) -> Self {
        XmpValue::String(s.to_string())
    }
}

impl From<i64> for XmpValue {
    fn from(i: i64) -> Self {
        XmpValue::Integer(i)
    }
}

impl From<f64> for XmpValue {
    fn from(v: f64) -> Self {
        XmpValue::Float(v)
    }
}

/// The value slot stored under a record key
///
/// The first value seen for a key is kept as [`XmpEntry::Single`]. The second
/// one turns the slot into [`XmpEntry::Multiple`] holding both, and every
/// later value is appended in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum XmpEntry {
    /// Exactly one value was seen
    Single(XmpValue),
    /// Two or more values, in document order
    Multiple(Vec<XmpValue>),
}

impl XmpEntry {
    /// Fold another value into this slot
    pub fn push(&mut self, value: XmpValue) {
        match self {
            XmpEntry::Multiple(values) => values.push(value),
            XmpEntry::Single(first) => {
                let first = std::mem::replace(first, XmpValue::NotANumber);
                *self = XmpEntry::Multiple(vec![first, value]);
            }
        }
    }

    /// The single value, if only one was seen
    pub fn as_single(&self) -> Option<&XmpValue> {
        match self {
            XmpEntry::Single(value) => Some(value),
            XmpEntry::Multiple(_) => None,
        }
    }

    /// All values in document order
    pub fn values(&self) -> &[XmpValue] {
        match self {
            XmpEntry::Single(value) => std::slice::from_ref(value),
            XmpEntry::Multiple(values) => values,
        }
    }

    /// The first value seen
    pub fn first(&self) -> Option<&XmpValue> {
        self.values().first()
    }

    /// Number of values accumulated
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Always false; a slot only exists once a value has been seen
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Whether the slot has become a sequence
    pub fn is_multiple(&self) -> bool {
        matches!(self, XmpEntry::Multiple(_))
    }
}

impl From<XmpValue> for XmpEntry {
    fn from(value: XmpValue) -> Self {
        XmpEntry::Single(value)
    }
}

impl fmt::Display for XmpEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmpEntry::Single(value) => write!(f, "{}", value),
            XmpEntry::Multiple(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Serialize for XmpEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::Serialize;

        match self {
            XmpEntry::Single(value) => value.serialize(serializer),
            XmpEntry::Multiple(values) => values.serialize(serializer),
        }
    }
}
