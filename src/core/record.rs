//! Extracted XMP record
//!
//! The record holds two views of the same text values: `raw`, keyed by the
//! innermost qualified tag name, and the friendly fields, keyed by the derived
//! camelCase name.

use crate::types::value::{XmpEntry, XmpValue};
use std::collections::btree_map::{self, BTreeMap, Entry};

/// Flattened XMP metadata
///
/// # Example
///
/// ```rust
/// use xmpflat::{extract_xmp, XmpValue};
///
/// let record = extract_xmp(
///     b"JFIF<x:xmpmeta><rdf:RDF><rdf:Description>\
///       <dc:rights>All rights reserved</dc:rights>\
///       </rdf:Description></rdf:RDF></x:xmpmeta>",
/// )?;
///
/// let terms = XmpValue::from("All rights reserved");
/// assert_eq!(record.get("terms").and_then(|e| e.as_single()), Some(&terms));
/// assert_eq!(record.get_raw("dc:rights").and_then(|e| e.as_single()), Some(&terms));
/// # Ok::<(), xmpflat::XmpError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmpRecord {
    raw: BTreeMap<String, XmpEntry>,
    fields: BTreeMap<String, XmpEntry>,
}

impl XmpRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries keyed by the innermost qualified tag name (e.g. `dc:subject`)
    pub fn raw(&self) -> &BTreeMap<String, XmpEntry> {
        &self.raw
    }

    /// Entries keyed by friendly name (e.g. `keywords`)
    pub fn fields(&self) -> &BTreeMap<String, XmpEntry> {
        &self.fields
    }

    /// Look up a friendly field
    pub fn get(&self, key: &str) -> Option<&XmpEntry> {
        self.fields.get(key)
    }

    /// Look up a raw entry by qualified tag name
    pub fn get_raw(&self, tag: &str) -> Option<&XmpEntry> {
        self.raw.get(tag)
    }

    /// Whether any friendly field is present under `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterate over friendly fields in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, XmpEntry> {
        self.fields.iter()
    }

    /// Number of friendly fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no XMP text was extracted
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty() && self.fields.is_empty()
    }

    /// Fold `value` into both views
    pub(crate) fn insert(&mut self, raw_key: &str, friendly_key: String, value: XmpValue) {
        fold(&mut self.raw, raw_key.to_string(), value.clone());
        fold(&mut self.fields, friendly_key, value);
    }
}

fn fold(map: &mut BTreeMap<String, XmpEntry>, key: String, value: XmpValue) {
    match map.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(XmpEntry::Single(value));
        }
        Entry::Occupied(mut slot) => slot.get_mut().push(value),
    }
}

impl<'a> IntoIterator for &'a XmpRecord {
    type Item = (&'a String, &'a XmpEntry);
    type IntoIter = btree_map::Iter<'a, String, XmpEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as `{"raw": {...}, "<field>": ..., ...}`.
///
/// A friendly field that is itself named `raw` would collide with the raw
/// map and is left out of the serialized form; it stays reachable through
/// [`XmpRecord::get`].
#[cfg(feature = "serde")]
impl serde::ser::Serialize for XmpRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;

        let fields = self.fields.iter().filter(|(key, _)| key.as_str() != "raw");
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("raw", &self.raw)?;
        for (key, entry) in fields {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}
