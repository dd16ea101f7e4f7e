//! # xmpflat
//!
//! Extract the XMP packet embedded in raw file bytes and flatten it into a
//! record of friendly, camelCased keys.
//!
//! The extractor finds the `<x:xmpmeta>` envelope by byte search, so it works
//! on any container (JPEG, PNG, TIFF, MP4, PDF...) as long as the packet is
//! stored uncompressed. Every non-blank text node is stored twice: under its
//! innermost qualified tag name in [`XmpRecord::raw`], and under a derived
//! friendly key such as `keywords` or `regionAreaX`.
//!
//! ```rust
//! use xmpflat::{extract_xmp, XmpEntry, XmpValue};
//!
//! let bytes = b"\x89PNG...<x:xmpmeta><rdf:RDF><rdf:Description>\
//!     <dc:subject><rdf:Bag><rdf:li>cat</rdf:li><rdf:li>dog</rdf:li></rdf:Bag></dc:subject>\
//!     <MicrosoftPhoto:Rating>88</MicrosoftPhoto:Rating>\
//!     </rdf:Description></rdf:RDF></x:xmpmeta>...";
//!
//! let record = extract_xmp(bytes)?;
//! assert_eq!(
//!     record.get("keywords"),
//!     Some(&XmpEntry::Multiple(vec!["cat".into(), "dog".into()]))
//! );
//! assert_eq!(record.get("mRating"), Some(&XmpEntry::Single(XmpValue::Integer(4))));
//! # Ok::<(), xmpflat::XmpError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: serialize [`XmpRecord`] as `{"raw": {...}, "<key>": ...}`
//! - `wasm`: JavaScript bindings returning a `Promise`

pub mod core;
pub mod types;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::{
    extract_xmp, extract_xmp_dyn, locate_xmp, ExtractOptions, XmpError, XmpErrorKind,
    XmpExtractor, XmpRecord, XmpResult,
};
pub use crate::types::{XmpEntry, XmpValue};
