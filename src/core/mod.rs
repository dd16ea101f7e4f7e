//! XMP Core module
//!
//! This module contains the extraction pipeline: envelope scanning, XML
//! tokenization, key derivation, value coercion and record accumulation.

pub mod coerce;
pub mod error;
pub mod extractor;
pub mod keys;
pub mod options;
pub mod parser;
pub mod record;
pub mod scanner;

pub use coerce::coerce_value;
pub use error::{XmpError, XmpErrorKind, XmpResult};
pub use extractor::{extract_xmp, extract_xmp_dyn, XmpExtractor};
pub use keys::{friendly_key, raw_key, ENVELOPE_TAGS, KEY_ALIASES};
pub use options::ExtractOptions;
pub use parser::{XmlEventHandler, XmpParser};
pub use record::XmpRecord;
pub use scanner::locate_xmp;
