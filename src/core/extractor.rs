//! XMP extraction
//!
//! Ties the pipeline together: locate the envelope, tokenize it, and fold
//! every non-blank text node into an [`XmpRecord`].

use crate::core::coerce::coerce_value;
use crate::core::error::{XmpError, XmpResult};
use crate::core::keys::{friendly_key, raw_key};
use crate::core::options::ExtractOptions;
use crate::core::parser::{XmlEventHandler, XmpParser};
use crate::core::record::XmpRecord;
use crate::core::scanner::locate_xmp;
use std::any::Any;

/// Extracts flattened XMP metadata from raw file bytes
///
/// An extractor holds only its options; every call builds its own state, so a
/// single extractor can be shared across threads.
///
/// # Example
///
/// ```rust
/// use xmpflat::XmpExtractor;
///
/// let bytes = b"\xff\xd8<x:xmpmeta><rdf:RDF><rdf:Description>\
///     <xmp:Rating>4</xmp:Rating>\
///     </rdf:Description></rdf:RDF></x:xmpmeta>";
///
/// let record = XmpExtractor::new().extract(bytes)?;
/// assert_eq!(record.get("rating").unwrap().to_string(), "4");
/// # Ok::<(), xmpflat::XmpError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct XmpExtractor {
    options: ExtractOptions,
}

impl XmpExtractor {
    /// Create an extractor with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with the given options
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// The options in use
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the XMP packet embedded in `buffer`.
    ///
    /// A buffer without a complete `<x:xmpmeta>` envelope yields an empty
    /// record. Malformed XML inside the envelope fails with
    /// [`XmpError::MalformedMarkup`]; no partial record is returned.
    pub fn extract(&self, buffer: impl AsRef<[u8]>) -> XmpResult<XmpRecord> {
        let buffer = buffer.as_ref();
        let Some(range) = locate_xmp(buffer, &self.options) else {
            return Ok(XmpRecord::new());
        };

        let xml = String::from_utf8_lossy(&buffer[range]);
        let mut collector = RecordCollector::default();
        XmpParser::with_max_depth(self.options.max_depth).parse(&xml, &mut collector)?;

        tracing::debug!(
            raw = collector.record.raw().len(),
            fields = collector.record.len(),
            "extracted XMP record"
        );
        Ok(collector.record)
    }

    /// Extract from a dynamically typed input.
    ///
    /// Accepts `Vec<u8>`, `Box<[u8]>` and `&'static [u8]`. Any other type,
    /// strings included, fails with [`XmpError::InvalidInput`].
    pub fn extract_dyn(&self, input: &dyn Any) -> XmpResult<XmpRecord> {
        if let Some(bytes) = input.downcast_ref::<Vec<u8>>() {
            self.extract(bytes)
        } else if let Some(bytes) = input.downcast_ref::<Box<[u8]>>() {
            self.extract(bytes)
        } else if let Some(bytes) = input.downcast_ref::<&'static [u8]>() {
            self.extract(bytes)
        } else {
            Err(XmpError::InvalidInput("expected a byte buffer".to_string()))
        }
    }
}

/// Extract the XMP packet embedded in `buffer` with default options.
///
/// See [`XmpExtractor::extract`].
pub fn extract_xmp(buffer: impl AsRef<[u8]>) -> XmpResult<XmpRecord> {
    XmpExtractor::new().extract(buffer)
}

/// Extract from a dynamically typed input with default options.
///
/// See [`XmpExtractor::extract_dyn`].
pub fn extract_xmp_dyn(input: &dyn Any) -> XmpResult<XmpRecord> {
    XmpExtractor::new().extract_dyn(input)
}

/// Per-call accumulator fed by the tokenizer
#[derive(Debug, Default)]
struct RecordCollector {
    /// Qualified names of the currently open elements
    path: Vec<String>,
    /// Most recently opened element, which drives value coercion
    current_tag: String,
    record: XmpRecord,
}

impl XmlEventHandler for RecordCollector {
    fn open_tag(&mut self, name: &str) -> XmpResult<()> {
        self.current_tag.clear();
        self.current_tag.push_str(name);
        self.path.push(name.to_string());
        Ok(())
    }

    fn text(&mut self, text: &str) -> XmpResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        // Text held only by envelope tags (a bare rdf:li) has no key and is dropped
        let (Some(raw), Some(friendly)) = (raw_key(&self.path), friendly_key(&self.path)) else {
            tracing::trace!(text, "text outside any property ignored");
            return Ok(());
        };

        let value = coerce_value(&self.current_tag, text);
        tracing::trace!(raw, friendly = %friendly, %value, "folding value");
        self.record.insert(raw, friendly, value);
        Ok(())
    }

    fn close_tag(&mut self, _name: &str) -> XmpResult<()> {
        self.path.pop();
        Ok(())
    }
}
