//! Extraction options
//!
//! This module defines the knobs that control how a buffer is scanned and
//! tokenized.

/// Options for XMP extraction.
///
/// Use the builder pattern to configure options.
///
/// # Example
///
/// ```rust
/// use xmpflat::{ExtractOptions, XmpExtractor};
///
/// let extractor = XmpExtractor::with_options(
///     ExtractOptions::default().accept_marker_at_start().max_depth(64),
/// );
/// let record = extractor.extract(b"<x:xmpmeta><dc:title>t</dc:title></x:xmpmeta>")?;
/// assert_eq!(record.get("title").unwrap().to_string(), "t");
/// # Ok::<(), xmpflat::XmpError>(())
/// ```
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Accept an opening `<x:xmpmeta` marker at byte offset 0 (default: false)
    ///
    /// By default a marker at the very start of the buffer is treated as
    /// absent and the buffer yields an empty record. Enable this to read
    /// standalone `.xmp` sidecar content.
    pub accept_marker_at_start: bool,
    /// Maximum element nesting depth, or `None` for no limit
    pub max_depth: Option<usize>,
}

impl ExtractOptions {
    /// Accept an opening marker found at byte offset 0.
    pub fn accept_marker_at_start(mut self) -> Self {
        self.accept_marker_at_start = true;
        self
    }

    /// Treat an opening marker at byte offset 0 as absent (default).
    pub fn reject_marker_at_start(mut self) -> Self {
        self.accept_marker_at_start = false;
        self
    }

    /// Fail with a markup error when elements nest deeper than `depth`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
