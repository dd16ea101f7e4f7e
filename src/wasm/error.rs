//! WebAssembly error handling for XMP extraction

use crate::core::error::XmpError as RustXmpError;
use wasm_bindgen::prelude::*;

/// WebAssembly error type for XMP extraction
///
/// This provides structured error information that JavaScript can inspect.
///
/// # Example
///
/// ```javascript
/// import { XmpErrorKind } from './pkg/xmpflat.js';
/// try {
///     await extractXmp(data);
/// } catch (error) {
///     if (error.kind === XmpErrorKind.MalformedMarkup) {
///         console.log("Broken XMP packet:", error.message);
///     }
/// }
/// ```
#[wasm_bindgen]
pub struct XmpError {
    kind: XmpErrorKind,
    message: String,
}

impl std::fmt::Display for XmpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// XMP Error kinds (exported enum for JavaScript)
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XmpErrorKind {
    /// The argument was not a `Uint8Array`
    InvalidInput,
    /// The XMP packet failed to tokenize
    MalformedMarkup,
}

#[wasm_bindgen]
impl XmpError {
    /// Get the error kind enum value
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> XmpErrorKind {
        self.kind
    }

    /// Get the error message
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Convert Rust XmpError to WebAssembly XmpError
pub(crate) fn xmp_error_to_wasm_error(err: RustXmpError) -> XmpError {
    let kind = match &err {
        RustXmpError::InvalidInput(_) => XmpErrorKind::InvalidInput,
        RustXmpError::MalformedMarkup(_) => XmpErrorKind::MalformedMarkup,
    };
    XmpError {
        kind,
        message: err.message().to_string(),
    }
}
