//! WebAssembly bindings for XMP extraction

use crate::core::error::XmpError as RustXmpError;
use crate::core::options::ExtractOptions as RustExtractOptions;
use crate::wasm::error::xmp_error_to_wasm_error;
use crate::{XmpEntry, XmpExtractor, XmpRecord, XmpValue};
use js_sys::{Array, Object, Promise, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Options for XMP extraction (WebAssembly)
///
/// # Example
///
/// ```javascript
/// const options = new ExtractOptions();
/// options.accept_marker_at_start();  // read standalone .xmp sidecars
/// const data = await extractXmpWith(sidecarBytes, options);
/// ```
#[derive(Default)]
#[wasm_bindgen]
pub struct ExtractOptions {
    inner: RustExtractOptions,
}

#[wasm_bindgen]
impl ExtractOptions {
    /// Create default options
    #[wasm_bindgen(constructor)]
    pub fn new() -> ExtractOptions {
        ExtractOptions::default()
    }

    /// Accept an opening marker found at byte offset 0
    pub fn accept_marker_at_start(&mut self) {
        self.inner = self.inner.accept_marker_at_start();
    }

    /// Reject packets nested deeper than `depth`
    pub fn max_depth(&mut self, depth: usize) {
        self.inner = self.inner.max_depth(depth);
    }
}

/// Extract XMP metadata from file bytes.
///
/// Resolves to `{ raw: {...}, <friendlyKey>: ... }`. Non-numeric ratings and
/// areas come through as `NaN`.
#[wasm_bindgen(js_name = extractXmp)]
pub fn extract_xmp(input: JsValue) -> Promise {
    extract_xmp_with(input, &ExtractOptions::default())
}

/// Extract XMP metadata from file bytes with options.
#[wasm_bindgen(js_name = extractXmpWith)]
pub fn extract_xmp_with(input: JsValue, options: &ExtractOptions) -> Promise {
    match settle(&input, options.inner) {
        Ok(value) => Promise::resolve(&value),
        Err(err) => Promise::reject(&err),
    }
}

fn settle(input: &JsValue, options: RustExtractOptions) -> Result<JsValue, JsValue> {
    let Some(bytes) = input.dyn_ref::<Uint8Array>() else {
        let err = RustXmpError::InvalidInput("expected a Uint8Array".to_string());
        return Err(xmp_error_to_wasm_error(err).into());
    };

    let record = XmpExtractor::with_options(options)
        .extract(bytes.to_vec())
        .map_err(|err| JsValue::from(xmp_error_to_wasm_error(err)))?;
    record_to_js(&record)
}

fn record_to_js(record: &XmpRecord) -> Result<JsValue, JsValue> {
    let raw = Object::new();
    for (key, entry) in record.raw() {
        Reflect::set(&raw, &JsValue::from_str(key), &entry_to_js(entry))?;
    }

    let object = Object::new();
    Reflect::set(&object, &JsValue::from_str("raw"), &raw)?;
    for (key, entry) in record.fields() {
        // The raw map owns this key
        if key == "raw" {
            continue;
        }
        Reflect::set(&object, &JsValue::from_str(key), &entry_to_js(entry))?;
    }
    Ok(object.into())
}

fn entry_to_js(entry: &XmpEntry) -> JsValue {
    match entry {
        XmpEntry::Single(value) => value_to_js(value),
        XmpEntry::Multiple(values) => values.iter().map(value_to_js).collect::<Array>().into(),
    }
}

fn value_to_js(value: &XmpValue) -> JsValue {
    match value {
        XmpValue::String(s) => JsValue::from_str(s),
        XmpValue::Integer(i) => JsValue::from_f64(*i as f64),
        XmpValue::Float(f) => JsValue::from_f64(*f),
        XmpValue::NotANumber => JsValue::from_f64(f64::NAN),
    }
}
