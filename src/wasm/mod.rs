//! WebAssembly JavaScript bindings for xmpflat
//!
//! Enable the `wasm` feature to use these bindings.
//!
//! # Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [lib]
//! crate-type = ["cdylib"]
//!
//! [dependencies]
//! xmpflat = { version = "0.1.0", features = ["wasm"] }
//! ```
//!
//! Then build with:
//! ```bash
//! wasm-pack build --target web --out-dir pkg
//! ```
//!
//! Use in JavaScript:
//! ```javascript
//! import init, { extractXmp } from './pkg/xmpflat.js';
//! await init();
//! const data = await extractXmp(new Uint8Array(/* file bytes */));
//! console.log(data.keywords, data.raw["dc:subject"]);
//! ```
//!
//! The returned promise rejects with an `XmpError` whose `kind` is
//! `InvalidInput` when the argument is not a `Uint8Array`, or
//! `MalformedMarkup` when the packet does not tokenize.

mod error;
mod extract;

pub use error::{XmpError, XmpErrorKind};
pub use extract::{extract_xmp, extract_xmp_with, ExtractOptions};
