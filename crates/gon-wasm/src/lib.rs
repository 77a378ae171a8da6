//! WASM bindings for gon-core.
//!
//! Exposes `format`, `toJson` and `check` as `#[wasm_bindgen]` functions that
//! can be called from JavaScript/TypeScript. Built with `wasm-bindgen-cli`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p gon-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/gon-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/gon_wasm.wasm
//! ```
//!
//! All three functions parse with the process-wide hook, which is `FailFast`
//! unless the host changes it, so the first error becomes a thrown JS error.

use wasm_bindgen::prelude::*;

fn js_error(e: gon_core::GonError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Parse GON text and re-emit it in canonical layout.
///
/// Throws a JS error if the document is malformed.
#[wasm_bindgen]
pub fn format(gon: &str) -> std::result::Result<String, JsValue> {
    let doc = gon_core::load_from_buffer(gon).map_err(js_error)?;
    doc.to_text().map_err(js_error)
}

/// Parse GON text and convert it to JSON.
///
/// `pretty` selects two-space indentation; otherwise the JSON is compact.
#[wasm_bindgen(js_name = toJson)]
pub fn to_json(gon: &str, pretty: bool) -> std::result::Result<String, JsValue> {
    let doc = gon_core::load_from_buffer(gon).map_err(js_error)?;
    let root = doc.root();
    if pretty {
        gon_core::to_json_pretty(&root).map_err(js_error)
    } else {
        gon_core::to_json(&root).map_err(js_error)
    }
}

/// Validate GON text. Returns the number of top-level members.
#[wasm_bindgen]
pub fn check(gon: &str) -> std::result::Result<usize, JsValue> {
    let doc = gon_core::load_from_buffer(gon).map_err(js_error)?;
    Ok(doc.root().children().count())
}
