//! WASM bindings for compound-json.
//!
//! Exposes `format`, `minify` and `validate` as `#[wasm_bindgen]` functions
//! that can be called from JavaScript/TypeScript. Built with `wasm-bindgen-cli`:
//!
//! ```sh
//! cargo build -p compound-json-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/compound-json-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/compound_json_wasm.wasm
//! ```

use compound_json::{DeserializeOptions, Deserializer};
use wasm_bindgen::prelude::*;

fn reformat(json: &str, pretty: bool) -> compound_json::Result<String> {
    let value = compound_json::deserialize(json)?;
    compound_json::serialize(&value, pretty)
}

/// Re-serialize JSON with 4-space indentation.
///
/// Throws a JS error carrying the line/column message if the input is invalid.
#[wasm_bindgen]
pub fn format(json: &str) -> std::result::Result<String, JsValue> {
    reformat(json, true).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Re-serialize JSON without whitespace.
#[wasm_bindgen]
pub fn minify(json: &str) -> std::result::Result<String, JsValue> {
    reformat(json, false).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Return `undefined` if `json` is one complete JSON value (nothing but
/// whitespace after it), or the error message otherwise.
#[wasm_bindgen]
pub fn validate(json: &str) -> Option<String> {
    Deserializer::with_options(DeserializeOptions::strict())
        .deserialize(json)
        .err()
        .map(|e| e.to_string())
}
