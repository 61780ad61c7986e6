//! WASM bindings for sharecheck
//!
//! This module provides JavaScript-friendly bindings for auditing a test case in the
//! browser.

use wasm_bindgen::prelude::*;

use crate::commands;
use crate::consensus::{AnalysisOptions, TieBreak};
use crate::interpolation::Division;

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Analyze a test case document
///
/// # Arguments
/// * `document` - The test case as JSON text
/// * `tie_break` - `"first-seen"` or `"decimal-order"`
/// * `division` - `"truncating"` or `"exact"`
///
/// # Returns
/// The report as a JSON string, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const report = JSON.parse(wasm_analyze(text, "first-seen", "truncating"));
/// if (report.outcome === "consensus") {
///     console.log(`Secret: ${report.secret}, invalid: ${report.invalid_shares}`);
/// }
/// ```
#[wasm_bindgen]
pub fn wasm_analyze(document: &str, tie_break: &str, division: &str) -> Result<String, JsValue> {
    let options = AnalysisOptions {
        tie_break: tie_break
            .parse::<TieBreak>()
            .map_err(|e| JsValue::from_str(&e))?,
        division: division
            .parse::<Division>()
            .map_err(|e| JsValue::from_str(&e))?,
    };

    let report = commands::analyze_document(document, &options)
        .map_err(|e| JsValue::from_str(&format!("Analysis failed: {e:#}")))?;

    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Decode a value written in `base` and return it in decimal
///
/// # Example (JavaScript)
/// ```javascript
/// console.log(wasm_decode("16", "ff")); // "255"
/// ```
#[wasm_bindgen]
pub fn wasm_decode(base: &str, digits: &str) -> Result<String, JsValue> {
    commands::decode_digits(base, digits)
        .map_err(|e| JsValue::from_str(&format!("Decode failed: {e:#}")))
}
