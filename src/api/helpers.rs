//! Shared helpers for WASM API operations
//!
//! Serialization, deserialization and error conversion shared by the
//! JavaScript-facing editor class.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::EditorError;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize an optional value from JavaScript
///
/// `undefined` and `null` yield `T::default()`.
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, EditorError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| EditorError::InvalidConfig(format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        js_sys::Error::new(&msg).into()
    })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert an editor error to a JavaScript `Error`
pub fn to_js_error(err: EditorError) -> JsValue {
    log::warn!("Rejected editor call: {}", err);
    js_sys::Error::new(&err.to_string()).into()
}
