//! Browser console logging helpers.

use wasm_bindgen::JsValue;

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
