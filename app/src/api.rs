//! JS API bindings
//!
//! Raw bindings to the `Datepicker` widget and helpers for converting the
//! values the host page hands over.

use wasm_bindgen::prelude::*;

use logpage_types::{PageConfig, PageError};

// ─────────────────────────────────────────────────────────────────────────────
// Raw Datepicker Bindings
// ─────────────────────────────────────────────────────────────────────────────

#[wasm_bindgen]
extern "C" {
    /// vanillajs-datepicker instance, loaded by the page as a global
    #[derive(Clone)]
    pub type Datepicker;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(element: &web_sys::Element, options: &JsValue) -> Result<Datepicker, JsValue>;

    /// Select a date given as a millisecond timestamp
    #[wasm_bindgen(method, js_name = "setDate")]
    pub fn set_date(this: &Datepicker, date: f64);

    /// Selected date formatted with `format`, `undefined` when cleared
    #[wasm_bindgen(method, js_name = "getDate")]
    pub fn get_date(this: &Datepicker, format: &str) -> JsValue;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Datepicker);
}

/// Format requested from `getDate` for navigation
pub const NAV_DATE_FORMAT: &str = "yyyy-mm-dd";

// ─────────────────────────────────────────────────────────────────────────────
// Helper Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a JS exception into a page error, keeping its message if it has one
pub fn js_err(e: JsValue) -> PageError {
    PageError::Js(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// Deserialize a JsValue into a type, mapping failures to `InvalidArgument`
pub fn from_js<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, PageError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| PageError::invalid(format!("bad {what}: {e}")))
}

/// Page config from the optional `LOG_PAGE_CONFIG` object.
///
/// Returns the defaults alongside the parse error when the object is
/// malformed, so the caller can report it once logging is up.
pub fn read_config(value: JsValue) -> (PageConfig, Option<PageError>) {
    if value.is_undefined() || value.is_null() {
        return (PageConfig::default(), None);
    }
    match from_js(value, "LOG_PAGE_CONFIG") {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    }
}

/// `Date.prototype.getTimezoneOffset()` of the viewer, in minutes
pub fn timezone_offset_minutes() -> i32 {
    js_sys::Date::new_0().get_timezone_offset() as i32
}
