//! Log page browser entry point
//!
//! The server-rendered page loads this module and calls
//!
//! ```js
//! initLogPage(DATES, CURRENT_DATE, window.LOG_PAGE_CONFIG);
//! ```
//!
//! once the document is parsed.

pub mod api;
pub mod web_dom;

use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use tracing::Level;
use wasm_bindgen::prelude::*;

use logpage_core::{Bindings, CalendarInput, bind};
use logpage_types::PageError;

pub use web_dom::WebDom;

thread_local! {
    static BINDINGS: RefCell<Option<Bindings<WebDom>>> = const { RefCell::new(None) };
}

/// Bind the log page. Re-binding disposes the previous bindings first.
#[wasm_bindgen(js_name = "initLogPage")]
pub fn init_log_page(dates: JsValue, current_date: String, config: JsValue) -> Result<(), JsValue> {
    let (config, config_err) = api::read_config(config);
    init_logging(&config.log_level);
    if let Some(e) = config_err {
        tracing::warn!(error = %e, "Using default page config");
    }

    dispose_log_page();

    match try_init(dates, current_date, config) {
        Ok(bindings) => {
            BINDINGS.with(|slot| *slot.borrow_mut() = Some(bindings));
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Log page initialisation failed");
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

/// Remove every listener installed by [`init_log_page`].
#[wasm_bindgen(js_name = "disposeLogPage")]
pub fn dispose_log_page() {
    let previous = BINDINGS.with(|slot| slot.borrow_mut().take());
    if let Some(bindings) = previous {
        tracing::debug!(listeners = bindings.listener_count(), "Disposing log page bindings");
        bindings.dispose();
    }
}

fn try_init(
    dates: JsValue,
    current_date: String,
    config: logpage_types::PageConfig,
) -> Result<Bindings<WebDom>, PageError> {
    let calendar = CalendarInput {
        dates: api::from_js(dates, "DATES")?,
        current_date,
        tz_offset_minutes: api::timezone_offset_minutes(),
    };
    let dom = Rc::new(WebDom::new()?);
    bind(dom, config, &calendar)
}

fn init_logging(level: &str) {
    let level = Level::from_str(level).unwrap_or(Level::INFO);
    // Already installed on re-init
    let _ = dioxus_logger::init(level);
}
