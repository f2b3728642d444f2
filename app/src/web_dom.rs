//! `web-sys` document
//!
//! The browser implementation of [`PageDom`]. Visibility is toggled through
//! the inline `display` style only, so the page's own CSS stays in charge of
//! everything else.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlSelectElement, Window};

use logpage_core::{CalendarSetup, EventHandler, PageDom, PageEvent, ScrollMetrics};
use logpage_types::PageError;

use crate::api::{self, Datepicker, NAV_DATE_FORMAT};

/// A registered DOM listener. Keeps the closure alive until removed.
pub struct WebListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

pub struct WebDom {
    window: Window,
    document: Document,
    datepicker: RefCell<Option<Datepicker>>,
}

impl WebDom {
    pub fn new() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or_else(|| PageError::Js("No window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| PageError::Js("No document".to_string()))?;
        Ok(Self {
            window,
            document,
            datepicker: RefCell::new(None),
        })
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn select(&self, id: &str) -> Option<HtmlSelectElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    }
}

impl Drop for WebDom {
    fn drop(&mut self) {
        if let Some(picker) = self.datepicker.borrow_mut().take() {
            picker.destroy();
        }
    }
}

fn set_display(el: &HtmlElement, visible: bool) {
    let style = el.style();
    let result = if visible {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
    if let Err(e) = result {
        tracing::debug!(id = %el.id(), visible, error = ?e, "Failed to set display");
    }
}

/// Value of the `<select>` that dispatched `event`
fn select_target_value(event: &Event) -> String {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
        .unwrap_or_default()
}

impl PageDom for WebDom {
    type Listener = WebListener;

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_element_visible(&self, id: &str, visible: bool) -> bool {
        match self.html_element(id) {
            Some(el) => {
                set_display(&el, visible);
                true
            }
            None => false,
        }
    }

    fn set_class_visible(&self, class: &str, visible: bool) -> usize {
        let elements = self.document.get_elements_by_class_name(class);
        let count = elements.length();
        for i in 0..count {
            if let Some(el) = elements.item(i)
                && let Some(html_el) = el.dyn_ref::<HtmlElement>()
            {
                set_display(html_el, visible);
            }
        }
        count as usize
    }

    fn select_value(&self, id: &str) -> Option<String> {
        self.select(id).map(|select| select.value())
    }

    fn set_select_value(&self, id: &str, value: &str) {
        if let Some(select) = self.select(id) {
            select.set_value(value);
        }
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        match self.document.document_element() {
            Some(root) => ScrollMetrics {
                scroll_top: f64::from(root.scroll_top()),
                scroll_height: f64::from(root.scroll_height()),
                viewport_height,
            },
            None => ScrollMetrics {
                viewport_height,
                ..ScrollMetrics::default()
            },
        }
    }

    fn set_scroll_top(&self, top: f64) {
        if let Some(root) = self.document.document_element() {
            root.set_scroll_top(top as i32);
        }
    }

    fn navigate(&self, url: &str) -> Result<(), PageError> {
        self.window.location().set_href(url).map_err(api::js_err)
    }

    fn init_calendar(&self, id: &str, setup: &CalendarSetup) -> Result<(), PageError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::missing(id))?;
        let options = serde_wasm_bindgen::to_value(&setup.options)
            .map_err(|e| PageError::Js(format!("datepicker options: {e}")))?;

        let picker = Datepicker::new(&element, &options).map_err(api::js_err)?;
        picker.set_date(setup.current as f64);

        if let Some(old) = self.datepicker.borrow_mut().replace(picker) {
            old.destroy();
        }
        Ok(())
    }

    fn listen(
        &self,
        id: &str,
        event: PageEvent,
        mut handler: EventHandler,
    ) -> Result<WebListener, PageError> {
        let target: EventTarget = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::missing(id))?
            .into();

        let closure: Closure<dyn FnMut(Event)> = match event {
            PageEvent::Change => Closure::new(move |e: Event| handler(select_target_value(&e))),
            PageEvent::DateChange => {
                let picker = self
                    .datepicker
                    .borrow()
                    .clone()
                    .ok_or_else(|| PageError::Js("datepicker not initialised".to_string()))?;
                Closure::new(move |_: Event| {
                    let date = picker.get_date(NAV_DATE_FORMAT).as_string().unwrap_or_default();
                    handler(date)
                })
            }
            PageEvent::Click => Closure::new(move |_: Event| handler(String::new())),
        };

        target
            .add_event_listener_with_callback(event.dom_name(), closure.as_ref().unchecked_ref())
            .map_err(api::js_err)?;

        Ok(WebListener {
            target,
            event: event.dom_name(),
            closure,
        })
    }

    fn unlisten(&self, listener: WebListener) {
        let callback: &js_sys::Function = listener.closure.as_ref().unchecked_ref();
        if let Err(e) = listener
            .target
            .remove_event_listener_with_callback(listener.event, callback)
        {
            tracing::debug!(event = listener.event, error = ?e, "Failed to remove listener");
        }
    }
}
