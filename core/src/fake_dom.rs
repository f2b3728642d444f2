//! In-memory document for tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use logpage_types::{ElementIds, LogLevel, PageError};

use crate::calendar::CalendarSetup;
use crate::dom::{EventHandler, PageDom, PageEvent};
use crate::scroll::ScrollMetrics;

/// Entries rendered per severity class
const ENTRIES_PER_LEVEL: usize = 3;

#[derive(Debug, Default)]
struct FakeElement {
    visible: bool,
    value: Option<String>,
}

struct FakeListener {
    id: String,
    event: PageEvent,
    handler: Option<EventHandler>,
}

#[derive(Default)]
pub struct FakeDom {
    elements: RefCell<BTreeMap<String, FakeElement>>,
    /// class -> visibility of each entry carrying it
    classes: RefCell<BTreeMap<String, Vec<bool>>>,
    scroll: Cell<ScrollMetrics>,
    navigations: RefCell<Vec<String>>,
    calendar: RefCell<Option<(String, CalendarSetup)>>,
    listeners: RefCell<Vec<Option<FakeListener>>>,
    /// Make `listen` fail for this element id
    reject_listen: RefCell<Option<String>>,
}

impl FakeDom {
    pub fn with_scroll(scroll_height: f64, viewport_height: f64) -> Self {
        let dom = Self::default();
        dom.scroll.set(ScrollMetrics {
            scroll_top: 0.0,
            scroll_height,
            viewport_height,
        });
        dom
    }

    /// The server-rendered page: controls, one panel per logger with only
    /// `current` visible, entries of every level filtered at `level`.
    pub fn log_page(loggers: &[&str], current: &str, level: LogLevel) -> Self {
        let ids = ElementIds::default();
        let dom = Self::with_scroll(5000.0, 800.0);
        {
            let mut elements = dom.elements.borrow_mut();
            for id in ids.required() {
                elements.insert(id.to_string(), FakeElement::default());
            }
            for logger in loggers {
                elements.insert(
                    ids.logger_panel(logger),
                    FakeElement {
                        visible: *logger == current,
                        value: None,
                    },
                );
            }
        }
        dom.set_select_value(&ids.logger_select, current);
        dom.set_select_value(&ids.level_select, level.as_str());

        let mut classes = dom.classes.borrow_mut();
        for entry_level in LogLevel::all() {
            classes.insert(
                ids.level_class(*entry_level),
                vec![entry_level.is_visible_at(level); ENTRIES_PER_LEVEL],
            );
        }
        drop(classes);
        dom
    }

    pub fn remove_element(&self, id: &str) {
        self.elements.borrow_mut().remove(id);
    }

    pub fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    pub fn reject_listen_on(&self, id: &str) {
        *self.reject_listen.borrow_mut() = Some(id.to_string());
    }

    /// Ids of visible elements named like logger panels.
    pub fn visible_panels(&self) -> Vec<String> {
        let prefix = ElementIds::default().logger_panel_prefix;
        self.elements
            .borrow()
            .iter()
            .filter(|(id, el)| id.starts_with(&prefix) && el.visible)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Levels whose entries are all visible, ascending.
    pub fn visible_levels(&self) -> Vec<LogLevel> {
        let ids = ElementIds::default();
        let classes = self.classes.borrow();
        LogLevel::all()
            .iter()
            .copied()
            .filter(|level| {
                classes
                    .get(&ids.level_class(*level))
                    .is_some_and(|entries| entries.iter().all(|v| *v))
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn calendar(&self) -> Option<(String, CalendarSetup)> {
        self.calendar.borrow().clone()
    }

    pub fn active_listeners(&self) -> usize {
        self.listeners.borrow().iter().flatten().count()
    }

    /// Dispatch `event` on `id` to every registered handler.
    ///
    /// Handlers are taken out while they run so they may call back into the
    /// document.
    pub fn fire(&self, id: &str, event: PageEvent, value: &str) -> usize {
        let slots: Vec<usize> = self
            .listeners
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.as_ref().filter(|l| l.id == id && l.event == event).map(|_| i))
            .collect();

        for &slot in &slots {
            let handler = self.listeners.borrow_mut()[slot]
                .as_mut()
                .and_then(|l| l.handler.take());
            if let Some(mut handler) = handler {
                handler(value.to_string());
                if let Some(l) = self.listeners.borrow_mut()[slot].as_mut() {
                    l.handler = Some(handler);
                }
            }
        }
        slots.len()
    }

    /// A user picking a value: the select changes, then `change` fires.
    pub fn choose(&self, id: &str, value: &str) -> usize {
        self.set_select_value(id, value);
        self.fire(id, PageEvent::Change, value)
    }
}

impl PageDom for FakeDom {
    type Listener = usize;

    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn set_element_visible(&self, id: &str, visible: bool) -> bool {
        match self.elements.borrow_mut().get_mut(id) {
            Some(el) => {
                el.visible = visible;
                true
            }
            None => false,
        }
    }

    fn set_class_visible(&self, class: &str, visible: bool) -> usize {
        match self.classes.borrow_mut().get_mut(class) {
            Some(entries) => {
                entries.iter_mut().for_each(|v| *v = visible);
                entries.len()
            }
            None => 0,
        }
    }

    fn select_value(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).and_then(|el| el.value.clone())
    }

    fn set_select_value(&self, id: &str, value: &str) {
        if let Some(el) = self.elements.borrow_mut().get_mut(id) {
            el.value = Some(value.to_string());
        }
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.scroll.get()
    }

    fn set_scroll_top(&self, top: f64) {
        let mut m = self.scroll.get();
        m.scroll_top = top.clamp(0.0, m.bottom());
        self.scroll.set(m);
    }

    fn navigate(&self, url: &str) -> Result<(), PageError> {
        self.navigations.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn init_calendar(&self, id: &str, setup: &CalendarSetup) -> Result<(), PageError> {
        *self.calendar.borrow_mut() = Some((id.to_string(), setup.clone()));
        Ok(())
    }

    fn listen(
        &self,
        id: &str,
        event: PageEvent,
        handler: EventHandler,
    ) -> Result<usize, PageError> {
        if self.reject_listen.borrow().as_deref() == Some(id) {
            return Err(PageError::Js(format!("cannot listen on #{id}")));
        }
        let mut listeners = self.listeners.borrow_mut();
        listeners.push(Some(FakeListener {
            id: id.to_string(),
            event,
            handler: Some(handler),
        }));
        Ok(listeners.len() - 1)
    }

    fn unlisten(&self, listener: usize) {
        if let Some(slot) = self.listeners.borrow_mut().get_mut(listener) {
            *slot = None;
        }
    }
}
