//! Document abstraction
//!
//! Everything the controller needs from the page goes through [`PageDom`].
//! The browser build implements it with `web-sys`; tests use an in-memory
//! document.

use logpage_types::PageError;

use crate::calendar::CalendarSetup;
use crate::scroll::ScrollMetrics;

/// Events the controller listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageEvent {
    /// `<select>` value changed
    Change,
    /// Datepicker date selected
    DateChange,
    /// Button clicked
    Click,
}

impl PageEvent {
    /// DOM event type name
    pub fn dom_name(&self) -> &'static str {
        match self {
            PageEvent::Change => "change",
            PageEvent::DateChange => "changeDate",
            PageEvent::Click => "click",
        }
    }
}

/// Handler invoked with the event's value.
///
/// - `Change`: the select element's new value
/// - `DateChange`: the picked date as `yyyy-mm-dd` (empty when cleared)
/// - `Click`: empty
pub type EventHandler = Box<dyn FnMut(String)>;

/// The page as seen by the controller.
///
/// Methods take `&self`: the document is shared between every bound handler
/// and is only touched from the UI thread.
pub trait PageDom {
    /// Token returned by [`PageDom::listen`], handed back to unregister.
    type Listener;

    fn has_element(&self, id: &str) -> bool;

    /// Show (clear inline `display`) or hide (`display: none`) one element.
    /// Returns false when no element has this id.
    fn set_element_visible(&self, id: &str, visible: bool) -> bool;

    /// Show or hide every element carrying `class`. Returns how many matched.
    fn set_class_visible(&self, class: &str, visible: bool) -> usize;

    fn select_value(&self, id: &str) -> Option<String>;

    /// Set a select's value without dispatching a change event.
    fn set_select_value(&self, id: &str, value: &str);

    fn scroll_metrics(&self) -> ScrollMetrics;

    fn set_scroll_top(&self, top: f64);

    /// Full page navigation to a relative URL.
    fn navigate(&self, url: &str) -> Result<(), PageError>;

    /// Attach the calendar widget to the input `id`.
    fn init_calendar(&self, id: &str, setup: &CalendarSetup) -> Result<(), PageError>;

    fn listen(
        &self,
        id: &str,
        event: PageEvent,
        handler: EventHandler,
    ) -> Result<Self::Listener, PageError>;

    fn unlisten(&self, listener: Self::Listener);
}
