//! Page initialisation
//!
//! [`bind`] checks the document, configures the calendar and registers the
//! five listeners. The returned [`Bindings`] unregisters them when disposed
//! or dropped.

use std::rc::Rc;

use logpage_types::{PageConfig, PageError};

use crate::calendar::{CalendarInput, CalendarSetup};
use crate::dom::{EventHandler, PageDom, PageEvent};
use crate::page::LogPage;

/// Live listeners of a bound page.
pub struct Bindings<D: PageDom> {
    page: LogPage<D>,
    listeners: Vec<D::Listener>,
}

impl<D: PageDom> Bindings<D> {
    pub fn page(&self) -> &LogPage<D> {
        &self.page
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Remove every listener registered by [`bind`].
    pub fn dispose(self) {
        drop(self);
    }
}

impl<D: PageDom> Drop for Bindings<D> {
    fn drop(&mut self) {
        let dom = Rc::clone(self.page.dom());
        for listener in self.listeners.drain(..) {
            dom.unlisten(listener);
        }
    }
}

/// Wire the log page.
///
/// Fails with [`PageError::Initialization`] naming the first missing element
/// and with [`PageError::InvalidArgument`] for bad calendar input or select
/// values. Nothing is registered when it fails.
pub fn bind<D>(
    dom: Rc<D>,
    config: PageConfig,
    calendar: &CalendarInput,
) -> Result<Bindings<D>, PageError>
where
    D: PageDom + 'static,
{
    if let Some(missing) = config.ids.required().into_iter().find(|id| !dom.has_element(id)) {
        return Err(PageError::missing(missing));
    }

    let setup = CalendarSetup::compute(calendar, &config)?;
    let page = LogPage::from_document(Rc::clone(&dom), config)?;
    dom.init_calendar(&page.config().ids.datepicker, &setup)?;

    let mut bindings = Bindings {
        page: page.clone(),
        listeners: Vec::with_capacity(5),
    };

    let ids = page.config().ids.clone();
    let routes: [(&str, PageEvent, EventHandler); 5] = [
        (&ids.datepicker, PageEvent::DateChange, {
            let page = page.clone();
            Box::new(move |date: String| {
                if let Err(e) = page.select_date(&date) {
                    tracing::warn!(error = %e, "Ignoring date selection");
                }
            })
        }),
        (&ids.logger_select, PageEvent::Change, {
            let page = page.clone();
            Box::new(move |logger: String| {
                if let Err(e) = page.set_logger(&logger) {
                    tracing::warn!(error = %e, "Ignoring logger selection");
                }
            })
        }),
        (&ids.level_select, PageEvent::Change, {
            let page = page.clone();
            Box::new(move |level: String| {
                if let Err(e) = page.set_level(&level) {
                    tracing::warn!(error = %e, "Ignoring level selection");
                }
            })
        }),
        (&ids.back_to_top, PageEvent::Click, {
            let page = page.clone();
            Box::new(move |_: String| page.back_to_top())
        }),
        (&ids.go_to_bottom, PageEvent::Click, {
            let page = page.clone();
            Box::new(move |_: String| page.go_to_bottom())
        }),
    ];

    for (id, event, handler) in routes {
        // On error the partially filled bindings drop and unregister
        let listener = dom.listen(id, event, handler)?;
        bindings.listeners.push(listener);
    }

    let state = page.state();
    tracing::info!(
        logger = %state.current_logger,
        level = %state.current_level,
        listeners = bindings.listeners.len(),
        "Log page bound"
    );
    Ok(bindings)
}
