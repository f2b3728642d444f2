//! Log page controller
//!
//! Owns the UI state and performs the page operations on a [`PageDom`].
//! Cloning is cheap: clones share the document, config and state, which is
//! how each bound event handler gets its own handle.

use std::cell::RefCell;
use std::rc::Rc;

use logpage_types::{LogLevel, PageConfig, PageError};

use crate::calendar::{navigation_url, parse_date};
use crate::dom::PageDom;
use crate::scroll;
use crate::state::UiState;
use crate::visibility::{apply_level, apply_logger};

pub struct LogPage<D: PageDom> {
    dom: Rc<D>,
    config: Rc<PageConfig>,
    state: Rc<RefCell<UiState>>,
}

impl<D: PageDom> Clone for LogPage<D> {
    fn clone(&self) -> Self {
        Self {
            dom: Rc::clone(&self.dom),
            config: Rc::clone(&self.config),
            state: Rc::clone(&self.state),
        }
    }
}

impl<D: PageDom> LogPage<D> {
    pub fn new(dom: Rc<D>, config: PageConfig, state: UiState) -> Self {
        Self {
            dom,
            config: Rc::new(config),
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Seed the state from the current values of the logger and level selects.
    pub fn from_document(dom: Rc<D>, config: PageConfig) -> Result<Self, PageError> {
        let ids = &config.ids;
        let logger = dom
            .select_value(&ids.logger_select)
            .ok_or_else(|| PageError::missing(ids.logger_select.as_str()))?;
        validate_logger(&logger)?;
        let level: LogLevel = dom
            .select_value(&ids.level_select)
            .ok_or_else(|| PageError::missing(ids.level_select.as_str()))?
            .parse()?;

        Ok(Self::new(dom, config, UiState::new(logger, level)))
    }

    pub fn dom(&self) -> &Rc<D> {
        &self.dom
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Snapshot of the current logger and level.
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Show entries at or above `level`, hide the rest.
    pub fn set_level(&self, level: &str) -> Result<(), PageError> {
        let level: LogLevel = level.parse()?;
        self.state.borrow_mut().select_level(level);
        apply_level(self.dom.as_ref(), &self.config.ids, level);
        tracing::debug!(%level, "Log level changed");
        Ok(())
    }

    /// Show `logger`'s panel, applying the pinned-logger level coupling.
    ///
    /// A logger without a panel is rejected and nothing changes, so the
    /// current panel stays the only visible one.
    pub fn set_logger(&self, logger: &str) -> Result<(), PageError> {
        validate_logger(logger)?;
        let panel = self.config.ids.logger_panel(logger);
        if !self.dom.has_element(&panel) {
            return Err(PageError::invalid(format!("no panel #{panel} for logger '{logger}'")));
        }

        let transition = self.state.borrow_mut().select_logger(
            logger,
            &self.config.pinned_debug_logger,
            self.config.fallback_level,
        );

        let ids = &self.config.ids;
        apply_logger(self.dom.as_ref(), ids, transition.hide.as_deref(), &transition.show);
        if let Some(level) = transition.level {
            self.dom.set_select_value(&ids.level_select, level.as_str());
            apply_level(self.dom.as_ref(), ids, level);
            tracing::debug!(logger, %level, "Logger switch changed level");
        } else {
            tracing::debug!(logger, "Logger changed");
        }
        Ok(())
    }

    /// Navigate to the page for `date` (`yyyy-mm-dd`).
    pub fn select_date(&self, date: &str) -> Result<(), PageError> {
        let date = parse_date(date)?;
        let url = navigation_url(&self.config.navigation_route, date);
        tracing::info!(%url, "Navigating to log date");
        self.dom.navigate(&url)
    }

    pub fn back_to_top(&self) {
        scroll::back_to_top(self.dom.as_ref());
    }

    pub fn go_to_bottom(&self) {
        scroll::go_to_bottom(self.dom.as_ref());
    }
}

/// Logger names become element ids, so they must be non-empty and
/// whitespace-free.
fn validate_logger(logger: &str) -> Result<(), PageError> {
    if logger.is_empty() || logger.chars().any(char::is_whitespace) {
        return Err(PageError::invalid(format!("bad logger name '{logger}'")));
    }
    Ok(())
}
