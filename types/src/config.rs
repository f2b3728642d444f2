//! Page configuration
//!
//! The host page may embed a `LOG_PAGE_CONFIG` object to override element ids
//! or behaviour. Every field has a default matching the server-rendered
//! template, so an absent or partial object is fine.

use serde::{Deserialize, Serialize};

use crate::LogLevel;

/// Ids and name prefixes of the DOM elements the controller drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub datepicker: String,
    pub logger_select: String,
    pub level_select: String,
    pub back_to_top: String,
    pub go_to_bottom: String,
    /// Logger panels are `<prefix><logger name>`
    pub logger_panel_prefix: String,
    /// Entry severity classes are `<prefix><level>`
    pub level_class_prefix: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            datepicker: "datepicker".to_string(),
            logger_select: "logger-select".to_string(),
            level_select: "level-select".to_string(),
            back_to_top: "btn-back-to-top".to_string(),
            go_to_bottom: "btn-go-to-bottom".to_string(),
            logger_panel_prefix: "log-".to_string(),
            level_class_prefix: "log-entry-".to_string(),
        }
    }
}

impl ElementIds {
    /// Element id of the panel holding `logger`'s entries
    pub fn logger_panel(&self, logger: &str) -> String {
        format!("{}{}", self.logger_panel_prefix, logger)
    }

    /// Class shared by every entry of `level`
    pub fn level_class(&self, level: LogLevel) -> String {
        level.css_class(&self.level_class_prefix)
    }

    /// Ids that must exist before any listener is bound, in bind order.
    pub fn required(&self) -> [&str; 5] {
        [
            self.datepicker.as_str(),
            self.logger_select.as_str(),
            self.level_select.as_str(),
            self.back_to_top.as_str(),
            self.go_to_bottom.as_str(),
        ]
    }
}

/// Behaviour knobs for the log page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub ids: ElementIds,
    /// Selecting this logger forces the `debug` level
    pub pinned_debug_logger: String,
    /// Level restored when leaving the pinned logger while at `debug`
    pub fallback_level: LogLevel,
    /// Route navigated to on date selection (`<route>?date=YYYY-MM-DD`)
    pub navigation_route: String,
    /// Datepicker display format
    pub calendar_format: String,
    pub calendar_autohide: bool,
    /// Browser console log level (`trace` .. `error`)
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            pinned_debug_logger: "Trading".to_string(),
            fallback_level: LogLevel::Info,
            navigation_route: "logs".to_string(),
            calendar_format: "M dd yyyy".to_string(),
            calendar_autohide: true,
            log_level: "info".to_string(),
        }
    }
}
