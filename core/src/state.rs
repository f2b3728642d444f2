//! Selected logger and level
//!
//! The only state the page keeps. Transitions are pure so the coupling
//! between logger and level can be checked without a document.

use logpage_types::LogLevel;

/// Currently visible logger panel and severity threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub current_logger: String,
    pub current_level: LogLevel,
}

/// DOM changes implied by a logger selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerTransition {
    /// Panel to hide, `None` when re-selecting the visible logger
    pub hide: Option<String>,
    pub show: String,
    /// New level when the coupling rule fired
    pub level: Option<LogLevel>,
}

impl UiState {
    pub fn new(current_logger: impl Into<String>, current_level: LogLevel) -> Self {
        Self {
            current_logger: current_logger.into(),
            current_level,
        }
    }

    /// Switch to `logger`.
    ///
    /// Entering `pinned` forces `Debug`. Leaving `pinned` while at `Debug`
    /// drops back to `fallback`. Any other switch keeps the level.
    pub fn select_logger(
        &mut self,
        logger: &str,
        pinned: &str,
        fallback: LogLevel,
    ) -> LoggerTransition {
        if logger == self.current_logger {
            return LoggerTransition {
                hide: None,
                show: logger.to_string(),
                level: None,
            };
        }

        let previous = std::mem::replace(&mut self.current_logger, logger.to_string());
        let level = if logger == pinned && self.current_level != LogLevel::Debug {
            Some(LogLevel::Debug)
        } else if previous == pinned && self.current_level == LogLevel::Debug {
            Some(fallback)
        } else {
            None
        };
        if let Some(level) = level {
            self.current_level = level;
        }

        LoggerTransition {
            hide: Some(previous),
            show: logger.to_string(),
            level,
        }
    }

    pub fn select_level(&mut self, level: LogLevel) {
        self.current_level = level;
    }
}
