//! Severity levels of rendered log entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PageError;

/// Severity of a log entry, used as the visibility threshold.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Debug < Info < Warning < Error`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// All levels in ascending severity (for iteration)
    pub fn all() -> &'static [LogLevel] {
        &[LogLevel::Debug, LogLevel::Info, LogLevel::Warning, LogLevel::Error]
    }

    /// Value used by the level `<select>` and in CSS class names
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }

    /// CSS class marking entries of this severity, e.g. `log-entry-warning`
    pub fn css_class(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.as_str())
    }

    /// Whether an entry of severity `self` passes the `threshold`.
    #[inline]
    pub fn is_visible_at(&self, threshold: LogLevel) -> bool {
        *self >= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(PageError::invalid(format!("unknown log level '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        let mut sorted = vec![LogLevel::Error, LogLevel::Debug, LogLevel::Warning, LogLevel::Info];
        sorted.sort();
        assert_eq!(sorted, LogLevel::all());
    }

    #[test]
    fn test_parse_known_levels() {
        for level in LogLevel::all() {
            assert_eq!(level.as_str().parse::<LogLevel>(), Ok(*level));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!("trace".parse::<LogLevel>(), Err(PageError::InvalidArgument(_))));
        assert!(matches!("".parse::<LogLevel>(), Err(PageError::InvalidArgument(_))));
        // Values from the select are lowercase only
        assert!("Info".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_css_class() {
        assert_eq!(LogLevel::Warning.css_class("log-entry-"), "log-entry-warning");
    }

    #[test]
    fn test_visible_at_threshold() {
        assert!(LogLevel::Error.is_visible_at(LogLevel::Warning));
        assert!(LogLevel::Warning.is_visible_at(LogLevel::Warning));
        assert!(!LogLevel::Info.is_visible_at(LogLevel::Warning));
    }
}
