//! Date navigation
//!
//! Turns the server-provided list of log dates into datepicker constraints
//! and maps a picked date to the page URL for that day.
//!
//! Dates are compared as millisecond timestamps of the viewer's local
//! midnight: UTC midnight shifted by the browser timezone offset. Every date
//! gets the same shift, so stepping 24h from `min` always lands on values
//! that are directly comparable with the set members.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use logpage_types::{PageConfig, PageError};

/// Milliseconds per calendar day.
pub const DAY_MS: i64 = 86_400_000;

/// Date format used in URLs and host globals.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// `NaiveDate::num_days_from_ce()` of 1970-01-01
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Values the host page embeds for the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarInput {
    /// Days with logs, ascending, `YYYY-MM-DD`
    pub dates: Vec<String>,
    /// Day currently displayed, `YYYY-MM-DD`
    pub current_date: String,
    /// `Date.prototype.getTimezoneOffset()`: minutes, positive west of UTC
    pub tz_offset_minutes: i32,
}

/// Options object passed to the `Datepicker` constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatepickerOptions {
    pub autohide: bool,
    pub format: String,
    pub min_date: i64,
    pub max_date: i64,
    pub dates_disabled: Vec<i64>,
}

/// Everything needed to initialise the calendar widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSetup {
    pub options: DatepickerOptions,
    /// Pre-selected day, normalised like the options
    pub current: i64,
}

impl CalendarSetup {
    /// Validate the host input and compute min/max/disabled days.
    ///
    /// Rejects an empty date list, unparseable or descending dates, and a
    /// current date that has no logs.
    pub fn compute(input: &CalendarInput, config: &PageConfig) -> Result<Self, PageError> {
        let dates = input
            .dates
            .iter()
            .map(|d| parse_date(d))
            .collect::<Result<Vec<_>, _>>()?;

        let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
            return Err(PageError::invalid("no log dates available"));
        };
        if dates.windows(2).any(|w| w[0] > w[1]) {
            return Err(PageError::invalid("log dates are not in ascending order"));
        }

        let current = parse_date(&input.current_date)?;
        if !dates.contains(&current) {
            return Err(PageError::invalid(format!(
                "current date {} has no logs",
                input.current_date
            )));
        }

        let offset = input.tz_offset_minutes;
        let available: HashSet<i64> = dates.iter().map(|d| local_midnight_ms(*d, offset)).collect();
        let min_date = local_midnight_ms(*first, offset);
        let max_date = local_midnight_ms(*last, offset);
        let dates_disabled = disabled_days(min_date, max_date, &available);

        tracing::debug!(
            available = available.len(),
            disabled = dates_disabled.len(),
            "Computed calendar range {} .. {}",
            first,
            last
        );

        Ok(Self {
            options: DatepickerOptions {
                autohide: config.calendar_autohide,
                format: config.calendar_format.clone(),
                min_date,
                max_date,
                dates_disabled,
            },
            current: local_midnight_ms(current, offset),
        })
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, PageError> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
        .map_err(|e| PageError::invalid(format!("bad date '{s}': {e}")))
}

/// Timestamp of local midnight of `date` for a viewer at `tz_offset_minutes`.
pub fn local_midnight_ms(date: NaiveDate, tz_offset_minutes: i32) -> i64 {
    let days = i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE;
    days * DAY_MS + i64::from(tz_offset_minutes) * 60_000
}

/// Every day in `[min, max]` not present in `available`, ascending.
pub fn disabled_days(min: i64, max: i64, available: &HashSet<i64>) -> Vec<i64> {
    (min..=max)
        .step_by(DAY_MS as usize)
        .filter(|day| !available.contains(day))
        .collect()
}

/// URL of the log page for `date`, relative to the current page.
pub fn navigation_url(route: &str, date: NaiveDate) -> String {
    format!("{}?date={}", route, date.format(ISO_DATE_FORMAT))
}
