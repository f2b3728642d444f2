//! Log page controller logic
//!
//! Severity and logger filtering, calendar navigation and scroll buttons for
//! the server-rendered log page, written against the [`PageDom`] trait so it
//! runs unchanged in the browser and in host tests.

pub mod bind;
pub mod calendar;
pub mod dom;
pub mod page;
pub mod scroll;
pub mod state;
pub mod visibility;

#[cfg(test)]
mod fake_dom;

// Re-exports for convenience
pub use bind::{Bindings, bind};
pub use calendar::{CalendarInput, CalendarSetup, DatepickerOptions};
pub use dom::{EventHandler, PageDom, PageEvent};
pub use page::LogPage;
pub use scroll::ScrollMetrics;
pub use state::{LoggerTransition, UiState};

pub use logpage_types::{ElementIds, LogLevel, PageConfig, PageError};
