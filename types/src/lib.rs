//! Shared types for the log page controller
//!
//! Target-independent definitions used by both the controller logic
//! (`logpage-core`) and the browser entry point (`logpage-app`).

pub mod config;
pub mod error;
pub mod level;

pub use config::{ElementIds, PageConfig};
pub use error::PageError;
pub use level::LogLevel;
