//! Formatting and URL helpers shared by pages and components.

pub mod format;
pub mod markdown;
pub mod query;
