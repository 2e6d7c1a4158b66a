//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: pages derive data from the catalog and pass
//! plain values down. Nothing here reads the query string.

pub mod data_table;
pub mod empty_state;
pub mod pager;
pub mod risk_badge;
pub mod site_header;
pub mod source_link;
pub mod stat_tile;
