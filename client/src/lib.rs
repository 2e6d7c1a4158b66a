//! # client
//!
//! Leptos pages for the trade atlas, rendered on the server.
//!
//! Every page reads the shared `flows::DataStore` from context and derives
//! what it shows on each render. Filter, pagination and game state live in
//! the URL, so there is no client-side state and no hydration bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
