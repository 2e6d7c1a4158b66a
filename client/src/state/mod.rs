//! Request-scoped state shared through Leptos context.

pub mod catalog;
