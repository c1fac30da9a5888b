//! Client state shared through Leptos context.

pub mod navigation;
pub mod session;
