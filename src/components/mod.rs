//! Routing building blocks shared by the app shell and pages.

pub mod gated_route;
pub mod route_link;
