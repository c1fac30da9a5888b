//! Last route the router settled on.
//!
//! Provided as `RwSignal<NavigationState>` context so each gated transition
//! can report where it came from.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::routes::RouteName;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// `None` until the first route renders.
    pub current: Option<RouteName>,
}

impl NavigationState {
    /// Record that `route` rendered, returning the route it replaced.
    pub fn arrive(&mut self, route: RouteName) -> Option<RouteName> {
        self.current.replace(route)
    }
}
