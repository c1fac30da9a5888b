//! Router integration for the navigation gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every router entry in the app shell renders a [`GatedRoute`]. Mounting one
//! is the transition attempt. The gate decides before the target page body
//! renders, and a redirect becomes a history-replacing navigation so the
//! blocked URL does not stay in the back stack.
//!
//! TRADE-OFFS
//! ==========
//! Session state lives in `localStorage`, which only the browser can read.
//! The decision therefore runs in an `Effect`, so SSR and hydration both
//! render the same empty placeholder, and the page body appears only once
//! the gate has let the transition through.

#[cfg(test)]
#[path = "gated_route_test.rs"]
mod gated_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppGate;
use crate::gate::{Continuation, Decision, NavigationRequest};
use crate::routes::{Params, Route, RouteName, RouteTable};
use crate::state::navigation::NavigationState;

/// [`Continuation`] that finishes a transition through the Leptos router.
///
/// Resolve it from an effect, after the route has mounted.
pub struct RouterContinuation<'a, F> {
    table: &'a RouteTable,
    navigate: F,
}

impl<'a, F> RouterContinuation<'a, F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(table: &'a RouteTable, navigate: F) -> Self {
        Self { table, navigate }
    }
}

impl<F> Continuation for RouterContinuation<'_, F>
where
    F: Fn(&str, NavigateOptions),
{
    // The router already matched the target; rendering it is up to the caller.
    fn proceed(self) {}

    fn redirect(self, target: RouteName) {
        match self.table.href(target, &Params::new()) {
            Ok(href) => (self.navigate)(&href, NavigateOptions { replace: true, ..NavigateOptions::default() }),
            Err(e) => leptos::logging::warn!("navigation gate: cannot redirect: {e}"),
        }
    }
}

/// Runs the navigation gate for `route`, then renders its view if allowed.
#[component]
pub fn GatedRoute(route: RouteName) -> impl IntoView {
    let Some(table) = use_context::<RouteTable>() else {
        return not_found();
    };
    let gate = expect_context::<AppGate>();
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let navigate = use_navigate();

    // `None` on the server and during hydration.
    let decision = RwSignal::new(None::<Decision>);

    let gate_table = table.clone();
    Effect::new(move || {
        let request = NavigationRequest {
            target: route,
            origin: navigation.get_untracked().current,
            continuation: RouterContinuation::new(&gate_table, navigate.clone()),
        };
        let outcome = gate.guard(request);
        if outcome == Decision::Proceed {
            navigation.update_untracked(|state| {
                state.arrive(route);
            });
        }
        decision.set(Some(outcome));
    });

    (move || {
        if shows_page(decision.get()) {
            table.resolve(route).map_or_else(not_found, Route::render)
        } else {
            ().into_any()
        }
    })
    .into_any()
}

/// Whether the page body renders for a gate outcome; `None` means undecided.
fn shows_page(decision: Option<Decision>) -> bool {
    decision == Some(Decision::Proceed)
}

/// View shown for paths that match no route.
pub fn not_found() -> AnyView {
    "Page not found.".into_any()
}
