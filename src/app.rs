//! Root application component with routing and context providers.

use leptos::children::ToChildren;
use leptos::prelude::*;
use leptos::tachys::view::iterators::StaticVec;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::NestedRoute;
use leptos_router::components::{RouteChildren, Router, Routes, RoutesProps};

use crate::components::gated_route::{GatedRoute, not_found};
use crate::config::GateConfig;
use crate::gate::NavigationGate;
use crate::routes::RouteTable;
use crate::state::navigation::NavigationState;
use crate::state::session::StoredTokenSession;
use crate::util::notify::AlertNotifier;
use crate::util::storage::BrowserStorage;

/// Navigation gate wired to `localStorage` and `window.alert`.
pub type AppGate = NavigationGate<StoredTokenSession<BrowserStorage>, AlertNotifier>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the route table, the navigation gate, and navigation state, then
/// builds one gated router entry per route table entry.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = GateConfig::from_env();
    let gate: AppGate = NavigationGate::new(StoredTokenSession::new(BrowserStorage, &config), AlertNotifier, &config);
    provide_context(gate);
    provide_context(RwSignal::new(NavigationState::default()));

    // Without a table no route matches and every path renders the fallback.
    let table = RouteTable::standard()
        .inspect_err(|e| leptos::logging::error!("route table rejected: {e}"))
        .ok();

    // One router entry per table route; the table's patterns do the matching.
    let routes: Vec<_> = table
        .iter()
        .flat_map(RouteTable::iter)
        .map(|route| {
            let name = route.name();
            NestedRoute::new(route.pattern().clone(), move || view! { <GatedRoute route=name/> })
        })
        .collect();
    let routes = StaticVec::from(routes);

    if let Some(table) = table {
        provide_context(table);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/seogaeum.css"/>
        <Title text="서가음"/>

        <Router>
            {Routes(
                RoutesProps::builder()
                    .fallback(not_found)
                    .children(RouteChildren::to_children(move || routes))
                    .build(),
            )}
        </Router>
    }
}
