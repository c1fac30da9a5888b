//! Links addressed by route name rather than raw path.

#[cfg(test)]
#[path = "route_link_test.rs"]
mod route_link_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{Params, RouteName, RouteTable, RouteTableError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("no route table available for a link to `{0}`")]
    NoTable(RouteName),
    #[error(transparent)]
    Table(#[from] RouteTableError),
}

/// Resolve the href for a link to `to`.
pub fn link_href(table: Option<&RouteTable>, to: RouteName, params: &Params) -> Result<String, LinkError> {
    let table = table.ok_or(LinkError::NoTable(to))?;
    Ok(table.href(to, params)?)
}

/// Anchor to the named route, with `params` filling its path segments.
///
/// Falls back to `/` when the link cannot be built.
#[component]
pub fn RouteLink(to: RouteName, #[prop(optional)] params: Params, children: Children) -> impl IntoView {
    let table = use_context::<RouteTable>();
    let href = link_href(table.as_ref(), to, &params).unwrap_or_else(|e| {
        leptos::logging::warn!("route link: {e}");
        "/".to_owned()
    });

    view! { <A href=href>{children()}</A> }
}
