//! Landing page with entry points into the catalogue and account flows.

use leptos::prelude::*;

use crate::components::route_link::RouteLink;
use crate::routes::RouteName;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"서가음"</h1>
            <p>"Find your next book."</p>
            <nav class="home-page__nav">
                <RouteLink to=RouteName::Search>"Search"</RouteLink>
                <RouteLink to=RouteName::Profile>"My shelf"</RouteLink>
                <RouteLink to=RouteName::Login>"Log in"</RouteLink>
                <RouteLink to=RouteName::Signup>"Sign up"</RouteLink>
            </nav>
        </div>
    }
}
