//! Login page. Credentials are exchanged with the API, which issues the
//! access token the navigation gate looks for.

use leptos::prelude::*;

use crate::components::route_link::RouteLink;
use crate::routes::RouteName;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Log in"</h1>
            <form class="login-form">
                <input class="login-input" type="email" placeholder="you@example.com"/>
                <input class="login-input" type="password" placeholder="Password"/>
                <button class="btn btn--primary" type="submit">"Log in"</button>
            </form>
            <p>
                "New here? "
                <RouteLink to=RouteName::Signup>"Create an account"</RouteLink>
            </p>
        </div>
    }
}
