//! Signup page.

use leptos::prelude::*;

use crate::components::route_link::RouteLink;
use crate::routes::RouteName;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="signup-page">
            <h1>"Sign up"</h1>
            <form class="login-form">
                <input class="login-input" type="email" placeholder="you@example.com"/>
                <input class="login-input" type="text" placeholder="Nickname"/>
                <input class="login-input" type="password" placeholder="Password"/>
                <button class="btn btn--primary" type="submit">"Create account"</button>
            </form>
            <p>
                "Already registered? "
                <RouteLink to=RouteName::Login>"Log in"</RouteLink>
            </p>
        </div>
    }
}
