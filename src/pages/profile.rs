//! Reader profile page.
//!
//! Reachable whether or not a session exists; the API decides what a
//! signed-out visitor may see.

use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="profile-page">
            <h1>"My shelf"</h1>
        </div>
    }
}
