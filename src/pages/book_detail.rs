//! Book detail page keyed by the `:isbn` route parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn BookDetailPage() -> impl IntoView {
    let params = use_params_map();
    let isbn = move || params.read().get("isbn").unwrap_or_default();

    view! {
        <div class="book-detail-page">
            <h1>"Book"</h1>
            <p class="book-detail-page__isbn">"ISBN " {isbn}</p>
        </div>
    }
}
