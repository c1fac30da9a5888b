//! Catalogue search page.

use leptos::prelude::*;

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = RwSignal::new(String::new());

    view! {
        <div class="search-page">
            <h1>"Search"</h1>
            <input
                class="search-page__input"
                type="search"
                placeholder="Title, author, or ISBN"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || !query.get().trim().is_empty()>
                <p class="search-page__status">"Searching for \u{201c}" {move || query.get().trim().to_owned()} "\u{201d}"</p>
            </Show>
        </div>
    }
}
