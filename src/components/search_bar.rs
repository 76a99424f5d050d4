//! Search Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Search input; fetching is debounced by the context
#[component]
pub fn SearchBar(#[prop(into)] placeholder: String) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="search-bar">
            <input
                type="search"
                id="Browsebar"
                placeholder=placeholder
                autocomplete="off"
                on:input=move |ev| ctx.search_input(event_target_value(&ev))
            />
        </div>
    }
}
