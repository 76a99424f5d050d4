//! Admin Stats Bar

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="stats-bar">
            <div class="stat">
                <span id="statItems">{move || ctx.with(|c| c.with_cache(|cache| cache.items.len()))}</span>
                <span class="stat-label">"Items"</span>
            </div>
            <div class="stat">
                <span id="statSuggs">{move || ctx.with(|c| c.total_suggestions())}</span>
                <span class="stat-label">"Sugerencias"</span>
            </div>
        </div>
    }
}
