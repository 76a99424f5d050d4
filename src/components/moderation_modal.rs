//! Suggestion Moderation Modal
//!
//! Admin list of an item's suggestions with per-entry delete.

use leptos::prelude::*;

use crate::components::ModalShell;
use crate::context::use_app_context;

#[component]
pub fn ModerationModal() -> impl IntoView {
    let ctx = use_app_context();
    let item = Memo::new(move |_| ctx.with(|c| c.with_session(|s| s.moderation.get().cloned())));

    view! {
        <ModalShell
            open=Signal::derive(move || item.with(Option::is_some))
            on_close=move |_| ctx.controller().close_moderation()
            title=Signal::derive(move || {
                item.with(|i| i.as_ref().map(|i| format!("Sugerencias: {}", i.name)).unwrap_or_default())
            })
            class="sugg-admin-modal"
        >
            {move || {
                let suggestions = item.with(|i| i.as_ref().map(|i| i.suggestions.clone()).unwrap_or_default());
                if suggestions.is_empty() {
                    return view! { <p id="noSuggMsg">"No hay sugerencias."</p> }.into_any();
                }
                view! {
                    <ul id="suggAdminList">
                        {suggestions
                            .into_iter()
                            .map(|s| {
                                let uid = s.uid.clone();
                                view! {
                                    <li class="sugg-admin-item">
                                        <span>
                                            <strong>{s.suggester}</strong>
                                            ": "
                                            {s.suggested_name}
                                        </span>
                                        <button
                                            class="sugg-del-btn"
                                            title="Eliminar sugerencia"
                                            on:click=move |_| {
                                                let uid = uid.clone();
                                                ctx.spawn(move |c| async move {
                                                    c.delete_suggestion(&uid).await.ok();
                                                });
                                            }
                                        >
                                            "✕"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </ModalShell>
    }
}
