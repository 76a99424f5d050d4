//! Suggestion Modal
//!
//! Entry form for proposing a new name for the current item.

use leptos::prelude::*;

use crate::components::ModalShell;
use crate::context::use_app_context;
use crate::controller::SuggestionField;

#[component]
pub fn SuggestionModal() -> impl IntoView {
    let ctx = use_app_context();
    let form = Memo::new(move |_| ctx.with(|c| c.with_session(|s| s.suggestion.get().cloned())));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|c| async move {
            c.submit_suggestion().await;
        });
    };

    view! {
        <ModalShell
            open=Signal::derive(move || form.with(Option::is_some))
            on_close=move |_| ctx.controller().close_suggestion_form()
            title=Signal::stored("Sugerir nombre".to_string())
            class="sugg-modal"
        >
            <form class="sugg-form" on:submit=submit>
                <label for="inputNombreSugerido">"Nombre sugerido"</label>
                <input
                    type="text"
                    id="inputNombreSugerido"
                    prop:value=move || form.with(|f| f.as_ref().map(|f| f.suggested_name.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        ctx.controller().set_suggestion_field(SuggestionField::SuggestedName, event_target_value(&ev))
                    }
                />
                <label for="inputSugeridor">"Tu nombre"</label>
                <input
                    type="text"
                    id="inputSugeridor"
                    prop:value=move || form.with(|f| f.as_ref().map(|f| f.suggester.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        ctx.controller().set_suggestion_field(SuggestionField::Suggester, event_target_value(&ev))
                    }
                />
                {move || form.with(|f| f.as_ref().and_then(|f| f.error.clone())).map(|error| view! {
                    <p class="form-error">{error}</p>
                })}
                <button type="submit" class="btn-primary">"Enviar"</button>
            </form>
        </ModalShell>
    }
}
