//! Delete Confirmation Modal

use leptos::prelude::*;

use crate::components::ModalShell;
use crate::context::use_app_context;

#[component]
pub fn DeleteModal() -> impl IntoView {
    let ctx = use_app_context();
    let target = Memo::new(move |_| ctx.with(|c| c.with_session(|s| s.delete.get().cloned())));

    view! {
        <ModalShell
            open=Signal::derive(move || target.with(Option::is_some))
            on_close=move |_| ctx.controller().cancel_delete()
            title=Signal::stored("Eliminar item".to_string())
            class="delete-modal"
        >
            <p>
                "¿Eliminar "
                <strong id="deleteItemName">
                    {move || target.with(|t| t.as_ref().map(|t| t.name.clone()).unwrap_or_default())}
                </strong>
                "? Esta acción no se puede deshacer."
            </p>
            <div class="form-actions">
                <button class="btn-secondary" on:click=move |_| ctx.controller().cancel_delete()>
                    "Cancelar"
                </button>
                <button
                    class="btn-danger"
                    on:click=move |_| {
                        ctx.spawn(|c| async move {
                            c.confirm_delete().await;
                        })
                    }
                >
                    "Eliminar"
                </button>
            </div>
        </ModalShell>
    }
}
