//! Modal Shell Component
//!
//! Backdrop + dialog frame shared by every overlay.

use leptos::prelude::*;

use crate::overlay::is_backdrop_hit;

/// Overlay frame
///
/// Clicking the backdrop closes it; clicks inside the dialog never do.
#[component]
pub fn ModalShell(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let modal_class = format!("modal {}", class);

    view! {
        <Show when=move || open.get()>
            <div
                class="overlay"
                on:click=move |ev| {
                    if is_backdrop_hit(ev.target(), ev.current_target()) {
                        on_close.run(());
                    }
                }
            >
                <div class=modal_class.clone()>
                    <div class="modal-header">
                        <h2>{move || title.get()}</h2>
                        <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
