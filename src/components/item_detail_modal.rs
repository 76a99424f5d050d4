//! Item Detail Modal
//!
//! Public read-only view of one item with its suggestions.

use leptos::prelude::*;

use crate::components::{ItemImage, ModalShell};
use crate::context::use_app_context;
use crate::models::Item;
use crate::render::{render_suggestions, ImageSource};

/// Reactive text of one field of the shown item
fn item_field(
    item: Memo<Option<Item>>,
    get: fn(&Item) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || item.with(|i| i.as_ref().map(get).unwrap_or_default())
}

#[component]
pub fn ItemDetailModal() -> impl IntoView {
    let ctx = use_app_context();
    let item = Memo::new(move |_| ctx.with(|c| c.with_session(|s| s.detail.get().cloned())));

    view! {
        <ModalShell
            open=Signal::derive(move || item.with(Option::is_some))
            on_close=move |_| ctx.controller().close_detail()
            title=Signal::derive(item_field(item, |i| i.name.clone()))
            class="item-modal"
        >
            {move || {
                let config = ctx.config();
                item.get()
                    .map(|i| {
                        view! {
                            <ItemImage
                                source=ImageSource::new(&config, &i.image)
                                alt=i.name.clone()
                                class="modal-img"
                            />
                        }
                    })
            }}
            <dl class="item-fields">
                <dt>"Descripción"</dt>
                <dd>{item_field(item, |i| i.description.clone())}</dd>
                <dt>"Despacho"</dt>
                <dd>{item_field(item, |i| i.dispatch.clone())}</dd>
                <dt>"Cajas"</dt>
                <dd>{item_field(item, |i| i.quantity.clone())}</dd>
            </dl>
            <h3>"Sugerencias"</h3>
            <ul class="sugg-list">
                {move || {
                    let suggestions = item.with(|i| i.as_ref().map(|i| i.suggestions.clone()).unwrap_or_default());
                    let line_class = if suggestions.is_empty() { "empty-sugg" } else { "" };
                    render_suggestions(&suggestions)
                        .into_iter()
                        .map(|line| view! { <li class=line_class>{line}</li> })
                        .collect_view()
                }}
            </ul>
            <button class="btn-primary" on:click=move |_| {
                ctx.controller().open_suggestion_form();
            }>
                "Sugerir nombre"
            </button>
        </ModalShell>
    }
}
