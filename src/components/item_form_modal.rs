//! Item Form Modal
//!
//! Admin create/edit form with image picker and preview.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;
use wasm_bindgen_futures::JsFuture;

use crate::components::ModalShell;
use crate::context::{use_app_context, AppContext};
use crate::models::PendingImage;
use crate::session::ItemField;

const FIELDS: &[(ItemField, &str, &str)] = &[
    (ItemField::Name, "fieldNombre", "Nombre *"),
    (ItemField::Description, "fieldDesc", "Descripción"),
    (ItemField::Dispatch, "fieldDespacho", "Despacho"),
    (ItemField::Quantity, "fieldCajas", "Cajas"),
];

async fn read_file(file: &web_sys::File) -> Result<PendingImage, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(PendingImage {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

fn pick_image(ctx: AppContext, ev: web_sys::Event) {
    let input: web_sys::HtmlInputElement = event_target(&ev);
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    spawn_local(async move {
        match read_file(&file).await {
            Ok(image) => {
                let preview = web_sys::Url::create_object_url_with_blob(&file).ok();
                ctx.controller().set_pending_image(image, preview);
            }
            Err(e) => warn!(error = %e, "could not read picked image"),
        }
    });
}

#[component]
pub fn ItemFormModal() -> impl IntoView {
    let ctx = use_app_context();
    let form = Memo::new(move |_| ctx.with(|c| c.with_session(|s| s.form.get().cloned())));
    let preview = move || form.with(|f| f.as_ref().map(|f| f.preview.clone()).unwrap_or_default());

    let title = Signal::derive(move || {
        let editing = form.with(|f| f.as_ref().is_some_and(|f| f.mode.edit_target().is_some()));
        let title = if editing { "Editar Item" } else { "Nuevo Item" };
        title.to_string()
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|c| async move {
            c.save_item().await;
        });
    };

    view! {
        <ModalShell
            open=Signal::derive(move || form.with(Option::is_some))
            on_close=move |_| ctx.controller().close_form()
            title=title
            class="item-form-modal"
        >
            <form class="item-form" on:submit=save>
                <div class="img-upload">
                    <img id="imgPreview" alt="Vista previa" src=preview />
                    <input
                        type="file"
                        id="imgInput"
                        accept="image/*"
                        on:change=move |ev| pick_image(ctx, ev)
                    />
                </div>
                {FIELDS
                    .iter()
                    .map(|&(field, id, label)| {
                        view! {
                            <label for=id>{label}</label>
                            <input
                                type="text"
                                id=id
                                prop:value=move || form.with(|f| {
                                    f.as_ref().map(|f| f.fields.get(field).to_string()).unwrap_or_default()
                                })
                                on:input=move |ev| ctx.controller().set_form_field(field, event_target_value(&ev))
                            />
                        }
                    })
                    .collect_view()}
                {move || form.with(|f| f.as_ref().and_then(|f| f.error.clone())).map(|error| view! {
                    <p class="form-error" id="itemFormError">{error}</p>
                })}
                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| ctx.controller().close_form()>
                        "Cancelar"
                    </button>
                    <button type="submit" class="btn-primary">"Guardar"</button>
                </div>
            </form>
        </ModalShell>
    }
}
