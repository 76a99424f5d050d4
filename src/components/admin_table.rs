//! Admin Table Component
//!
//! One row per item with suggestion badge and edit/delete actions.

use leptos::prelude::*;

use crate::components::ItemImage;
use crate::context::use_app_context;
use crate::render::{ItemRow, ListView};

#[component]
pub fn AdminTable() -> impl IntoView {
    let ctx = use_app_context();
    let list = Memo::new(move |_| ctx.with(|c| c.list_view()));

    view! {
        <table class="admin-table">
            <thead>
                <tr>
                    <th>"Imagen"</th>
                    <th>"Nombre"</th>
                    <th>"Descripción"</th>
                    <th>"Despacho"</th>
                    <th>"Cajas"</th>
                    <th>"Sugerencias"</th>
                    <th>"Acciones"</th>
                </tr>
            </thead>
            <tbody id="adminTableBody" class:stale=move || ctx.with(|c| c.with_cache(|cache| cache.stale))>
                {move || match list.get() {
                    ListView::Empty(message) => view! {
                        <tr class="no-items-row">
                            <td colspan="7">{message}</td>
                        </tr>
                    }
                    .into_any(),
                    ListView::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <AdminRow row=row /> })
                        .collect_view()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}

#[component]
fn AdminRow(row: ItemRow) -> impl IntoView {
    let ctx = use_app_context();
    let ItemRow {
        uid,
        name,
        description,
        dispatch,
        quantity,
        image,
        suggestion_count,
    } = row;

    let badge = suggestion_count
        .map(|n| n.to_string())
        .unwrap_or_else(|| "...".to_string());

    let open_moderation = {
        let uid = uid.clone();
        move |_| {
            let uid = uid.clone();
            ctx.spawn(move |c| async move {
                c.open_moderation(&uid).await;
            });
        }
    };
    let open_edit = {
        let uid = uid.clone();
        move |_| {
            let uid = uid.clone();
            ctx.spawn(move |c| async move {
                c.open_edit(&uid).await;
            });
        }
    };
    let request_delete = {
        let name = name.clone();
        move |_| ctx.controller().request_delete(&uid, &name)
    };

    view! {
        <tr>
            <td>
                <ItemImage source=image alt=name.clone() class="tbl-img" />
            </td>
            <td>{name.clone()}</td>
            <td class="desc-cell" title=description.clone()>{description.clone()}</td>
            <td>{dispatch}</td>
            <td>{quantity}</td>
            <td>
                <span class="badge-sugg" title="Ver sugerencias" on:click=open_moderation>
                    {badge}
                </span>
            </td>
            <td>
                <div class="action-cell">
                    <button class="btn-edit" on:click=open_edit>"Editar"</button>
                    <button class="btn-delete" on:click=request_delete>"Eliminar"</button>
                </div>
            </td>
        </tr>
    }
}
