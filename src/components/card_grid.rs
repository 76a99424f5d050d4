//! Card Grid Component
//!
//! Public catalog: one card per item, click opens the detail overlay.

use leptos::prelude::*;

use crate::components::ItemImage;
use crate::context::use_app_context;
use crate::render::ListView;

#[component]
pub fn CardGrid() -> impl IntoView {
    let ctx = use_app_context();
    let list = Memo::new(move |_| ctx.with(|c| c.list_view()));

    move || match list.get() {
        ListView::Empty(message) => view! {
            <div class="no-results">
                <p>{message}</p>
            </div>
        }
        .into_any(),
        ListView::Rows(rows) => view! {
            <div class="cards-container" class:stale=move || ctx.with(|c| c.with_cache(|cache| cache.stale))>
                {rows
                    .into_iter()
                    .map(|row| {
                        let uid = row.uid.clone();
                        view! {
                            <div
                                class="yrz_card"
                                on:click=move |_| {
                                    let uid = uid.clone();
                                    ctx.spawn(move |c| async move {
                                        c.open_detail(&uid).await;
                                    });
                                }
                            >
                                <div class="card-img-wrap">
                                    <ItemImage source=row.image alt=row.name.clone() />
                                </div>
                                <div class="item-info">
                                    <p>{row.name}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
