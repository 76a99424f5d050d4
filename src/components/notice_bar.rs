//! Notice Bar
//!
//! Dismissible message for write failures that have no form to show in.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_app_context();
    let notice = Memo::new(move |_| ctx.with(|c| c.with_session(|s| s.notice.clone())));

    move || {
        notice.get().map(|message| {
            view! {
                <div class="notice-bar" role="alert">
                    <span>{message}</span>
                    <button class="close-btn" on:click=move |_| ctx.controller().dismiss_notice()>"×"</button>
                </div>
            }
        })
    }
}
