//! Item Image Component
//!
//! Product image that falls back to the placeholder when the file is
//! missing or fails to load.

use leptos::prelude::*;

use crate::render::ImageSource;

#[component]
pub fn ItemImage(
    source: ImageSource,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let image = RwSignal::new(source);

    view! {
        <img
            class=class
            alt=alt
            src=move || image.with(|i| i.src().to_string())
            on:error=move |_| {
                // Only once: a broken placeholder must not loop
                if image.with_untracked(|i| !i.is_placeholder()) {
                    image.update(|i| {
                        i.fail();
                    });
                }
            }
        />
    }
}
