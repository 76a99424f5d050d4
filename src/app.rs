//! Catalog Frontend Apps
//!
//! Public glossary view and `/admin` management view.

use leptos::prelude::*;

use crate::components::{
    AdminTable, CardGrid, DeleteModal, ItemDetailModal, ItemFormModal, ModerationModal, NoticeBar,
    SearchBar, StatsBar, SuggestionModal,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::ViewKind;

pub const ADMIN_PATH: &str = "/admin";

/// Whether `path` addresses the admin view (trailing slash tolerated)
pub fn is_admin_path(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    trimmed == ADMIN_PATH
}

/// Provide a fresh context for `kind` and load the list once on mount
fn mount_view(kind: ViewKind) -> AppContext {
    let ctx = AppContext::new(kind, AppConfig::from_window());
    provide_context(ctx);
    Effect::new(move |_| ctx.reload());
    ctx
}

#[component]
pub fn PublicApp() -> impl IntoView {
    let ctx = mount_view(ViewKind::Public);

    view! {
        <div class="app-layout public">
            <header class="navbar">
                <span class="brand">"Catalina"</span>
                <a
                    href="#"
                    class="nav-link"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.controller().open_suggestion_form();
                    }
                >
                    "Sugerir"
                </a>
            </header>
            <main class="content">
                <SearchBar placeholder="Buscar por nombre o sugerencia..." />
                <NoticeBar />
                <CardGrid />
            </main>
            <ItemDetailModal />
            <SuggestionModal />
        </div>
    }
}

#[component]
pub fn AdminApp() -> impl IntoView {
    let ctx = mount_view(ViewKind::Admin);

    view! {
        <div class="app-layout admin">
            <header class="admin-header">
                <h1>"Administración del catálogo"</h1>
                <StatsBar />
            </header>
            <main class="content">
                <div class="toolbar">
                    <SearchBar placeholder="Buscar items..." />
                    <button class="btn-primary" on:click=move |_| ctx.controller().open_create()>
                        "+ Agregar item"
                    </button>
                </div>
                <NoticeBar />
                <AdminTable />
            </main>
            <ItemFormModal />
            <DeleteModal />
            <ModerationModal />
        </div>
    }
}
