#![allow(warnings)]
//! Catalina Glossary Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod fetcher;
mod models;
mod overlay;
mod render;
mod search;
mod session;

use app::{is_admin_path, AdminApp, PublicApp};
use leptos::prelude::*;
use tracing::info;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let path = window().location().pathname().unwrap_or_default();
    if is_admin_path(&path) {
        info!(%path, "mounting admin view");
        mount_to_body(AdminApp);
    } else {
        info!(%path, "mounting public view");
        mount_to_body(PublicApp);
    }
}
