//! Application Context
//!
//! Per-view state provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpCatalogApi;
use crate::config::AppConfig;
use crate::controller::{CatalogController, ViewKind};
use crate::search::{Debouncer, TimeoutScheduler};

/// View-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<CatalogController>, LocalStorage>,
    search: StoredValue<Rc<Debouncer<TimeoutScheduler>>, LocalStorage>,
    /// Bumped by the controller after every state change
    pub render_tick: ReadSignal<u32>,
}

impl AppContext {
    pub fn new(kind: ViewKind, config: AppConfig) -> Self {
        let (render_tick, set_render_tick) = signal(0u32);
        let api = Rc::new(HttpCatalogApi::new(config.api_base.clone()));
        let debouncer = Debouncer::new(TimeoutScheduler, config.search_delay_ms);
        let controller = CatalogController::new(kind, config, api, move || {
            set_render_tick.update(|v| *v = v.wrapping_add(1));
        });

        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            search: StoredValue::new_local(Rc::new(debouncer)),
            render_tick,
        }
    }

    pub fn controller(&self) -> Rc<CatalogController> {
        self.controller.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.controller.with_value(|c| c.config().clone())
    }

    /// Read controller state; re-runs whenever the controller changes
    pub fn with<R>(&self, f: impl FnOnce(&CatalogController) -> R) -> R {
        self.render_tick.track();
        self.controller.with_value(|c| f(c.as_ref()))
    }

    /// Run an async controller action on the UI thread
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<CatalogController>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.controller()));
    }

    /// Invalidate the list and refetch it with the current search text
    pub fn reload(&self) {
        self.spawn(|c| async move { c.invalidate().await });
    }

    /// Search-box keystroke: remember the text, debounce the fetch
    pub fn search_input(&self, raw: String) {
        self.controller().set_search_text(&raw);
        let ctx = *self;
        self.search.with_value(|debouncer| {
            debouncer.input(&raw, move |query| {
                ctx.spawn(move |c| async move { c.search(&query).await });
            })
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
