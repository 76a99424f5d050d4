//! Catalog Controller
//!
//! Drives one view (public or admin): list loading, overlay transitions,
//! item writes and suggestion submission/moderation. State lives in a
//! [`UiSession`] and a list cache owned by the controller; `on_change` is
//! called after every visible change so the UI can re-render.
//!
//! No `RefCell` borrow is ever held across an `.await`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::api::{ApiError, ApiResult, CatalogApi};
use crate::config::AppConfig;
use crate::fetcher::{count_slot, CatalogFetcher, DETAIL_SLOT, FORM_SLOT, MODERATION_SLOT};
use crate::models::{Item, PendingImage, Suggestion};
use crate::render::{empty_message, image_src, render_list, ListView};
use crate::session::{DeleteTarget, FormMode, ItemField, ItemForm, SuggestionForm, UiSession};

pub const ADMIN_EMPTY: &str = "No hay items. ¡Agrega el primero!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Public,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionField {
    Suggester,
    SuggestedName,
}

/// Last list response plus the admin suggestion counts
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogCache {
    pub items: Vec<Item>,
    /// Query the current `items` were fetched with
    pub query: String,
    pub counts: HashMap<String, usize>,
    /// Set by a write; cleared by the next successful list load
    pub stale: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    NotOpen,
    Invalid,
    Saved(Item),
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    NotOpen,
    Invalid,
    Submitted(Suggestion),
    Failed(ApiError),
}

pub struct CatalogController {
    kind: ViewKind,
    config: AppConfig,
    fetcher: CatalogFetcher,
    session: RefCell<UiSession>,
    cache: RefCell<CatalogCache>,
    on_change: Box<dyn Fn()>,
}

impl CatalogController {
    pub fn new(
        kind: ViewKind,
        config: AppConfig,
        api: Rc<dyn CatalogApi>,
        on_change: impl Fn() + 'static,
    ) -> Self {
        Self {
            kind,
            config,
            fetcher: CatalogFetcher::new(api),
            session: RefCell::new(UiSession::default()),
            cache: RefCell::new(CatalogCache::default()),
            on_change: Box::new(on_change),
        }
    }

    fn changed(&self) {
        (self.on_change)();
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn with_session<R>(&self, f: impl FnOnce(&UiSession) -> R) -> R {
        f(&self.session.borrow())
    }

    pub fn with_cache<R>(&self, f: impl FnOnce(&CatalogCache) -> R) -> R {
        f(&self.cache.borrow())
    }

    pub fn list_view(&self) -> ListView {
        let cache = self.cache.borrow();
        let message = match self.kind {
            ViewKind::Public => empty_message(&cache.query),
            ViewKind::Admin => ADMIN_EMPTY.to_string(),
        };
        render_list(&self.config, &cache.items, &cache.counts, &message)
    }

    pub fn total_suggestions(&self) -> usize {
        self.cache.borrow().counts.values().sum()
    }

    pub fn dismiss_notice(&self) {
        self.session.borrow_mut().notice = None;
        self.changed();
    }

    // ========================
    // List loading
    // ========================

    /// Track the search box; the debounced search reads it back on reload.
    pub fn set_search_text(&self, text: &str) {
        self.session.borrow_mut().search_text = text.to_string();
    }

    /// Load the list for `query` (the debounced search target)
    pub async fn search(&self, query: &str) {
        if self.load(query).await && self.kind == ViewKind::Admin {
            self.refresh_counts().await;
        }
    }

    /// The one invalidate-and-refetch path every write goes through: the
    /// cache is marked stale and reloaded with the current search text.
    pub async fn invalidate(&self) {
        self.cache.borrow_mut().stale = true;
        let query = self.session.borrow().query().to_string();
        self.search(&query).await;
    }

    async fn load(&self, query: &str) -> bool {
        match self.fetcher.fetch_items(query).await {
            Ok(Some(items)) => {
                debug!(count = items.len(), query, "list loaded");
                {
                    let mut cache = self.cache.borrow_mut();
                    cache
                        .counts
                        .retain(|uid, _| items.iter().any(|item| &item.uid == uid));
                    cache.items = items;
                    cache.query = query.trim().to_string();
                    cache.stale = false;
                }
                self.changed();
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, query, "list load failed, keeping previous list");
                false
            }
        }
    }

    /// Reload the suggestion-count badge of one item
    pub async fn refresh_count(&self, uid: &str) {
        match self.fetcher.fetch_item(&count_slot(uid), uid).await {
            Ok(Some(item)) => {
                self.cache
                    .borrow_mut()
                    .counts
                    .insert(uid.to_string(), item.suggestions.len());
                self.changed();
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, uid, "suggestion count load failed"),
        }
    }

    async fn refresh_counts(&self) {
        let uids: Vec<String> = self
            .cache
            .borrow()
            .items
            .iter()
            .map(|item| item.uid.clone())
            .collect();
        join_all(uids.iter().map(|uid| self.refresh_count(uid))).await;
    }

    // ========================
    // Detail + suggestion entry
    // ========================

    /// Fetch and show an item; the overlay stays hidden if the fetch fails.
    pub async fn open_detail(&self, uid: &str) -> bool {
        self.session.borrow_mut().current_item = Some(uid.to_string());
        match self.fetcher.fetch_item(DETAIL_SLOT, uid).await {
            Ok(Some(item)) => {
                self.session.borrow_mut().detail.open(item);
                self.changed();
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, uid, "item detail load failed");
                false
            }
        }
    }

    pub fn close_detail(&self) {
        self.fetcher.supersede(DETAIL_SLOT);
        self.session.borrow_mut().detail.close();
        self.changed();
    }

    async fn refresh_detail(&self, uid: &str) {
        match self.fetcher.fetch_item(DETAIL_SLOT, uid).await {
            Ok(Some(item)) => {
                let mut session = self.session.borrow_mut();
                if let Some(shown) = session.detail.get_mut() {
                    if shown.uid == item.uid {
                        *shown = item;
                    }
                }
                drop(session);
                self.changed();
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, uid, "item detail refresh failed"),
        }
    }

    /// Open the entry overlay for the current item, if there is one.
    pub fn open_suggestion_form(&self) -> bool {
        let mut session = self.session.borrow_mut();
        if session.current_item.is_none() {
            return false;
        }
        session.suggestion.open(SuggestionForm::default());
        drop(session);
        self.changed();
        true
    }

    pub fn close_suggestion_form(&self) {
        self.session.borrow_mut().suggestion.close();
        self.changed();
    }

    pub fn set_suggestion_field(&self, field: SuggestionField, value: String) {
        if let Some(form) = self.session.borrow_mut().suggestion.get_mut() {
            match field {
                SuggestionField::Suggester => form.suggester = value,
                SuggestionField::SuggestedName => form.suggested_name = value,
            }
        }
    }

    pub async fn submit_suggestion(&self) -> SubmitOutcome {
        let submission = {
            let mut session = self.session.borrow_mut();
            let item_uid = session.current_item.clone();
            match (item_uid, session.suggestion.get_mut()) {
                (Some(uid), Some(form)) => {
                    let result = form.submission(&uid);
                    form.error = result.as_ref().err().map(|msg| msg.to_string());
                    Some(result)
                }
                _ => None,
            }
        };
        let body = match submission {
            None => return SubmitOutcome::NotOpen,
            Some(Err(_)) => {
                self.changed();
                return SubmitOutcome::Invalid;
            }
            Some(Ok(body)) => body,
        };

        match self.fetcher.api().create_suggestion(&body).await {
            Ok(created) => {
                info!(item = %body.item_uid, suggestion = %created.uid, "suggestion created");
                self.session.borrow_mut().suggestion.close();
                self.changed();
                self.refresh_detail(&body.item_uid).await;
                self.invalidate().await;
                SubmitOutcome::Submitted(created)
            }
            Err(e) => {
                warn!(error = %e, item = %body.item_uid, "suggestion submit failed");
                if let Some(form) = self.session.borrow_mut().suggestion.get_mut() {
                    form.error = Some(format!("No se pudo enviar la sugerencia: {}", e));
                }
                self.changed();
                SubmitOutcome::Failed(e)
            }
        }
    }

    // ========================
    // Create / edit form
    // ========================

    /// Open an empty form; an edit load still in flight is dropped.
    pub fn open_create(&self) {
        self.fetcher.supersede(FORM_SLOT);
        let form = ItemForm::create(&self.config.default_image);
        self.session.borrow_mut().open_form(form);
        self.changed();
    }

    /// Fetch the item and open the form in edit mode; stays hidden on failure.
    pub async fn open_edit(&self, uid: &str) -> bool {
        match self.fetcher.fetch_item(FORM_SLOT, uid).await {
            Ok(Some(item)) => {
                let preview = image_src(&self.config, &item.image);
                self.session
                    .borrow_mut()
                    .open_form(ItemForm::edit(&item, preview));
                self.changed();
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, uid, "item load for edit failed");
                false
            }
        }
    }

    pub fn set_form_field(&self, field: ItemField, value: String) {
        if let Some(form) = self.session.borrow_mut().form.get_mut() {
            form.fields.set(field, value);
        }
    }

    /// Keep a picked file for upload; `preview` replaces the form image.
    pub fn set_pending_image(&self, image: PendingImage, preview: Option<String>) {
        let mut session = self.session.borrow_mut();
        let Some(form) = session.form.get_mut() else {
            return;
        };
        if let Some(preview) = preview {
            form.preview = preview;
        }
        session.pending_image = Some(image);
        drop(session);
        self.changed();
    }

    pub fn close_form(&self) {
        self.fetcher.supersede(FORM_SLOT);
        self.session.borrow_mut().close_form();
        self.changed();
    }

    pub async fn save_item(&self) -> SaveOutcome {
        let request = {
            let mut session = self.session.borrow_mut();
            let image = session.pending_image.clone();
            let Some(form) = session.form.get_mut() else {
                return SaveOutcome::NotOpen;
            };
            let result = form.draft(image).map(|draft| (form.mode.clone(), draft));
            form.error = result.as_ref().err().map(|msg| msg.to_string());
            result
        };
        let (mode, draft) = match request {
            Ok(request) => request,
            Err(_) => {
                self.changed();
                return SaveOutcome::Invalid;
            }
        };

        let api = self.fetcher.api();
        let result = match &mode {
            FormMode::Create => api.create_item(&draft).await,
            FormMode::Edit(uid) => api.update_item(uid, &draft).await,
        };

        match result {
            Ok(item) => {
                info!(uid = %item.uid, mode = ?mode, "item saved");
                self.session.borrow_mut().close_form();
                self.changed();
                self.invalidate().await;
                SaveOutcome::Saved(item)
            }
            Err(e) => {
                warn!(error = %e, mode = ?mode, "item save failed");
                if let Some(form) = self.session.borrow_mut().form.get_mut() {
                    form.error = Some(format!("No se pudo guardar: {}", e));
                }
                self.changed();
                SaveOutcome::Failed(e)
            }
        }
    }

    // ========================
    // Delete confirmation
    // ========================

    pub fn request_delete(&self, uid: &str, name: &str) {
        self.session
            .borrow_mut()
            .delete
            .open(DeleteTarget {
                uid: uid.to_string(),
                name: name.to_string(),
            });
        self.changed();
    }

    pub fn cancel_delete(&self) {
        self.session.borrow_mut().delete.close();
        self.changed();
    }

    /// Delete the confirmed item. The overlay closes and the list reloads
    /// whatever the outcome; a failure is reported through the notice.
    pub async fn confirm_delete(&self) -> Option<ApiResult<()>> {
        let target = self.session.borrow().delete.get().cloned()?;
        let result = self.fetcher.api().delete_item(&target.uid).await;

        {
            let mut session = self.session.borrow_mut();
            session.delete.close();
            match &result {
                Ok(()) => {
                    info!(uid = %target.uid, "item deleted");
                    if session.current_item.as_deref() == Some(target.uid.as_str()) {
                        session.current_item = None;
                    }
                }
                Err(e) => {
                    warn!(error = %e, uid = %target.uid, "item delete failed");
                    session.notice = Some(format!("No se pudo eliminar «{}»: {}", target.name, e));
                }
            }
        }
        self.changed();
        self.invalidate().await;
        Some(result)
    }

    // ========================
    // Suggestion moderation (admin)
    // ========================

    pub async fn open_moderation(&self, uid: &str) -> bool {
        match self.fetcher.fetch_item(MODERATION_SLOT, uid).await {
            Ok(Some(item)) => {
                self.cache
                    .borrow_mut()
                    .counts
                    .insert(item.uid.clone(), item.suggestions.len());
                self.session.borrow_mut().moderation.open(item);
                self.changed();
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, uid, "moderation load failed");
                false
            }
        }
    }

    pub fn close_moderation(&self) {
        self.fetcher.supersede(MODERATION_SLOT);
        self.session.borrow_mut().moderation.close();
        self.changed();
    }

    /// Delete a suggestion, then refresh the moderated item and the list.
    pub async fn delete_suggestion(&self, uid: &str) -> ApiResult<()> {
        let item_uid = self
            .session
            .borrow()
            .moderation
            .get()
            .map(|item| item.uid.clone());

        let result = self.fetcher.api().delete_suggestion(uid).await;
        if let Err(e) = &result {
            warn!(error = %e, uid, "suggestion delete failed");
            self.session.borrow_mut().notice =
                Some(format!("No se pudo eliminar la sugerencia: {}", e));
        }

        if let Some(item_uid) = item_uid {
            self.refresh_moderation(&item_uid).await;
        }
        self.invalidate().await;
        result
    }

    async fn refresh_moderation(&self, uid: &str) {
        match self.fetcher.fetch_item(MODERATION_SLOT, uid).await {
            Ok(Some(item)) => {
                self.cache
                    .borrow_mut()
                    .counts
                    .insert(item.uid.clone(), item.suggestions.len());
                let mut session = self.session.borrow_mut();
                if let Some(shown) = session.moderation.get_mut() {
                    if shown.uid == item.uid {
                        *shown = item;
                    }
                }
                drop(session);
                self.changed();
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, uid, "moderation refresh failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::MemoryCatalogApi;
    use crate::render::ListView;
    use std::cell::Cell;
    use std::time::Duration;

    fn controller(kind: ViewKind, api: &Rc<MemoryCatalogApi>) -> (CatalogController, Rc<Cell<u32>>) {
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let ctrl = CatalogController::new(kind, AppConfig::default(), api.clone(), move || {
            counter.set(counter.get() + 1)
        });
        (ctrl, changes)
    }

    fn names(ctrl: &CatalogController) -> Vec<String> {
        ctrl.with_cache(|c| c.items.iter().map(|i| i.name.clone()).collect())
    }

    #[tokio::test]
    async fn test_empty_name_never_hits_the_network() {
        let api = Rc::new(MemoryCatalogApi::new());
        let (ctrl, _) = controller(ViewKind::Admin, &api);

        ctrl.open_create();
        ctrl.set_form_field(ItemField::Name, "   ".into());
        ctrl.set_form_field(ItemField::Description, "Caja x100".into());

        assert_eq!(ctrl.save_item().await, SaveOutcome::Invalid);
        assert_eq!(api.call_count(), 0);
        ctrl.with_session(|s| {
            let form = s.form.get().expect("form stays open");
            assert_eq!(form.error.as_deref(), Some(crate::session::NAME_REQUIRED));
        });
    }

    #[tokio::test]
    async fn test_create_item_then_list_shows_placeholder_image() {
        let api = Rc::new(MemoryCatalogApi::new());
        let (ctrl, _) = controller(ViewKind::Admin, &api);

        ctrl.open_create();
        ctrl.set_form_field(ItemField::Name, "Tornillo".into());
        ctrl.set_form_field(ItemField::Description, "Caja x100".into());
        ctrl.set_form_field(ItemField::Dispatch, "Bodega A".into());
        ctrl.set_form_field(ItemField::Quantity, "5".into());

        let SaveOutcome::Saved(created) = ctrl.save_item().await else {
            panic!("save should succeed");
        };
        assert!(created.image.is_empty());
        assert!(!ctrl.with_session(|s| s.form.is_open()));

        // The write reloaded the list on its own
        assert_eq!(names(&ctrl), ["Tornillo"]);
        assert!(!ctrl.with_cache(|c| c.stale));

        let ListView::Rows(rows) = ctrl.list_view() else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].image.src(), "/static/img/default.png");
        assert_eq!(rows[0].quantity, "5");
        assert_eq!(rows[0].suggestion_count, Some(0));
    }

    #[tokio::test]
    async fn test_create_with_image_uploads_pending_file() {
        let api = Rc::new(MemoryCatalogApi::new());
        let (ctrl, _) = controller(ViewKind::Admin, &api);

        ctrl.open_create();
        ctrl.set_form_field(ItemField::Name, "Tuerca".into());
        ctrl.set_pending_image(
            PendingImage {
                file_name: "foto.JPG".into(),
                mime_type: "image/jpeg".into(),
                bytes: vec![0xff, 0xd8],
            },
            Some("blob:preview".into()),
        );
        assert_eq!(
            ctrl.with_session(|s| s.form.get().map(|f| f.preview.clone())),
            Some("blob:preview".to_string())
        );

        let SaveOutcome::Saved(created) = ctrl.save_item().await else {
            panic!("save should succeed");
        };
        assert_eq!(created.image, format!("{}.jpg", created.uid));
        assert!(ctrl.with_session(|s| s.pending_image.is_none()));
    }

    #[tokio::test]
    async fn test_edit_uses_marker_and_reloads_with_search_text() {
        let api = Rc::new(MemoryCatalogApi::with_items(&["Tornillo", "Tuerca"]));
        let uid = api.uid_of("Tornillo");
        let (ctrl, _) = controller(ViewKind::Admin, &api);

        ctrl.set_search_text(" tor ");
        ctrl.search("tor").await;
        assert_eq!(names(&ctrl), ["Tornillo"]);

        assert!(ctrl.open_edit(&uid).await);
        ctrl.with_session(|s| {
            let form = s.form.get().unwrap();
            assert_eq!(form.mode, FormMode::Edit(uid.clone()));
            assert_eq!(form.fields.name, "Tornillo");
        });

        ctrl.set_form_field(ItemField::Name, "Tornillo largo".into());
        assert!(matches!(ctrl.save_item().await, SaveOutcome::Saved(_)));

        assert!(api.calls.borrow().contains(&format!("PUT items/{}", uid)));
        assert_eq!(names(&ctrl), ["Tornillo largo"]);
        assert_eq!(ctrl.with_cache(|c| c.query.clone()), "tor");
    }

    #[tokio::test]
    async fn test_save_failure_is_surfaced_and_form_stays_open() {
        let api = Rc::new(MemoryCatalogApi::new());
        api.fail_writes.set(true);
        let (ctrl, _) = controller(ViewKind::Admin, &api);

        ctrl.open_create();
        ctrl.set_form_field(ItemField::Name, "Tornillo".into());

        assert!(matches!(ctrl.save_item().await, SaveOutcome::Failed(_)));
        ctrl.with_session(|s| {
            let error = s.form.get().and_then(|f| f.error.clone()).unwrap();
            assert!(error.starts_with("No se pudo guardar"));
        });
    }

    #[tokio::test]
    async fn test_open_detail_failure_stays_hidden() {
        let api = Rc::new(MemoryCatalogApi::with_items(&["Tornillo"]));
        let (ctrl, changes) = controller(ViewKind::Public, &api);

        assert!(!ctrl.open_detail("missing").await);
        assert!(!ctrl.with_session(|s| s.detail.is_open()));
        assert_eq!(changes.get(), 0);

        assert!(!ctrl.open_edit("missing").await);
        assert!(!ctrl.with_session(|s| s.form.is_open()));
    }

    #[tokio::test]
    async fn test_suggestion_shows_in_detail_and_bumps_badge() {
        let api = Rc::new(MemoryCatalogApi::with_items(&["Tornillo", "Tuerca"]));
        let uid = api.uid_of("Tornillo");
        let (public, _) = controller(ViewKind::Public, &api);
        let (admin, _) = controller(ViewKind::Admin, &api);

        admin.invalidate().await;
        let before = admin.with_cache(|c| c.counts.get(&uid).copied());
        assert_eq!(before, Some(0));

        assert!(public.open_detail(&uid).await);
        assert!(public.open_suggestion_form());
        public.set_suggestion_field(SuggestionField::Suggester, "Ana".into());
        public.set_suggestion_field(SuggestionField::SuggestedName, "Perno".into());
        assert!(matches!(public.submit_suggestion().await, SubmitOutcome::Submitted(_)));

        public.with_session(|s| {
            assert!(!s.suggestion.is_open());
            let shown = s.detail.get().unwrap();
            assert_eq!(shown.suggestions.len(), 1);
            assert_eq!(shown.suggestions[0].suggester, "Ana");
            assert_eq!(shown.suggestions[0].suggested_name, "Perno");
        });

        admin.invalidate().await;
        assert_eq!(admin.with_cache(|c| c.counts.get(&uid).copied()), Some(1));
        assert_eq!(admin.total_suggestions(), 1);

        // Search also matches suggested names
        public.search("perno").await;
        assert_eq!(names(&public), ["Tornillo"]);
    }

    #[tokio::test]
    async fn test_suggestion_validation_blocks_request() {
        let api = Rc::new(MemoryCatalogApi::with_items(&["Tornillo"]));
        let uid = api.uid_of("Tornillo");
        let (ctrl, _) = controller(ViewKind::Public, &api);

        assert!(!ctrl.open_suggestion_form());
        assert!(ctrl.open_detail(&uid).await);
        assert!(ctrl.open_suggestion_form());
        ctrl.set_suggestion_field(SuggestionField::Suggester, "Ana".into());

        let calls = api.call_count();
        assert_eq!(ctrl.submit_suggestion().await, SubmitOutcome::Invalid);
        assert_eq!(api.call_count(), calls);
        assert!(ctrl.with_session(|s| s.suggestion.get().unwrap().error.is_some()));
    }

    #[tokio::test]
    async fn test_delete_item_removes_it_everywhere() {
        let api = Rc::new(MemoryCatalogApi::with_items(&["Tornillo", "Tuerca"]));
        let uid = api.uid_of("Tornillo");
        let (ctrl, _) = controller(ViewKind::Admin, &api);
        ctrl.invalidate().await;

        ctrl.request_delete(&uid, "Tornillo");
        assert_eq!(ctrl.with_session(|s| s.delete.get().map(|t| t.name.clone())), Some("Tornillo".into()));

        assert_eq!(ctrl.confirm_delete().await, Some(Ok(())));
        assert!(!ctrl.with_session(|s| s.delete.is_open()));
        assert_eq!(names(&ctrl), ["Tuerca"]);
        assert!(!ctrl.with_cache(|c| c.counts.contains_key(&uid)));

        let err = api.get_item(&uid).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_failure_still_closes_and_reloads() {
        let api = Rc::new(MemoryCatalogApi::with_items(&["Tornillo"]));
        let (ctrl, _) = controller(ViewKind::Admin, &api);

        ctrl.request_delete("ghost", "Fantasma");
        let result = ctrl.confirm_delete().await.unwrap();

        assert!(result.unwrap_err().is_not_found());
        assert!(!ctrl.with_session(|s| s.delete.is_open()));
        assert!(ctrl.with_session(|s| s.notice.is_some()));
        assert_eq!(names(&ctrl), ["Tornillo"]);

        ctrl.dismiss_notice();
        assert!(ctrl.with_session(|s| s.notice.is_none()));
        assert_eq!(ctrl.confirm_delete().await, None);
    }

    #[tokio::test]
    async fn test_moderation_delete_refreshes_list_and_count() {
        let api = Rc::new(MemoryCatalogApi::with_items(&["Tornillo"]));
        let uid = api.uid_of("Tornillo");
        for name in ["Perno", "Bulón"] {
            api.create_suggestion(&crate::models::NewSuggestion {
                item_uid: uid.clone(),
                suggested_name: name.into(),
                suggester: "Ana".into(),
            })
            .await
            .unwrap();
        }
        let (admin, _) = controller(ViewKind::Admin, &api);
        admin.invalidate().await;
        assert_eq!(admin.total_suggestions(), 2);

        assert!(admin.open_moderation(&uid).await);
        let first = admin.with_session(|s| s.moderation.get().unwrap().suggestions[0].uid.clone());

        assert_eq!(admin.delete_suggestion(&first).await, Ok(()));
        admin.with_session(|s| {
            let shown = s.moderation.get().unwrap();
            assert_eq!(shown.suggestions.len(), 1);
            assert_eq!(shown.suggestions[0].suggested_name, "Bulón");
        });
        assert_eq!(admin.with_cache(|c| c.counts.get(&uid).copied()), Some(1));

        admin.close_moderation();
        assert!(!admin.with_session(|s| s.moderation.is_open()));
    }

    #[tokio::test]
    async fn test_views_keep_separate_sessions() {
        let api = Rc::new(MemoryCatalogApi::with_items(&["Tornillo"]));
        let uid = api.uid_of("Tornillo");
        let (public, _) = controller(ViewKind::Public, &api);
        let (admin, _) = controller(ViewKind::Admin, &api);

        assert!(public.open_detail(&uid).await);
        admin.open_create();

        assert!(admin.with_session(|s| s.current_item.is_none() && !s.detail.is_open()));
        assert!(public.with_session(|s| !s.form.is_open()));
    }

    #[tokio::test]
    async fn test_public_empty_states() {
        let api = Rc::new(MemoryCatalogApi::new());
        let (ctrl, changes) = controller(ViewKind::Public, &api);

        ctrl.search("").await;
        assert_eq!(ctrl.list_view(), ListView::Empty("No hay items en el catálogo.".into()));
        ctrl.search("perno").await;
        assert_eq!(ctrl.list_view(), ListView::Empty("Sin resultados para «perno».".into()));
        assert_eq!(changes.get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_after_slow_edit_stays_create() {
        let api = Rc::new(MemoryCatalogApi::with_items(&["Tornillo"]));
        let uid = api.uid_of("Tornillo");
        api.latency.borrow_mut().insert(uid.clone(), Duration::from_millis(500));
        let (ctrl, _) = controller(ViewKind::Admin, &api);

        let (opened, _) = tokio::join!(ctrl.open_edit(&uid), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            ctrl.open_create();
            ctrl.set_form_field(ItemField::Name, "Arandela".into());
        });

        assert!(!opened);
        ctrl.with_session(|s| {
            let form = s.form.get().unwrap();
            assert_eq!(form.mode, FormMode::Create);
            assert_eq!(form.fields.name, "Arandela");
        });

        let SaveOutcome::Saved(created) = ctrl.save_item().await else {
            panic!("save should succeed");
        };
        assert_ne!(created.uid, uid);
        assert!(!api.calls.borrow().contains(&format!("PUT items/{}", uid)));
        assert_eq!(names(&ctrl), ["Tornillo", "Arandela"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_overlays_ignore_late_loads() {
        let api = Rc::new(MemoryCatalogApi::with_items(&["Tornillo"]));
        let uid = api.uid_of("Tornillo");
        api.latency.borrow_mut().insert(uid.clone(), Duration::from_millis(500));
        let (admin, _) = controller(ViewKind::Admin, &api);
        let (public, _) = controller(ViewKind::Public, &api);

        tokio::join!(admin.open_edit(&uid), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            admin.open_create();
            admin.close_form();
        });
        assert!(!admin.with_session(|s| s.form.is_open()));

        tokio::join!(admin.open_moderation(&uid), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            admin.close_moderation();
        });
        assert!(!admin.with_session(|s| s.moderation.is_open()));

        tokio::join!(public.open_detail(&uid), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            public.close_detail();
        });
        assert!(!public.with_session(|s| s.detail.is_open()));
    }
}
