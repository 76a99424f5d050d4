//! In-memory catalog API for tests.
//!
//! Mirrors the server's observable behaviour: name/suggestion filtering,
//! 404s on unknown ids, suggestion cascade on item delete.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use super::{ApiError, ApiResult, CatalogApi};
use crate::models::{Item, ItemDraft, NewSuggestion, Suggestion};

#[derive(Debug, Default)]
pub struct MemoryCatalogApi {
    items: RefCell<Vec<Item>>,
    suggestions: RefCell<Vec<Suggestion>>,
    next_id: Cell<u32>,
    /// Every request issued, as "METHOD target"
    pub calls: RefCell<Vec<String>>,
    /// Artificial latency keyed by list query or item uid
    pub latency: RefCell<HashMap<String, Duration>>,
    pub fail_writes: Cell<bool>,
}

impl MemoryCatalogApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(names: &[&str]) -> Self {
        let api = Self::new();
        for name in names {
            let uid = api.next_uid("item");
            api.items.borrow_mut().push(Item {
                uid,
                name: name.to_string(),
                description: String::new(),
                dispatch: String::new(),
                quantity: String::new(),
                image: String::new(),
                suggestions: Vec::new(),
            });
        }
        api
    }

    pub fn uid_of(&self, name: &str) -> String {
        self.items
            .borrow()
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.uid.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn next_uid(&self, prefix: &str) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("{}-{}", prefix, id)
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    async fn delay(&self, key: &str) {
        let latency = self.latency.borrow().get(key).copied();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn check_writable(&self) -> ApiResult<()> {
        if self.fail_writes.get() {
            return Err(ApiError::Status {
                status: 500,
                message: "write failed".into(),
            });
        }
        Ok(())
    }

    fn apply(item: &mut Item, draft: &ItemDraft) {
        let [name, description, dispatch, quantity] = draft.text_fields();
        item.name = name.1.to_string();
        item.description = description.1.to_string();
        item.dispatch = dispatch.1.to_string();
        item.quantity = quantity.1.to_string();
        if let Some(image) = &draft.image {
            let ext = image.file_name.rsplit('.').next().unwrap_or("png");
            item.image = format!("{}.{}", item.uid, ext.to_lowercase());
        }
    }
}

#[async_trait(?Send)]
impl CatalogApi for MemoryCatalogApi {
    async fn list_items(&self, query: &str) -> ApiResult<Vec<Item>> {
        self.record(format!("GET items?q={}", query));
        self.delay(query).await;

        let q = query.trim().to_lowercase();
        let suggestions = self.suggestions.borrow();
        let items = self
            .items
            .borrow()
            .iter()
            .filter(|item| {
                q.is_empty()
                    || item.name.to_lowercase().contains(&q)
                    || suggestions
                        .iter()
                        .filter(|s| s.item_uid == item.uid)
                        .any(|s| s.suggested_name.to_lowercase().contains(&q))
            })
            .cloned()
            .collect();
        Ok(items)
    }

    async fn get_item(&self, uid: &str) -> ApiResult<Item> {
        self.record(format!("GET items/{}", uid));
        self.delay(uid).await;

        let mut item = self
            .items
            .borrow()
            .iter()
            .find(|i| i.uid == uid)
            .cloned()
            .ok_or_else(|| ApiError::not_found("not found"))?;
        item.suggestions = self
            .suggestions
            .borrow()
            .iter()
            .filter(|s| s.item_uid == uid)
            .cloned()
            .collect();
        Ok(item)
    }

    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item> {
        self.record("POST items".into());
        self.check_writable()?;
        if draft.name.trim().is_empty() {
            return Err(ApiError::Status {
                status: 400,
                message: "nombre requerido".into(),
            });
        }

        let mut item = Item {
            uid: self.next_uid("item"),
            name: String::new(),
            description: String::new(),
            dispatch: String::new(),
            quantity: String::new(),
            image: String::new(),
            suggestions: Vec::new(),
        };
        Self::apply(&mut item, draft);
        self.items.borrow_mut().push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, uid: &str, draft: &ItemDraft) -> ApiResult<Item> {
        self.record(format!("PUT items/{}", uid));
        self.check_writable()?;

        let mut items = self.items.borrow_mut();
        let item = items
            .iter_mut()
            .find(|i| i.uid == uid)
            .ok_or_else(|| ApiError::not_found("not found"))?;
        Self::apply(item, draft);
        Ok(item.clone())
    }

    async fn delete_item(&self, uid: &str) -> ApiResult<()> {
        self.record(format!("DELETE items/{}", uid));
        self.check_writable()?;

        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|i| i.uid != uid);
        if items.len() == before {
            return Err(ApiError::not_found("not found"));
        }
        self.suggestions.borrow_mut().retain(|s| s.item_uid != uid);
        Ok(())
    }

    async fn create_suggestion(&self, suggestion: &NewSuggestion) -> ApiResult<Suggestion> {
        self.record("POST sugerencias".into());
        self.check_writable()?;
        if !self.items.borrow().iter().any(|i| i.uid == suggestion.item_uid) {
            return Err(ApiError::not_found("item no existe"));
        }

        let entry = Suggestion {
            uid: self.next_uid("sugg"),
            item_uid: suggestion.item_uid.clone(),
            suggested_name: suggestion.suggested_name.trim().to_string(),
            suggester: suggestion.suggester.trim().to_string(),
        };
        self.suggestions.borrow_mut().push(entry.clone());
        Ok(entry)
    }

    async fn delete_suggestion(&self, uid: &str) -> ApiResult<()> {
        self.record(format!("DELETE sugerencias/{}", uid));
        self.check_writable()?;
        self.suggestions.borrow_mut().retain(|s| s.uid != uid);
        Ok(())
    }
}
