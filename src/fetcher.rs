//! Catalog Fetcher
//!
//! Reads from the catalog API, tagging every request with a per-slot
//! generation. A response whose generation is no longer the latest issued
//! for its slot is dropped, so the last request issued wins regardless of
//! arrival order.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::api::{ApiResult, CatalogApi};
use crate::models::Item;

pub const ITEMS_SLOT: &str = "items";
pub const DETAIL_SLOT: &str = "detail";
pub const FORM_SLOT: &str = "form";
pub const MODERATION_SLOT: &str = "moderation";

/// Slot for the suggestion-count badge of one item
pub fn count_slot(uid: &str) -> String {
    format!("count:{}", uid)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    slot: String,
    generation: u64,
}

/// Latest generation issued per logical query slot
#[derive(Debug, Default)]
pub struct Generations {
    latest: RefCell<HashMap<String, u64>>,
}

impl Generations {
    pub fn issue(&self, slot: &str) -> Ticket {
        let mut latest = self.latest.borrow_mut();
        let generation = latest.entry(slot.to_string()).or_insert(0);
        *generation += 1;
        Ticket {
            slot: slot.to_string(),
            generation: *generation,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.borrow().get(&ticket.slot) == Some(&ticket.generation)
    }
}

pub struct CatalogFetcher {
    api: Rc<dyn CatalogApi>,
    generations: Generations,
}

impl CatalogFetcher {
    pub fn new(api: Rc<dyn CatalogApi>) -> Self {
        Self {
            api,
            generations: Generations::default(),
        }
    }

    pub fn api(&self) -> &dyn CatalogApi {
        self.api.as_ref()
    }

    /// List items for `query` (empty = unfiltered). `Ok(None)` means a newer
    /// list request was issued while this one was in flight.
    pub async fn fetch_items(&self, query: &str) -> ApiResult<Option<Vec<Item>>> {
        let ticket = self.generations.issue(ITEMS_SLOT);
        let result = self.api.list_items(query.trim()).await;
        self.accept(&ticket, result)
    }

    /// Fetch one item with its suggestions, tagged on `slot`
    pub async fn fetch_item(&self, slot: &str, uid: &str) -> ApiResult<Option<Item>> {
        let ticket = self.generations.issue(slot);
        let result = self.api.get_item(uid).await;
        self.accept(&ticket, result)
    }

    /// Start a new round on `slot` without fetching, so responses still in
    /// flight for it are dropped.
    pub fn supersede(&self, slot: &str) {
        self.generations.issue(slot);
    }

    /// Stale responses are dropped whether they succeeded or failed.
    fn accept<T>(&self, ticket: &Ticket, result: ApiResult<T>) -> ApiResult<Option<T>> {
        if self.generations.is_current(ticket) {
            return result.map(Some);
        }
        match &result {
            Ok(_) => debug!(slot = %ticket.slot, generation = ticket.generation, "dropping stale response"),
            Err(e) => debug!(slot = %ticket.slot, generation = ticket.generation, error = %e, "dropping stale failure"),
        }
        Ok(None)
    }
}
