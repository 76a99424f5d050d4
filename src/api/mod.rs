//! Catalog API Bindings
//!
//! Frontend access to the catalog REST API, organized by transport.

mod http;
#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Item, ItemDraft, NewSuggestion, Suggestion};

pub use http::HttpCatalogApi;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

#[cfg(test)]
impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Status {
            status: 404,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Catalog REST API, as seen from the browser
///
/// Futures are `?Send`: browser fetches are bound to the UI thread.
#[async_trait(?Send)]
pub trait CatalogApi {
    /// `GET /api/items[?q=]`; an empty query lists everything
    async fn list_items(&self, query: &str) -> ApiResult<Vec<Item>>;

    /// `GET /api/items/{uid}` with nested suggestions
    async fn get_item(&self, uid: &str) -> ApiResult<Item>;

    /// `POST /api/items` (multipart)
    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item>;

    /// `PUT /api/items/{uid}` (multipart)
    async fn update_item(&self, uid: &str, draft: &ItemDraft) -> ApiResult<Item>;

    /// `DELETE /api/items/{uid}`
    async fn delete_item(&self, uid: &str) -> ApiResult<()>;

    /// `POST /api/sugerencias` (JSON)
    async fn create_suggestion(&self, suggestion: &NewSuggestion) -> ApiResult<Suggestion>;

    /// `DELETE /api/sugerencias/{uid}`
    async fn delete_suggestion(&self, uid: &str) -> ApiResult<()>;
}
