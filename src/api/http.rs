//! HTTP Transport
//!
//! `reqwest`-backed implementation of [`CatalogApi`].

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{ApiError, ApiResult, CatalogApi};
use crate::models::{Item, ItemDraft, NewSuggestion, Suggestion};

/// Same set `encodeURIComponent` leaves untouched
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base: String,
}

impl HttpCatalogApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base,
        }
    }

    pub fn items_url(&self, query: &str) -> String {
        let query = query.trim();
        if query.is_empty() {
            format!("{}/api/items", self.base)
        } else {
            format!("{}/api/items?q={}", self.base, encode(query))
        }
    }

    pub fn item_url(&self, uid: &str) -> String {
        format!("{}/api/items/{}", self.base, encode(uid))
    }

    pub fn suggestions_url(&self) -> String {
        format!("{}/api/sugerencias", self.base)
    }

    pub fn suggestion_url(&self, uid: &str) -> String {
        format!("{}/api/sugerencias/{}", self.base, encode(uid))
    }
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// Pull the `{"error": "..."}` message out of a failure body
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

fn multipart(draft: &ItemDraft) -> ApiResult<Form> {
    let mut form = Form::new();
    for (name, value) in draft.text_fields() {
        form = form.text(name, value.to_string());
    }
    if let Some(image) = &draft.image {
        let mut part = Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
        if !image.mime_type.is_empty() {
            part = part
                .mime_str(&image.mime_type)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
        }
        form = form.part("imagen", part);
    }
    Ok(form)
}

async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = ApiError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    };
    warn!(%err, "catalog request failed");
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn list_items(&self, query: &str) -> ApiResult<Vec<Item>> {
        let url = self.items_url(query);
        debug!(%url, "GET items");
        decode(send(self.client.get(url)).await?).await
    }

    async fn get_item(&self, uid: &str) -> ApiResult<Item> {
        decode(send(self.client.get(self.item_url(uid))).await?).await
    }

    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item> {
        let form = multipart(draft)?;
        let url = format!("{}/api/items", self.base);
        decode(send(self.client.post(url).multipart(form)).await?).await
    }

    async fn update_item(&self, uid: &str, draft: &ItemDraft) -> ApiResult<Item> {
        let form = multipart(draft)?;
        decode(send(self.client.put(self.item_url(uid)).multipart(form)).await?).await
    }

    async fn delete_item(&self, uid: &str) -> ApiResult<()> {
        send(self.client.delete(self.item_url(uid))).await?;
        Ok(())
    }

    async fn create_suggestion(&self, suggestion: &NewSuggestion) -> ApiResult<Suggestion> {
        let request = self.client.post(self.suggestions_url()).json(suggestion);
        decode(send(request).await?).await
    }

    async fn delete_suggestion(&self, uid: &str) -> ApiResult<()> {
        send(self.client.delete(self.suggestion_url(uid))).await?;
        Ok(())
    }
}
