//! Frontend Models
//!
//! Data structures matching the catalog API wire format.

use serde::{Deserialize, Serialize};

/// Catalog item (matches `/api/items` payloads)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "uid_item")]
    pub uid: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "despacho", default)]
    pub dispatch: String,
    #[serde(rename = "cajas", default)]
    pub quantity: String,
    /// Image file name; empty means "use the placeholder"
    #[serde(rename = "imagen", default)]
    pub image: String,
    /// Only populated by the single-item endpoint
    #[serde(rename = "sugerencias", default)]
    pub suggestions: Vec<Suggestion>,
}

/// Naming suggestion attached to an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "uid_sugerencia")]
    pub uid: String,
    #[serde(rename = "uid_item")]
    pub item_uid: String,
    #[serde(rename = "nombre_sugerido")]
    pub suggested_name: String,
    #[serde(rename = "sugeridor")]
    pub suggester: String,
}

/// JSON body for `POST /api/sugerencias`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSuggestion {
    #[serde(rename = "uid_item")]
    pub item_uid: String,
    #[serde(rename = "nombre_sugerido")]
    pub suggested_name: String,
    #[serde(rename = "sugeridor")]
    pub suggester: String,
}

/// Image picked in the item form, not uploaded yet
#[derive(Debug, Clone, PartialEq)]
pub struct PendingImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart body for creating or updating an item
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub dispatch: String,
    pub quantity: String,
    pub image: Option<PendingImage>,
}

impl ItemDraft {
    /// Multipart text fields in wire order
    pub fn text_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("nombre", self.name.trim()),
            ("descripcion", self.description.trim()),
            ("despacho", self.dispatch.trim()),
            ("cajas", self.quantity.trim()),
        ]
    }
}
