//! UI Session
//!
//! Per-view interaction state: which item is open, what the forms hold,
//! which overlays are visible. One instance per mounted view, so the public
//! and admin views never share targets.

use crate::models::{Item, ItemDraft, NewSuggestion, PendingImage};
use crate::overlay::Overlay;

pub const NAME_REQUIRED: &str = "El nombre es obligatorio.";
pub const SUGGESTION_REQUIRED: &str = "Completa ambos campos.";

/// Edit-target marker for the shared item form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn edit_target(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(uid) => Some(uid),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Description,
    Dispatch,
    Quantity,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
    pub dispatch: String,
    pub quantity: String,
}

impl ItemFields {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            dispatch: item.dispatch.clone(),
            quantity: item.quantity.clone(),
        }
    }

    pub fn get(&self, field: ItemField) -> &str {
        match field {
            ItemField::Name => &self.name,
            ItemField::Description => &self.description,
            ItemField::Dispatch => &self.dispatch,
            ItemField::Quantity => &self.quantity,
        }
    }

    pub fn set(&mut self, field: ItemField, value: String) {
        match field {
            ItemField::Name => self.name = value,
            ItemField::Description => self.description = value,
            ItemField::Dispatch => self.dispatch = value,
            ItemField::Quantity => self.quantity = value,
        }
    }
}

/// Contents of the create/edit overlay
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub mode: FormMode,
    pub fields: ItemFields,
    /// Image shown above the form: current image, placeholder, or local preview
    pub preview: String,
    pub error: Option<String>,
}

impl ItemForm {
    pub fn create(placeholder: &str) -> Self {
        Self {
            mode: FormMode::Create,
            fields: ItemFields::default(),
            preview: placeholder.to_string(),
            error: None,
        }
    }

    pub fn edit(item: &Item, preview: String) -> Self {
        Self {
            mode: FormMode::Edit(item.uid.clone()),
            fields: ItemFields::from_item(item),
            preview,
            error: None,
        }
    }

    /// Build the request body, or the inline error when the name is empty
    pub fn draft(&self, image: Option<PendingImage>) -> Result<ItemDraft, &'static str> {
        if self.fields.name.trim().is_empty() {
            return Err(NAME_REQUIRED);
        }
        Ok(ItemDraft {
            name: self.fields.name.trim().to_string(),
            description: self.fields.description.trim().to_string(),
            dispatch: self.fields.dispatch.trim().to_string(),
            quantity: self.fields.quantity.trim().to_string(),
            image,
        })
    }
}

/// Contents of the suggestion entry overlay
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuggestionForm {
    pub suggester: String,
    pub suggested_name: String,
    pub error: Option<String>,
}

impl SuggestionForm {
    pub fn submission(&self, item_uid: &str) -> Result<NewSuggestion, &'static str> {
        let suggester = self.suggester.trim();
        let suggested_name = self.suggested_name.trim();
        if suggester.is_empty() || suggested_name.is_empty() {
            return Err(SUGGESTION_REQUIRED);
        }
        Ok(NewSuggestion {
            item_uid: item_uid.to_string(),
            suggested_name: suggested_name.to_string(),
            suggester: suggester.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub uid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiSession {
    /// Item the detail/suggestion flow is about
    pub current_item: Option<String>,
    /// Raw search-box text
    pub search_text: String,
    pub detail: Overlay<Item>,
    pub suggestion: Overlay<SuggestionForm>,
    pub form: Overlay<ItemForm>,
    pub delete: Overlay<DeleteTarget>,
    pub moderation: Overlay<Item>,
    pub pending_image: Option<PendingImage>,
    /// Dismissible message for failures with no form to show them in
    pub notice: Option<String>,
}

impl UiSession {
    pub fn query(&self) -> &str {
        self.search_text.trim()
    }

    pub fn open_form(&mut self, form: ItemForm) {
        self.pending_image = None;
        self.form.open(form);
    }

    pub fn close_form(&mut self) -> Option<ItemForm> {
        self.pending_image = None;
        self.form.close()
    }
}
