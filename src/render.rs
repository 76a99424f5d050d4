//! List Renderer
//!
//! Turns fetched items into row models for the card grid and admin table.

use std::collections::HashMap;

use crate::config::AppConfig;
use crate::models::{Item, Suggestion};

pub const NO_SUGGESTIONS: &str = "Sin sugerencias aún.";

/// `/product-img/<file>` or the placeholder when no file is set
pub fn image_src(config: &AppConfig, file: &str) -> String {
    let file = file.trim();
    if file.is_empty() {
        config.default_image.clone()
    } else {
        format!("{}{}", config.image_prefix, file)
    }
}

/// Image source with placeholder fallback, both eager and on load error
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    src: String,
    placeholder: String,
}

impl ImageSource {
    pub fn new(config: &AppConfig, file: &str) -> Self {
        Self {
            src: image_src(config, file),
            placeholder: config.default_image.clone(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_placeholder(&self) -> bool {
        self.src == self.placeholder
    }

    /// The image failed to load. Returns whether the source changed, so a
    /// broken placeholder does not loop.
    pub fn fail(&mut self) -> bool {
        if self.is_placeholder() {
            return false;
        }
        self.src = self.placeholder.clone();
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub uid: String,
    pub name: String,
    pub description: String,
    pub dispatch: String,
    pub quantity: String,
    pub image: ImageSource,
    /// Admin badge; `None` while loading
    pub suggestion_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Single explanatory placeholder row
    Empty(String),
    Rows(Vec<ItemRow>),
}

impl ListView {
    /// Number of elements the view renders
    #[cfg(test)]
    pub fn element_count(&self) -> usize {
        match self {
            ListView::Empty(_) => 1,
            ListView::Rows(rows) => rows.len(),
        }
    }
}

/// Rows in server order; never re-sorted
pub fn render_list(
    config: &AppConfig,
    items: &[Item],
    counts: &HashMap<String, usize>,
    empty_message: &str,
) -> ListView {
    if items.is_empty() {
        return ListView::Empty(empty_message.to_string());
    }

    let rows = items
        .iter()
        .map(|item| ItemRow {
            uid: item.uid.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            dispatch: item.dispatch.clone(),
            quantity: item.quantity.clone(),
            image: ImageSource::new(config, &item.image),
            suggestion_count: counts.get(&item.uid).copied(),
        })
        .collect();
    ListView::Rows(rows)
}

/// Public empty-state text: "no results" for a search, "empty" otherwise
pub fn empty_message(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        "No hay items en el catálogo.".to_string()
    } else {
        format!("Sin resultados para «{}».", query)
    }
}

/// Public detail lines, "suggester: name", or one placeholder line
pub fn render_suggestions(suggestions: &[Suggestion]) -> Vec<String> {
    if suggestions.is_empty() {
        return vec![NO_SUGGESTIONS.to_string()];
    }
    suggestions
        .iter()
        .map(|s| format!("{}: {}", s.suggester, s.suggested_name))
        .collect()
}
