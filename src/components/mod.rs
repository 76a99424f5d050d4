//! UI Components
//!
//! Leptos components binding the catalog controller to the DOM.

mod modal_shell;
mod item_image;
mod search_bar;
mod card_grid;
mod admin_table;
mod item_detail_modal;
mod suggestion_modal;
mod item_form_modal;
mod delete_modal;
mod moderation_modal;
mod stats_bar;
mod notice_bar;

pub use modal_shell::ModalShell;
pub use item_image::ItemImage;
pub use search_bar::SearchBar;
pub use card_grid::CardGrid;
pub use admin_table::AdminTable;
pub use item_detail_modal::ItemDetailModal;
pub use suggestion_modal::SuggestionModal;
pub use item_form_modal::ItemFormModal;
pub use delete_modal::DeleteModal;
pub use moderation_modal::ModerationModal;
pub use stats_bar::StatsBar;
pub use notice_bar::NoticeBar;
