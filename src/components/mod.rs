//! UI Components
//!
//! Leptos components of the board page.

mod board_canvas;
mod card_files;
mod card_tags;
mod card_title;
mod card_view;
mod connector_layer;
mod context_menu;
mod file_drop_zone;
mod search_box;
mod share_modal;
mod toolbar;

pub use board_canvas::BoardCanvas;
pub use card_files::CardFiles;
pub use card_tags::CardTags;
pub use card_title::CardTitle;
pub use card_view::CardView;
pub use connector_layer::ConnectorLayer;
pub use context_menu::ContextMenu;
pub use file_drop_zone::{upload_card_files, FileDropZone};
pub use search_box::SearchBox;
pub use share_modal::ShareModal;
pub use toolbar::Toolbar;
