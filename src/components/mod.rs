//! UI Components
//!
//! Leptos components for the inventory page.

mod flash_list;
mod search_bar;
mod item_list;
mod item_row;
mod detail_panel;
mod picture_gallery;
mod upload_form;
mod lightbox;
mod item_form_fields;
mod add_item_modal;
mod modify_item_modal;
mod export_button;

pub use flash_list::FlashList;
pub use search_bar::SearchBar;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use detail_panel::DetailPanel;
pub use picture_gallery::PictureGallery;
pub use upload_form::UploadForm;
pub use lightbox::Lightbox;
pub use item_form_fields::ItemFormFields;
pub use add_item_modal::AddItemModal;
pub use modify_item_modal::ModifyItemModal;
pub use export_button::ExportButton;
