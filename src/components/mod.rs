//! UI Components
//!
//! Reusable Leptos components.

mod close_button;
mod item_card;
mod item_detail_panel;

pub use close_button::CloseButton;
pub use item_card::ItemCard;
pub use item_detail_panel::ItemDetailPanel;
