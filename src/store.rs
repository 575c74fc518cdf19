//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the selection and the open flag; the detail panel only reads them.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::{filter_items, find_item};
use crate::models::FoundItem;

/// Catalog state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// All items in the catalog
    pub items: Vec<FoundItem>,
    /// Current search text
    pub query: String,
    /// Item shown in the detail panel
    pub selected_id: Option<String>,
    /// Whether the detail panel is open
    pub panel_open: bool,
}

impl CatalogState {
    pub fn new(items: Vec<FoundItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Select an item and open the detail panel
pub fn store_select_item(store: &CatalogStore, item_id: String) {
    store.selected_id().set(Some(item_id));
    store.panel_open().set(true);
}

/// Close the detail panel, keeping the selection
pub fn store_close_panel(store: &CatalogStore) {
    store.panel_open().set(false);
}

/// `on_close` handler for the detail panel
pub fn close_panel_callback(store: CatalogStore) -> Callback<()> {
    Callback::new(move |_: ()| store_close_panel(&store))
}

pub fn store_set_query(store: &CatalogStore, query: String) {
    store.query().set(query);
}

pub fn current_query(store: &CatalogStore) -> String {
    store.query().get()
}

/// Currently selected item, if it is still in the catalog
pub fn selected_item(store: &CatalogStore) -> Option<FoundItem> {
    let id = store.selected_id().get()?;
    find_item(&store.items().read(), &id)
}

pub fn is_panel_open(store: &CatalogStore) -> bool {
    store.panel_open().get()
}

pub fn is_selected(store: &CatalogStore, item_id: &str) -> bool {
    store.selected_id().read().as_deref() == Some(item_id)
}

/// Items matching the current search text
pub fn visible_items(store: &CatalogStore) -> Vec<FoundItem> {
    filter_items(&store.items().read(), &store.query().read())
}
