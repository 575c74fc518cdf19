//! Found-Item Finder App
//!
//! Searchable catalog list with the detail panel on the side.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::{parse_catalog, BUNDLED_CATALOG};
use crate::components::{ItemCard, ItemDetailPanel};
use crate::store::{
    close_panel_callback, current_query, is_panel_open, selected_item, store_set_query,
    visible_items, CatalogState,
};

#[component]
pub fn App() -> impl IntoView {
    let items = match parse_catalog(BUNDLED_CATALOG) {
        Ok(items) => {
            web_sys::console::log_1(&format!("[APP] Loaded {} catalog items", items.len()).into());
            items
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[APP] Failed to load catalog: {}", e).into());
            Vec::new()
        }
    };

    let store = Store::new(CatalogState::new(items));
    provide_context(store);

    let selected = Signal::derive(move || selected_item(&store));
    let open = Signal::derive(move || is_panel_open(&store));
    let on_close = close_panel_callback(store);

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Found Items"</h1>

                <input
                    type="search"
                    class="search-input"
                    placeholder="Search name, category, color, memo, location"
                    prop:value=move || current_query(&store)
                    on:input=move |ev| store_set_query(&store, event_target_value(&ev))
                />

                <div class="item-list">
                    <For
                        each=move || visible_items(&store)
                        key=|item| item.id.clone()
                        children=move |item| view! { <ItemCard item=item /> }
                    />
                </div>

                <p class="item-count">{move || format!("{} items", visible_items(&store).len())}</p>
            </main>

            <ItemDetailPanel item=selected open=open on_close=on_close />
        </div>
    }
}
