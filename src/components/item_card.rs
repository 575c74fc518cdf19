//! Item Card Component
//!
//! Single row in the catalog list.

use leptos::prelude::*;

use crate::models::FoundItem;
use crate::store::{is_selected, store_select_item, use_catalog_store};

/// A catalog row; clicking it opens the detail panel for the item
#[component]
pub fn ItemCard(item: FoundItem) -> impl IntoView {
    // Get store from parent
    let store = use_catalog_store();

    let id = item.id;
    let select_id = id.clone();
    let name = item.item.name;
    let category = item.item.category;
    let image_url = item.image_url;
    let color_name = item.color.name;
    let swatch_style = item
        .color
        .hex
        .as_ref()
        .map(|hex| format!("background-color: {};", hex))
        .unwrap_or_default();

    view! {
        <div
            class=move || if is_selected(&store, &id) { "item-card selected" } else { "item-card" }
            on:click=move |_| store_select_item(&store, select_id.clone())
        >
            <img class="item-thumb" src=image_url alt=name.clone() />
            <div class="item-summary">
                <span class="item-name">{name}</span>
                <span class="item-category">{category}</span>
            </div>
            <span class="item-color">
                <span class="color-swatch" style=swatch_style></span>
                {color_name}
            </span>
        </div>
    }
}
