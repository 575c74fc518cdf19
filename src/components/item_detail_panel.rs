//! Item Detail Panel Component
//!
//! Fixed-position panel showing the metadata of the selected item.
//! The item and the open flag belong to the parent; the panel only reads them.

use leptos::prelude::*;

use crate::components::CloseButton;
use crate::models::FoundItem;

pub const LABEL_ID: &str = "ID";
pub const LABEL_NAME: &str = "Name";
pub const LABEL_CATEGORY: &str = "Category";
pub const LABEL_COLOR: &str = "Color";
pub const LABEL_MEMO: &str = "Memo";
pub const LABEL_LOCATION: &str = "Location";

/// One labeled row in the panel
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Nothing is shown unless the panel is open and an item is present
pub fn panel_visible(open: bool, item: Option<&FoundItem>) -> bool {
    open && item.is_some()
}

/// Labeled fields in display order
pub fn detail_fields(item: &FoundItem) -> Vec<DetailField> {
    vec![
        DetailField { label: LABEL_ID, value: item.id.clone() },
        DetailField { label: LABEL_NAME, value: item.item.name.clone() },
        DetailField { label: LABEL_CATEGORY, value: item.item.category.clone() },
        DetailField { label: LABEL_COLOR, value: item.color.name.clone() },
        DetailField { label: LABEL_MEMO, value: item.memo.clone() },
        DetailField { label: LABEL_LOCATION, value: item.location.clone() },
    ]
}

/// Image `src` and `alt` for the panel
pub fn detail_image(item: &FoundItem) -> (String, String) {
    (item.image_url.clone(), item.item.name.clone())
}

/// Detail panel for a single item
///
/// # Arguments
/// * `item` - The item to show, or `None`
/// * `open` - Whether the panel is open
/// * `on_close` - Called with no arguments when the user dismisses the panel
#[component]
pub fn ItemDetailPanel(
    #[prop(into)] item: Signal<Option<FoundItem>>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    move || {
        let item = item.get();
        if !panel_visible(open.get(), item.as_ref()) {
            return None;
        }
        let item = item?;
        let (image_src, image_alt) = detail_image(&item);

        let fields = detail_fields(&item)
            .into_iter()
            .map(|field| {
                // Color row gets a swatch when the hex value is known
                let swatch = (field.label == LABEL_COLOR)
                    .then(|| item.color.hex.clone())
                    .flatten()
                    .map(|hex| view! {
                        <span class="color-swatch" style=format!("background-color: {};", hex)></span>
                    });
                view! {
                    <div class="detail-field">
                        <dt class="detail-label">{field.label}</dt>
                        <dd class="detail-value">
                            {swatch}
                            {field.value}
                        </dd>
                    </div>
                }
            })
            .collect_view();

        Some(view! {
            <aside class="item-detail-panel">
                <div class="detail-header">
                    <span class="detail-title">{item.item.name.clone()}</span>
                    <CloseButton button_class="detail-close-btn" on_close=on_close />
                </div>
                <img class="detail-image" src=image_src alt=image_alt />
                <dl class="detail-fields">{fields}</dl>
            </aside>
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemColor, ItemDescriptor};

    fn sample_item() -> FoundItem {
        FoundItem {
            id: "7c1e4b93-0d2f-4a68-b5e9-1f3a8c6d2e47".to_string(),
            image_url: "public/items/keys.svg".to_string(),
            color: ItemColor { name: "Silver".to_string(), hex: Some("#c0c0c0".to_string()) },
            item: ItemDescriptor { name: "Key ring".to_string(), category: "Keys".to_string() },
            memo: "Three keys and a bottle opener".to_string(),
            location: "Gym locker room".to_string(),
        }
    }

    #[test]
    fn test_closed_panel_hidden() {
        let item = sample_item();
        assert!(!panel_visible(false, Some(&item)));
        assert!(!panel_visible(false, None));
    }

    #[test]
    fn test_open_without_item_hidden() {
        assert!(!panel_visible(true, None));
    }

    #[test]
    fn test_open_with_item_visible() {
        assert!(panel_visible(true, Some(&sample_item())));
    }

    #[test]
    fn test_fields_show_literal_values() {
        let fields = detail_fields(&sample_item());

        let pairs: Vec<(&str, &str)> = fields.iter().map(|f| (f.label, f.value.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                (LABEL_ID, "7c1e4b93-0d2f-4a68-b5e9-1f3a8c6d2e47"),
                (LABEL_NAME, "Key ring"),
                (LABEL_CATEGORY, "Keys"),
                (LABEL_COLOR, "Silver"),
                (LABEL_MEMO, "Three keys and a bottle opener"),
                (LABEL_LOCATION, "Gym locker room"),
            ]
        );
    }

    #[test]
    fn test_image_uses_url_and_name() {
        let (src, alt) = detail_image(&sample_item());
        assert_eq!(src, "public/items/keys.svg");
        assert_eq!(alt, "Key ring");
    }

    #[test]
    fn test_empty_memo_keeps_label() {
        let mut item = sample_item();
        item.memo.clear();

        let fields = detail_fields(&item);
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[4], DetailField { label: LABEL_MEMO, value: String::new() });
    }
}
