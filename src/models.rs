//! Frontend Models
//!
//! Data structures for found-item catalog entries.

use serde::{Deserialize, Serialize};

/// Color of an item with its display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemColor {
    pub name: String,
    /// CSS color used for the swatch, if known
    #[serde(default)]
    pub hex: Option<String>,
}

/// What the item is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    pub name: String,
    #[serde(rename = "categoryName")]
    pub category: String,
}

/// A catalog entry shown in the list and the detail panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundItem {
    /// UUID assigned when the item was registered
    pub id: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub color: ItemColor,
    pub item: ItemDescriptor,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_item() {
        let json = r##"{
            "id": "3f2b8c1e-9a4d-4e2b-8f00-1c2d3e4f5a6b",
            "imageUrl": "public/items/umbrella.svg",
            "color": { "name": "Navy", "hex": "#1f2a44" },
            "item": { "name": "Umbrella", "categoryName": "Accessories" },
            "memo": "Folding, wooden handle",
            "location": "Platform 3"
        }"##;

        let item: FoundItem = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(item.id, "3f2b8c1e-9a4d-4e2b-8f00-1c2d3e4f5a6b");
        assert_eq!(item.image_url, "public/items/umbrella.svg");
        assert_eq!(item.color.name, "Navy");
        assert_eq!(item.color.hex.as_deref(), Some("#1f2a44"));
        assert_eq!(item.item.category, "Accessories");
        assert_eq!(item.location, "Platform 3");
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "id": "b7e1d0c2-5f3a-4c8e-9d21-6a0f4e7b3c19",
            "imageUrl": "",
            "color": { "name": "Black" },
            "item": { "name": "Wallet", "categoryName": "Valuables" }
        }"#;

        let item: FoundItem = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(item.color.hex, None);
        assert!(item.memo.is_empty());
        assert!(item.location.is_empty());
    }

    #[test]
    fn test_numeric_id_rejected() {
        let json = r#"{
            "id": 12,
            "imageUrl": "",
            "color": { "name": "Black" },
            "item": { "name": "Wallet", "categoryName": "Valuables" }
        }"#;

        assert!(serde_json::from_str::<FoundItem>(json).is_err());
    }
}
