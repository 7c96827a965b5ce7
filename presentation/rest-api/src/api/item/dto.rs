use poem_openapi::Object;

use business::domain::item::model::Item;

/// Full item body, used by both create and replace
#[derive(Debug, Clone, Object)]
pub struct ItemRequest {
    /// Item name
    pub name: String,
    /// Unit price, must be zero or positive
    pub price: f64,
    /// Whether the item is soft-deleted
    #[oai(default)]
    pub deleted: bool,
}

/// Partial update; fields left out keep their stored value
#[derive(Debug, Clone, Object)]
#[oai(deny_unknown_fields)]
pub struct PatchItemRequest {
    /// New item name
    pub name: Option<String>,
    /// New unit price
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    /// Sequential item identifier
    pub id: u64,
    /// Item name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Whether the item is soft-deleted
    pub deleted: bool,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            deleted: item.deleted,
        }
    }
}
