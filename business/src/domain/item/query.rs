use crate::domain::errors::QueryError;
use crate::domain::shared::value_objects::{Page, PriceRange};

use super::model::Item;

/// Listing criteria for items. Filters run first, then the page window is
/// sliced from the filtered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemQuery {
    pub page: Page,
    pub price: PriceRange,
    pub show_deleted: bool,
}

impl ItemQuery {
    pub fn from_raw(
        offset: Option<i64>,
        limit: Option<i64>,
        min_price: Option<f64>,
        max_price: Option<f64>,
        show_deleted: bool,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            page: Page::from_raw(offset, limit)?,
            price: PriceRange::new(min_price, max_price)?,
            show_deleted,
        })
    }

    pub fn matches(&self, item: &Item) -> bool {
        (self.show_deleted || item.is_active()) && self.price.contains(item.price)
    }

    /// Selects from `items`, which must be in insertion order.
    pub fn select(&self, items: Vec<Item>) -> Vec<Item> {
        items
            .into_iter()
            .filter(|item| self.matches(item))
            .skip(self.page.offset())
            .take(self.page.limit())
            .collect()
    }
}
