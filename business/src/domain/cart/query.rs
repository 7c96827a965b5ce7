use crate::domain::errors::QueryError;
use crate::domain::shared::value_objects::{Page, PriceRange, QuantityRange};

use super::model::Cart;

/// Listing criteria for carts.
///
/// The page window is taken over the unfiltered insertion sequence and the
/// filters run afterwards, so a cart that fails a filter still uses up a slot
/// in the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartQuery {
    pub page: Page,
    pub price: PriceRange,
    pub quantity: QuantityRange,
}

impl CartQuery {
    pub fn from_raw(
        offset: Option<i64>,
        limit: Option<i64>,
        min_price: Option<f64>,
        max_price: Option<f64>,
        min_quantity: Option<i64>,
        max_quantity: Option<i64>,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            page: Page::from_raw(offset, limit)?,
            price: PriceRange::new(min_price, max_price)?,
            quantity: QuantityRange::from_raw(min_quantity, max_quantity)?,
        })
    }

    pub fn matches(&self, cart: &Cart) -> bool {
        self.price.contains(cart.price) && self.quantity.contains(cart.quantity())
    }

    /// Selects from `carts`, which must be in insertion order.
    pub fn select(&self, carts: Vec<Cart>) -> Vec<Cart> {
        carts
            .into_iter()
            .skip(self.page.offset())
            .take(self.page.limit())
            .filter(|cart| self.matches(cart))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItem;

    fn cart(id: u64, price: f64, quantity: u64) -> Cart {
        let items = if quantity == 0 {
            vec![]
        } else {
            vec![CartItem {
                id: 1,
                name: "pen".to_string(),
                quantity,
                available: true,
            }]
        };
        Cart { id, items, price }
    }

    fn ids(carts: &[Cart]) -> Vec<u64> {
        carts.iter().map(|c| c.id).collect()
    }

    #[test]
    fn should_return_all_carts_without_filters() {
        let carts = vec![cart(1, 0.0, 0), cart(2, 10.0, 1)];

        let selected = CartQuery::default().select(carts);

        assert_eq!(ids(&selected), vec![1, 2]);
    }

    #[test]
    fn should_filter_after_windowing() {
        let carts = vec![
            cart(1, 50.0, 5),
            cart(2, 5.0, 1),
            cart(3, 60.0, 6),
            cart(4, 70.0, 7),
        ];
        let query = CartQuery::from_raw(Some(0), Some(2), Some(20.0), None, None, None).unwrap();

        let selected = query.select(carts);

        // cart 2 is filtered out but still consumes its slot, so cart 3 is not pulled in
        assert_eq!(ids(&selected), vec![1]);
    }

    #[test]
    fn should_apply_exclusive_quantity_bounds() {
        let carts = vec![cart(1, 1.0, 1), cart(2, 2.0, 2), cart(3, 3.0, 3)];
        let query = CartQuery::from_raw(None, None, None, None, Some(1), Some(3)).unwrap();

        let selected = query.select(carts);

        assert_eq!(ids(&selected), vec![2]);
    }

    #[test]
    fn should_apply_inclusive_price_bounds() {
        let carts = vec![cart(1, 10.0, 1), cart(2, 15.0, 1), cart(3, 20.0, 1), cart(4, 21.0, 1)];
        let query = CartQuery::from_raw(None, None, Some(10.0), Some(20.0), None, None).unwrap();

        let selected = query.select(carts);

        assert_eq!(ids(&selected), vec![1, 2, 3]);
    }

    #[test]
    fn should_return_empty_when_offset_past_end() {
        let query = CartQuery::from_raw(Some(5), None, None, None, None, None).unwrap();

        assert!(query.select(vec![cart(1, 1.0, 1)]).is_empty());
    }

    #[test]
    fn should_reject_negative_quantity() {
        let result = CartQuery::from_raw(None, None, None, None, Some(-1), None);

        assert!(matches!(result, Err(QueryError::NegativeQuantity)));
    }
}
