use crate::domain::item::model::Item;

/// A line in a cart. `name` and `available` are snapshots taken when the
/// item was last added, not live views of the item.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: u64,
    pub name: String,
    pub quantity: u64,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: u64,
    pub items: Vec<CartItem>,
    /// Running total of every price added so far; never recomputed.
    pub price: f64,
}

impl Cart {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            items: Vec::new(),
            price: 0.0,
        }
    }

    /// Total number of units across all lines.
    pub fn quantity(&self) -> u64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Adds one unit of `item`, bumping its line if already present.
    pub fn add(&mut self, item: &Item) {
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => {
                line.quantity += 1;
                line.available = item.is_active();
            }
            None => self.items.push(CartItem {
                id: item.id,
                name: item.name.clone(),
                quantity: 1,
                available: item.is_active(),
            }),
        }
        self.price += item.price;
    }
}
