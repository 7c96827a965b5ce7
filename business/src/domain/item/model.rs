use super::errors::ItemError;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub deleted: bool,
}

/// Validated field set for creating or fully replacing an item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub deleted: bool,
}

impl NewItem {
    pub fn new(name: String, price: f64, deleted: bool) -> Result<Self, ItemError> {
        if !price.is_finite() || price < 0.0 {
            return Err(ItemError::InvalidPrice);
        }
        Ok(Self {
            name,
            price,
            deleted,
        })
    }
}

/// Fields of a partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ItemPatch {
    pub fn new(name: Option<String>, price: Option<f64>) -> Result<Self, ItemError> {
        if let Some(price) = price
            && (!price.is_finite() || price < 0.0)
        {
            return Err(ItemError::InvalidPrice);
        }
        Ok(Self { name, price })
    }
}

/// A mutation applied atomically by the repository to a stored item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemChange {
    Replace(NewItem),
    Patch(ItemPatch),
    SoftDelete,
}

impl Item {
    pub fn from_new(id: u64, new: NewItem) -> Self {
        Self {
            id,
            name: new.name,
            price: new.price,
            deleted: new.deleted,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Applies `change` in place.
    ///
    /// Returns `false`, leaving the item untouched, when the change targets
    /// live items only and this one is soft-deleted. Soft deletion itself
    /// always applies.
    pub fn apply(&mut self, change: ItemChange) -> bool {
        match change {
            ItemChange::SoftDelete => {
                self.deleted = true;
                true
            }
            _ if self.deleted => false,
            ItemChange::Replace(new) => {
                self.name = new.name;
                self.price = new.price;
                self.deleted = new.deleted;
                true
            }
            ItemChange::Patch(patch) => {
                if let Some(name) = patch.name {
                    self.name = name;
                }
                if let Some(price) = patch.price {
                    self.price = price;
                }
                true
            }
        }
    }
}
