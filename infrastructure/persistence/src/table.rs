use std::collections::BTreeMap;

/// Rows keyed by a sequential id that the table hands out itself.
///
/// Ids start at 1, are never reused and only grow, so iterating in key order
/// is iterating in insertion order.
#[derive(Debug)]
pub struct Table<T> {
    next_id: u64,
    rows: BTreeMap<u64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the next id and stores the row built for it.
    pub fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.entry(id).or_insert(build(id))
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_assign_sequential_ids_from_one() {
        let mut table = Table::new();

        let first = *table.insert_with(|id| id);
        let second = *table.insert_with(|id| id);

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(table.values().count(), 2);
    }

    #[test]
    fn should_iterate_in_insertion_order() {
        let mut table = Table::new();
        for name in ["a", "b", "c"] {
            table.insert_with(|_| name);
        }

        let names: Vec<&str> = table.values().copied().collect();

        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn should_miss_unknown_id() {
        let table: Table<u8> = Table::new();

        assert_eq!(table.values().count(), 0);
        assert!(table.get(1).is_none());
    }
}
