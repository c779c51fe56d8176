use std::collections::HashMap;

use api_types::Id;
use api_types::lookup::{Carrier, ExpenseType, PaymentMethod, Person, RubricItem};

/// Record addressable by its backend id.
pub trait LookupRecord {
    fn id(&self) -> Id;
}

impl LookupRecord for Person {
    fn id(&self) -> Id {
        self.id
    }
}

impl LookupRecord for ExpenseType {
    fn id(&self) -> Id {
        self.id
    }
}

impl LookupRecord for RubricItem {
    fn id(&self) -> Id {
        self.id
    }
}

impl LookupRecord for Carrier {
    fn id(&self) -> Id {
        self.id
    }
}

impl LookupRecord for PaymentMethod {
    fn id(&self) -> Id {
        self.id
    }
}

/// Reference-data set with backend ordering and an id index.
///
/// Selection controls iterate [`items`](Self::items) in the order the
/// backend returned them; validation and the resolver resolve ids through
/// the index, so "value not found" is an explicit `None` instead of a
/// silent scan miss.
#[derive(Clone, Debug)]
pub struct LookupSet<T> {
    items: Vec<T>,
    index: HashMap<Id, usize>,
}

impl<T> Default for LookupSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: LookupRecord> LookupSet<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(pos, item)| (item.id(), pos))
            .collect();
        Self { items, index }
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, id: Id) -> bool {
        self.index.contains_key(&id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
