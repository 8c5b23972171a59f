// src/registry.rs
//! Item registry.
//! Append-only list of auction items, looked up by name.

use crate::item::Item;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

pub struct ItemRegistry {
    /// Items in insertion order. Never shrinks or reorders.
    items: RwLock<Vec<Arc<Item>>>,
}

impl ItemRegistry {
    /// Create a new, empty item registry.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Create an empty registry with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    /// Append an item.
    /// Items sharing a name are all kept; lookups see the oldest first.
    pub fn add(&self, item: Item) {
        let mut items = self.items.write();
        tracing::trace!(name = %item.name(), len = items.len() + 1, "item added");
        items.push(Arc::new(item));
    }

    /// Retrieve the first item added under `name`.
    ///
    /// Plain O(N) scan. The list is expected to stay small; if it doesn't,
    /// a name index belongs here.
    pub fn find(&self, name: &str) -> Option<Arc<Item>> {
        let items = self.items.read();
        let found = items.iter().find(|i| i.name() == name).cloned();
        tracing::trace!(name, found = found.is_some(), "item lookup");
        found
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Snapshot of item names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.items
            .read()
            .iter()
            .map(|i| i.name().to_owned())
            .collect()
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ItemRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRegistry")
            .field("len", &self.len())
            .finish()
    }
}
