//! Indexes for graph lookups.

use pairing_core::EntityId;
use std::collections::{BTreeSet, HashMap};

/// Name index: name -> Set<EntityId>
///
/// Names are not unique; two entities may share one.
#[derive(Debug, Default)]
pub struct NameIndex {
    index: HashMap<String, BTreeSet<EntityId>>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, id: EntityId) {
        self.index.entry(name.to_string()).or_default().insert(id);
    }

    pub fn remove(&mut self, name: &str, id: EntityId) {
        if let Some(set) = self.index.get_mut(name) {
            set.remove(&id);
            if set.is_empty() {
                self.index.remove(name);
            }
        }
    }

    pub fn get(&self, name: &str) -> impl Iterator<Item = EntityId> + '_ {
        self.index
            .get(name)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}
