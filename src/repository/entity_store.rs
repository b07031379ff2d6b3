use chrono::Utc;
use indexmap::IndexMap;
use std::sync::Arc;

use crate::domain::Entity;

/// Insertion-ordered map from id to record.
///
/// Records are held behind `Arc` and replaced wholesale on update, so a
/// record that was not touched by a mutation keeps its identity.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    records: IndexMap<String, Arc<T>>,
    last_stamp: i64,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
            last_stamp: 0,
        }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Generates an id from the current time in milliseconds. Stamps are
    /// strictly increasing per store.
    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut stamp = now.max(self.last_stamp + 1);
        let mut id = format!("{}-{}", T::ID_PREFIX, stamp);
        while self.records.contains_key(&id) {
            stamp += 1;
            id = format!("{}-{}", T::ID_PREFIX, stamp);
        }
        self.last_stamp = stamp;
        id
    }

    /// Appends a record, or replaces it in place when the id already exists.
    pub fn insert(&mut self, record: T) -> Arc<T> {
        let record = Arc::new(record);
        self.records.insert(record.id().to_string(), record.clone());
        record
    }

    pub fn get(&self, id: &str) -> Option<&Arc<T>> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Replaces the record `id` with a modified copy. Returns the new record.
    pub fn update<F>(&mut self, id: &str, f: F) -> Option<Arc<T>>
    where
        F: FnOnce(&mut T),
    {
        let slot = self.records.get_mut(id)?;
        let mut record = T::clone(&**slot);
        f(&mut record);
        *slot = Arc::new(record);
        Some(slot.clone())
    }

    /// Applies `f` to every record, replacing only those for which it
    /// reports a change. Returns how many records changed.
    pub fn update_all<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&mut T) -> bool,
    {
        let mut changed = 0;
        for slot in self.records.values_mut() {
            let mut record = T::clone(&**slot);
            if f(&mut record) {
                *slot = Arc::new(record);
                changed += 1;
            }
        }
        changed
    }

    /// Removes one record, keeping the order of the others.
    pub fn remove(&mut self, id: &str) -> Option<Arc<T>> {
        self.records.shift_remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.records.values()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.records.values().map(|r| r.as_ref())
    }

    /// Snapshot of the records in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.values().cloned().collect()
    }

    pub fn first(&self) -> Option<&Arc<T>> {
        self.records.first().map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
