//! One entity collection: rows keyed by id plus the id counter.

use crate::model::{Id, Insertable, Merge};
use std::collections::BTreeMap;

/// Rows iterate in id order, which is also insertion order because ids only grow.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<Id, T>,
    next_id: Id,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub fn get(&self, id: Id) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|r| pred(r)).cloned().collect()
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|r| pred(r)).cloned()
    }

    /// Take the next id and store the record. Ids are never handed out twice.
    pub fn insert<I>(&mut self, data: I) -> T
    where
        I: Insertable<Record = T>,
    {
        let id = self.next_id;
        self.next_id += 1;
        let record = data.with_id(id);
        self.rows.insert(id, record.clone());
        record
    }

    pub fn update(&mut self, id: Id, patch: T::Patch) -> Option<T>
    where
        T: Merge,
    {
        let row = self.rows.get_mut(&id)?;
        row.merge(patch);
        Some(row.clone())
    }

    pub fn remove(&mut self, id: Id) -> bool {
        self.rows.remove(&id).is_some()
    }
}
