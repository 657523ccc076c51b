//! Resource lock table with lazy, insert-once record creation.

use super::record::LockRecord;
use crate::structures::KeyedStore;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared handle to one resource's record.
pub(super) type SharedRecord<Id> = Arc<Mutex<LockRecord<Id>>>;

/// Owns one lock record per resource name.
///
/// Records are created on first reference and never removed.
#[derive(Debug)]
pub struct LockTable<Id> {
    records: Mutex<KeyedStore<String, SharedRecord<Id>>>,
}

impl<Id> Default for LockTable<Id> {
    fn default() -> Self {
        Self {
            records: Mutex::new(KeyedStore::new()),
        }
    }
}

impl<Id: Clone + PartialEq> LockTable<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the record for `resource`, creating a free one if needed.
    ///
    /// The table mutex is held only for the lookup/insert, so two callers
    /// racing on a new name always end up with the same record.
    pub(super) fn get_or_create(&self, resource: &str) -> SharedRecord<Id> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(record) = records.get(resource) {
            return Arc::clone(record);
        }
        log::debug!("creating lock record for '{}'", resource);
        let record = records.get_or_insert_with(resource.to_string(), || {
            Arc::new(Mutex::new(LockRecord::new()))
        });
        Arc::clone(record)
    }

    /// Names of every resource referenced so far, sorted.
    pub fn resource_names(&self) -> Vec<String> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = records.keys().cloned().collect();
        names.sort();
        names
    }
}
