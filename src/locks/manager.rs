//! The acquire / release / status protocol.

use super::record::LockRecord;
use super::table::LockTable;
use super::types::{Acquisition, LockStatus, Release};
use crate::error::{PalaverError, Result};
use std::fmt::Debug;
use std::sync::PoisonError;

/// Lock manager over named resources.
///
/// `Id` is an opaque requester token (a user id in the bot). It is only ever
/// cloned and compared.
///
/// # Example
///
/// ```
/// use palaver::locks::{AcquireOutcome, LockManager, ReleaseOutcome};
///
/// let locks = LockManager::new();
/// assert_eq!(locks.acquire("history", 1u64)?.outcome, AcquireOutcome::Acquired);
/// assert_eq!(locks.acquire("history", 2u64)?.position, 1);
///
/// let release = locks.release("history", &1)?;
/// assert_eq!(release.outcome, ReleaseOutcome::Transferred);
/// assert_eq!(release.transferred_to, Some(2));
/// # Ok::<(), palaver::error::PalaverError>(())
/// ```
#[derive(Debug)]
pub struct LockManager<Id> {
    table: LockTable<Id>,
}

impl<Id> Default for LockManager<Id> {
    fn default() -> Self {
        Self {
            table: LockTable::default(),
        }
    }
}

impl<Id: Clone + PartialEq + Debug> LockManager<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current holder and waiter order for `resource`.
    pub fn status(&self, resource: &str) -> Result<LockStatus<Id>> {
        self.with_record(resource, |record| record.status())
    }

    /// Request exclusive access to `resource`.
    ///
    /// Never waits: if someone else holds the resource the requester is
    /// queued (at most once) and the call returns immediately.
    pub fn acquire(&self, resource: &str, requester: Id) -> Result<Acquisition> {
        let acquisition = self.with_record(resource, |record| record.acquire(requester.clone()))?;
        log::debug!(
            "lock '{}': {:?} -> {} (position {})",
            resource,
            requester,
            acquisition.outcome,
            acquisition.position
        );
        Ok(acquisition)
    }

    /// Give up `resource`, handing it to the next waiter if there is one.
    ///
    /// The dequeue and the holder reassignment happen inside one critical
    /// section, so no observer sees a free lock with a non-empty queue.
    pub fn release(&self, resource: &str, requester: &Id) -> Result<Release<Id>> {
        let release = self.with_record(resource, |record| record.release(requester))?;
        match &release.transferred_to {
            Some(next) => log::debug!(
                "lock '{}': {:?} -> {} to {:?}",
                resource,
                requester,
                release.outcome,
                next
            ),
            None => log::debug!("lock '{}': {:?} -> {}", resource, requester, release.outcome),
        }
        Ok(release)
    }

    /// Names of every resource referenced so far.
    pub fn resources(&self) -> Vec<String> {
        self.table.resource_names()
    }

    /// Run `op` on the record for `resource` while holding its mutex, then
    /// verify the record is still consistent.
    fn with_record<T>(&self, resource: &str, op: impl FnOnce(&mut LockRecord<Id>) -> T) -> Result<T> {
        validate_resource_name(resource)?;

        let shared = self.table.get_or_create(resource);
        let mut record = shared.lock().unwrap_or_else(PoisonError::into_inner);
        let out = op(&mut *record);

        if let Err(e) = record.check_invariant(resource) {
            log::error!("{}", e);
            return Err(e);
        }
        Ok(out)
    }
}

/// Resource names must contain something other than whitespace.
fn validate_resource_name(resource: &str) -> Result<()> {
    if resource.trim().is_empty() {
        return Err(PalaverError::LockContract(format!(
            "resource name must not be blank (got {:?})",
            resource
        )));
    }
    Ok(())
}
