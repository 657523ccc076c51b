//! Per-resource lock record and its state machine.
//!
//! The record itself does no synchronization; [`LockTable`](super::LockTable)
//! wraps every record in its own mutex and the manager runs each transition
//! inside that critical section.

use super::types::{AcquireOutcome, Acquisition, LockStatus, Release};
use crate::error::{PalaverError, Result};
use crate::structures::WaiterQueue;

/// Holder and waiter queue for a single resource.
#[derive(Debug, Clone)]
pub struct LockRecord<Id> {
    pub(super) holder: Option<Id>,
    pub(super) waiters: WaiterQueue<Id>,
}

impl<Id> Default for LockRecord<Id> {
    fn default() -> Self {
        Self {
            holder: None,
            waiters: WaiterQueue::new(),
        }
    }
}

impl<Id: Clone + PartialEq> LockRecord<Id> {
    /// A free record with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current holder, if any.
    pub fn holder(&self) -> Option<&Id> {
        self.holder.as_ref()
    }

    /// Grant, confirm, or queue `requester`.
    pub fn acquire(&mut self, requester: Id) -> Acquisition {
        let Some(holder) = &self.holder else {
            self.holder = Some(requester);
            return Acquisition {
                outcome: AcquireOutcome::Acquired,
                position: 0,
            };
        };

        if *holder == requester {
            return Acquisition {
                outcome: AcquireOutcome::AlreadyHeld,
                position: 0,
            };
        }

        let position = match self.waiters.position_of(&requester) {
            Some(pos) => pos,
            None => {
                self.waiters.enqueue(requester);
                self.waiters.len()
            }
        };
        Acquisition {
            outcome: AcquireOutcome::Queued,
            position,
        }
    }

    /// Free the resource or hand it to the head waiter.
    ///
    /// Only the current holder may release; anyone else gets
    /// [`ReleaseOutcome::NotHolder`](super::ReleaseOutcome::NotHolder) and the
    /// record is left untouched.
    pub fn release(&mut self, requester: &Id) -> Release<Id> {
        if self.holder.as_ref() != Some(requester) {
            return Release::not_holder();
        }

        match self.waiters.dequeue() {
            Some(next) => {
                self.holder = Some(next.clone());
                Release::transferred(next)
            }
            None => {
                self.holder = None;
                Release::released()
            }
        }
    }

    pub fn status(&self) -> LockStatus<Id> {
        LockStatus {
            holder: self.holder.clone(),
            waiters: self.waiters.to_vec(),
        }
    }

    /// Nobody may wait on a resource nobody holds, and the holder never
    /// appears in its own queue.
    pub fn check_invariant(&self, resource: &str) -> Result<()> {
        match self.holder() {
            None if !self.waiters.is_empty() => Err(PalaverError::InvariantViolation {
                resource: resource.to_string(),
                detail: format!("no holder but {} waiter(s)", self.waiters.len()),
            }),
            Some(holder) if self.waiters.position_of(holder).is_some() => {
                Err(PalaverError::InvariantViolation {
                    resource: resource.to_string(),
                    detail: "holder is also queued".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
