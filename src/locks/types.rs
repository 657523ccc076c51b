//! Outcome and snapshot types returned by the lock manager.

use std::fmt;

/// Result category of an `acquire` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// The resource was free and now belongs to the requester.
    Acquired,
    /// The requester already holds the resource; nothing changed.
    AlreadyHeld,
    /// Someone else holds the resource; the requester is in the queue.
    Queued,
}

impl AcquireOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcquireOutcome::Acquired => "acquired",
            AcquireOutcome::AlreadyHeld => "already_held",
            AcquireOutcome::Queued => "queued",
        }
    }
}

impl fmt::Display for AcquireOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of an `acquire` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acquisition {
    pub outcome: AcquireOutcome,

    /// 1-based queue position when queued, 0 otherwise.
    pub position: usize,
}

/// Result category of a `release` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The requester does not hold the resource; nothing changed.
    NotHolder,
    /// The resource is now free.
    Released,
    /// The resource passed to the longest-waiting requester.
    Transferred,
}

impl ReleaseOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseOutcome::NotHolder => "not_holder",
            ReleaseOutcome::Released => "released",
            ReleaseOutcome::Transferred => "transferred",
        }
    }
}

impl fmt::Display for ReleaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a `release` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release<Id> {
    /// Whether the caller was the holder.
    pub ok: bool,

    pub outcome: ReleaseOutcome,

    /// The new holder when the outcome is [`ReleaseOutcome::Transferred`].
    /// The caller is responsible for telling them.
    pub transferred_to: Option<Id>,
}

impl<Id> Release<Id> {
    pub(super) fn not_holder() -> Self {
        Self {
            ok: false,
            outcome: ReleaseOutcome::NotHolder,
            transferred_to: None,
        }
    }

    pub(super) fn released() -> Self {
        Self {
            ok: true,
            outcome: ReleaseOutcome::Released,
            transferred_to: None,
        }
    }

    pub(super) fn transferred(next: Id) -> Self {
        Self {
            ok: true,
            outcome: ReleaseOutcome::Transferred,
            transferred_to: Some(next),
        }
    }
}

/// Owned snapshot of one resource's lock state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockStatus<Id> {
    pub holder: Option<Id>,

    /// Waiters, head of the queue first.
    pub waiters: Vec<Id>,
}

impl<Id> LockStatus<Id> {
    pub fn is_free(&self) -> bool {
        self.holder.is_none()
    }
}
