//! Time-ordered deferred-action queue.
//!
//! Delays ("resolve this volume in half a second") are rows here rather
//! than timers or threads. The session drains due entries once per tick,
//! in due-time order, and skips any entry whose owner no longer exists:
//! destroying an entity is all it takes to cancel its pending actions.

use wilds_core::EntityId;

/// What to do when an entry comes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    /// Run the hit pass of the area effect identified by the owner.
    ResolveArea,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DeferredEntry {
    due: f64,
    owner: EntityId,
    action: DeferredAction,
}

/// Pending deferred actions, keyed by owning entity.
#[derive(Clone, Debug, Default)]
pub struct DeferredQueue {
    entries: Vec<DeferredEntry>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to run at game time `due`, tied to `owner`'s
    /// lifetime.
    pub fn schedule(&mut self, due: f64, owner: EntityId, action: DeferredAction) {
        self.entries.push(DeferredEntry { due, owner, action });
    }

    /// Drops every entry owned by `owner`.
    pub fn cancel_owner(&mut self, owner: EntityId) {
        self.entries.retain(|entry| entry.owner != owner);
    }

    /// Removes and returns all entries due at or before `now`, ordered by
    /// due time.
    pub fn drain_due(&mut self, now: f64) -> Vec<(EntityId, DeferredAction)> {
        let mut due: Vec<DeferredEntry> = Vec::new();
        self.entries.retain(|entry| {
            if entry.due <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter()
            .map(|entry| (entry.owner, entry.action))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_only_due_entries_in_order() {
        let mut queue = DeferredQueue::new();
        queue.schedule(2.0, EntityId(2), DeferredAction::ResolveArea);
        queue.schedule(1.0, EntityId(1), DeferredAction::ResolveArea);
        queue.schedule(5.0, EntityId(3), DeferredAction::ResolveArea);

        let due = queue.drain_due(2.5);
        assert_eq!(
            due.iter().map(|(owner, _)| owner.0).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(!queue.is_empty());

        // Draining again at the same time yields nothing new.
        assert!(queue.drain_due(2.5).is_empty());
    }

    #[test]
    fn cancel_owner_drops_pending_entries() {
        let mut queue = DeferredQueue::new();
        queue.schedule(1.0, EntityId(7), DeferredAction::ResolveArea);
        queue.cancel_owner(EntityId(7));
        assert!(queue.drain_due(10.0).is_empty());
    }
}
