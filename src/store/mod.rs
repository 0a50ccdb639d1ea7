//! Weak-keyed tag store.
//!
//! Associates objects with their tags by allocation identity while holding
//! only weak handles, so the store never keeps an object alive. Dead
//! entries are dropped by an amortized sweep triggered from `insert`.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use crate::tag::Tag;

/// Sweeping re-arms at twice the surviving population, never below this.
const SWEEP_FLOOR: usize = 64;

/// Weak-association map from object identity to tag.
///
/// Keys are allocation addresses. An entry's weak handle keeps that address
/// reserved for the allocation it points to, so a live object's address can
/// never collide with an entry recorded for a different object.
pub struct WeakTagStore<T: ?Sized> {
    entries: HashMap<usize, Entry<T>>,
    sweep_at: usize,
}

struct Entry<T: ?Sized> {
    object: Weak<T>,
    tag: Tag,
}

impl<T: ?Sized> WeakTagStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new(), sweep_at: SWEEP_FLOOR }
    }

    /// Returns the tag previously recorded for this object, if any.
    #[must_use]
    pub fn lookup(&self, object: &Arc<T>) -> Option<Tag> {
        self.entries.get(&key_of(object)).map(|entry| entry.tag.clone())
    }

    /// Records the tag for this object.
    ///
    /// Once the entry count reaches the doubling threshold, dead entries
    /// are swept so capacity stays proportional to the live population.
    pub fn insert(&mut self, object: &Arc<T>, tag: Tag) {
        self.entries.insert(key_of(object), Entry { object: Arc::downgrade(object), tag });
        if self.entries.len() >= self.sweep_at {
            self.sweep();
        }
    }

    /// Drops entries whose object no longer has strong owners.
    pub fn sweep(&mut self) {
        self.entries.retain(|_, entry| entry.object.strong_count() > 0);
        self.sweep_at = (self.entries.len() * 2).max(SWEEP_FLOOR);
    }

    /// Number of entries currently held, dead entries not yet swept included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized> Default for WeakTagStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn key_of<T: ?Sized>(object: &Arc<T>) -> usize {
    Arc::as_ptr(object).cast::<()>() as usize
}
