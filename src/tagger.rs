//! Identity tagger: lookup-or-insert over the weak tag store.

use std::sync::{Arc, Mutex};

use crate::adapters::RandomTagSource;
use crate::ports::TagSource;
use crate::store::WeakTagStore;
use crate::tag::Tag;

/// Assigns each object a stable tag, drawn on first sight and returned
/// unchanged on every later call for as long as the object stays alive.
///
/// Each tagger owns an independent store, so two taggers assign unrelated
/// tags to the same object. The store holds its objects weakly: tagging an
/// object never extends its lifetime.
pub struct Tagger<T: ?Sized> {
    store: Mutex<WeakTagStore<T>>,
    source: Box<dyn TagSource>,
}

impl<T: ?Sized> Tagger<T> {
    /// Creates a tagger with a fresh, empty store and a random tag source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(Box::new(RandomTagSource::new()))
    }

    /// Creates a tagger drawing tags from the given source.
    #[must_use]
    pub fn with_source(source: Box<dyn TagSource>) -> Self {
        Self { store: Mutex::new(WeakTagStore::new()), source }
    }

    /// Returns the object's tag, drawing and recording one on first sight.
    ///
    /// The lookup and the insert run under a single lock acquisition, so
    /// threads racing on a previously-unseen object agree on its tag.
    ///
    /// # Panics
    ///
    /// Panics if the store lock was poisoned by a panicking thread.
    pub fn tag(&self, object: &Arc<T>) -> Tag {
        let mut store = self.store.lock().expect("store lock poisoned");
        if let Some(tag) = store.lookup(object) {
            return tag;
        }
        let tag = self.source.next_tag();
        store.insert(object, tag.clone());
        tag
    }

    /// Number of store entries, dead entries not yet swept included.
    ///
    /// Diagnostic counter for retention checks; not part of the tagging
    /// contract.
    ///
    /// # Panics
    ///
    /// Panics if the store lock was poisoned by a panicking thread.
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.store.lock().expect("store lock poisoned").len()
    }
}

impl<T: ?Sized> Default for Tagger<T> {
    fn default() -> Self {
        Self::new()
    }
}
