//! Scripted adapter for the `TagSource` port.

use std::sync::Mutex;

use crate::ports::TagSource;
use crate::tag::Tag;

/// Serves a fixed sequence of tags for deterministic tests.
///
/// Panics with a clear message once the sequence is exhausted, showing how
/// many tags were scripted.
pub struct ScriptedTagSource {
    tags: Vec<Tag>,
    cursor: Mutex<usize>,
}

impl ScriptedTagSource {
    /// Creates a scripted source over the given sequence.
    #[must_use]
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags, cursor: Mutex::new(0) }
    }
}

impl TagSource for ScriptedTagSource {
    fn next_tag(&self) -> Tag {
        let mut cursor = self.cursor.lock().expect("cursor lock poisoned");
        assert!(
            *cursor < self.tags.len(),
            "Scripted source exhausted: all {count} tags have been consumed.",
            count = self.tags.len(),
        );
        let tag = self.tags[*cursor].clone();
        *cursor += 1;
        tag
    }
}
