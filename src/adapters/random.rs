//! Live adapter for the `TagSource` port.

use uuid::Uuid;

use crate::ports::TagSource;
use crate::tag::Tag;

/// Live tag source that draws random version-4 UUIDs.
pub struct RandomTagSource;

impl RandomTagSource {
    /// Creates a new random tag source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomTagSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for RandomTagSource {
    fn next_tag(&self) -> Tag {
        Tag::new(Uuid::new_v4().to_string())
    }
}
