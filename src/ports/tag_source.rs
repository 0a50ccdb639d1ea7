//! Tag source port for producing unique identity tags.

use crate::tag::Tag;

/// Produces unique identity tags.
///
/// Abstracting the source allows deterministic substitution during tests:
/// a scripted sequence stands in for the random source.
pub trait TagSource: Send + Sync {
    /// Draws the next unique tag.
    fn next_tag(&self) -> Tag;
}
