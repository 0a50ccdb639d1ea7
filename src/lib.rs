//! Stable identity tags for shared heap objects.
//!
//! A [`Tagger`] hands each object a random unique tag the first time it is
//! seen and returns that same tag on every later call, for as long as the
//! object stays alive. Identity is allocation identity, never structural
//! equality: two objects with equal content get distinct tags. The backing
//! store holds only weak handles, so tagging an object never keeps it
//! alive, and entries for dropped objects are reclaimed automatically.

pub mod adapters;
pub mod ports;
pub mod store;

mod tag;
mod tagger;

pub use tag::Tag;
pub use tagger::Tagger;
