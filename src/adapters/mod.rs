//! Adapters implementing the `TagSource` port.

pub mod random;
pub mod scripted;

pub use random::RandomTagSource;
pub use scripted::ScriptedTagSource;
