//! Elastic Core Runtime
//!
//! The event vocabulary the elastic widgets consume at their touch boundary:
//! pointer events and resize notifications forwarded by the host framework.

pub mod events;

pub use events::{Event, EventData, EventType};
