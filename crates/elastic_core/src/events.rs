//! Event model
//!
//! The vocabulary the host forwards across the touch boundary: pointer
//! events (only pointer-down is acted on) and resize notifications that
//! carry new bounds.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const RESIZE: EventType = 40;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Widget ID
    pub data: EventData,
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
        pressure: f32,
    },
    Resize {
        width: u32,
        height: u32,
    },
    None,
}

impl Event {
    /// A pointer event with no meaningful target (host forwards directly)
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self {
            event_type,
            target: 0,
            data: EventData::Pointer {
                x,
                y,
                button: 0,
                pressure: 1.0,
            },
            timestamp: 0,
        }
    }

    /// A resize notification carrying the new bounds
    pub fn resize(width: u32, height: u32) -> Self {
        Self {
            event_type: event_types::RESIZE,
            target: 0,
            data: EventData::Resize { width, height },
            timestamp: 0,
        }
    }
}
