//! Base widget trait and types

use elastic_core::events::Event;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct WidgetId;
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Handle an event forwarded by the host
    fn handle_event(&mut self, event: &Event);

    /// Advance animations by `dt` seconds (called once per display frame)
    fn update(&mut self, dt: f32);
}

/// Allocates widget identities for a window or host view tree
#[derive(Default)]
pub struct WidgetRegistry {
    widgets: SlotMap<WidgetId, ()>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> WidgetId {
        self.widgets.insert(())
    }

    pub fn is_registered(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }
}
