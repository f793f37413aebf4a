//! Elastic text field wrapper
//!
//! A thin host for [`ElasticView`]: an editable-text widget whose visible
//! background is the elastic membrane. The field clears its own background
//! at setup (the view's fill stands in for it), forwards pointer-down events
//! to the view, and passes the overshoot setting through. Text editing
//! itself belongs to the host framework and is not modeled here.

use elastic_core::events::{event_types, Event};
use elastic_paint::{Color, Rect};

use crate::elastic_view::ElasticView;
use crate::widget::{Widget, WidgetId, WidgetRegistry};

pub struct ElasticField {
    id: WidgetId,
    view: ElasticView,
    background: Color,
}

impl ElasticField {
    pub fn new(registry: &mut WidgetRegistry, bounds: Rect, background: Color) -> Self {
        // The view inherits the field's background; the field itself goes
        // transparent so only the membrane is visible
        let view = ElasticView::new(registry, bounds, background);
        Self {
            id: registry.register(),
            view,
            background: Color::TRANSPARENT,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The field's own background (transparent; the view carries the fill)
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn view(&self) -> &ElasticView {
        &self.view
    }

    pub fn overshoot_amount(&self) -> f32 {
        self.view.overshoot_amount()
    }

    pub fn set_overshoot_amount(&mut self, amount: f32) {
        self.view.set_overshoot_amount(amount);
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.view.set_bounds(bounds);
    }
}

impl Widget for ElasticField {
    fn id(&self) -> WidgetId {
        self.id
    }

    /// Forward touches and resizes to the membrane; the view itself never
    /// intercepts
    fn handle_event(&mut self, event: &Event) {
        match event.event_type {
            event_types::POINTER_DOWN | event_types::RESIZE => {
                self.view.handle_event(event);
            }
            _ => {}
        }
    }

    fn update(&mut self, dt: f32) {
        self.view.update(dt);
    }
}

/// Create an elastic field with a builder
pub fn elastic_field(bounds: Rect) -> ElasticFieldBuilder {
    ElasticFieldBuilder {
        bounds,
        background: Color::WHITE,
        overshoot_amount: None,
    }
}

/// Builder for creating elastic fields
pub struct ElasticFieldBuilder {
    bounds: Rect,
    background: Color,
    overshoot_amount: Option<f32>,
}

impl ElasticFieldBuilder {
    /// Set the background color the membrane will mirror
    pub fn bg(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the stretch displacement
    pub fn overshoot(mut self, amount: f32) -> Self {
        self.overshoot_amount = Some(amount);
        self
    }

    /// Build the field widget
    pub fn build(self, registry: &mut WidgetRegistry) -> ElasticField {
        let mut field = ElasticField::new(registry, self.bounds, self.background);
        if let Some(amount) = self.overshoot_amount {
            field.set_overshoot_amount(amount);
        }
        field
    }
}
