//! Elastic Widget Library
//!
//! Spring-animated "elastic membrane" views: on touch, a rectangle's edges
//! bulge outward along quadratic curves and bounce back to rest.

pub mod elastic_field;
pub mod elastic_view;
pub mod widget;

pub use elastic_field::{elastic_field, ElasticField};
pub use elastic_view::{Edge, ElasticView};
pub use widget::{Widget, WidgetId, WidgetRegistry};
