//! Elastic Paint Primitives
//!
//! The 2D vocabulary the elastic effect renders with:
//!
//! - Path building (lines and quadratic curves)
//! - Geometric primitives (points, rects)
//! - RGBA colors for the filled shape

pub mod color;
pub mod path;
pub mod primitives;

pub use color::Color;
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::Rect;
