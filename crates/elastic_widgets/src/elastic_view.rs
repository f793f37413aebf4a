//! Elastic view: the membrane effect itself
//!
//! Four control points sit at the midpoints of the view's edges. A touch
//! stretches them outward with a tight spring, then a looser spring bounces
//! them back to rest. While anything is moving, every display frame rebuilds
//! a closed path through the four corners using the control points' live
//! positions as quadratic curve handles.

use elastic_animation::{FrameLoop, SpringAnimation, SpringCurve};
use elastic_core::events::{event_types, Event, EventData};
use elastic_paint::{Color, Path, PathBuilder, Point, Rect};
use tracing::{debug, trace};

use crate::widget::{Widget, WidgetId, WidgetRegistry};

/// Default outward displacement of the stretch phase, in logical units
pub const DEFAULT_OVERSHOOT: f32 = 10.0;

/// The four movable curve handles, one per edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    /// Rest position: the midpoint of this edge
    fn rest_position(self, bounds: Rect) -> Point {
        match self {
            Edge::Top => Point::new(bounds.mid_x(), 0.0),
            Edge::Left => Point::new(0.0, bounds.mid_y()),
            Edge::Bottom => Point::new(bounds.mid_x(), bounds.max_y()),
            Edge::Right => Point::new(bounds.max_x(), bounds.mid_y()),
        }
    }

    /// Stretch target: the rest position pushed outward along this edge's
    /// perpendicular axis
    fn stretched(self, rest: Point, overshoot: f32) -> Point {
        match self {
            Edge::Top => Point::new(rest.x, rest.y - overshoot),
            Edge::Left => Point::new(rest.x - overshoot, rest.y),
            Edge::Bottom => Point::new(rest.x, rest.y + overshoot),
            Edge::Right => Point::new(rest.x + overshoot, rest.y),
        }
    }
}

/// One curve handle: a rest position plus an optional in-flight transition
#[derive(Clone, Copy, Debug)]
struct ControlPoint {
    rest: Point,
    animation: Option<SpringAnimation>,
}

impl ControlPoint {
    fn at_rest(rest: Point) -> Self {
        Self {
            rest,
            animation: None,
        }
    }

    /// The live interpolated position; falls back to rest when no transition
    /// has ever run
    fn position(&self) -> Point {
        match &self.animation {
            Some(animation) => animation.position(),
            None => self.rest,
        }
    }
}

/// Phase of the two-step trigger sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Rest,
    Stretch,
    Recoil,
}

/// A rectangle whose edges bulge outward on touch and spring back.
///
/// The host forwards pointer-down events and calls [`ElasticView::update`]
/// once per display frame; [`ElasticView::path`] and
/// [`ElasticView::fill_color`] describe what to rasterize. The view never
/// intercepts events itself.
pub struct ElasticView {
    id: WidgetId,
    bounds: Rect,
    fill_color: Color,
    overshoot_amount: f32,
    control_points: [ControlPoint; 4],
    frame_loop: FrameLoop,
    phase: Phase,
    path: Path,
}

impl ElasticView {
    /// Create a view sized to `bounds`, mirroring the host's background color.
    ///
    /// The color is captured once here; it is not re-synced if the host's
    /// background changes later.
    pub fn new(registry: &mut WidgetRegistry, bounds: Rect, background: Color) -> Self {
        let control_points =
            Edge::ALL.map(|edge| ControlPoint::at_rest(edge.rest_position(bounds)));

        let mut view = Self {
            id: registry.register(),
            bounds,
            fill_color: background,
            overshoot_amount: DEFAULT_OVERSHOOT,
            control_points,
            frame_loop: FrameLoop::new(),
            phase: Phase::Rest,
            path: Path::new(),
        };
        view.rebuild_path();
        view
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Recompute the control points for a new size.
    ///
    /// Any in-flight transition is dropped: a layout change resets the
    /// membrane to rest.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        for (edge, point) in Edge::ALL.iter().zip(self.control_points.iter_mut()) {
            point.rest = edge.rest_position(bounds);
            point.animation = None;
        }
        self.phase = Phase::Rest;
        self.frame_loop.stop();
        self.rebuild_path();
    }

    pub fn overshoot_amount(&self) -> f32 {
        self.overshoot_amount
    }

    /// Takes effect on the next trigger; in-flight transitions keep the value
    /// read when they started.
    pub fn set_overshoot_amount(&mut self, amount: f32) {
        self.overshoot_amount = amount;
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_background(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// The current closed outline, ready to fill
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The live interpolated control point positions, in edge order
    /// (top, left, bottom, right). Useful for drawing debug markers.
    pub fn control_point_positions(&self) -> [Point; 4] {
        [
            self.control_points[0].position(),
            self.control_points[1].position(),
            self.control_points[2].position(),
            self.control_points[3].position(),
        ]
    }

    pub fn is_animating(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Start the stretch-then-recoil sequence.
    ///
    /// A trigger while a previous sequence is still moving restarts the
    /// stretch from each point's live position.
    pub fn trigger(&mut self) {
        debug!(overshoot = self.overshoot_amount, "elastic effect triggered");
        self.frame_loop.start();

        let overshoot = self.overshoot_amount;
        for (edge, point) in Edge::ALL.iter().zip(self.control_points.iter_mut()) {
            let target = edge.stretched(point.rest, overshoot);
            point.animation = Some(SpringAnimation::new(
                point.position(),
                target,
                SpringCurve::stretch(),
            ));
        }
        self.phase = Phase::Stretch;
    }

    /// Advance the effect by `dt` seconds and rebuild the outline.
    ///
    /// No-op while idle, so hosts may call it unconditionally every frame.
    pub fn update(&mut self, dt: f32) {
        let Some(dt) = self.frame_loop.tick(dt) else {
            return;
        };

        for point in self.control_points.iter_mut() {
            if let Some(animation) = point.animation.as_mut() {
                animation.tick(dt);
            }
        }

        if self.phase_finished() {
            match self.phase {
                Phase::Stretch => self.begin_recoil(),
                Phase::Recoil => self.settle(),
                Phase::Rest => {}
            }
        }

        self.rebuild_path();
    }

    fn phase_finished(&self) -> bool {
        self.control_points
            .iter()
            .all(|p| p.animation.map(|a| a.is_finished()).unwrap_or(true))
    }

    /// Phase 2: bounce each point from where the stretch left it back to rest
    fn begin_recoil(&mut self) {
        trace!("stretch finished, recoiling");
        for point in self.control_points.iter_mut() {
            point.animation = Some(SpringAnimation::new(
                point.position(),
                point.rest,
                SpringCurve::recoil(),
            ));
        }
        self.phase = Phase::Recoil;
    }

    /// Everything is back at rest: drop the transitions and idle the loop
    fn settle(&mut self) {
        trace!("recoil finished, settling");
        for point in self.control_points.iter_mut() {
            point.animation = None;
        }
        self.phase = Phase::Rest;
        self.frame_loop.stop();
    }

    /// Rebuild the closed outline through the four corners, using each
    /// control point's live position as the curve handle for its edge.
    fn rebuild_path(&mut self) {
        let [top, left, bottom, right] = self.control_point_positions();
        let width = self.bounds.width;
        let height = self.bounds.height;

        self.path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .quad_to(top.x, top.y, width, 0.0)
            .quad_to(right.x, right.y, width, height)
            .quad_to(bottom.x, bottom.y, 0.0, height)
            .quad_to(left.x, left.y, 0.0, 0.0)
            .close()
            .build();
    }
}

impl Widget for ElasticView {
    fn id(&self) -> WidgetId {
        self.id
    }

    /// Any pointer-down triggers the full effect; location and pointer count
    /// are not inspected. Resize notifications reposition the control points.
    fn handle_event(&mut self, event: &Event) {
        match event.event_type {
            event_types::POINTER_DOWN => self.trigger(),
            event_types::RESIZE => {
                if let EventData::Resize { width, height } = event.data {
                    self.set_bounds(Rect::from_size(width as f32, height as f32));
                }
            }
            _ => {}
        }
    }

    fn update(&mut self, dt: f32) {
        ElasticView::update(self, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elastic_paint::PathCommand;

    const DT: f32 = 1.0 / 60.0;

    fn make_view(width: f32, height: f32) -> ElasticView {
        let mut registry = WidgetRegistry::new();
        ElasticView::new(
            &mut registry,
            Rect::from_size(width, height),
            Color::WHITE,
        )
    }

    #[test]
    fn test_rest_positions_are_edge_midpoints() {
        let view = make_view(100.0, 40.0);
        let [top, left, bottom, right] = view.control_point_positions();
        assert_eq!(top, Point::new(50.0, 0.0));
        assert_eq!(left, Point::new(0.0, 20.0));
        assert_eq!(bottom, Point::new(50.0, 40.0));
        assert_eq!(right, Point::new(100.0, 20.0));
    }

    #[test]
    fn test_rest_positions_for_degenerate_bounds() {
        let view = make_view(0.0, 0.0);
        for position in view.control_point_positions() {
            assert_eq!(position, Point::ZERO);
        }
    }

    #[test]
    fn test_stretch_targets() {
        let bounds = Rect::from_size(100.0, 40.0);
        assert_eq!(
            Edge::Top.stretched(Edge::Top.rest_position(bounds), 10.0),
            Point::new(50.0, -10.0)
        );
        assert_eq!(
            Edge::Left.stretched(Edge::Left.rest_position(bounds), 10.0),
            Point::new(-10.0, 20.0)
        );
        assert_eq!(
            Edge::Bottom.stretched(Edge::Bottom.rest_position(bounds), 10.0),
            Point::new(50.0, 50.0)
        );
        assert_eq!(
            Edge::Right.stretched(Edge::Right.rest_position(bounds), 10.0),
            Point::new(110.0, 20.0)
        );
    }

    #[test]
    fn test_path_at_rest_hits_corners_with_midpoint_controls() {
        let view = make_view(100.0, 40.0);
        let commands = view.path().commands();

        assert_eq!(commands[0], PathCommand::MoveTo(Point::ZERO));
        assert_eq!(
            commands[1],
            PathCommand::QuadTo {
                control: Point::new(50.0, 0.0),
                end: Point::new(100.0, 0.0),
            }
        );
        assert_eq!(
            commands[2],
            PathCommand::QuadTo {
                control: Point::new(100.0, 20.0),
                end: Point::new(100.0, 40.0),
            }
        );
        assert_eq!(
            commands[3],
            PathCommand::QuadTo {
                control: Point::new(50.0, 40.0),
                end: Point::new(0.0, 40.0),
            }
        );
        assert_eq!(
            commands[4],
            PathCommand::QuadTo {
                control: Point::new(0.0, 20.0),
                end: Point::ZERO,
            }
        );
        assert_eq!(commands[5], PathCommand::Close);
    }

    #[test]
    fn test_trigger_starts_loop_and_moves_points() {
        let mut view = make_view(100.0, 40.0);
        assert!(!view.is_animating());

        view.trigger();
        assert!(view.is_animating());

        view.update(0.1);
        let [top, ..] = view.control_point_positions();
        assert!(top.y < 0.0, "top should have moved outward, got {}", top.y);
    }

    #[test]
    fn test_full_sequence_returns_to_rest() {
        let mut view = make_view(100.0, 40.0);
        view.trigger();

        // Well past stretch (0.25s) + recoil (0.45s)
        for _ in 0..90 {
            view.update(DT);
        }

        assert!(!view.is_animating());
        let [top, left, bottom, right] = view.control_point_positions();
        assert_eq!(top, Point::new(50.0, 0.0));
        assert_eq!(left, Point::new(0.0, 20.0));
        assert_eq!(bottom, Point::new(50.0, 40.0));
        assert_eq!(right, Point::new(100.0, 20.0));
    }

    #[test]
    fn test_overshoot_read_at_trigger_time() {
        let mut view = make_view(100.0, 40.0);
        view.trigger();
        view.set_overshoot_amount(20.0);

        // Run the stretch to completion; targets were fixed at trigger time
        for _ in 0..20 {
            view.update(DT);
        }

        let [top, ..] = view.control_point_positions();
        assert!(
            top.y >= -10.5,
            "stretch target must not be retargeted mid-flight, got {}",
            top.y
        );

        // The next trigger picks up the new value: the stretch now pushes the
        // top point past the old -10 target
        view.set_bounds(Rect::from_size(100.0, 40.0));
        view.trigger();
        for _ in 0..14 {
            view.update(DT);
        }
        let [top, ..] = view.control_point_positions();
        assert!(
            top.y < -10.0,
            "new trigger should stretch toward -20, got {}",
            top.y
        );
    }

    #[test]
    fn test_retrigger_restarts_from_live_position() {
        let mut view = make_view(100.0, 40.0);
        view.trigger();
        for _ in 0..5 {
            view.update(DT);
        }
        let [top_before, ..] = view.control_point_positions();
        assert!(top_before.y < 0.0);

        // Second touch mid-stretch: new stretch starts from the live position,
        // not from rest
        view.trigger();
        let [top_after, ..] = view.control_point_positions();
        assert_eq!(top_after, top_before);
        assert!(view.is_animating());
    }

    #[test]
    fn test_set_bounds_repositions_and_resets() {
        let mut view = make_view(100.0, 40.0);
        view.trigger();
        view.update(DT);

        view.set_bounds(Rect::from_size(200.0, 80.0));
        assert!(!view.is_animating());
        let [top, left, bottom, right] = view.control_point_positions();
        assert_eq!(top, Point::new(100.0, 0.0));
        assert_eq!(left, Point::new(0.0, 40.0));
        assert_eq!(bottom, Point::new(100.0, 80.0));
        assert_eq!(right, Point::new(200.0, 40.0));
    }

    #[test]
    fn test_update_while_idle_is_noop() {
        let mut view = make_view(100.0, 40.0);
        let before = view.path().commands().to_vec();
        view.update(DT);
        assert_eq!(view.path().commands(), &before[..]);
        assert!(!view.is_animating());
    }

    #[test]
    fn test_pointer_down_triggers_effect() {
        let mut view = make_view(100.0, 40.0);
        let event = Event::pointer(event_types::POINTER_DOWN, 42.0, 7.0);
        Widget::handle_event(&mut view, &event);
        assert!(view.is_animating());

        // Other pointer events are ignored
        let mut other = make_view(100.0, 40.0);
        let event = Event::pointer(event_types::POINTER_UP, 1.0, 1.0);
        Widget::handle_event(&mut other, &event);
        assert!(!other.is_animating());
    }

    #[test]
    fn test_resize_event_repositions_control_points() {
        let mut view = make_view(100.0, 40.0);
        Widget::handle_event(&mut view, &Event::resize(200, 80));

        assert_eq!(view.bounds(), Rect::from_size(200.0, 80.0));
        let [top, left, bottom, right] = view.control_point_positions();
        assert_eq!(top, Point::new(100.0, 0.0));
        assert_eq!(left, Point::new(0.0, 40.0));
        assert_eq!(bottom, Point::new(100.0, 80.0));
        assert_eq!(right, Point::new(200.0, 40.0));
    }

    #[test]
    fn test_loop_runs_iff_animating() {
        let mut view = make_view(100.0, 40.0);
        view.trigger();

        let mut elapsed = 0.0f32;
        while view.is_animating() {
            view.update(DT);
            elapsed += DT;
            assert!(elapsed < 2.0, "sequence should settle well within 2s");
        }
        // Once idle, further updates keep it idle
        view.update(DT);
        assert!(!view.is_animating());
    }
}
