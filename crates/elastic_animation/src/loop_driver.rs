//! Frame loop
//!
//! A per-instance gate between the host's display-refresh ticks and the
//! animation stepping. The loop is a plain value owned by its widget, so it
//! is torn down with the widget and can never outlive it.

use tracing::trace;

/// Frame loop state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
}

/// Gates per-frame work: ticks pass through only while running.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameLoop {
    state: LoopState,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable ticking. No-op if already running.
    pub fn start(&mut self) {
        if self.state == LoopState::Idle {
            trace!("frame loop started");
            self.state = LoopState::Running;
        }
    }

    /// Disable ticking. No-op if already idle.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            trace!("frame loop stopped");
            self.state = LoopState::Idle;
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Pass a display-refresh delta through the gate.
    ///
    /// Returns the delta while running, `None` while idle.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        match self.state {
            LoopState::Running => Some(dt),
            LoopState::Idle => None,
        }
    }
}
