//! Elastic Animation System
//!
//! Spring curves and frame-loop driving for the elastic effect.
//!
//! # Features
//!
//! - **Spring Curves**: closed-form damped-oscillator interpolation, evaluated
//!   as a pure function of elapsed time
//! - **Point Animations**: explicit from/to state with on-demand sampling of
//!   the in-flight position
//! - **Frame Loop**: per-instance Idle/Running tick gate, idempotent start/stop

pub mod loop_driver;
pub mod spring;

pub use loop_driver::FrameLoop;
pub use spring::{SpringAnimation, SpringCurve};
