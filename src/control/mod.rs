//! Control law and per-tick state for the fan controller.

pub mod curve;

pub use curve::{ControlState, DutyDecision, FanCurve, needs_kick};
