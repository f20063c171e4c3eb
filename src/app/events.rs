//! Outbound application events.
//!
//! The [`FanService`](super::service::FanService) emits these through
//! the [`EventSink`](super::ports::EventSink) port. The shipped adapter
//! writes them to the daemon log; a future metrics adapter would
//! implement the same trait.

use crate::error::SensorError;

/// Structured events emitted by the control loop engine.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Engine start: the visible full-speed "alive" pulse was commanded.
    Started { duty: u8 },

    /// A kick pulse was issued before the steady command.
    KickIssued { kick_pwm: u8, steady_duty: u8 },

    /// The commanded duty cycle changed between ticks.
    DutyChanged { from: u8, to: u8 },

    /// The interpolated duty fell outside the clamp range — an
    /// internal-consistency warning, value already clamped.
    DutyOutOfRange { computed: i32, clamped: u8 },

    /// A temperature read failed; the tick proceeded with 0 °C.
    SensorReadFailed(SensorError),

    /// Periodic controller snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time controller snapshot suitable for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryData {
    pub temperature_c: f32,
    pub duty: u8,
    pub run_on_ticks: u32,
    pub tick: u64,
}
