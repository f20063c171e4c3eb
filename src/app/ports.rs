//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ FanService (domain)
//! ```
//!
//! Driven adapters (the hwmon sensor, the PWM device, the system clock,
//! event sinks) implement these traits. The
//! [`FanService`](super::service::FanService) consumes them via
//! generics, so the engine never touches the filesystem directly.

use std::time::Duration;

use crate::error::SensorError;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the engine calls this once per tick, fresh, no caching.
///
/// The failure case is typed so that callers *can* distinguish a failed
/// read from a legitimate 0 °C reading. The engine's default policy
/// deliberately treats the two alike (degrade toward fan-off); see
/// [`FanService::tick`](super::service::FanService::tick).
pub trait SensorPort {
    fn read_temperature(&mut self) -> Result<f32, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: command the fan duty cycle (0–100%).
///
/// Best-effort by contract: an implementation that cannot reach the
/// device logs the failure and drops the command — the next tick will
/// try again. Nothing here may block the loop beyond bounded I/O.
pub trait ActuatorPort {
    fn set_fan(&mut self, duty: u8);
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: domain → time)
// ───────────────────────────────────────────────────────────────

/// Deterministic minimum delay. Used for the kick pulse hold and the
/// startup settle; the pause must fully elapse before the engine
/// continues (no early cancellation).
pub trait ClockPort {
    fn pause(&mut self, d: Duration);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The engine emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go; emission is
/// fire-and-forget and must never fail into the control loop.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
