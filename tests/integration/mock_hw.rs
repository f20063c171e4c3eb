//! Mock adapters for integration tests.
//!
//! Record every actuator command, pause, and emitted event so tests can
//! assert on the full history without touching a real sysfs tree.

use std::time::Duration;

use pfand::app::events::AppEvent;
use pfand::app::ports::{ActuatorPort, ClockPort, EventSink, SensorPort};
use pfand::error::SensorError;

// ── MockHardware ──────────────────────────────────────────────

/// Scripted sensor + recording actuator.
pub struct MockHardware {
    /// Temperature returned by every read.
    pub temp_c: f32,
    /// When set, reads fail instead.
    pub fail_reads: bool,
    /// Every duty commanded, in order (kick pulses included).
    pub commands: Vec<u8>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(temp_c: f32) -> Self {
        Self {
            temp_c,
            fail_reads: false,
            commands: Vec::new(),
        }
    }

    pub fn last_command(&self) -> Option<u8> {
        self.commands.last().copied()
    }
}

impl SensorPort for MockHardware {
    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        if self.fail_reads {
            Err(SensorError::NotReadable)
        } else {
            Ok(self.temp_c)
        }
    }
}

impl ActuatorPort for MockHardware {
    fn set_fan(&mut self, duty: u8) {
        self.commands.push(duty);
    }
}

// ── MockClock ─────────────────────────────────────────────────

/// Records pauses instead of sleeping.
pub struct MockClock {
    pub pauses: Vec<Duration>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { pauses: Vec::new() }
    }
}

impl ClockPort for MockClock {
    fn pause(&mut self, d: Duration) {
        self.pauses.push(d);
    }
}

// ── VecSink ───────────────────────────────────────────────────

/// Collects emitted events for assertion.
pub struct VecSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn kicks(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::KickIssued { .. }))
            .count()
    }
}

impl EventSink for VecSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
