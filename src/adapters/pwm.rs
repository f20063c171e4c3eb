//! PWM actuator adapter.
//!
//! Writes `"<frequency>,<duty>\n"` to the platform PWM command channel.
//! The carrier frequency is fixed: 10 kHz is audible, 50 kHz is silent
//! and still has lots of resolution for the duty cycle. Only the duty
//! varies at runtime.
//!
//! Writes are best-effort per the [`ActuatorPort`] contract: a failure
//! is logged and the command dropped — the control loop must keep
//! running and the next tick retries.

use std::fs;
use std::path::PathBuf;

use log::warn;

use crate::app::ports::ActuatorPort;

pub struct SysfsPwm {
    path: PathBuf,
    frequency_hz: u32,
}

impl SysfsPwm {
    pub fn new(path: impl Into<PathBuf>, frequency_hz: u32) -> Self {
        Self {
            path: path.into(),
            frequency_hz,
        }
    }
}

/// Wire format accepted by the device.
fn command_line(frequency_hz: u32, duty: u8) -> String {
    format!("{frequency_hz},{duty}\n")
}

impl ActuatorPort for SysfsPwm {
    fn set_fan(&mut self, duty: u8) {
        let line = command_line(self.frequency_hz, duty.min(100));
        if let Err(e) = fs::write(&self.path, line) {
            warn!(
                "failed to write {} (dropping command): {e}",
                self.path.display()
            );
        }
    }
}
