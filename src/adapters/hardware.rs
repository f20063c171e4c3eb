//! Hardware adapter — bridges the real sysfs devices to the port traits.
//!
//! Owns the hwmon sensor and the PWM channel, exposing them through
//! [`SensorPort`] and [`ActuatorPort`]. This is the only composition in
//! the system that touches actual devices.

use crate::adapters::hwmon::HwmonSensor;
use crate::adapters::pwm::SysfsPwm;
use crate::app::ports::{ActuatorPort, SensorPort};
use crate::error::SensorError;

/// Concrete adapter that combines both devices behind the port traits.
pub struct HardwareAdapter {
    sensor: HwmonSensor,
    pwm: SysfsPwm,
}

impl HardwareAdapter {
    pub fn new(sensor: HwmonSensor, pwm: SysfsPwm) -> Self {
        Self { sensor, pwm }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        self.sensor.read_temperature()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_fan(&mut self, duty: u8) {
        self.pwm.set_fan(duty);
    }
}
