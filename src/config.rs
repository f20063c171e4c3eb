//! Control-law configuration parameters
//!
//! All tunable parameters for the fan controller. Values are fixed at
//! build time — there is no runtime reconfiguration; the defaults are
//! the hand-tuned constants the controller ships with.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Core controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    // --- PWM ---
    /// Lowest duty cycle the fan will actually spin at (0-100%)
    pub min_pwm: u8,
    /// Highest duty cycle to command (0-100%). Below 100 when the fan is
    /// rated for less than the supply voltage.
    pub max_pwm: u8,
    /// Duty cycle for the start-up kick pulse (0-100%)
    pub kick_pwm: u8,
    /// How long the kick pulse is held (milliseconds)
    pub kick_time_ms: u32,
    /// PWM carrier frequency (Hz). 10 kHz is audible; 50 kHz is silent
    /// and still leaves plenty of duty resolution.
    pub pwm_frequency_hz: u32,

    // --- Temperature thresholds ---
    /// Below this temperature (Celsius) the fan is off (after run-on)
    pub low_temp_c: f32,
    /// At or above this temperature (Celsius) the fan runs full speed
    pub high_temp_c: f32,

    // --- Timing ---
    /// Control loop period (seconds)
    pub loop_interval_secs: u32,
    /// How long the fan keeps running at minimum speed after the
    /// temperature drops below `low_temp_c` (seconds)
    pub run_on_secs: u32,
    /// Settle delay after the start-up full-speed pulse (seconds)
    pub startup_settle_secs: u32,
    /// Telemetry log cadence (seconds)
    pub telemetry_interval_secs: u32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            // PWM
            min_pwm: 50,
            max_pwm: 100,
            kick_pwm: 70,
            kick_time_ms: 500,
            pwm_frequency_hz: 50_000,

            // Thresholds
            low_temp_c: 55.0,
            high_temp_c: 75.0,

            // Timing
            loop_interval_secs: 2,
            run_on_secs: 30,
            startup_settle_secs: 5,
            telemetry_interval_secs: 60,
        }
    }
}

impl ControlConfig {
    /// Run-on duration expressed in control-loop ticks.
    pub fn run_on_ticks(&self) -> u32 {
        self.run_on_secs / self.loop_interval_secs.max(1)
    }

    /// Telemetry cadence expressed in control-loop ticks.
    pub fn telemetry_ticks(&self) -> u64 {
        u64::from(self.telemetry_interval_secs / self.loop_interval_secs.max(1))
    }

    pub fn loop_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.loop_interval_secs))
    }

    pub fn kick_time(&self) -> Duration {
        Duration::from_millis(u64::from(self.kick_time_ms))
    }

    pub fn startup_settle(&self) -> Duration {
        Duration::from_secs(u64::from(self.startup_settle_secs))
    }
}
