//! Device and file path assignments.
//!
//! Single source of truth — every adapter references this module rather
//! than hardcoding sysfs paths.

/// hwmon attribute exposing the CPU temperature in whole degrees Celsius.
pub const TEMP_SENSOR: &str = "/sys/class/hwmon/hwmon0/device/temp_label";

/// PWM command channel. Accepts `"<frequency_hz>,<duty_percent>\n"`.
pub const PWM_DEVICE: &str = "/sys/devices/platform/pwm/pwm.0";

/// Append-only daemon log.
pub const LOG_FILE: &str = "/var/log/pfand.log";
