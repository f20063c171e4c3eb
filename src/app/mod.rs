//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the control loop engine for the fan daemon. All
//! interaction with the sensor, the PWM device, and the wall clock
//! happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable without a real sysfs tree.

pub mod events;
pub mod ports;
pub mod service;
