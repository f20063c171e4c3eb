//! hwmon temperature sensor adapter.
//!
//! Reads a sysfs attribute that exposes the CPU temperature as a plain
//! integer in whole degrees Celsius. The file is re-opened on every
//! read — sysfs attributes are snapshots, not streams.

use std::fs;
use std::path::PathBuf;

use log::warn;

use crate::app::ports::SensorPort;
use crate::error::SensorError;

pub struct HwmonSensor {
    path: PathBuf,
}

impl HwmonSensor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Parse the attribute contents: a single integer, whole degrees C.
fn parse_temp(raw: &str) -> Result<f32, SensorError> {
    raw.trim()
        .parse::<i32>()
        .map(|t| t as f32)
        .map_err(|_| SensorError::Unparseable)
}

impl SensorPort for HwmonSensor {
    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            warn!("failed to read {}: {e}", self.path.display());
            SensorError::NotReadable
        })?;
        parse_temp(&raw)
    }
}
