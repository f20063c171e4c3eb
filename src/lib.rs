//! pfand library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. The `pfand` binary wires the same modules to the real
//! sysfs devices and runs the control loop as a daemon.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;

pub mod adapters;
pub mod daemon;
pub mod paths;
