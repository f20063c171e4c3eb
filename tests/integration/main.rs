//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the control loop
//! against mock adapters. No sysfs tree required.

mod control_loop_tests;
mod mock_hw;
