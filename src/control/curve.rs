//! Piecewise fan curve: temperature in, duty cycle out.
//!
//! Three regions, evaluated in priority order:
//!
//! ```text
//!   duty
//!   max ┤                  ┌────────
//!       │                 /
//!       │                /
//!   min ┤       ────────┘
//!       │      (run-on)
//!     0 ┤ ─────
//!       └──────┴─────────┴──────────▶ temp
//!            low        high
//! ```
//!
//! Below `low_temp_c` the fan is off, except that a run-on counter keeps
//! it at `min_pwm` for a bounded number of ticks after the temperature
//! drops out of the band — a brief dip below the threshold must not stop
//! the fan outright, or it would chatter on/off at the boundary. The
//! counter is re-armed whenever the temperature is at or above the low
//! threshold.

/// State the controller carries across loop iterations.
///
/// Owned exclusively by the control loop engine; created at engine start
/// and never shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    /// Duty cycle last commanded to the actuator (0 = fan stopped).
    pub prev_duty: u8,
    /// Remaining ticks of minimum-speed run-on below the low threshold.
    pub run_on_ticks: u32,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the fan is stopped (no kick has been issued since the
    /// last zero command).
    pub fn is_stopped(&self) -> bool {
        self.prev_duty == 0
    }
}

/// One control decision per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyDecision {
    /// Duty cycle to command, already clamped.
    pub duty: u8,
    /// Raw interpolation result when it fell outside `[min_pwm, max_pwm]`.
    /// Indicates an internal-consistency problem; the caller should log it.
    pub raw_out_of_range: Option<i32>,
}

impl DutyDecision {
    fn of(duty: u8) -> Self {
        Self {
            duty,
            raw_out_of_range: None,
        }
    }
}

/// The piecewise-linear control law. Pure: no I/O, no logging.
#[derive(Debug, Clone, Copy)]
pub struct FanCurve {
    min_pwm: u8,
    max_pwm: u8,
    low_temp_c: f32,
    high_temp_c: f32,
    /// Value the run-on counter is re-armed to.
    run_on_reset_ticks: u32,
}

impl FanCurve {
    pub fn new(
        min_pwm: u8,
        max_pwm: u8,
        low_temp_c: f32,
        high_temp_c: f32,
        run_on_reset_ticks: u32,
    ) -> Self {
        debug_assert!(min_pwm <= max_pwm);
        debug_assert!(low_temp_c < high_temp_c);
        Self {
            min_pwm,
            max_pwm,
            low_temp_c,
            high_temp_c,
            run_on_reset_ticks,
        }
    }

    pub fn from_config(cfg: &crate::config::ControlConfig) -> Self {
        Self::new(
            cfg.min_pwm,
            cfg.max_pwm,
            cfg.low_temp_c,
            cfg.high_temp_c,
            cfg.run_on_ticks(),
        )
    }

    /// Map a temperature reading to a duty cycle, updating the run-on
    /// counter.
    ///
    /// Comparison operators are strict (`<` / `>`): the edge values
    /// `low_temp_c` and `high_temp_c` fall into the proportional band and
    /// yield exactly `min_pwm` and `max_pwm`.
    pub fn compute(&self, temp_c: f32, state: &mut ControlState) -> DutyDecision {
        if temp_c < self.low_temp_c {
            if state.run_on_ticks > 0 {
                state.run_on_ticks -= 1;
                DutyDecision::of(self.min_pwm)
            } else {
                DutyDecision::of(0)
            }
        } else if temp_c > self.high_temp_c {
            state.run_on_ticks = self.run_on_reset_ticks;
            DutyDecision::of(self.max_pwm)
        } else {
            // Proportional band: linear interpolation, truncated toward
            // zero. Operation anywhere in the band re-arms the run-on
            // timer, same as crossing the high threshold.
            state.run_on_ticks = self.run_on_reset_ticks;

            let span = f32::from(self.max_pwm - self.min_pwm);
            let frac = (temp_c - self.low_temp_c) / (self.high_temp_c - self.low_temp_c);
            let raw = (f32::from(self.min_pwm) + span * frac).floor() as i32;

            if raw < i32::from(self.min_pwm) || raw > i32::from(self.max_pwm) {
                DutyDecision {
                    duty: raw.clamp(i32::from(self.min_pwm), i32::from(self.max_pwm)) as u8,
                    raw_out_of_range: Some(raw),
                }
            } else {
                DutyDecision::of(raw as u8)
            }
        }
    }
}

/// A kick pulse is issued only on the transition from stopped to running,
/// never while the fan is already spinning.
pub fn needs_kick(prev_duty: u8, duty: u8) -> bool {
    prev_duty == 0 && duty > 0
}
