//! Control loop engine — the hexagonal core.
//!
//! [`FanService`] owns the fan curve and the per-tick control state.
//! All I/O flows through port traits injected at call sites, making the
//! entire engine testable with mock adapters.
//!
//! ```text
//!   SensorPort ──▶ ┌──────────────────────┐ ──▶ EventSink
//!                  │      FanService       │
//!  ActuatorPort ◀──│  curve · run-on · kick│──▶ ClockPort
//!                  └──────────────────────┘
//! ```

use log::warn;

use crate::config::ControlConfig;
use crate::control::{ControlState, FanCurve, needs_kick};

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, ClockPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// FanService
// ───────────────────────────────────────────────────────────────

/// The control loop engine: one instance, one logical thread of control.
pub struct FanService {
    config: ControlConfig,
    curve: FanCurve,
    state: ControlState,
    tick_count: u64,
    last_temp_c: f32,
}

impl FanService {
    /// Construct the engine from configuration.
    ///
    /// Does **not** touch hardware — call [`startup`](Self::startup) next.
    pub fn new(config: ControlConfig) -> Self {
        let curve = FanCurve::from_config(&config);
        Self {
            config,
            curve,
            state: ControlState::new(),
            tick_count: 0,
            last_temp_c: 0.0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Startup action: command full speed once so the fan is visibly
    /// alive, hold through the settle delay, then enter the loop with a
    /// stopped-fan control state. The first running tick will therefore
    /// issue a kick, same as a cold start.
    pub fn startup(
        &mut self,
        hw: &mut impl ActuatorPort,
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        hw.set_fan(self.config.max_pwm);
        sink.emit(&AppEvent::Started {
            duty: self.config.max_pwm,
        });
        clock.pause(self.config.startup_settle());
        self.state = ControlState::new();
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: read → compute → kick → command.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit. The inter-tick sleep is the
    /// caller's job; only the kick hold pauses inside.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Read the temperature via SensorPort. A failed read degrades
        //    to a literal 0 °C, steering the fan toward off through the
        //    run-on path — the reference behavior.
        let temp_c = match hw.read_temperature() {
            Ok(t) => t,
            Err(e) => {
                warn!("temperature read failed ({e}), treating as 0 °C");
                sink.emit(&AppEvent::SensorReadFailed(e));
                0.0
            }
        };
        self.last_temp_c = temp_c;

        // 2. Control law (mutates the run-on counter).
        let decision = self.curve.compute(temp_c, &mut self.state);
        if let Some(raw) = decision.raw_out_of_range {
            warn!(
                "duty calculation out of range: {raw} (clamped to {})",
                decision.duty
            );
            sink.emit(&AppEvent::DutyOutOfRange {
                computed: raw,
                clamped: decision.duty,
            });
        }
        let duty = decision.duty;

        // 3. Kick: starting from a stop, overcome static friction with a
        //    short higher-power pulse before the steady command.
        if needs_kick(self.state.prev_duty, duty) {
            hw.set_fan(self.config.kick_pwm);
            sink.emit(&AppEvent::KickIssued {
                kick_pwm: self.config.kick_pwm,
                steady_duty: duty,
            });
            clock.pause(self.config.kick_time());
        }

        // 4. Steady command, then update state.
        hw.set_fan(duty);
        if duty != self.state.prev_duty {
            sink.emit(&AppEvent::DutyChanged {
                from: self.state.prev_duty,
                to: duty,
            });
        }
        self.state.prev_duty = duty;
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current state.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            temperature_c: self.last_temp_c,
            duty: self.state.prev_duty,
            run_on_ticks: self.state.run_on_ticks,
            tick: self.tick_count,
        }
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Duty cycle last commanded.
    pub fn current_duty(&self) -> u8 {
        self.state.prev_duty
    }

    /// Remaining run-on ticks.
    pub fn run_on_ticks(&self) -> u32 {
        self.state.run_on_ticks
    }
}
