//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (which the daemon backs with the append-only log
//! file). A future metrics or socket adapter would implement the same
//! trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | T={:.1}\u{00b0}C | duty={}% | run_on={} ticks | tick={}",
                    t.temperature_c, t.duty, t.run_on_ticks, t.tick,
                );
            }
            AppEvent::Started { duty } => {
                info!("START | initial pulse at {duty}%");
            }
            AppEvent::KickIssued {
                kick_pwm,
                steady_duty,
            } => {
                info!("KICK  | {kick_pwm}% pulse before settling at {steady_duty}%");
            }
            AppEvent::DutyChanged { from, to } => {
                info!("DUTY  | {from}% -> {to}%");
            }
            AppEvent::DutyOutOfRange { computed, clamped } => {
                warn!("RANGE | computed duty {computed} out of bounds, clamped to {clamped}%");
            }
            AppEvent::SensorReadFailed(e) => {
                warn!("SENSE | read failed ({e}), tick degraded to 0\u{00b0}C");
            }
        }
    }
}
