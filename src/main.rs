//! pfand — fan-speed control daemon, main entry point.
//!
//! Hexagonal architecture: the control loop engine ([`FanService`])
//! talks to the world only through port traits, and this binary wires
//! the real adapters to it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)               │
//! │                                                     │
//! │  HardwareAdapter     LogEventSink     SystemClock   │
//! │  (Sensor+Actuator)   (EventSink)      (ClockPort)   │
//! │                                                     │
//! │  ─────────────── Port Trait Boundary ────────────   │
//! │                                                     │
//! │  ┌───────────────────────────────────────────────┐  │
//! │  │         FanService (pure logic)               │  │
//! │  │  curve · run-on hysteresis · kick             │  │
//! │  └───────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Result, bail};
use log::{LevelFilter, error, info};

use pfand::adapters::{FileLogger, HardwareAdapter, HwmonSensor, LogEventSink, SysfsPwm, SystemClock};
use pfand::app::events::AppEvent;
use pfand::app::ports::{ClockPort, EventSink, SensorPort};
use pfand::app::service::FanService;
use pfand::config::ControlConfig;
use pfand::{daemon, paths};

fn main() -> Result<()> {
    // ── 1. Preconditions ──────────────────────────────────────
    // Privilege check happens before any hardware interaction, while
    // stderr is still attached to the caller.
    if let Err(e) = daemon::check_privileges() {
        eprintln!("pfand: {e}");
        bail!(e);
    }

    // ── 2. Detach (skipped in foreground builds) ──────────────
    #[cfg(not(feature = "foreground"))]
    daemon::daemonize()?;

    // ── 3. Logging ────────────────────────────────────────────
    #[cfg(feature = "foreground")]
    FileLogger::init_stderr(LevelFilter::Info)?;
    #[cfg(not(feature = "foreground"))]
    FileLogger::init_file(std::path::Path::new(paths::LOG_FILE), LevelFilter::Info)?;

    info!("pfand v{} started", env!("CARGO_PKG_VERSION"));

    // ── 4. Construct adapters ─────────────────────────────────
    let config = ControlConfig::default();
    let mut hw = HardwareAdapter::new(
        HwmonSensor::new(paths::TEMP_SENSOR),
        SysfsPwm::new(paths::PWM_DEVICE, config.pwm_frequency_hz),
    );
    let mut sink = LogEventSink::new();
    let mut clock = SystemClock::new();

    // ── 5. Startup self-check ─────────────────────────────────
    // Refuse to run blind: one sensor read before the loop, fatal on
    // failure. A literal zero is indistinguishable from the failure
    // sentinel and is rejected too, matching the reference behavior.
    match hw.read_temperature() {
        Ok(t) if t != 0.0 => info!("startup self-check: {t:.1} °C"),
        Ok(_) => {
            error!("unable to read the temperature (or it's zero degrees?), quitting");
            bail!("startup self-check failed: sensor read zero");
        }
        Err(e) => {
            error!("unable to read the temperature, quitting ({e})");
            bail!(e);
        }
    }

    // ── 6. Control loop ───────────────────────────────────────
    let mut service = FanService::new(config.clone());
    service.startup(&mut hw, &mut clock, &mut sink);

    let telemetry_every = config.telemetry_ticks();
    loop {
        service.tick(&mut hw, &mut clock, &mut sink);

        if telemetry_every > 0 && service.tick_count() % telemetry_every == 0 {
            sink.emit(&AppEvent::Telemetry(service.build_telemetry()));
        }

        clock.pause(config.loop_interval());
    }
}
