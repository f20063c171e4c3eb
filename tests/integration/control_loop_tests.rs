//! Integration tests for the FanService → actuator pipeline.
//!
//! These verify the full per-tick sequence — read, control law, kick,
//! steady command — against recording mocks, with the default tuning
//! (min=50, max=100, kick=70, band 55–75 °C, 2 s loop, 30 s run-on).

use std::time::Duration;

use crate::mock_hw::{MockClock, MockHardware, VecSink};

use pfand::app::events::AppEvent;
use pfand::app::service::FanService;
use pfand::config::ControlConfig;
use pfand::error::SensorError;

fn make_engine() -> (FanService, MockClock, VecSink) {
    (
        FanService::new(ControlConfig::default()),
        MockClock::new(),
        VecSink::new(),
    )
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn startup_pulses_full_speed_then_settles() {
    let (mut svc, mut clock, mut sink) = make_engine();
    let mut hw = MockHardware::new(25.0);

    svc.startup(&mut hw, &mut clock, &mut sink);

    assert_eq!(hw.commands, vec![100], "first command must be the alive pulse");
    assert_eq!(clock.pauses, vec![Duration::from_secs(5)]);
    assert!(matches!(sink.events[0], AppEvent::Started { duty: 100 }));
    assert_eq!(svc.current_duty(), 0, "engine enters the loop as stopped");
}

// ── Kick sequencing ───────────────────────────────────────────

#[test]
fn first_running_tick_kicks_before_steady_command() {
    let (mut svc, mut clock, mut sink) = make_engine();
    // 65 °C → floor(50 + 50·(65−55)/20) = 75
    let mut hw = MockHardware::new(65.0);

    svc.tick(&mut hw, &mut clock, &mut sink);

    assert_eq!(hw.commands, vec![70, 75], "kick pulse, then steady duty");
    assert_eq!(clock.pauses, vec![Duration::from_millis(500)]);
    assert_eq!(sink.kicks(), 1);
}

#[test]
fn steady_state_never_rekicks() {
    let (mut svc, mut clock, mut sink) = make_engine();
    let mut hw = MockHardware::new(65.0);

    for _ in 0..5 {
        svc.tick(&mut hw, &mut clock, &mut sink);
    }

    assert_eq!(hw.commands, vec![70, 75, 75, 75, 75, 75]);
    assert_eq!(sink.kicks(), 1, "kick fires exactly once per start");
    assert_eq!(clock.pauses.len(), 1, "only the kick hold pauses inside ticks");
}

#[test]
fn cold_start_stays_off_without_kick() {
    let (mut svc, mut clock, mut sink) = make_engine();
    let mut hw = MockHardware::new(30.0);

    svc.tick(&mut hw, &mut clock, &mut sink);

    assert_eq!(hw.commands, vec![0]);
    assert_eq!(sink.kicks(), 0);
    assert!(clock.pauses.is_empty());
}

#[test]
fn restart_after_stop_kicks_again() {
    let (mut svc, mut clock, mut sink) = make_engine();
    let mut hw = MockHardware::new(65.0);

    svc.tick(&mut hw, &mut clock, &mut sink); // kick + run

    // Cool until the run-on decays and the fan stops.
    hw.temp_c = 30.0;
    for _ in 0..16 {
        svc.tick(&mut hw, &mut clock, &mut sink);
    }
    assert_eq!(svc.current_duty(), 0);

    // Warm again: a second kick.
    hw.temp_c = 65.0;
    svc.tick(&mut hw, &mut clock, &mut sink);
    assert_eq!(sink.kicks(), 2);
    assert_eq!(hw.last_command(), Some(75));
}

// ── Run-on hysteresis ─────────────────────────────────────────

#[test]
fn run_on_holds_min_speed_for_fifteen_ticks() {
    let (mut svc, mut clock, mut sink) = make_engine();
    let mut hw = MockHardware::new(65.0);

    svc.tick(&mut hw, &mut clock, &mut sink);
    assert_eq!(svc.run_on_ticks(), 15, "band operation arms the run-on timer");

    hw.temp_c = 40.0;
    hw.commands.clear();
    for _ in 0..20 {
        svc.tick(&mut hw, &mut clock, &mut sink);
    }

    // 15 ticks at the floor speed (30 s at the 2 s loop), then off.
    let expected: Vec<u8> = std::iter::repeat_n(50, 15).chain(std::iter::repeat_n(0, 5)).collect();
    assert_eq!(hw.commands, expected);
}

#[test]
fn brief_dip_below_threshold_does_not_stop_the_fan() {
    let (mut svc, mut clock, mut sink) = make_engine();
    let mut hw = MockHardware::new(60.0);

    svc.tick(&mut hw, &mut clock, &mut sink);

    hw.temp_c = 54.0; // one tick below the band
    svc.tick(&mut hw, &mut clock, &mut sink);
    assert_eq!(svc.current_duty(), 50, "run-on keeps the fan at floor speed");

    hw.temp_c = 60.0;
    svc.tick(&mut hw, &mut clock, &mut sink);
    assert_eq!(svc.run_on_ticks(), 15, "re-entering the band re-arms run-on");
}

// ── Degraded sensor ───────────────────────────────────────────

#[test]
fn failed_read_degrades_to_zero_degrees() {
    let (mut svc, mut clock, mut sink) = make_engine();
    let mut hw = MockHardware::new(65.0);

    svc.tick(&mut hw, &mut clock, &mut sink);
    hw.fail_reads = true;
    hw.commands.clear();

    // Behaves exactly like a 0 °C reading: floor speed while the run-on
    // decays, then off.
    for _ in 0..16 {
        svc.tick(&mut hw, &mut clock, &mut sink);
    }
    assert_eq!(hw.commands[..15], [50; 15]);
    assert_eq!(hw.commands[15], 0);
    assert!(
        sink.events
            .iter()
            .any(|e| *e == AppEvent::SensorReadFailed(SensorError::NotReadable)),
        "degraded ticks must still be visible in the event stream"
    );
}

// ── Events ────────────────────────────────────────────────────

#[test]
fn duty_changes_are_reported_with_endpoints() {
    let (mut svc, mut clock, mut sink) = make_engine();
    let mut hw = MockHardware::new(65.0);

    svc.tick(&mut hw, &mut clock, &mut sink);
    hw.temp_c = 80.0;
    svc.tick(&mut hw, &mut clock, &mut sink);

    let changes: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::DutyChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(changes, vec![(0, 75), (75, 100)]);
}

#[test]
fn normal_operation_emits_no_range_warnings() {
    let (mut svc, mut clock, mut sink) = make_engine();
    let mut hw = MockHardware::new(55.0);

    let mut t = 50.0f32;
    while t <= 85.0 {
        hw.temp_c = t;
        svc.tick(&mut hw, &mut clock, &mut sink);
        t += 1.0;
    }

    assert!(
        !sink
            .events
            .iter()
            .any(|e| matches!(e, AppEvent::DutyOutOfRange { .. })),
        "clamp warnings indicate an internal-consistency bug"
    );
}

#[test]
fn telemetry_snapshot_tracks_the_last_tick() {
    let (mut svc, mut clock, mut sink) = make_engine();
    let mut hw = MockHardware::new(65.0);

    svc.tick(&mut hw, &mut clock, &mut sink);
    svc.tick(&mut hw, &mut clock, &mut sink);

    let t = svc.build_telemetry();
    assert_eq!(t.tick, 2);
    assert_eq!(t.duty, 75);
    assert!((t.temperature_c - 65.0).abs() < f32::EPSILON);
    assert_eq!(t.run_on_ticks, 15);
}
