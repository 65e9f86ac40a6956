use crate::carmen::{LogRecord, Pose2D, ScanRecord};
use crate::config::{PacingConfig, PacingMode};
use crate::replay::Pacer;
use std::time::Duration;

fn odom(timestamp: f64) -> LogRecord {
    LogRecord::Odom {
        pose: Pose2D::default(),
        timestamp,
    }
}

fn scan() -> LogRecord {
    LogRecord::Scan(ScanRecord {
        ranges: vec![0.0; 360],
        count: 360,
        declared_count: 360,
        pose: Pose2D::default(),
        timestamp: 0.0,
    })
}

fn pacer(mode: PacingMode, base_interval_ms: u64, speed: f64) -> Pacer {
    Pacer::new(PacingConfig {
        mode,
        base_interval_ms,
        speed,
        ..PacingConfig::default()
    })
}

#[test]
fn fixed_pacing_waits_after_emit_only() {
    let mut p = pacer(PacingMode::Fixed, 50, 1.0);
    assert_eq!(p.before_emit(&odom(1.0)), Duration::ZERO);
    assert_eq!(p.before_emit(&odom(100.0)), Duration::ZERO);
    assert_eq!(p.after_emit(&odom(100.0)), Duration::from_millis(10));
    assert_eq!(p.after_emit(&scan()), Duration::from_millis(50));
}

#[test]
fn fixed_pacing_ignores_log_timestamps() {
    let p = pacer(PacingMode::Fixed, 100, 1.0);
    assert_eq!(p.after_emit(&odom(0.0)), p.after_emit(&odom(1_000.0)));
}

#[test]
fn log_relative_pacing_waits_for_odom_timestamp_gap() {
    let mut p = pacer(PacingMode::LogRelative, 50, 2.0);
    assert_eq!(p.before_emit(&odom(10.0)), Duration::ZERO);
    assert_eq!(p.before_emit(&odom(11.0)), Duration::from_millis(500));
    assert_eq!(p.before_emit(&scan()), Duration::ZERO);
    assert_eq!(p.after_emit(&scan()), Duration::ZERO);
    assert_eq!(p.after_emit(&odom(11.0)), Duration::ZERO);
}

#[test]
fn log_relative_pacing_never_waits_backwards() {
    let mut p = pacer(PacingMode::LogRelative, 50, 1.0);
    p.before_emit(&odom(10.0));
    assert_eq!(p.before_emit(&odom(9.0)), Duration::ZERO);
    assert_eq!(p.before_emit(&odom(9.25)), Duration::from_millis(250));
}

#[test]
fn log_relative_with_zero_speed_does_not_wait() {
    let mut p = pacer(PacingMode::LogRelative, 50, 0.0);
    p.before_emit(&odom(0.0));
    assert_eq!(p.before_emit(&odom(5.0)), Duration::ZERO);
}

#[test]
fn immediate_pacing_never_waits() {
    let mut p = pacer(PacingMode::Immediate, 50, 1.0);
    assert_eq!(p.before_emit(&odom(0.0)), Duration::ZERO);
    assert_eq!(p.before_emit(&odom(5.0)), Duration::ZERO);
    assert_eq!(p.after_emit(&odom(5.0)), Duration::ZERO);
    assert_eq!(p.after_emit(&scan()), Duration::ZERO);
}

#[test]
fn log_relative_skips_gaps_beyond_the_cap() {
    let mut p = pacer(PacingMode::LogRelative, 50, 1.0);
    // 被强制为 0 的时间戳之后紧跟真实的 epoch 时间
    p.before_emit(&odom(0.0));
    assert_eq!(p.before_emit(&odom(1_288_971_406.5)), Duration::ZERO);
    assert_eq!(p.before_emit(&odom(1_288_971_407.0)), Duration::from_millis(500));

    let mut capped = Pacer::new(PacingConfig {
        mode: PacingMode::LogRelative,
        max_gap_secs: 1.0,
        ..PacingConfig::default()
    });
    capped.before_emit(&odom(0.0));
    assert_eq!(capped.before_emit(&odom(1.0)), Duration::from_secs(1));
    assert_eq!(capped.before_emit(&odom(2.5)), Duration::ZERO);
}
