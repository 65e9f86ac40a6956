use crate::config::{PacingMode, RangeCodes, ReplayConfig};
use crate::error::ReplayError;
use std::fs;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[test]
fn defaults_match_original_tool() {
    let cfg = ReplayConfig::default();
    assert_eq!(cfg.scan.angle_min, -1.562070);
    assert_eq!(cfg.scan.angle_max, 1.562070);
    assert_eq!(cfg.scan.range_max, 8.1);
    assert_eq!(cfg.scan.frame_id, "laser");
    assert_eq!(cfg.scan.range_codes, RangeCodes::Raw);
    assert_eq!(cfg.pacing.mode, PacingMode::Fixed);
    assert_eq!(cfg.pacing.base_interval(), Duration::from_millis(50));
    assert_eq!(cfg.pacing.max_gap_secs, 10.0);
    assert_eq!(cfg.diagnostics.desired_frequency, 10.0);
    assert_eq!(cfg.diagnostics.min_frequency(), 10.0);
    assert_eq!(cfg.diagnostics.max_frequency(), 10.0);
    assert_eq!(cfg.diagnostics.frequency_tolerance, 0.3);
    assert_eq!(cfg.diagnostics.window_size, 30);
    assert_eq!(cfg.diagnostics.min_acceptable_delay, 0.0);
    assert_eq!(cfg.diagnostics.max_acceptable_delay, 0.2);
    assert_eq!(cfg.diagnostics.hardware_id, "SICK LMS");
    assert_eq!(cfg.diagnostics.time_offset, 0.0);
    assert!(cfg.tf_prefix.is_empty());
}

#[test]
fn partial_json_fills_in_defaults() {
    let cfg: ReplayConfig = serde_json::from_str(
        r#"
{
    "scan": { "frame_id": "front_laser", "range_codes": "sick" },
    "pacing": { "mode": "log_relative", "speed": 4.0 },
    "diagnostics": { "max_frequency": 12.5 },
    "tf_prefix": "r1"
}
        "#,
    )
    .expect("parse config");

    assert_eq!(cfg.scan.frame_id, "front_laser");
    assert_eq!(cfg.scan.range_codes, RangeCodes::Sick);
    assert_eq!(cfg.scan.range_max, 8.1);
    assert_eq!(cfg.pacing.mode, PacingMode::LogRelative);
    assert_eq!(cfg.pacing.speed, 4.0);
    assert_eq!(cfg.pacing.base_interval_ms, 50);
    assert_eq!(cfg.diagnostics.max_frequency(), 12.5);
    assert_eq!(cfg.diagnostics.min_frequency(), 10.0);
    assert_eq!(cfg.tf_prefix, "r1");
}

#[test]
fn load_reports_bad_file_as_config_error() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "carmen-replay-config-{}-{nanos}.json",
        std::process::id()
    ));
    fs::write(&path, "{ not json").expect("write temp file");

    let err = ReplayConfig::load(&path).expect_err("invalid json");
    assert!(matches!(err, ReplayError::Config { .. }));

    let _ = fs::remove_file(&path);

    let missing = ReplayConfig::load(&path).expect_err("missing file");
    assert!(matches!(missing, ReplayError::Config { .. }));
}
