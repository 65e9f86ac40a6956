use super::{FixedClock, RecordingSleeper, flaser_line, ramp};
use crate::carmen::SCAN_RESOLUTION;
use crate::config::ReplayConfig;
use crate::replay::Scheduler;
use crate::sink::{JsonLinesSink, NullSink};
use serde_json::Value;
use std::io::Cursor;

fn replay_to_json(input: String) -> Vec<Value> {
    let cfg = ReplayConfig::default();
    let mut sched = Scheduler::new(Cursor::new(input), &cfg)
        .with_clock(FixedClock::at(5.0))
        .with_sleeper(RecordingSleeper::default());
    let mut sink = JsonLinesSink::new(Vec::new());
    sched.run(&mut sink, &mut ()).expect("run");
    assert_eq!(sink.lines(), 2);

    let out = String::from_utf8(sink.into_inner()).expect("utf8");
    out.lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect()
}

#[test]
fn json_lines_sink_writes_one_tagged_object_per_message() {
    let input = format!(
        "ODOM 1 2 0 0 0 0 3\n{}\n",
        flaser_line(360, &ramp(SCAN_RESOLUTION), (1.0, 2.0, 0.0))
    );
    let lines = replay_to_json(input);

    assert_eq!(lines[0]["topic"], "tf");
    assert_eq!(lines[0]["header"]["frame_id"], "odom");
    assert_eq!(lines[0]["child_frame_id"], "base_link");
    assert_eq!(lines[0]["translation"]["x"], 1.0);

    assert_eq!(lines[1]["topic"], "scan");
    assert_eq!(lines[1]["header"]["seq"], 1);
    assert_eq!(lines[1]["header"]["frame_id"], "laser");
    assert_eq!(lines[1]["header"]["stamp"], 5.0);
    assert_eq!(
        lines[1]["ranges"].as_array().expect("ranges").len(),
        SCAN_RESOLUTION
    );
    assert_eq!(
        lines[1]["intensities"].as_array().expect("intensities").len(),
        SCAN_RESOLUTION
    );
}

#[test]
fn null_sink_accepts_everything() {
    let mut sink = NullSink;
    let cfg = ReplayConfig::default();
    let mut sched = Scheduler::new(Cursor::new("ODOM 0 0 0 0 0 0 0".to_string()), &cfg)
        .with_sleeper(RecordingSleeper::default());
    let stats = sched.run(&mut sink, &mut ()).expect("run");
    assert_eq!(stats.odoms, 1);
}
