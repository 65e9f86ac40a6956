//! CARMEN 日志统计
//!
//! 不等待、不发布，只把整个日志走一遍，输出各类记录数量（JSON）。

use clap::Parser;
use carmen_replay::config::{PacingMode, ReplayConfig};
use carmen_replay::replay::Scheduler;
use carmen_replay::sink::NullSink;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "carmen_info", about = "Count the records of a CARMEN log")]
struct Args {
    /// CARMEN 日志路径
    log: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut cfg = ReplayConfig::default();
    cfg.pacing.mode = PacingMode::Immediate;

    let result = File::open(&args.log)
        .map_err(carmen_replay::ReplayError::from)
        .and_then(|log| {
            let mut scheduler = Scheduler::new(BufReader::new(log), &cfg);
            let stats = scheduler.run(&mut NullSink, &mut ())?;
            Ok((stats, scheduler.scan_sequence_id()))
        });

    match result {
        Ok((stats, last_seq)) => {
            let summary = serde_json::json!({
                "log": args.log.display().to_string(),
                "scans": stats.scans,
                "odoms": stats.odoms,
                "skipped": stats.skipped,
                "last_scan_seq": last_seq,
            });
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "统计失败");
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
