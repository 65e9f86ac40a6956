//! CARMEN 日志回放
//!
//! 把 CARMEN 日志中的 FLASER / ODOM 记录按固定节奏重新发布为激光扫描和 odom 变换。

use clap::Parser;
use carmen_replay::config::{PacingMode, RangeCodes, ReplayConfig};
use carmen_replay::error::PublishError;
use carmen_replay::replay::{Emitted, ReplayStats, Scheduler, SystemClock};
use carmen_replay::sink::{JsonLinesSink, NullSink, PublishSink, WindowedDiagnostics};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

const USAGE: &str = "Usage: carmen_publisher <filename-with-path>";

#[derive(Debug, Parser)]
#[command(
    name = "carmen_publisher",
    about = "Replay a CARMEN log as laser scans and odom transforms"
)]
struct Args {
    /// CARMEN 日志路径
    log: PathBuf,

    /// JSON 配置文件（scan / pacing / diagnostics / tf_prefix）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 输出 JSON lines；`-` 表示 stdout，缺省时丢弃消息
    #[arg(long)]
    output: Option<PathBuf>,

    /// 发布节奏
    #[arg(long, value_enum)]
    pacing: Option<PacingMode>,

    /// 基础间隔（毫秒），扫描后等待该时长，里程计后等待 1/5
    #[arg(long)]
    interval_ms: Option<u64>,

    /// log-relative 模式的倍速
    #[arg(long)]
    speed: Option<f64>,

    #[arg(long)]
    frame_id: Option<String>,

    #[arg(long)]
    tf_prefix: Option<String>,

    /// 距离特殊编码处理方式
    #[arg(long, value_enum)]
    range_codes: Option<RangeCodes>,

    #[arg(long)]
    hardware_id: Option<String>,
}

impl Args {
    fn apply(&self, cfg: &mut ReplayConfig) {
        if let Some(mode) = self.pacing {
            cfg.pacing.mode = mode;
        }
        if let Some(ms) = self.interval_ms {
            cfg.pacing.base_interval_ms = ms;
        }
        if let Some(speed) = self.speed {
            cfg.pacing.speed = speed;
        }
        if let Some(frame_id) = &self.frame_id {
            cfg.scan.frame_id = frame_id.clone();
        }
        if let Some(prefix) = &self.tf_prefix {
            cfg.tf_prefix = prefix.clone();
        }
        if let Some(codes) = self.range_codes {
            cfg.scan.range_codes = codes;
        }
        if let Some(id) = &self.hardware_id {
            cfg.diagnostics.hardware_id = id.clone();
        }
    }

    fn output_is_stdout(&self) -> bool {
        self.output.as_deref().is_some_and(|p| p.as_os_str() == "-")
    }
}

fn open_sink(output: Option<&PathBuf>) -> Result<Box<dyn PublishSink>, PublishError> {
    match output {
        None => Ok(Box::new(NullSink)),
        Some(path) if path.as_os_str() == "-" => Ok(Box::new(JsonLinesSink::new(io::stdout().lock()))),
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(JsonLinesSink::new(BufWriter::new(file))))
        }
    }
}

fn replay(args: &Args) -> carmen_replay::Result<ReplayStats> {
    let mut cfg = match &args.config {
        Some(path) => ReplayConfig::load(path)?,
        None => ReplayConfig::default(),
    };
    args.apply(&mut cfg);
    debug!(?cfg, "配置");

    let log = File::open(&args.log)?;
    let mut sink = open_sink(args.output.as_ref())?;
    let mut diag = WindowedDiagnostics::new(cfg.diagnostics.clone(), Box::new(SystemClock));
    let mut scheduler = Scheduler::new(BufReader::new(log), &cfg);

    info!(log = %args.log.display(), pacing = ?cfg.pacing.mode, "▶️  开始回放");
    let progress = !args.output_is_stdout();
    while let Some(emitted) = scheduler.step(sink.as_mut(), &mut diag)? {
        if let Emitted::Scan { seq } = emitted {
            if progress {
                println!("Scan {seq} published");
            }
        }
    }

    let stats = scheduler.stats();
    info!(
        scans = stats.scans,
        odoms = stats.odoms,
        skipped = stats.skipped,
        "✅ 回放完成"
    );
    Ok(stats)
}

fn main() -> ExitCode {
    // 初始化 tracing（stdout 留给进度和 JSON 输出）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                e.exit();
            }
            debug!(error = %e, "参数错误");
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
    };

    match replay(&args) {
        Ok(_) => {
            if !args.output_is_stdout() {
                println!("Success.");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "回放失败");
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
