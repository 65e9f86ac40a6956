//! 回放调度器
//!
//! 读关键字 -> 分派 -> 构建 -> 发布 -> 等待，循环直到输入耗尽。
//! 任何格式错误都会终止整个回放。

use std::io::BufRead;

use tracing::{debug, info, trace};

use super::clock::{Clock, Sleeper, SystemClock, ThreadSleeper};
use super::cursor::ReplayCursor;
use super::pacing::Pacer;
use crate::carmen::{self, LogRecord, RecordKind};
use crate::config::ReplayConfig;
use crate::error::Result;
use crate::msg::{FrameNames, LaserScan, ScanConfig, TransformStamped};
use crate::sink::{Diagnostics, PublishSink};

/// 调度器状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayState {
    AwaitKeyword,
    Dispatch(RecordKind),
    Emit,
    Pace,
    /// 输入耗尽（终态）
    Drained,
}

/// 单步的结果
#[derive(Debug, Clone, PartialEq)]
pub enum Emitted {
    Scan { seq: u32 },
    Odom { timestamp: f64 },
    Skipped { keyword: String },
}

/// 回放统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub scans: u64,
    pub odoms: u64,
    /// 跳过的未知关键字 token 数
    pub skipped: u64,
}

pub struct Scheduler<R> {
    cursor: ReplayCursor<R>,
    scan_cfg: ScanConfig,
    frames: FrameNames,
    pacer: Pacer,
    clock: Box<dyn Clock>,
    sleeper: Box<dyn Sleeper>,
    state: ReplayState,
    stats: ReplayStats,
}

impl<R: BufRead> Scheduler<R> {
    pub fn new(reader: R, cfg: &ReplayConfig) -> Self {
        Self {
            cursor: ReplayCursor::new(reader),
            scan_cfg: cfg.scan.clone(),
            frames: FrameNames::with_prefix(&cfg.tf_prefix),
            pacer: Pacer::new(cfg.pacing.clone()),
            clock: Box::new(SystemClock),
            sleeper: Box::new(ThreadSleeper),
            state: ReplayState::AwaitKeyword,
            stats: ReplayStats::default(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    pub fn state(&self) -> &ReplayState {
        &self.state
    }

    pub fn stats(&self) -> ReplayStats {
        self.stats
    }

    pub fn scan_sequence_id(&self) -> u32 {
        self.cursor.scan_sequence_id()
    }

    /// 处理下一个关键字。输入耗尽后返回 `Ok(None)`。
    pub fn step(
        &mut self,
        sink: &mut dyn PublishSink,
        diag: &mut dyn Diagnostics,
    ) -> Result<Option<Emitted>> {
        if self.state == ReplayState::Drained {
            return Ok(None);
        }

        self.state = ReplayState::AwaitKeyword;
        let Some(keyword) = self.cursor.next_keyword()? else {
            debug!(line = self.cursor.line(), "输入耗尽");
            self.state = ReplayState::Drained;
            return Ok(None);
        };

        let kind = RecordKind::classify(&keyword.text);
        self.state = ReplayState::Dispatch(kind.clone());
        let fields = carmen::extract(&keyword, self.cursor.tokens_mut())?;
        let Some(record) = carmen::build(fields, self.clock.now())? else {
            self.stats.skipped += 1;
            self.state = ReplayState::AwaitKeyword;
            return Ok(Some(Emitted::Skipped {
                keyword: kind.keyword().to_string(),
            }));
        };

        let wait = self.pacer.before_emit(&record);
        self.sleeper.sleep(wait);

        self.state = ReplayState::Emit;
        let emitted = self.emit(&record, sink, diag)?;

        self.state = ReplayState::Pace;
        let wait = self.pacer.after_emit(&record);
        trace!(record = record.kind().keyword(), ?wait, "等待");
        self.sleeper.sleep(wait);

        self.state = ReplayState::AwaitKeyword;
        Ok(Some(emitted))
    }

    fn emit(
        &mut self,
        record: &LogRecord,
        sink: &mut dyn PublishSink,
        diag: &mut dyn Diagnostics,
    ) -> Result<Emitted> {
        match record {
            LogRecord::Odom { pose, timestamp } => {
                let tf = TransformStamped::from_pose(&self.frames, pose, self.clock.now());
                sink.send_transform(&tf)?;
                self.stats.odoms += 1;
                trace!(x = pose.x, y = pose.y, heading = pose.heading, "发布 odom 变换");
                Ok(Emitted::Odom {
                    timestamp: *timestamp,
                })
            }
            LogRecord::Scan(scan) => {
                let seq = self.cursor.advance_scan_id();
                let msg = LaserScan::from_record(&self.scan_cfg, scan, seq);
                sink.publish_scan(&msg)?;
                diag.tick(msg.header.stamp);
                self.stats.scans += 1;
                debug!(seq, declared_count = scan.declared_count, "scan 已发布");
                Ok(Emitted::Scan { seq })
            }
        }
    }

    /// 运行直到输入耗尽。
    #[tracing::instrument(skip_all)]
    pub fn run(
        &mut self,
        sink: &mut dyn PublishSink,
        diag: &mut dyn Diagnostics,
    ) -> Result<ReplayStats> {
        info!(mode = ?self.pacer.mode(), "▶️  开始回放");
        while self.step(sink, diag)?.is_some() {}
        info!(
            scans = self.stats.scans,
            odoms = self.stats.odoms,
            skipped = self.stats.skipped,
            "✅ 回放完成"
        );
        Ok(self.stats)
    }
}
