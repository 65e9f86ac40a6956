//! 发布节奏
//!
//! 默认使用固定墙钟间隔，与日志里记录的时间无关；
//! `LogRelative` 按里程计时间戳差值等待，`Immediate` 不等待。

use std::time::Duration;

use tracing::warn;

use crate::carmen::LogRecord;
use crate::config::{PacingConfig, PacingMode};

/// 里程计后的等待是基础间隔的 1/ODOM_INTERVAL_DIVISOR
pub const ODOM_INTERVAL_DIVISOR: u32 = 5;

#[derive(Debug, Clone)]
pub struct Pacer {
    cfg: PacingConfig,
    last_odom_stamp: Option<f64>,
}

impl Pacer {
    pub fn new(cfg: PacingConfig) -> Self {
        Self {
            cfg,
            last_odom_stamp: None,
        }
    }

    pub fn mode(&self) -> PacingMode {
        self.cfg.mode
    }

    /// 发布前的等待（仅 LogRelative 模式下对里程计生效）
    pub fn before_emit(&mut self, record: &LogRecord) -> Duration {
        let LogRecord::Odom { timestamp, .. } = record else {
            return Duration::ZERO;
        };
        if self.cfg.mode != PacingMode::LogRelative {
            return Duration::ZERO;
        }

        let prev = self.last_odom_stamp.replace(*timestamp);
        let Some(prev) = prev else {
            return Duration::ZERO;
        };
        if self.cfg.speed <= 0.0 {
            return Duration::ZERO;
        }
        let gap = (timestamp - prev) / self.cfg.speed;
        if gap <= 0.0 {
            return Duration::ZERO;
        }
        if gap > self.cfg.max_gap_secs {
            warn!(
                prev,
                stamp = *timestamp,
                gap,
                max = self.cfg.max_gap_secs,
                "时间戳跳变过大，不等待"
            );
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(gap).unwrap_or(Duration::ZERO)
    }

    /// 发布后的等待（仅 Fixed 模式）
    pub fn after_emit(&self, record: &LogRecord) -> Duration {
        if self.cfg.mode != PacingMode::Fixed {
            return Duration::ZERO;
        }
        let base = self.cfg.base_interval();
        match record {
            LogRecord::Odom { .. } => base / ODOM_INTERVAL_DIVISOR,
            LogRecord::Scan(_) => base,
        }
    }
}
