//! 回放配置
//!
//! 启动时读取一次（可选 JSON 文件 + 命令行覆盖），之后只读。
//! 诊断参数只影响诊断输出，不影响解析结果。

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{ReplayError, Result};
pub use crate::msg::{RangeCodes, ScanConfig};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub scan: ScanConfig,
    pub pacing: PacingConfig,
    pub diagnostics: DiagnosticsConfig,
    /// 坐标系名前缀（odom / base_link 前拼接）
    pub tf_prefix: String,
}

impl ReplayConfig {
    /// 从 JSON 文件读取；缺省字段取默认值。
    pub fn load(path: impl AsRef<Path>) -> Result<ReplayConfig> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ReplayError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| ReplayError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// 发布节奏
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PacingMode {
    /// 固定墙钟间隔：里程计后 base/5，扫描后 base
    #[default]
    Fixed,
    /// 按日志里程计时间戳的差值（除以 speed）等待
    LogRelative,
    /// 不等待
    Immediate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub mode: PacingMode,
    /// 基础间隔（毫秒）
    pub base_interval_ms: u64,
    /// LogRelative 模式下的播放倍速
    pub speed: f64,
    /// LogRelative 模式下单次等待上限（秒，按倍速换算之后）；超过则不等待
    pub max_gap_secs: f64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            mode: PacingMode::Fixed,
            base_interval_ms: 50,
            speed: 1.0,
            max_gap_secs: 10.0,
        }
    }
}

impl PacingConfig {
    pub fn base_interval(&self) -> Duration {
        Duration::from_millis(self.base_interval_ms)
    }
}

/// 诊断参数（原样传给诊断实现）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub desired_frequency: f64,
    /// 缺省为 desired_frequency
    pub min_frequency: Option<f64>,
    /// 缺省为 desired_frequency
    pub max_frequency: Option<f64>,
    /// 频率容差（相对比例）
    pub frequency_tolerance: f64,
    /// 统计频率的样本数
    pub window_size: usize,
    /// 最小允许延迟（秒），负数表示允许未来时间戳
    pub min_acceptable_delay: f64,
    /// 最大允许延迟（秒）
    pub max_acceptable_delay: f64,
    pub hardware_id: String,
    /// 时间偏移（秒）
    pub time_offset: f64,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            desired_frequency: 10.0,
            min_frequency: None,
            max_frequency: None,
            frequency_tolerance: 0.3,
            window_size: 30,
            min_acceptable_delay: 0.0,
            max_acceptable_delay: 0.2,
            hardware_id: "SICK LMS".to_string(),
            time_offset: 0.0,
        }
    }
}

impl DiagnosticsConfig {
    pub fn min_frequency(&self) -> f64 {
        self.min_frequency.unwrap_or(self.desired_frequency)
    }

    pub fn max_frequency(&self) -> f64 {
        self.max_frequency.unwrap_or(self.desired_frequency)
    }
}
