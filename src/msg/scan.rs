//! 激光扫描消息
//!
//! 由 `ScanRecord` 和 `ScanConfig` 构建 sink 需要的完整扫描消息。

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::Header;
use crate::carmen::ScanRecord;

/// 激光扫描的运行参数，启动时设置一次，之后只读。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// 起始角（弧度）
    pub angle_min: f32,
    /// 终止角（弧度）
    pub angle_max: f32,
    /// 量程上限（米），与测量值无关
    pub range_max: f32,
    /// 一帧扫描耗时（秒）
    pub scan_time: f64,
    pub frame_id: String,
    pub range_codes: RangeCodes,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            angle_min: -1.562070,
            angle_max: 1.562070,
            range_max: 8.1,
            scan_time: 1.0 / 100.0,
            frame_id: "laser".to_string(),
            range_codes: RangeCodes::Raw,
        }
    }
}

impl ScanConfig {
    /// 相邻两束之间的角度差
    pub fn angle_increment(&self, n_ranges: usize) -> f32 {
        if n_ranges < 2 {
            return 0.0;
        }
        ((self.angle_max as f64 - self.angle_min as f64) / (n_ranges - 1) as f64) as f32
    }

    /// 相邻两束之间的时间差
    pub fn time_increment(&self, n_ranges: usize) -> f32 {
        (self.scan_time / (2.0 * PI) * self.angle_increment(n_ranges) as f64) as f32
    }
}

/// 距离值中的特殊编码如何处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RangeCodes {
    /// 原样输出
    #[default]
    Raw,
    /// SICK LMS 溢出码：无效/眩光/溢出/信噪比/通道错误 -> NaN，超量程 -> +inf
    Sick,
}

impl RangeCodes {
    pub fn map(self, value: f32) -> f32 {
        match self {
            RangeCodes::Raw => value,
            RangeCodes::Sick => {
                if value.fract() != 0.0 {
                    return value;
                }
                match value as i64 {
                    8191 | 8190 | 8189 | 8187 | 8186 => f32::NAN,
                    8183 => f32::INFINITY,
                    _ => value,
                }
            }
        }
    }
}

/// 一帧完整的激光扫描消息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaserScan {
    pub header: Header,
    pub angle_min: f32,
    pub angle_max: f32,
    pub angle_increment: f32,
    pub time_increment: f32,
    pub scan_time: f32,
    pub range_min: f32,
    pub range_max: f32,
    pub ranges: Vec<f32>,
    pub intensities: Vec<f32>,
}

impl LaserScan {
    /// 由扫描记录构建消息。派生字段每帧都按 `cfg` 重新计算。
    pub fn from_record(cfg: &ScanConfig, record: &ScanRecord, seq: u32) -> LaserScan {
        let n = record.ranges.len();
        let ranges: Vec<f32> = record
            .ranges
            .iter()
            .map(|&r| cfg.range_codes.map(r))
            .collect();

        LaserScan {
            header: Header {
                seq,
                stamp: record.timestamp,
                frame_id: cfg.frame_id.clone(),
            },
            angle_min: cfg.angle_min,
            angle_max: cfg.angle_max,
            angle_increment: cfg.angle_increment(n),
            time_increment: cfg.time_increment(n),
            scan_time: cfg.scan_time as f32,
            range_min: 0.0,
            range_max: cfg.range_max,
            // 日志里没有强度数据
            intensities: vec![0.0; n],
            ranges,
        }
    }
}
