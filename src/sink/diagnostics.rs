//! 扫描发布诊断
//!
//! 滑动窗口统计发布频率，并检查时间戳延迟是否在允许范围内。
//! 状态变化时通过 tracing 输出。

use std::collections::VecDeque;

use tracing::{debug, warn};

use super::Diagnostics;
use crate::config::DiagnosticsConfig;
use crate::replay::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    Ok,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticStatus {
    pub level: DiagnosticLevel,
    pub message: String,
    /// 窗口内的发布频率（Hz），样本不足时为 None
    pub frequency: Option<f64>,
    /// 最近一次的时间戳延迟（秒）
    pub last_delay: Option<f64>,
}

pub struct WindowedDiagnostics {
    cfg: DiagnosticsConfig,
    clock: Box<dyn Clock>,
    arrivals: VecDeque<f64>,
    last_delay: Option<f64>,
    last_level: DiagnosticLevel,
    ticks: u64,
}

impl WindowedDiagnostics {
    pub fn new(cfg: DiagnosticsConfig, clock: Box<dyn Clock>) -> Self {
        let window = cfg.window_size.max(2);
        Self {
            cfg,
            clock,
            arrivals: VecDeque::with_capacity(window),
            last_delay: None,
            last_level: DiagnosticLevel::Ok,
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// 当前窗口的发布频率
    pub fn frequency(&self) -> Option<f64> {
        let (first, last) = (self.arrivals.front()?, self.arrivals.back()?);
        let span = last - first;
        if self.arrivals.len() < 2 || span <= 0.0 {
            return None;
        }
        Some((self.arrivals.len() - 1) as f64 / span)
    }

    pub fn status(&self) -> DiagnosticStatus {
        let frequency = self.frequency();
        let mut level = DiagnosticLevel::Ok;
        let mut message = String::from("ok");

        if let Some(freq) = frequency {
            let lo = self.cfg.min_frequency() * (1.0 - self.cfg.frequency_tolerance);
            let hi = self.cfg.max_frequency() * (1.0 + self.cfg.frequency_tolerance);
            if freq < lo {
                level = DiagnosticLevel::Warn;
                message = format!("frequency too low ({freq:.2} Hz < {lo:.2} Hz)");
            } else if freq > hi {
                level = DiagnosticLevel::Warn;
                message = format!("frequency too high ({freq:.2} Hz > {hi:.2} Hz)");
            }
        }

        if let Some(delay) = self.last_delay {
            if delay < self.cfg.min_acceptable_delay {
                level = DiagnosticLevel::Error;
                message = format!("timestamps too far in future ({delay:.3} s)");
            } else if delay > self.cfg.max_acceptable_delay {
                level = DiagnosticLevel::Error;
                message = format!("timestamps too far in past ({delay:.3} s)");
            }
        }

        DiagnosticStatus {
            level,
            message,
            frequency,
            last_delay: self.last_delay,
        }
    }
}

impl Diagnostics for WindowedDiagnostics {
    fn tick(&mut self, stamp: f64) {
        let now = self.clock.now();
        self.ticks += 1;

        if self.arrivals.len() == self.cfg.window_size.max(2) {
            self.arrivals.pop_front();
        }
        self.arrivals.push_back(now);
        self.last_delay = Some(now - (stamp + self.cfg.time_offset));

        let status = self.status();
        if status.level != self.last_level && status.level != DiagnosticLevel::Ok {
            warn!(
                hardware_id = %self.cfg.hardware_id,
                level = ?status.level,
                frequency = ?status.frequency,
                "scan 诊断: {}",
                status.message
            );
        } else {
            debug!(
                hardware_id = %self.cfg.hardware_id,
                ticks = self.ticks,
                frequency = ?status.frequency,
                delay = ?status.last_delay,
                "scan 诊断"
            );
        }
        self.last_level = status.level;
    }
}
