//! 发布 sink
//!
//! 回放核心只通过 `PublishSink` 和 `Diagnostics` 两个窄接口与下游交互。
//! 这里提供 JSON-lines 输出、丢弃型 sink 以及基于滑动窗口的频率/延迟诊断。

mod diagnostics;
mod json_lines;

use crate::error::PublishError;
use crate::msg::{LaserScan, TransformStamped};

pub use diagnostics::{DiagnosticLevel, DiagnosticStatus, WindowedDiagnostics};
pub use json_lines::{JsonLinesSink, Published};

/// 下游发布接口：每条构建好的记录调用一次，同步返回。
pub trait PublishSink {
    fn publish_scan(&mut self, scan: &LaserScan) -> Result<(), PublishError>;
    fn send_transform(&mut self, tf: &TransformStamped) -> Result<(), PublishError>;
}

/// 诊断接口：每发布一帧扫描后调用一次 `tick`。
pub trait Diagnostics {
    /// `stamp` 为刚发布的扫描时间戳（秒）
    fn tick(&mut self, stamp: f64);
}

/// 丢弃所有消息
#[derive(Debug, Default)]
pub struct NullSink;

impl PublishSink for NullSink {
    fn publish_scan(&mut self, _scan: &LaserScan) -> Result<(), PublishError> {
        Ok(())
    }

    fn send_transform(&mut self, _tf: &TransformStamped) -> Result<(), PublishError> {
        Ok(())
    }
}

/// 不做诊断
impl Diagnostics for () {
    fn tick(&mut self, _stamp: f64) {}
}
