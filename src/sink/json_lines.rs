//! JSON-lines sink
//!
//! 每条消息一行 JSON，用 `topic` 字段区分扫描和变换。

use serde::Serialize;
use std::io::Write;

use super::PublishSink;
use crate::error::PublishError;
use crate::msg::{LaserScan, TransformStamped};

/// 一行输出
#[derive(Debug, Serialize)]
#[serde(tag = "topic", rename_all = "snake_case")]
pub enum Published<'a> {
    Scan(&'a LaserScan),
    Tf(&'a TransformStamped),
}

#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
    lines: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// 已写出的行数
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, msg: &Published<'_>) -> Result<(), PublishError> {
        serde_json::to_writer(&mut self.out, msg)?;
        self.out.write_all(b"\n")?;
        // sink 是同步的：返回前必须交给下游
        self.out.flush()?;
        self.lines += 1;
        Ok(())
    }
}

impl<W: Write> PublishSink for JsonLinesSink<W> {
    fn publish_scan(&mut self, scan: &LaserScan) -> Result<(), PublishError> {
        self.write_line(&Published::Scan(scan))
    }

    fn send_transform(&mut self, tf: &TransformStamped) -> Result<(), PublishError> {
        self.write_line(&Published::Tf(tf))
    }
}
