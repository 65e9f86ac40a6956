//! 发布消息
//!
//! sink 接收的消息结构：激光扫描和位姿变换。

mod scan;
mod transform;

use serde::Serialize;

pub use scan::{LaserScan, RangeCodes, ScanConfig};
pub use transform::{FrameNames, Quaternion, TransformStamped, Vector3, resolve_frame};

/// 消息头
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    /// 扫描序号；变换消息恒为 0
    pub seq: u32,
    /// 时间戳（秒）
    pub stamp: f64,
    pub frame_id: String,
}
