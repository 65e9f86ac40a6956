//! 位姿变换消息
//!
//! odom -> base_link 的平面变换，旋转由 heading 生成四元数。

use serde::Serialize;

use super::Header;
use crate::carmen::Pose2D;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    /// 绕 z 轴旋转 yaw（弧度）
    pub fn from_yaw(yaw: f64) -> Quaternion {
        let half = yaw * 0.5;
        Quaternion {
            x: 0.0,
            y: 0.0,
            z: half.sin(),
            w: half.cos(),
        }
    }

    pub fn yaw(&self) -> f64 {
        2.0 * self.z.atan2(self.w)
    }
}

/// 父子坐标系名称（已按前缀解析）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameNames {
    pub parent: String,
    pub child: String,
}

impl FrameNames {
    pub const ODOM: &'static str = "odom";
    pub const BASE_LINK: &'static str = "base_link";

    pub fn with_prefix(prefix: &str) -> FrameNames {
        FrameNames {
            parent: resolve_frame(prefix, Self::ODOM),
            child: resolve_frame(prefix, Self::BASE_LINK),
        }
    }
}

impl Default for FrameNames {
    fn default() -> Self {
        FrameNames::with_prefix("")
    }
}

/// 解析坐标系名：以 `/` 开头视为绝对名；否则拼接 `prefix/frame`。
pub fn resolve_frame(prefix: &str, frame: &str) -> String {
    if let Some(absolute) = frame.strip_prefix('/') {
        return absolute.to_string();
    }
    let prefix = prefix.trim_start_matches('/').trim_end_matches('/');
    if prefix.is_empty() {
        frame.to_string()
    } else {
        format!("{prefix}/{frame}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformStamped {
    pub header: Header,
    pub child_frame_id: String,
    pub translation: Vector3,
    pub rotation: Quaternion,
}

impl TransformStamped {
    pub fn from_pose(frames: &FrameNames, pose: &Pose2D, stamp: f64) -> TransformStamped {
        TransformStamped {
            header: Header {
                seq: 0,
                stamp,
                frame_id: frames.parent.clone(),
            },
            child_frame_id: frames.child.clone(),
            translation: Vector3 {
                x: pose.x,
                y: pose.y,
                z: 0.0,
            },
            rotation: Quaternion::from_yaw(pose.heading),
        }
    }
}
