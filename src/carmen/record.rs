//! 日志记录类型
//!
//! 定义记录关键字、抽取出的中间字段以及最终的 `LogRecord`。

/// 激光扫描固定分辨率（每帧距离值个数）
pub const SCAN_RESOLUTION: usize = 360;

/// `ODOM` 中位姿之后被读取但不使用的字段数（tv / rv / accel）
pub const ODOM_IGNORED_FIELDS: usize = 3;

/// 记录类型：由行首关键字决定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    Odom,
    Flaser,
    /// 不认识的关键字，静默跳过
    Skip(String),
}

impl RecordKind {
    pub const ODOM: &'static str = "ODOM";
    pub const FLASER: &'static str = "FLASER";

    pub fn classify(keyword: &str) -> RecordKind {
        match keyword {
            Self::ODOM => RecordKind::Odom,
            Self::FLASER => RecordKind::Flaser,
            other => RecordKind::Skip(other.to_string()),
        }
    }

    pub fn keyword(&self) -> &str {
        match self {
            RecordKind::Odom => Self::ODOM,
            RecordKind::Flaser => Self::FLASER,
            RecordKind::Skip(k) => k,
        }
    }
}

/// 平面位姿（heading 为弧度，不做归一化）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

/// `ODOM` 行抽取出的字段
#[derive(Debug, Clone, PartialEq)]
pub struct OdomFields {
    pub pose: Pose2D,
    pub timestamp: f64,
    pub line: usize,
}

/// `FLASER` 行抽取出的字段
#[derive(Debug, Clone, PartialEq)]
pub struct FlaserFields {
    /// 行内声明的采样数；只读取，不用于控制读取长度
    pub declared_count: i32,
    pub ranges: Vec<f32>,
    /// 扫描时刻的位姿（不单独发布）
    pub pose: Pose2D,
    pub line: usize,
}

/// 分类并抽取之后的中间记录
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    Odom(OdomFields),
    Flaser(FlaserFields),
    Skip { keyword: String, line: usize },
}

/// 一帧激光扫描记录
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRecord {
    pub ranges: Vec<f32>,
    pub count: u32,
    pub declared_count: i32,
    pub pose: Pose2D,
    pub timestamp: f64,
}

/// 回放的最小单元：里程计或激光扫描，构造后类型不变
#[derive(Debug, Clone, PartialEq)]
pub enum LogRecord {
    Odom { pose: Pose2D, timestamp: f64 },
    Scan(ScanRecord),
}

impl LogRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            LogRecord::Odom { .. } => RecordKind::Odom,
            LogRecord::Scan(_) => RecordKind::Flaser,
        }
    }
}
