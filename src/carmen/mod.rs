//! CARMEN 日志解析模块
//!
//! 分词、记录分类与字段抽取、记录构建。只处理 `ODOM` 和 `FLASER` 两种记录，
//! 其余关键字一律跳过。

// 子模块声明
mod builder;
mod extract;
mod numeric;
mod record;
mod tokenizer;

// 重新导出公共接口
pub use builder::build;
pub use extract::extract;
pub use numeric::{coerce_f64, coerce_i32};
pub use record::{
    Extracted, FlaserFields, LogRecord, ODOM_IGNORED_FIELDS, OdomFields, Pose2D, RecordKind,
    SCAN_RESOLUTION, ScanRecord,
};
pub use tokenizer::{Token, Tokenizer};
