//! 错误类型
//!
//! 回放过程中的致命错误。流结束（StreamExhausted）不是错误，用 `Ok(None)` 表示。

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 回放错误
#[derive(Debug, Error)]
pub enum ReplayError {
    /// 记录不满足其类型的字段数量约定（整个回放中止）
    #[error("malformed {keyword} record at line {line}: {reason}")]
    MalformedRecord {
        keyword: &'static str,
        line: usize,
        reason: String,
    },

    /// 读取日志失败
    #[error("failed to read log: {0}")]
    Io(#[from] io::Error),

    /// 下游 sink 拒绝了消息
    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),

    /// 配置文件无法读取或解析
    #[error("invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl ReplayError {
    pub(crate) fn malformed(keyword: &'static str, line: usize, reason: impl Into<String>) -> Self {
        ReplayError::MalformedRecord {
            keyword,
            line,
            reason: reason.into(),
        }
    }
}

/// sink 发布错误
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("i/o: {0}")]
    Io(#[from] io::Error),
    #[error("encode: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReplayError>;
