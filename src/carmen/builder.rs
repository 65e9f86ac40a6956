//! 记录构建
//!
//! 把抽取出的字段转换为类型化的 `LogRecord`。

use super::record::{Extracted, LogRecord, RecordKind, SCAN_RESOLUTION, ScanRecord};
use crate::error::{ReplayError, Result};

/// 构建记录。`Skip` 返回 `Ok(None)`。
///
/// `scan_stamp` 是扫描的发布时间戳：日志里扫描没有被消费的时间字段，
/// 所以扫描时间取自回放时钟；里程计使用日志中的时间戳。
pub fn build(fields: Extracted, scan_stamp: f64) -> Result<Option<LogRecord>> {
    match fields {
        Extracted::Odom(odom) => Ok(Some(LogRecord::Odom {
            pose: odom.pose,
            timestamp: odom.timestamp,
        })),
        Extracted::Flaser(flaser) => {
            if flaser.ranges.len() != SCAN_RESOLUTION {
                return Err(ReplayError::malformed(
                    RecordKind::FLASER,
                    flaser.line,
                    format!(
                        "scan has {} ranges, expected {SCAN_RESOLUTION}",
                        flaser.ranges.len()
                    ),
                ));
            }
            Ok(Some(LogRecord::Scan(ScanRecord {
                count: SCAN_RESOLUTION as u32,
                ranges: flaser.ranges,
                declared_count: flaser.declared_count,
                pose: flaser.pose,
                timestamp: scan_stamp,
            })))
        }
        Extracted::Skip { .. } => Ok(None),
    }
}
