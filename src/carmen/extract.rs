//! 记录分类与字段抽取
//!
//! 读入一个关键字 token，按记录类型从 token 流中取出固定个数的字段。

use std::io::BufRead;

use tracing::trace;

use super::numeric::{coerce_f64, coerce_i32};
use super::record::{
    Extracted, FlaserFields, ODOM_IGNORED_FIELDS, OdomFields, Pose2D, RecordKind, SCAN_RESOLUTION,
};
use super::tokenizer::{Token, Tokenizer};
use crate::error::{ReplayError, Result};

/// 给定已读出的关键字，抽取该记录的全部字段。
///
/// 不认识的关键字返回 `Extracted::Skip`，且不再消费任何 token。
pub fn extract<R: BufRead>(keyword: &Token, tokens: &mut Tokenizer<R>) -> Result<Extracted> {
    match RecordKind::classify(&keyword.text) {
        RecordKind::Odom => extract_odom(keyword.line, tokens).map(Extracted::Odom),
        RecordKind::Flaser => extract_flaser(keyword.line, tokens).map(Extracted::Flaser),
        RecordKind::Skip(keyword_text) => {
            trace!(keyword = %keyword_text, line = keyword.line, "跳过未知关键字");
            Ok(Extracted::Skip {
                keyword: keyword_text,
                line: keyword.line,
            })
        }
    }
}

/// 按记录读取字段，记住已读个数以便报错。
struct FieldReader<'a, R> {
    tokens: &'a mut Tokenizer<R>,
    keyword: &'static str,
    line: usize,
    expected: usize,
    read: usize,
}

impl<'a, R: BufRead> FieldReader<'a, R> {
    fn new(tokens: &'a mut Tokenizer<R>, keyword: &'static str, line: usize, expected: usize) -> Self {
        Self {
            tokens,
            keyword,
            line,
            expected,
            read: 0,
        }
    }

    fn next_raw(&mut self, field: &str) -> Result<Token> {
        match self.tokens.next_token()? {
            Some(tok) => {
                self.read += 1;
                Ok(tok)
            }
            None => Err(ReplayError::malformed(
                self.keyword,
                self.line,
                format!(
                    "stream ended before field `{field}` ({} of {} fields read)",
                    self.read, self.expected
                ),
            )),
        }
    }

    fn next_f64(&mut self, field: &str) -> Result<f64> {
        self.next_raw(field).map(|t| coerce_f64(&t.text))
    }
}

fn extract_odom<R: BufRead>(line: usize, tokens: &mut Tokenizer<R>) -> Result<OdomFields> {
    let expected = 3 + ODOM_IGNORED_FIELDS + 1;
    let mut fields = FieldReader::new(tokens, RecordKind::ODOM, line, expected);

    let x = fields.next_f64("x")?;
    let y = fields.next_f64("y")?;
    let heading = fields.next_f64("heading")?;
    for _ in 0..ODOM_IGNORED_FIELDS {
        fields.next_raw("velocity")?;
    }
    let timestamp = fields.next_f64("timestamp")?;

    Ok(OdomFields {
        pose: Pose2D { x, y, heading },
        timestamp,
        line,
    })
}

fn extract_flaser<R: BufRead>(line: usize, tokens: &mut Tokenizer<R>) -> Result<FlaserFields> {
    let expected = 1 + SCAN_RESOLUTION + 3;
    let mut fields = FieldReader::new(tokens, RecordKind::FLASER, line, expected);

    let declared_count = coerce_i32(&fields.next_raw("num_readings")?.text);

    // 固定读取 SCAN_RESOLUTION 个距离值，与 declared_count 无关
    let mut ranges = Vec::with_capacity(SCAN_RESOLUTION);
    for _ in 0..SCAN_RESOLUTION {
        ranges.push(fields.next_f64("range")? as f32);
    }

    let x = fields.next_f64("x")?;
    let y = fields.next_f64("y")?;
    let heading = fields.next_f64("heading")?;

    if declared_count != SCAN_RESOLUTION as i32 {
        trace!(declared_count, line, "声明的采样数与固定分辨率不一致，忽略");
    }

    Ok(FlaserFields {
        declared_count,
        ranges,
        pose: Pose2D { x, y, heading },
        line,
    })
}
