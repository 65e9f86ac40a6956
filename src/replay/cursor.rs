//! 回放游标
//!
//! token 流中的当前位置加上扫描序号。只由 `Scheduler` 持有和修改。

use std::io::BufRead;

use crate::carmen::{Token, Tokenizer};

pub struct ReplayCursor<R> {
    tokens: Tokenizer<R>,
    scan_sequence_id: u32,
}

impl<R: BufRead> ReplayCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            tokens: Tokenizer::new(reader),
            scan_sequence_id: 0,
        }
    }

    /// 下一个关键字候选；流结束返回 `Ok(None)`
    pub fn next_keyword(&mut self) -> std::io::Result<Option<Token>> {
        self.tokens.next_token()
    }

    pub fn tokens_mut(&mut self) -> &mut Tokenizer<R> {
        &mut self.tokens
    }

    /// 已发布的最后一帧扫描序号（尚未发布时为 0）
    pub fn scan_sequence_id(&self) -> u32 {
        self.scan_sequence_id
    }

    /// 为新构建的扫描分配序号
    pub(crate) fn advance_scan_id(&mut self) -> u32 {
        self.scan_sequence_id = self.scan_sequence_id.wrapping_add(1);
        self.scan_sequence_id
    }

    pub fn line(&self) -> usize {
        self.tokens.line()
    }
}
