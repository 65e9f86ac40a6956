//! 分词器
//!
//! 按文件顺序惰性地产出以空白分隔的 token。只向前读，不可回退。
//! 按字节切分，分隔符只认 ASCII 空白；非 UTF-8 字节按替换字符解码，不会中断读取。

use std::io::BufRead;

/// 一个 token 及其所在行号（从 1 开始）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub line: usize,
}

/// 空白分隔的 token 流。
///
/// 内部只保留当前行；已经读过的 token 不会缓存，调用方不能回退。
pub struct Tokenizer<R> {
    reader: R,
    line_buf: Vec<u8>,
    pos: usize,
    line_no: usize,
    drained: bool,
}

// C `isspace`: 空格 \t \n \v \f \r
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buf: Vec::new(),
            pos: 0,
            line_no: 0,
            drained: false,
        }
    }

    /// 当前读到的行号（尚未读任何行时为 0）
    pub fn line(&self) -> usize {
        self.line_no
    }

    /// 读取下一个 token；流结束返回 `Ok(None)`，之后一直返回 `Ok(None)`。
    pub fn next_token(&mut self) -> std::io::Result<Option<Token>> {
        loop {
            if self.drained {
                return Ok(None);
            }

            let rest = &self.line_buf[self.pos..];
            if let Some(start) = rest.iter().position(|&b| !is_space(b)) {
                let tail = &rest[start..];
                let len = tail.iter().position(|&b| is_space(b)).unwrap_or(tail.len());
                let text = String::from_utf8_lossy(&tail[..len]).into_owned();
                self.pos += start + len;
                return Ok(Some(Token {
                    text,
                    line: self.line_no,
                }));
            }

            self.line_buf.clear();
            self.pos = 0;
            if self.reader.read_until(b'\n', &mut self.line_buf)? == 0 {
                self.drained = true;
                continue;
            }
            self.line_no += 1;
        }
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = std::io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
