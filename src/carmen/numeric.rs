//! 宽松数值转换
//!
//! 与 C 的 `atof`/`atoi` 行为一致：取最长的合法数值前缀，完全不合法时返回 0。
//! 这会把损坏的数据静默变成 0，日志格式一直如此，保持兼容。

/// `atof` 语义：最长合法浮点前缀，否则 0.0
pub fn coerce_f64(token: &str) -> f64 {
    if let Ok(v) = token.parse::<f64>() {
        return v;
    }
    longest_prefix(token, |s| s.parse::<f64>().ok()).unwrap_or(0.0)
}

/// `atoi` 语义：最长合法整数前缀（允许符号），否则 0
pub fn coerce_i32(token: &str) -> i32 {
    if let Ok(v) = token.parse::<i32>() {
        return v;
    }
    longest_prefix(token, |s| s.parse::<i64>().ok())
        .map(|v| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
        .unwrap_or(0)
}

fn longest_prefix<T>(token: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    (1..token.len())
        .rev()
        .filter(|&end| token.is_char_boundary(end))
        .find_map(|end| parse(&token[..end]))
}
