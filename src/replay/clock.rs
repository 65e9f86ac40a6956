//! 时钟与休眠
//!
//! 回放的墙钟时间和阻塞休眠都通过 trait 注入，测试里可以替换成假的实现。

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// 墙钟（秒）
pub trait Clock {
    fn now(&self) -> f64;
}

/// 系统时钟：UNIX 纪元以来的秒数
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// 阻塞休眠，没有中途取消
pub trait Sleeper {
    fn sleep(&mut self, d: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, d: Duration) {
        if !d.is_zero() {
            std::thread::sleep(d);
        }
    }
}
