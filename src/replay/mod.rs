//! 回放模块
//!
//! 单线程顺序回放：调度器持有游标和扫描序号，按节奏把记录交给 sink。

// 子模块声明
mod clock;
mod cursor;
mod pacing;
mod scheduler;

// 重新导出公共接口
pub use clock::{Clock, Sleeper, SystemClock, ThreadSleeper};
pub use cursor::ReplayCursor;
pub use pacing::{ODOM_INTERVAL_DIVISOR, Pacer};
pub use scheduler::{Emitted, ReplayState, ReplayStats, Scheduler};
