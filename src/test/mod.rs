mod config;
mod pacing;
mod sink;

use crate::error::PublishError;
use crate::msg::{LaserScan, TransformStamped};
use crate::replay::{Clock, Sleeper};
use crate::sink::PublishSink;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// 生成一行 FLASER：`FLASER <declared> <ranges...> <x> <y> <heading>`
pub(crate) fn flaser_line(declared: i32, ranges: &[f32], pose: (f64, f64, f64)) -> String {
    let mut line = format!("FLASER {declared}");
    for r in ranges {
        line.push_str(&format!(" {r}"));
    }
    line.push_str(&format!(" {} {} {}", pose.0, pose.1, pose.2));
    line
}

pub(crate) fn ramp(n: usize) -> Vec<f32> {
    (0..n).map(|i| i as f32 * 0.01).collect()
}

#[derive(Clone, Default)]
pub(crate) struct FixedClock {
    pub(crate) now: Rc<Cell<f64>>,
}

impl FixedClock {
    pub(crate) fn at(t: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(t)),
        }
    }

    pub(crate) fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingSleeper {
    pub(crate) waits: Rc<RefCell<Vec<Duration>>>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, d: Duration) {
        self.waits.borrow_mut().push(d);
    }
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) scans: Vec<LaserScan>,
    pub(crate) transforms: Vec<TransformStamped>,
    /// 发布顺序：'s' 扫描，'t' 变换
    pub(crate) order: Vec<char>,
}

impl PublishSink for RecordingSink {
    fn publish_scan(&mut self, scan: &LaserScan) -> Result<(), PublishError> {
        self.scans.push(scan.clone());
        self.order.push('s');
        Ok(())
    }

    fn send_transform(&mut self, tf: &TransformStamped) -> Result<(), PublishError> {
        self.transforms.push(tf.clone());
        self.order.push('t');
        Ok(())
    }
}
