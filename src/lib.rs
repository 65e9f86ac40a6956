pub mod carmen;
pub mod config;
pub mod error;
pub mod msg;
pub mod replay;
pub mod sink;

pub use error::{PublishError, ReplayError, Result};

#[cfg(test)]
mod test;
