// File: crates/scatter-core/src/error.rs
// Summary: Error taxonomy for render calls.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// The config produces a non-positive drawable region.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// The point sequence is empty or contains a non-finite coordinate.
    #[error("invalid data: {reason}")]
    InvalidData { reason: String },

    /// File output failed (only reachable from the file-writing wrappers).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
