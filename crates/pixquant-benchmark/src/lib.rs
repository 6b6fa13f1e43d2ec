#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the benchmark harness.
pub mod error;

/// Sources producing a fresh image for every timed run.
pub mod source;

/// Per-strategy accumulated timings.
pub mod timings;

/// The benchmark loop and its report.
pub mod harness;

pub use crate::error::BenchmarkError;
pub use crate::harness::{
    run_benchmark, time_into, time_once, BenchmarkConfig, BenchmarkEntry, BenchmarkReport,
};
pub use crate::source::{FileSource, ImageSource, MemorySource};
pub use crate::timings::StrategyTimings;
