//! Command implementations

pub mod bench;
pub mod simple;
pub mod vault;

pub use bench::{BenchmarkResult, run_benchmark};
pub use simple::run_simple;
pub use vault::run_vault;
