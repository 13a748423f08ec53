pub mod source;
pub mod stats;

// Re-export key types for convenience
pub use source::DataSource;
#[allow(unused_imports)]
pub use stats::Stats;
