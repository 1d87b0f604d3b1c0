//! Error types for triadbench

use thiserror::Error;

/// Result type alias for triadbench operations
pub type Result<T> = std::result::Result<T, TriadError>;

/// Error types that can occur in triadbench
#[derive(Debug, Error)]
pub enum TriadError {
    /// Aligned buffer allocation failed
    ///
    /// Fatal for the harness: without its buffers no meaningful measurement
    /// is possible, so the driver propagates this to a non-zero process exit.
    #[error("failed to allocate {bytes} bytes aligned to {alignment}")]
    AllocationFailed {
        /// Requested size in bytes
        bytes: usize,
        /// Requested alignment in bytes
        alignment: usize,
    },

    /// Alignment is not a power of two, or the size overflows the allocator
    #[error("invalid layout: {bytes} bytes aligned to {alignment}")]
    InvalidLayout {
        /// Requested size in bytes
        bytes: usize,
        /// Requested alignment in bytes
        alignment: usize,
    },

    /// Buffers passed to verification have different lengths
    #[error("length mismatch: reference has {reference} elements, test has {test}")]
    LengthMismatch {
        /// Reference buffer length
        reference: usize,
        /// Test buffer length
        test: usize,
    },

    /// A measured average duration of zero
    ///
    /// Throughput would divide by it, so it is reported as a measurement
    /// error rather than an infinite rate.
    #[error("measured zero average duration for kernel '{kernel}' at n={n}")]
    ZeroDuration {
        /// Kernel that produced the measurement
        kernel: String,
        /// Vector length measured
        n: usize,
    },

    /// Benchmark requested with zero trials
    #[error("trial count must be at least 1")]
    NoTrials,
}
