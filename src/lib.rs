//! triadbench: vector triad benchmark and verification harness
//!
//! # Overview
//!
//! triadbench measures and cross-validates multiple implementations of the
//! classic memory-bandwidth-bound kernel `A[i] = B[i] + C[i] * D[i]` across
//! scalar and SIMD code paths.
//!
//! ## Key Features
//!
//! - **Kernel registry**: scalar reference plus unrolled and SIMD variants
//!   (NEON on aarch64, SSE2/AVX on x86_64), selected for the running CPU
//! - **Bit-tolerant verification**: every kernel checked element-wise against
//!   the scalar reference under an absolute tolerance, at boundary sizes that
//!   stress SIMD remainder handling
//! - **Stable timing**: warm-up runs discarded, then min/avg/max over
//!   repeated trials (N=30 by default)
//! - **Aligned buffers**: inputs and outputs on 32-byte boundaries for
//!   wide-register loads and stores
//!
//! ## Quick Start
//!
//! ```
//! use triadbench::{Driver, HarnessConfig};
//!
//! # fn main() -> triadbench::Result<()> {
//! let config = HarnessConfig::new()
//!     .with_trials(3)
//!     .with_warmup(1)
//!     .with_boundary_sizes(vec![1, 33])
//!     .with_performance_sizes(vec![256]);
//!
//! let kernels = triadbench::kernels::registry();
//! let summary = Driver::new(&config, &kernels).run()?;
//! assert_eq!(summary.failures, 0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`buffer`]: aligned vector allocation and deterministic input patterns
//! - [`kernels`]: the triad implementations and the kernel registry
//! - [`harness`]: verification, timing, reporting, and the phase driver
//! - [`config`]: explicit harness parameters (no hidden globals)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod harness;
pub mod kernels;

// Re-export commonly used types
pub use buffer::AlignedVec;
pub use config::HarnessConfig;
pub use error::{Result, TriadError};
pub use harness::{Driver, RunSummary, TrialMeasurement, VerificationOutcome};
pub use kernels::{Kernel, KernelFn};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
