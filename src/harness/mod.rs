//! Benchmarking and verification harness
//!
//! - [`verify`]: element-wise correctness comparison against the reference
//! - [`measure`]: warm-up plus repeated timed trials, min/avg/max
//! - [`report`]: throughput derivation and table output
//! - [`driver`]: the three-phase run over the kernel registry

pub mod driver;
pub mod measure;
pub mod report;
pub mod verify;

pub use driver::{Driver, RunSummary};
pub use measure::{measure, TrialMeasurement};
pub use report::{throughput, Throughput};
pub use verify::{verify, Mismatch, VerificationOutcome};
