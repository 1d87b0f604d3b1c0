//! Throughput derivation and tabular report output
//!
//! The triad performs exactly one multiply and one add per element (2 FLOPs)
//! and moves four vectors of f32 per invocation (three read, one written,
//! no reuse credit). Throughput figures are descriptive only; no pass/fail
//! judgment attaches to them.

use crate::error::{Result, TriadError};
use crate::harness::measure::TrialMeasurement;

/// Floating-point operations per element: one multiply, one add
const FLOPS_PER_ELEMENT: u64 = 2;

/// Bytes moved per element: read B, C, D and write A, each 4 bytes
const BYTES_PER_ELEMENT: u64 = 4 * std::mem::size_of::<f32>() as u64;

/// Derived throughput for one measurement
#[derive(Debug, Clone, Copy)]
pub struct Throughput {
    /// Billions of floating-point operations per second
    pub gflops: f64,
    /// Billions of bytes per second
    pub gbytes_per_sec: f64,
}

/// Derive throughput from a measurement at vector length `n`
///
/// # Errors
///
/// Returns [`TriadError::ZeroDuration`] if the average duration is zero; an
/// infinite rate would be a measurement artifact, not a result.
pub fn throughput(kernel_name: &str, n: usize, m: &TrialMeasurement) -> Result<Throughput> {
    let avg_secs = m.avg.as_secs_f64();
    if avg_secs == 0.0 {
        return Err(TriadError::ZeroDuration {
            kernel: kernel_name.to_string(),
            n,
        });
    }

    let total_flops = n as u64 * FLOPS_PER_ELEMENT;
    let total_bytes = n as u64 * BYTES_PER_ELEMENT;

    Ok(Throughput {
        gflops: total_flops as f64 / avg_secs / 1e9,
        gbytes_per_sec: total_bytes as f64 / avg_secs / 1e9,
    })
}

/// Width of the table's separator line
const TABLE_WIDTH: usize = 80;

/// Print the performance table header
pub fn print_header() {
    println!(
        "{:<20} | {:>8} | {:>8} | {:>8} | {:>8} | {:>8} | {:>8}",
        "Kernel", "Size", "Min(ms)", "Avg(ms)", "Max(ms)", "GFLOPS", "GB/s"
    );
    print_separator();
}

/// Print the table separator line
pub fn print_separator() {
    println!("{}", "-".repeat(TABLE_WIDTH));
}

/// Print one performance row
pub fn print_row(kernel_name: &str, n: usize, m: &TrialMeasurement, t: &Throughput) {
    println!(
        "{:<20} | {:>8} | {:>8.3} | {:>8.3} | {:>8.3} | {:>8.2} | {:>8.2}",
        kernel_name,
        n,
        m.min.as_secs_f64() * 1e3,
        m.avg.as_secs_f64() * 1e3,
        m.max.as_secs_f64() * 1e3,
        t.gflops,
        t.gbytes_per_sec
    );
}
