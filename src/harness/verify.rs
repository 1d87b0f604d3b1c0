//! Element-wise verification of kernel output against the scalar reference
//!
//! Comparison is by absolute difference under a configurable tolerance. The
//! outcome always carries the global maximum difference, even when it is
//! below tolerance, so near-misses are visible in reports. Individual
//! mismatches are recorded up to a cap to keep output bounded when a kernel
//! is systematically broken.

use crate::error::{Result, TriadError};

/// One mismatching element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    /// Element index
    pub index: usize,
    /// Reference value at the index
    pub reference: f32,
    /// Kernel-under-test value at the index
    pub actual: f32,
    /// Absolute difference
    pub diff: f32,
}

/// Result of comparing one kernel output against the reference
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    /// True iff no element exceeded the tolerance
    pub passed: bool,
    /// Largest absolute difference over all elements, even if below tolerance
    pub max_diff: f32,
    /// Total number of elements exceeding the tolerance
    pub mismatches: usize,
    /// The first few mismatches, capped for diagnosability without flooding
    pub samples: Vec<Mismatch>,
}

/// Compare `test` against `reference` element-wise
///
/// A difference strictly greater than `tolerance` counts as a mismatch; at
/// most `sample_cap` mismatches are recorded individually. PASS iff the
/// mismatch count is zero.
///
/// # Errors
///
/// Returns [`TriadError::LengthMismatch`] if the slices differ in length.
pub fn verify(
    reference: &[f32],
    test: &[f32],
    tolerance: f32,
    sample_cap: usize,
) -> Result<VerificationOutcome> {
    if reference.len() != test.len() {
        return Err(TriadError::LengthMismatch {
            reference: reference.len(),
            test: test.len(),
        });
    }

    let mut max_diff = 0.0f32;
    let mut mismatches = 0usize;
    let mut samples = Vec::new();

    for (index, (&expected, &actual)) in reference.iter().zip(test.iter()).enumerate() {
        let diff = (expected - actual).abs();
        if diff > tolerance {
            if samples.len() < sample_cap {
                samples.push(Mismatch {
                    index,
                    reference: expected,
                    actual,
                    diff,
                });
            }
            mismatches += 1;
        }
        if diff > max_diff {
            max_diff = diff;
        }
    }

    Ok(VerificationOutcome {
        passed: mismatches == 0,
        max_diff,
        mismatches,
        samples,
    })
}

impl VerificationOutcome {
    /// Print the outcome in the report format
    pub fn print(&self, kernel_name: &str) {
        for m in &self.samples {
            println!(
                "Error at index {}: reference={:.6}, {}={:.6}, diff={:.6}",
                m.index, m.reference, kernel_name, m.actual, m.diff
            );
        }
        if self.passed {
            println!(
                "VERIFICATION PASSED for {} (max difference: {:.6e})",
                kernel_name, self.max_diff
            );
        } else {
            println!(
                "VERIFICATION FAILED for {}: {} errors found, max difference: {:.6e}",
                kernel_name, self.mismatches, self.max_diff
            );
        }
    }
}
