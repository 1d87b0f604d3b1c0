//! Kernel timing: warm-up, repeated trials, min/avg/max aggregation
//!
//! The first invocations of any code path are rarely representative (cold
//! caches, cold branch predictors, frequency scaling), so a configurable
//! number of warm-up runs is discarded before timing starts. Each timed trial
//! zeroes the output buffer, takes a monotonic timestamp pair around a single
//! kernel invocation, and records the elapsed duration.
//!
//! The minimum is the most reproducible signal for a pure-compute kernel
//! since it excludes transient OS and scheduler noise; average and maximum
//! are kept for variance diagnosis.

use std::time::{Duration, Instant};

use crate::buffer::AlignedVec;
use crate::error::{Result, TriadError};
use crate::kernels::Kernel;

/// Aggregated timing for one kernel at one vector size
#[derive(Debug, Clone, Copy)]
pub struct TrialMeasurement {
    /// Best-case duration over all trials
    pub min: Duration,
    /// Arithmetic mean duration
    pub avg: Duration,
    /// Worst-case duration (contention/noise indicator)
    pub max: Duration,
    /// Number of timed trials aggregated
    pub trials: usize,
}

/// Time `kernel` over `trials` invocations after `warmup` discarded runs
///
/// The output buffer is zero-filled before every timed invocation so that a
/// kernel which fails to write every element produces detectably wrong
/// output rather than silently reusing stale data.
///
/// # Errors
///
/// Returns [`TriadError::NoTrials`] if `trials` is zero.
pub fn measure(
    kernel: &Kernel,
    a: &mut AlignedVec,
    b: &[f32],
    c: &[f32],
    d: &[f32],
    trials: usize,
    warmup: usize,
) -> Result<TrialMeasurement> {
    if trials == 0 {
        return Err(TriadError::NoTrials);
    }

    for _ in 0..warmup {
        kernel.run(a.as_mut_slice(), b, c, d);
    }

    let mut min = Duration::MAX;
    let mut max = Duration::ZERO;
    let mut total = Duration::ZERO;

    for _ in 0..trials {
        a.zero();

        let start = Instant::now();
        kernel.run(a.as_mut_slice(), b, c, d);
        let elapsed = start.elapsed();

        total += elapsed;
        min = min.min(elapsed);
        max = max.max(elapsed);
    }

    Ok(TrialMeasurement {
        min,
        avg: total / trials as u32,
        max,
        trials,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{populate_inputs, AlignedVec};
    use crate::kernels::registry;

    fn fixture(n: usize) -> (AlignedVec, AlignedVec, AlignedVec, AlignedVec) {
        let (b, c, d) = populate_inputs(n, 32).unwrap();
        let a = AlignedVec::new(n, 32).unwrap();
        (a, b, c, d)
    }

    #[test]
    fn test_measure_ordering() {
        let (mut a, b, c, d) = fixture(4096);
        let kernels = registry();
        let m = measure(&kernels[0], &mut a, &b, &c, &d, 10, 2).unwrap();
        assert!(m.min <= m.avg);
        assert!(m.avg <= m.max);
        assert_eq!(m.trials, 10);
    }

    #[test]
    fn test_measure_produces_output() {
        let (mut a, b, c, d) = fixture(1003);
        let kernels = registry();
        measure(&kernels[0], &mut a, &b, &c, &d, 3, 1).unwrap();
        // The last timed invocation left real triad output behind.
        for i in 0..1003 {
            assert_eq!(a[i], b[i] + c[i] * d[i]);
        }
    }

    #[test]
    fn test_measure_zero_trials_rejected() {
        let (mut a, b, c, d) = fixture(64);
        let kernels = registry();
        let err = measure(&kernels[0], &mut a, &b, &c, &d, 0, 0).unwrap_err();
        assert!(matches!(err, TriadError::NoTrials));
    }

    #[test]
    fn test_measure_no_warmup_still_valid() {
        let (mut a, b, c, d) = fixture(256);
        let kernels = registry();
        let m = measure(&kernels[0], &mut a, &b, &c, &d, 5, 0).unwrap();
        assert_eq!(m.trials, 5);
        assert!(m.max >= m.min);
    }
}
