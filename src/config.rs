//! Harness configuration
//!
//! Every knob the harness exposes lives in [`HarnessConfig`] and is passed in
//! explicitly at startup. There are no hidden globals: the tolerance, trial
//! count, and size lists are parameters precisely so the harness can be
//! exercised under test with small, fast settings.

/// Byte alignment for vector buffers (256-bit loads need 32)
pub const DEFAULT_ALIGNMENT: usize = 32;

/// Absolute tolerance for cross-kernel comparison
///
/// Appropriate for single-precision arithmetic with one multiply and one add
/// per element. A longer reduction chain would need a re-derived tolerance;
/// that is why this is a config field and not a constant baked into the
/// verifier.
pub const DEFAULT_TOLERANCE: f32 = 1e-6;

/// Timed invocations per kernel per size
pub const DEFAULT_TRIALS: usize = 30;

/// Discarded invocations before timing starts
pub const DEFAULT_WARMUP: usize = 5;

/// Sizes that stress remainder handling in fixed-width SIMD kernels
///
/// None of these divide evenly by common vector widths (4, 8), and 1003 is a
/// deliberately non-power-of-two size from the same family.
pub const BOUNDARY_SIZES: &[usize] = &[1, 3, 5, 7, 15, 17, 31, 33, 1003];

/// Sizes for the performance sweep, 2^10 through 2^22
pub const PERFORMANCE_SIZES: &[usize] = &[
    1 << 10,
    1 << 12,
    1 << 14,
    1 << 16,
    1 << 18,
    1 << 20,
    1 << 22,
];

/// Configuration for a full harness run
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Timed invocations per kernel per size
    pub trials: usize,
    /// Discarded warm-up invocations per kernel per size
    pub warmup: usize,
    /// Byte alignment for all vector buffers
    pub alignment: usize,
    /// Absolute per-element tolerance for verification
    pub tolerance: f32,
    /// Sizes checked in the correctness phase (in addition to `performance_sizes`)
    pub boundary_sizes: Vec<usize>,
    /// Sizes benchmarked in the performance phase
    pub performance_sizes: Vec<usize>,
    /// Size used for the sample-output phase
    pub sample_size: usize,
    /// How many sample elements to print at each end in the sample-output phase
    pub sample_elements: usize,
    /// Cap on individually reported mismatches per verification
    pub max_reported_mismatches: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            warmup: DEFAULT_WARMUP,
            alignment: DEFAULT_ALIGNMENT,
            tolerance: DEFAULT_TOLERANCE,
            boundary_sizes: BOUNDARY_SIZES.to_vec(),
            performance_sizes: PERFORMANCE_SIZES.to_vec(),
            sample_size: 1024,
            sample_elements: 5,
            max_reported_mismatches: 10,
        }
    }
}

impl HarnessConfig {
    /// Create a configuration with the default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of timed trials (clamped to at least 1)
    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials.max(1);
        self
    }

    /// Set the number of warm-up invocations
    #[must_use]
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Set the absolute verification tolerance
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the buffer alignment in bytes
    ///
    /// Must be a power of two no smaller than `align_of::<f32>()`; invalid
    /// values are rejected by [`crate::buffer::AlignedVec::new`] when the
    /// first buffer is allocated.
    #[must_use]
    pub fn with_alignment(mut self, alignment: usize) -> Self {
        self.alignment = alignment;
        self
    }

    /// Replace the correctness-phase boundary sizes
    #[must_use]
    pub fn with_boundary_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.boundary_sizes = sizes;
        self
    }

    /// Replace the performance-phase sizes
    #[must_use]
    pub fn with_performance_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.performance_sizes = sizes;
        self
    }

    /// Rough upper bound on wall-clock cost of one measurement, for sanity checks
    #[must_use]
    pub fn invocations_per_measurement(&self) -> usize {
        self.trials + self.warmup
    }
}
