//! Full benchmark run: correctness, performance, and sample-output phases
//!
//! The three phases run in sequence with no branching back. A verification
//! failure is printed and counted but never aborts the run: a single broken
//! kernel must not block measurement of the others. Only allocation failure
//! is fatal.
//!
//! Buffers are allocated per test size, filled once, consumed by every
//! kernel at that size, and dropped before the next size begins.

use crate::buffer::{populate_inputs, AlignedVec};
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::harness::measure::measure;
use crate::harness::report::{print_header, print_row, print_separator, throughput};
use crate::harness::verify::verify;
use crate::kernels::Kernel;

/// Counts of what a full run checked and how much of it failed
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    /// Kernel-size pairs verified against the reference
    pub verifications: usize,
    /// Verifications that reported at least one mismatch
    pub failures: usize,
    /// Kernel-size pairs benchmarked
    pub measurements: usize,
}

/// Orchestrates the phases over the kernel registry
#[derive(Debug)]
pub struct Driver<'a> {
    config: &'a HarnessConfig,
    kernels: &'a [Kernel],
}

impl<'a> Driver<'a> {
    /// Create a driver over a kernel registry
    ///
    /// The first kernel in `kernels` is the correctness reference.
    ///
    /// # Panics
    ///
    /// Panics if `kernels` is empty: with no reference kernel there is
    /// nothing to verify against or measure.
    #[must_use]
    pub fn new(config: &'a HarnessConfig, kernels: &'a [Kernel]) -> Self {
        assert!(
            !kernels.is_empty(),
            "kernel registry is empty: a reference kernel is required"
        );
        Self { config, kernels }
    }

    /// Run all three phases
    ///
    /// # Errors
    ///
    /// Only unrecoverable failures (allocation) propagate; verification
    /// failures are counted in the returned [`RunSummary`].
    pub fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        println!("Vector Triad Benchmark: A[i] = B[i] + C[i] * D[i]");
        println!("========================================================");
        println!(
            "Test configuration: {} iterations per test, {} warm-up runs",
            self.config.trials, self.config.warmup
        );
        println!("Memory alignment: {} bytes", self.config.alignment);
        println!("Kernels: {}", self.kernel_names().join(", "));
        println!();

        self.correctness_phase(&mut summary)?;
        self.performance_phase(&mut summary)?;
        self.sample_output_phase()?;

        println!("\nBenchmark completed: {} verifications, {} failures",
            summary.verifications, summary.failures);
        Ok(summary)
    }

    fn kernel_names(&self) -> Vec<&'static str> {
        self.kernels.iter().map(|k| k.name).collect()
    }

    /// Phase 1: verify every kernel against the reference at every size
    ///
    /// Boundary sizes come first; they are the ones that catch off-by-one and
    /// remainder-handling defects in fixed-width kernels.
    fn correctness_phase(&self, summary: &mut RunSummary) -> Result<()> {
        println!("=== Correctness ===");

        let sizes: Vec<usize> = self
            .config
            .boundary_sizes
            .iter()
            .chain(self.config.performance_sizes.iter())
            .copied()
            .collect();

        for n in sizes {
            println!("\nTesting vector size: {n}");
            self.verify_at_size(n, summary)?;
        }
        println!();
        Ok(())
    }

    fn verify_at_size(&self, n: usize, summary: &mut RunSummary) -> Result<()> {
        let (b, c, d) = populate_inputs(n, self.config.alignment)?;
        let mut reference = AlignedVec::new(n, self.config.alignment)?;
        let mut test = AlignedVec::new(n, self.config.alignment)?;

        self.kernels[0].run(reference.as_mut_slice(), &b, &c, &d);

        for kernel in &self.kernels[1..] {
            test.zero();
            kernel.run(test.as_mut_slice(), &b, &c, &d);

            let outcome = verify(
                &reference,
                &test,
                self.config.tolerance,
                self.config.max_reported_mismatches,
            )?;
            outcome.print(kernel.name);

            summary.verifications += 1;
            if !outcome.passed {
                summary.failures += 1;
            }
        }
        Ok(())
    }

    /// Phase 2: benchmark every kernel (reference included) at every performance size
    fn performance_phase(&self, summary: &mut RunSummary) -> Result<()> {
        println!("=== Performance Results ===");
        print_header();

        for &n in &self.config.performance_sizes {
            let (b, c, d) = populate_inputs(n, self.config.alignment)?;
            let mut a = AlignedVec::new(n, self.config.alignment)?;

            for kernel in self.kernels {
                let m = measure(
                    kernel,
                    &mut a,
                    &b,
                    &c,
                    &d,
                    self.config.trials,
                    self.config.warmup,
                )?;
                summary.measurements += 1;

                match throughput(kernel.name, n, &m) {
                    Ok(t) => print_row(kernel.name, n, &m, &t),
                    Err(e) => println!("{:<20} | {:>8} | measurement error: {e}", kernel.name, n),
                }
            }
            print_separator();
        }
        Ok(())
    }

    /// Phase 3: print the first and last few reference outputs for spot inspection
    fn sample_output_phase(&self) -> Result<()> {
        println!("\n=== Sample Output Verification ===");

        let n = self.config.sample_size;
        let count = self.config.sample_elements.min(n);
        let (b, c, d) = populate_inputs(n, self.config.alignment)?;
        let mut a = AlignedVec::new(n, self.config.alignment)?;
        self.kernels[0].run(a.as_mut_slice(), &b, &c, &d);

        println!("First {count} elements:");
        for i in 0..count {
            println!("A[{i}] = {:.6}", a[i]);
        }
        println!("Last {count} elements:");
        for i in n - count..n {
            println!("A[{i}] = {:.6}", a[i]);
        }
        Ok(())
    }
}
