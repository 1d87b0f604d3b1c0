//! Integration tests for the full benchmark pipeline
//!
//! These exercise the same path the driver binary runs, with small trial
//! counts so the suite stays fast.

use triadbench::buffer::populate_inputs;
use triadbench::harness::{measure, throughput, verify};
use triadbench::kernels::registry;
use triadbench::{AlignedVec, Driver, HarnessConfig};

/// Sizes not evenly divisible by common vector widths (4, 8)
const BOUNDARY_SIZES: &[usize] = &[1, 3, 5, 7, 15, 17, 31, 33];

fn fast_config() -> HarnessConfig {
    HarnessConfig::new()
        .with_trials(3)
        .with_warmup(1)
        .with_boundary_sizes(BOUNDARY_SIZES.to_vec())
        .with_performance_sizes(vec![1_024])
}

#[test]
fn test_all_kernels_pass_at_boundary_sizes() {
    let kernels = registry();

    for &n in BOUNDARY_SIZES {
        let (b, c, d) = populate_inputs(n, 32).unwrap();
        let mut reference = AlignedVec::new(n, 32).unwrap();
        kernels[0].run(reference.as_mut_slice(), &b, &c, &d);

        for kernel in &kernels[1..] {
            let mut out = AlignedVec::new(n, 32).unwrap();
            kernel.run(out.as_mut_slice(), &b, &c, &d);

            let outcome = verify(&reference, &out, 1e-6, 10).unwrap();
            assert!(
                outcome.passed,
                "kernel '{}' failed at n={n}: {} mismatches, max diff {:e}",
                kernel.name, outcome.mismatches, outcome.max_diff
            );
        }
    }
}

#[test]
fn test_full_driver_run_is_clean() {
    let config = fast_config();
    let kernels = registry();
    let summary = Driver::new(&config, &kernels).run().unwrap();

    assert_eq!(summary.failures, 0);
    assert_eq!(
        summary.verifications,
        (kernels.len() - 1) * (BOUNDARY_SIZES.len() + 1)
    );
    assert_eq!(summary.measurements, kernels.len());
}

#[test]
fn test_measured_throughput_positive_finite() {
    let n = 65_536;
    let (b, c, d) = populate_inputs(n, 32).unwrap();
    let mut a = AlignedVec::new(n, 32).unwrap();

    for kernel in registry() {
        let m = measure(&kernel, &mut a, &b, &c, &d, 5, 1).unwrap();
        let t = throughput(kernel.name, n, &m).unwrap();
        assert!(
            t.gflops.is_finite() && t.gflops > 0.0,
            "kernel '{}' reported GFLOP/s {}",
            kernel.name,
            t.gflops
        );
        assert!(t.gbytes_per_sec.is_finite() && t.gbytes_per_sec > 0.0);
    }
}

#[test]
fn test_input_pattern_stable_across_runs() {
    // Same size, two independent allocations: bit-identical inputs, and
    // therefore bit-identical reference outputs.
    let kernels = registry();
    let n = 1_003;

    let (b1, c1, d1) = populate_inputs(n, 32).unwrap();
    let (b2, c2, d2) = populate_inputs(n, 32).unwrap();

    let mut out1 = AlignedVec::new(n, 32).unwrap();
    let mut out2 = AlignedVec::new(n, 32).unwrap();
    kernels[0].run(out1.as_mut_slice(), &b1, &c1, &d1);
    kernels[0].run(out2.as_mut_slice(), &b2, &c2, &d2);

    for i in 0..n {
        assert_eq!(out1[i].to_bits(), out2[i].to_bits());
    }
}

#[test]
fn test_sample_element_matches_expected() {
    // n=1024: B[0]=sin(0)=0, C[0]=cos(0)=1, D[0]=tan(1.0), so A[0] ~ 1.5574.
    let kernels = registry();
    let (b, c, d) = populate_inputs(1_024, 32).unwrap();
    let mut a = AlignedVec::new(1_024, 32).unwrap();
    kernels[0].run(a.as_mut_slice(), &b, &c, &d);
    assert!((a[0] - 1.5574).abs() < 1e-3);
}

#[test]
fn test_custom_tolerance_flows_through() {
    // A deliberately loose tolerance accepts a perturbed output; the default
    // rejects it. Confirms the tolerance is a real parameter end to end.
    let kernels = registry();
    let n = 64;
    let (b, c, d) = populate_inputs(n, 32).unwrap();
    let mut reference = AlignedVec::new(n, 32).unwrap();
    kernels[0].run(reference.as_mut_slice(), &b, &c, &d);

    let mut perturbed: Vec<f32> = reference.to_vec();
    perturbed[17] += 1e-4;

    let strict = verify(&reference, &perturbed, 1e-6, 10).unwrap();
    let loose = verify(&reference, &perturbed, 1e-3, 10).unwrap();
    assert!(!strict.passed);
    assert!(loose.passed);
}
