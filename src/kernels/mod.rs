//! Triad kernel implementations and the kernel registry
//!
//! The harness treats every kernel as an opaque callable of uniform
//! signature. [`registry`] builds the process-wide list of kernels available
//! on the running CPU; the first entry is always the scalar reference that
//! all other kernels are verified against.

pub mod triad;

pub use triad::{triad, triad_scalar, triad_unrolled};

/// Uniform kernel signature: `(A, B, C, D)` with all slices of equal length
///
/// Every kernel must set `A[i] = B[i] + C[i] * D[i]` for all `i`, and must
/// not read or write outside the slices.
pub type KernelFn = fn(&mut [f32], &[f32], &[f32], &[f32]);

/// A named kernel implementation
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// Display name used in reports
    pub name: &'static str,
    /// The kernel entry point
    pub func: KernelFn,
}

impl Kernel {
    /// Invoke the kernel
    pub fn run(&self, a: &mut [f32], b: &[f32], c: &[f32], d: &[f32]) {
        (self.func)(a, b, c, d);
    }
}

#[cfg(target_arch = "aarch64")]
fn triad_neon_safe(a: &mut [f32], b: &[f32], c: &[f32], d: &[f32]) {
    // SAFETY: NEON is baseline on aarch64.
    unsafe { triad::triad_neon(a, b, c, d) }
}

#[cfg(target_arch = "x86_64")]
fn triad_sse2_safe(a: &mut [f32], b: &[f32], c: &[f32], d: &[f32]) {
    // SAFETY: SSE2 is baseline on x86_64.
    unsafe { triad::triad_sse2(a, b, c, d) }
}

/// Safe wrapper for the AVX kernel; only registered when AVX is detected.
#[cfg(target_arch = "x86_64")]
fn triad_avx_safe(a: &mut [f32], b: &[f32], c: &[f32], d: &[f32]) {
    debug_assert!(is_x86_feature_detected!("avx"));
    // SAFETY: registry() only hands out this wrapper after detecting AVX.
    unsafe { triad::triad_avx(a, b, c, d) }
}

/// Build the list of kernels available on this CPU
///
/// Index 0 is the scalar reference. Architecture-specific kernels appear only
/// on their architecture; the AVX kernel appears only when the CPU reports
/// the feature at runtime.
#[must_use]
pub fn registry() -> Vec<Kernel> {
    #[allow(unused_mut)]
    let mut kernels = vec![
        Kernel {
            name: "scalar",
            func: triad_scalar,
        },
        Kernel {
            name: "scalar unrolled",
            func: triad_unrolled,
        },
    ];

    #[cfg(target_arch = "aarch64")]
    kernels.push(Kernel {
        name: "neon",
        func: triad_neon_safe,
    });

    #[cfg(target_arch = "x86_64")]
    {
        kernels.push(Kernel {
            name: "sse2 xmm",
            func: triad_sse2_safe,
        });
        if is_x86_feature_detected!("avx") {
            kernels.push(Kernel {
                name: "avx ymm",
                func: triad_avx_safe,
            });
        }
    }

    kernels
}
