//! Vector triad kernel implementations: `A[i] = B[i] + C[i] * D[i]`
//!
//! # Architecture
//!
//! This module provides one scalar reference implementation and several
//! vectorized variants:
//! - Scalar: the correctness reference, a plain indexed loop
//! - Unrolled: 4× unrolled scalar, exposes instruction-level parallelism
//! - SSE2 (x86_64): 128-bit XMM registers, 4 elements per iteration
//! - AVX2 (x86_64): 256-bit YMM registers, 8 elements per iteration
//! - NEON (aarch64): 128-bit registers, 4 elements per iteration
//!
//! Every vectorized variant handles the remainder after the last full-width
//! chunk with scalar code, so any length is valid. All variants use separate
//! multiply and add instructions rather than fused multiply-add: verification
//! compares against the scalar two-rounding result, and near the tangent
//! poles in the input pattern a single-rounding FMA diverges from it by more
//! than the harness tolerance.
//!
//! The public [`triad`] function selects the widest implementation available
//! on the running CPU.

/// f32 lanes per 128-bit register
const LANES_128: usize = 4;

/// f32 lanes per 256-bit register
#[cfg(target_arch = "x86_64")]
const LANES_256: usize = 8;

/// Compute the vector triad with the best implementation for this CPU
///
/// # Panics
///
/// Panics in debug builds if the four slices differ in length.
///
/// # Example
///
/// ```
/// let b = [1.0f32, 2.0, 3.0];
/// let c = [2.0f32, 2.0, 2.0];
/// let d = [10.0f32, 10.0, 10.0];
/// let mut a = [0.0f32; 3];
/// triadbench::kernels::triad(&mut a, &b, &c, &d);
/// assert_eq!(a, [21.0, 22.0, 23.0]);
/// ```
pub fn triad(a: &mut [f32], b: &[f32], c: &[f32], d: &[f32]) {
    #[cfg(target_arch = "aarch64")]
    {
        // SAFETY: NEON is baseline on aarch64.
        unsafe { triad_neon(a, b, c, d) }
    }

    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx") {
            // SAFETY: AVX is detected.
            unsafe { triad_avx(a, b, c, d) }
        } else {
            // SAFETY: SSE2 is baseline on x86_64.
            unsafe { triad_sse2(a, b, c, d) }
        }
    }

    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
    {
        triad_scalar(a, b, c, d);
    }
}

/// Scalar reference implementation
///
/// This is the ground truth every other kernel is verified against: for all
/// `i`, `A[i]` is exactly `B[i] + C[i] * D[i]` in f32 arithmetic with one
/// rounding per operation.
pub fn triad_scalar(a: &mut [f32], b: &[f32], c: &[f32], d: &[f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), c.len());
    debug_assert_eq!(a.len(), d.len());

    for i in 0..a.len() {
        a[i] = b[i] + c[i] * d[i];
    }
}

/// 4× unrolled scalar implementation
///
/// Same arithmetic as [`triad_scalar`], restructured so four independent
/// element computations are in flight per loop iteration.
pub fn triad_unrolled(a: &mut [f32], b: &[f32], c: &[f32], d: &[f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), c.len());
    debug_assert_eq!(a.len(), d.len());

    let n = a.len();
    let chunks = n / LANES_128;
    let tail = chunks * LANES_128;

    for chunk in 0..chunks {
        let i = chunk * LANES_128;
        a[i] = b[i] + c[i] * d[i];
        a[i + 1] = b[i + 1] + c[i + 1] * d[i + 1];
        a[i + 2] = b[i + 2] + c[i + 2] * d[i + 2];
        a[i + 3] = b[i + 3] + c[i + 3] * d[i + 3];
    }

    for i in tail..n {
        a[i] = b[i] + c[i] * d[i];
    }
}

/// NEON implementation for aarch64 (4 elements per iteration)
///
/// # Safety
///
/// Requires NEON, which is standard on all aarch64 CPUs. Slice bounds are
/// respected: full 4-wide chunks are processed with vector loads/stores and
/// the remainder falls through to scalar code.
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn triad_neon(a: &mut [f32], b: &[f32], c: &[f32], d: &[f32]) {
    use std::arch::aarch64::*;

    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), c.len());
    debug_assert_eq!(a.len(), d.len());

    let n = a.len();
    let chunks = n / LANES_128;
    let tail = chunks * LANES_128;

    for chunk in 0..chunks {
        let offset = chunk * LANES_128;

        let bv = vld1q_f32(b.as_ptr().add(offset));
        let cv = vld1q_f32(c.as_ptr().add(offset));
        let dv = vld1q_f32(d.as_ptr().add(offset));

        // Separate multiply and add, matching scalar rounding.
        let prod = vmulq_f32(cv, dv);
        let sum = vaddq_f32(bv, prod);

        vst1q_f32(a.as_mut_ptr().add(offset), sum);
    }

    for i in tail..n {
        a[i] = b[i] + c[i] * d[i];
    }
}

/// SSE2 implementation for x86_64 (XMM registers, 4 elements per iteration)
///
/// # Safety
///
/// Requires SSE2, which is baseline on x86_64. Full 4-wide chunks use
/// unaligned vector loads/stores; the remainder falls through to scalar code.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
pub unsafe fn triad_sse2(a: &mut [f32], b: &[f32], c: &[f32], d: &[f32]) {
    use std::arch::x86_64::*;

    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), c.len());
    debug_assert_eq!(a.len(), d.len());

    let n = a.len();
    let chunks = n / LANES_128;
    let tail = chunks * LANES_128;

    for chunk in 0..chunks {
        let offset = chunk * LANES_128;

        let bv = _mm_loadu_ps(b.as_ptr().add(offset));
        let cv = _mm_loadu_ps(c.as_ptr().add(offset));
        let dv = _mm_loadu_ps(d.as_ptr().add(offset));

        let prod = _mm_mul_ps(cv, dv);
        let sum = _mm_add_ps(bv, prod);

        _mm_storeu_ps(a.as_mut_ptr().add(offset), sum);
    }

    for i in tail..n {
        a[i] = b[i] + c[i] * d[i];
    }
}

/// AVX implementation for x86_64 (YMM registers, 8 elements per iteration)
///
/// # Safety
///
/// Caller must ensure AVX is available (`is_x86_feature_detected!("avx")`).
/// Full 8-wide chunks use unaligned vector loads/stores; the remainder falls
/// through to scalar code.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx")]
pub unsafe fn triad_avx(a: &mut [f32], b: &[f32], c: &[f32], d: &[f32]) {
    use std::arch::x86_64::*;

    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), c.len());
    debug_assert_eq!(a.len(), d.len());

    let n = a.len();
    let chunks = n / LANES_256;
    let tail = chunks * LANES_256;

    for chunk in 0..chunks {
        let offset = chunk * LANES_256;

        let bv = _mm256_loadu_ps(b.as_ptr().add(offset));
        let cv = _mm256_loadu_ps(c.as_ptr().add(offset));
        let dv = _mm256_loadu_ps(d.as_ptr().add(offset));

        let prod = _mm256_mul_ps(cv, dv);
        let sum = _mm256_add_ps(bv, prod);

        _mm256_storeu_ps(a.as_mut_ptr().add(offset), sum);
    }

    for i in tail..n {
        a[i] = b[i] + c[i] * d[i];
    }
}
