//! Aligned vector buffers and deterministic input generation
//!
//! Kernels under test use wide-register loads and stores, so every buffer
//! starts at an address aligned to the configured byte boundary (32 bytes by
//! default, enough for 256-bit registers). Allocation goes through
//! `std::alloc` with an explicit [`Layout`]; the buffer owns its memory and
//! releases it exactly once on drop.
//!
//! Input data comes from fixed per-index trigonometric formulas so that every
//! run and every kernel sees bit-identical inputs. This isolates the kernel
//! implementation as the sole source of output variance.

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use crate::error::{Result, TriadError};

/// A heap-allocated `f32` buffer with a guaranteed start-address alignment
///
/// # Example
///
/// ```
/// use triadbench::buffer::AlignedVec;
///
/// let v = AlignedVec::new(1003, 32).unwrap();
/// assert_eq!(v.len(), 1003);
/// assert_eq!(v.as_ptr() as usize % 32, 0);
/// assert!(v.iter().all(|&x| x == 0.0));
/// ```
#[derive(Debug)]
pub struct AlignedVec {
    ptr: NonNull<f32>,
    len: usize,
    layout: Option<Layout>,
}

impl AlignedVec {
    /// Allocate a zero-filled buffer of `len` elements aligned to `alignment` bytes
    ///
    /// # Errors
    ///
    /// Returns [`TriadError::InvalidLayout`] if `alignment` is not a power of
    /// two or is smaller than `align_of::<f32>()`, and
    /// [`TriadError::AllocationFailed`] if the allocator cannot satisfy the
    /// request.
    pub fn new(len: usize, alignment: usize) -> Result<Self> {
        let bytes = len
            .checked_mul(std::mem::size_of::<f32>())
            .ok_or(TriadError::InvalidLayout {
                bytes: usize::MAX,
                alignment,
            })?;

        // The slice views require element alignment regardless of what the
        // allocator happens to return, so sub-word alignments are invalid.
        if !alignment.is_power_of_two() || alignment < std::mem::align_of::<f32>() {
            return Err(TriadError::InvalidLayout { bytes, alignment });
        }

        // Zero-size allocations are not permitted by std::alloc; an empty
        // buffer needs no backing memory at all.
        if len == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
                layout: None,
            });
        }

        let layout = Layout::from_size_align(bytes, alignment)
            .map_err(|_| TriadError::InvalidLayout { bytes, alignment })?;

        // SAFETY: layout has non-zero size (len > 0 checked above).
        let raw = unsafe { alloc_zeroed(layout) };
        let ptr = NonNull::new(raw.cast::<f32>())
            .ok_or(TriadError::AllocationFailed { bytes, alignment })?;

        Ok(Self {
            ptr,
            len,
            layout: Some(layout),
        })
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds zero elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw pointer to the first element
    #[must_use]
    pub fn as_ptr(&self) -> *const f32 {
        self.ptr.as_ptr()
    }

    /// View as an immutable slice
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        // SAFETY: ptr is valid for len elements (or dangling with len == 0).
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// View as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        // SAFETY: ptr is valid for len elements and we hold &mut self.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Overwrite every element with zero
    ///
    /// The harness does this before each timed kernel invocation so a kernel
    /// that fails to write some element is caught by verification instead of
    /// silently reusing stale output.
    pub fn zero(&mut self) {
        self.as_mut_slice().fill(0.0);
    }
}

impl Drop for AlignedVec {
    fn drop(&mut self) {
        if let Some(layout) = self.layout {
            // SAFETY: ptr was allocated with exactly this layout.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

impl Deref for AlignedVec {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        self.as_slice()
    }
}

impl DerefMut for AlignedVec {
    fn deref_mut(&mut self) -> &mut [f32] {
        self.as_mut_slice()
    }
}

// The buffer is an exclusively owned allocation, same as Vec<f32>.
unsafe impl Send for AlignedVec {}
unsafe impl Sync for AlignedVec {}

/// Input-pattern constants, shared by all sizes and all runs
const B_STEP: f32 = 0.001;
const C_STEP: f32 = 0.002;
const D_STEP: f32 = 0.0005;
const D_OFFSET: f32 = 1.0;

/// Fill three input vectors with the deterministic triad test pattern
///
/// `B[i] = sin(i·0.001)`, `C[i] = cos(i·0.002)`, `D[i] = tan(i·0.0005 + 1.0)`.
/// Two calls with the same `len` produce bit-identical contents.
pub fn fill_inputs(b: &mut [f32], c: &mut [f32], d: &mut [f32]) {
    debug_assert_eq!(b.len(), c.len());
    debug_assert_eq!(b.len(), d.len());

    for i in 0..b.len() {
        let x = i as f32;
        b[i] = (x * B_STEP).sin();
        c[i] = (x * C_STEP).cos();
        d[i] = (x * D_STEP + D_OFFSET).tan();
    }
}

/// Allocate and fill the three input vectors for one test size
///
/// # Errors
///
/// Propagates allocation failure; the driver treats that as fatal.
pub fn populate_inputs(len: usize, alignment: usize) -> Result<(AlignedVec, AlignedVec, AlignedVec)> {
    let mut b = AlignedVec::new(len, alignment)?;
    let mut c = AlignedVec::new(len, alignment)?;
    let mut d = AlignedVec::new(len, alignment)?;
    fill_inputs(&mut b, &mut c, &mut d);
    Ok((b, c, d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_is_aligned() {
        for &alignment in &[16usize, 32, 64, 128] {
            let v = AlignedVec::new(1003, alignment).unwrap();
            assert_eq!(v.as_ptr() as usize % alignment, 0);
        }
    }

    #[test]
    fn test_allocation_zero_filled() {
        let v = AlignedVec::new(257, 32).unwrap();
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_empty_buffer() {
        let v = AlignedVec::new(0, 32).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.as_slice(), &[] as &[f32]);
    }

    #[test]
    fn test_non_power_of_two_alignment_rejected() {
        let err = AlignedVec::new(16, 12).unwrap_err();
        assert!(matches!(err, TriadError::InvalidLayout { .. }));
    }

    #[test]
    fn test_sub_word_alignment_rejected() {
        // Alignments below align_of::<f32>() would let the allocator hand
        // back a block the f32 slice views cannot legally be built over.
        for alignment in [1usize, 2] {
            let err = AlignedVec::new(16, alignment).unwrap_err();
            assert!(
                matches!(err, TriadError::InvalidLayout { alignment: a, .. } if a == alignment),
                "alignment {alignment} was accepted"
            );
        }
    }

    #[test]
    fn test_sub_word_alignment_rejected_for_empty_buffer() {
        let err = AlignedVec::new(0, 1).unwrap_err();
        assert!(matches!(err, TriadError::InvalidLayout { .. }));
    }

    #[test]
    fn test_zero_resets_contents() {
        let mut v = AlignedVec::new(64, 32).unwrap();
        v.as_mut_slice().fill(7.5);
        v.zero();
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_fill_inputs_deterministic() {
        let (b1, c1, d1) = populate_inputs(1003, 32).unwrap();
        let (b2, c2, d2) = populate_inputs(1003, 32).unwrap();

        for i in 0..1003 {
            assert_eq!(b1[i].to_bits(), b2[i].to_bits());
            assert_eq!(c1[i].to_bits(), c2[i].to_bits());
            assert_eq!(d1[i].to_bits(), d2[i].to_bits());
        }
    }

    #[test]
    fn test_fill_inputs_known_values() {
        let (b, c, d) = populate_inputs(8, 32).unwrap();
        // sin(0) = 0, cos(0) = 1, tan(1.0) ~ 1.5574
        assert_eq!(b[0], 0.0);
        assert_eq!(c[0], 1.0);
        assert!((d[0] - 1.5574077).abs() < 1e-4);
    }

    #[test]
    fn test_populate_inputs_sizes_match() {
        let (b, c, d) = populate_inputs(33, 32).unwrap();
        assert_eq!(b.len(), 33);
        assert_eq!(c.len(), 33);
        assert_eq!(d.len(), 33);
    }
}
