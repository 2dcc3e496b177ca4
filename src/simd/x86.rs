//! x86_64 lane implementation.
//!
//! Uses SSSE3 for `pshufb`/`palignr` and SSE4.1 for `ptest`; everything else
//! is baseline SSE2.
//!
//! # Safety
//!
//! [`Sse`] values may only be created on a CPU that supports SSSE3 and
//! SSE4.1. The type is crate-private and only instantiated behind
//! [`is_available`].

use core::arch::x86_64::*;

use super::{Lanes, LANES};

/// Returns true if the running CPU supports the instructions [`Sse`] uses.
#[inline]
pub fn is_available() -> bool {
    #[cfg(any(test, feature = "std"))]
    return is_x86_feature_detected!("ssse3") && is_x86_feature_detected!("sse4.1");

    #[cfg(not(any(test, feature = "std")))]
    return cfg!(all(target_feature = "ssse3", target_feature = "sse4.1"));
}

/// A 16-byte lane vector held in an XMM register.
#[derive(Clone, Copy)]
pub struct Sse(__m128i);

impl Lanes for Sse {
    #[inline(always)]
    fn zero() -> Self {
        unsafe { Self(_mm_setzero_si128()) }
    }

    #[inline(always)]
    fn splat(byte: u8) -> Self {
        unsafe { Self(_mm_set1_epi8(byte as i8)) }
    }

    #[inline(always)]
    fn from_array(bytes: [u8; LANES]) -> Self {
        unsafe { Self(_mm_loadu_si128(bytes.as_ptr() as *const __m128i)) }
    }

    #[inline(always)]
    fn to_array(self) -> [u8; LANES] {
        let mut out = [0u8; LANES];
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.0) };
        out
    }

    #[inline(always)]
    fn load(bytes: &[u8]) -> Self {
        let bytes = &bytes[..LANES];
        // SAFETY: the slice above is exactly 16 readable bytes.
        unsafe { Self(_mm_loadu_si128(bytes.as_ptr() as *const __m128i)) }
    }

    #[inline(always)]
    fn high_nibbles(self) -> Self {
        // No 8-bit shift on x86: shift 16-bit lanes and drop the bits that
        // crossed in from the neighbouring byte.
        unsafe { Self(_mm_and_si128(_mm_srli_epi16::<4>(self.0), _mm_set1_epi8(0x0F))) }
    }

    #[inline(always)]
    fn lookup(table: Self, indices: Self) -> Self {
        unsafe { Self(_mm_shuffle_epi8(table.0, indices.0)) }
    }

    #[inline(always)]
    fn splice<const K: i32>(cur: Self, prev: Self) -> Self {
        unsafe { Self(_mm_alignr_epi8::<K>(cur.0, prev.0)) }
    }

    #[inline(always)]
    fn saturating_sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm_subs_epu8(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn saturating_add(self, rhs: Self) -> Self {
        unsafe { Self(_mm_adds_epu8(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        unsafe { Self(_mm_add_epi8(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn wrapping_sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm_sub_epi8(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Self(_mm_or_si128(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn signed_lt(self, rhs: Self) -> Self {
        unsafe { Self(_mm_cmplt_epi8(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn signed_gt(self, rhs: Self) -> Self {
        unsafe { Self(_mm_cmpgt_epi8(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn is_zero(self) -> bool {
        unsafe { _mm_testz_si128(self.0, self.0) == 1 }
    }

    #[inline(always)]
    fn any_high_bit(self) -> bool {
        unsafe { _mm_testz_si128(self.0, _mm_set1_epi8(0x80u8 as i8)) == 0 }
    }
}
