//! ARM NEON lane implementation.
//!
//! NEON is mandatory on aarch64, so this backend is always available there.

use core::arch::aarch64::*;

use super::{Lanes, LANES};

/// A 16-byte lane vector held in a NEON Q register.
#[derive(Clone, Copy)]
pub struct Neon(uint8x16_t);

impl Lanes for Neon {
    #[inline(always)]
    fn zero() -> Self {
        unsafe { Self(vdupq_n_u8(0)) }
    }

    #[inline(always)]
    fn splat(byte: u8) -> Self {
        unsafe { Self(vdupq_n_u8(byte)) }
    }

    #[inline(always)]
    fn from_array(bytes: [u8; LANES]) -> Self {
        unsafe { Self(vld1q_u8(bytes.as_ptr())) }
    }

    #[inline(always)]
    fn to_array(self) -> [u8; LANES] {
        let mut out = [0u8; LANES];
        unsafe { vst1q_u8(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    fn load(bytes: &[u8]) -> Self {
        let bytes = &bytes[..LANES];
        // SAFETY: the slice above is exactly 16 readable bytes.
        unsafe { Self(vld1q_u8(bytes.as_ptr())) }
    }

    #[inline(always)]
    fn high_nibbles(self) -> Self {
        unsafe { Self(vshrq_n_u8::<4>(self.0)) }
    }

    #[inline(always)]
    fn lookup(table: Self, indices: Self) -> Self {
        // TBL zeroes any index >= 16, pshufb only those with bit 7 set.
        // Keeping bit 7 and the low nibble gives the pshufb result.
        unsafe {
            let idx = vandq_u8(indices.0, vdupq_n_u8(0x8F));
            Self(vqtbl1q_u8(table.0, idx))
        }
    }

    #[inline(always)]
    fn splice<const K: i32>(cur: Self, prev: Self) -> Self {
        unsafe { Self(vextq_u8::<K>(prev.0, cur.0)) }
    }

    #[inline(always)]
    fn saturating_sub(self, rhs: Self) -> Self {
        unsafe { Self(vqsubq_u8(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn saturating_add(self, rhs: Self) -> Self {
        unsafe { Self(vqaddq_u8(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        unsafe { Self(vaddq_u8(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn wrapping_sub(self, rhs: Self) -> Self {
        unsafe { Self(vsubq_u8(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Self(vorrq_u8(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn signed_lt(self, rhs: Self) -> Self {
        unsafe {
            Self(vcltq_s8(
                vreinterpretq_s8_u8(self.0),
                vreinterpretq_s8_u8(rhs.0),
            ))
        }
    }

    #[inline(always)]
    fn signed_gt(self, rhs: Self) -> Self {
        unsafe {
            Self(vcgtq_s8(
                vreinterpretq_s8_u8(self.0),
                vreinterpretq_s8_u8(rhs.0),
            ))
        }
    }

    #[inline(always)]
    fn is_zero(self) -> bool {
        unsafe { vmaxvq_u8(self.0) == 0 }
    }

    #[inline(always)]
    fn any_high_bit(self) -> bool {
        unsafe { vmaxvq_u8(self.0) & 0x80 != 0 }
    }
}
