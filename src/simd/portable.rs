//! Portable lane emulation on `[u8; 16]`.
//!
//! Used on targets without a supported vector unit, and as the reference the
//! hardware backends are tested against.

use bytemuck::{Pod, Zeroable};

use super::{Lanes, LANES};

/// A 16-byte lane vector stored as a plain array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct Portable([u8; LANES]);

impl Portable {
    #[inline(always)]
    fn map(self, f: impl Fn(u8) -> u8) -> Self {
        let mut out = self.0;
        for b in out.iter_mut() {
            *b = f(*b);
        }
        Self(out)
    }

    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(u8, u8) -> u8) -> Self {
        let mut out = [0u8; LANES];
        for i in 0..LANES {
            out[i] = f(self.0[i], rhs.0[i]);
        }
        Self(out)
    }
}

#[inline(always)]
fn mask(cond: bool) -> u8 {
    if cond {
        0xFF
    } else {
        0x00
    }
}

impl Lanes for Portable {
    #[inline(always)]
    fn zero() -> Self {
        Zeroable::zeroed()
    }

    #[inline(always)]
    fn splat(byte: u8) -> Self {
        Self([byte; LANES])
    }

    #[inline(always)]
    fn from_array(bytes: [u8; LANES]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    fn to_array(self) -> [u8; LANES] {
        self.0
    }

    #[inline(always)]
    fn load(bytes: &[u8]) -> Self {
        bytemuck::pod_read_unaligned(&bytes[..LANES])
    }

    #[inline(always)]
    fn high_nibbles(self) -> Self {
        self.map(|b| b >> 4)
    }

    #[inline(always)]
    fn lookup(table: Self, indices: Self) -> Self {
        indices.map(|i| {
            if i & 0x80 != 0 {
                0
            } else {
                table.0[(i & 0x0F) as usize]
            }
        })
    }

    #[inline(always)]
    fn splice<const K: i32>(cur: Self, prev: Self) -> Self {
        let k = K as usize;
        let mut out = [0u8; LANES];
        out[..LANES - k].copy_from_slice(&prev.0[k..]);
        out[LANES - k..].copy_from_slice(&cur.0[..k]);
        Self(out)
    }

    #[inline(always)]
    fn saturating_sub(self, rhs: Self) -> Self {
        self.zip(rhs, u8::saturating_sub)
    }

    #[inline(always)]
    fn saturating_add(self, rhs: Self) -> Self {
        self.zip(rhs, u8::saturating_add)
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        self.zip(rhs, u8::wrapping_add)
    }

    #[inline(always)]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self.zip(rhs, u8::wrapping_sub)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a | b)
    }

    #[inline(always)]
    fn signed_lt(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| mask((a as i8) < (b as i8)))
    }

    #[inline(always)]
    fn signed_gt(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| mask((a as i8) > (b as i8)))
    }

    #[inline(always)]
    fn is_zero(self) -> bool {
        u128::from_ne_bytes(self.0) == 0
    }

    #[inline(always)]
    fn any_high_bit(self) -> bool {
        u128::from_ne_bytes(self.0) & u128::from_ne_bytes([0x80; LANES]) != 0
    }
}
