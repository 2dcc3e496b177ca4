//! Fixed-width 16-byte lane primitives.
//!
//! The UTF-8 classifier is written once against the [`Lanes`] trait and
//! instantiated per backend:
//!
//! - [`portable::Portable`] - `[u8; 16]` emulation, compiled everywhere
//! - [`x86::Sse`] - SSSE3 + SSE4.1 on x86_64
//! - [`neon::Neon`] - NEON on aarch64
//!
//! All backends must agree bit-for-bit, including saturation at 0 and 255 and
//! the zeroing behaviour of [`Lanes::lookup`] for indices with bit 7 set.

pub mod portable;

#[cfg(target_arch = "x86_64")]
pub mod x86;

#[cfg(target_arch = "aarch64")]
pub mod neon;

/// Number of bytes in one lane vector.
pub const LANES: usize = 16;

/// A 16-byte vector and the operations the classifier needs on it.
///
/// Comparison results are lane masks: `0xFF` where the predicate holds and
/// `0x00` elsewhere.
pub trait Lanes: Copy {
    /// All lanes zero.
    fn zero() -> Self;

    /// Every lane set to `byte`.
    fn splat(byte: u8) -> Self;

    /// Build a vector from 16 bytes in lane order.
    fn from_array(bytes: [u8; LANES]) -> Self;

    /// Copy the lanes out in lane order.
    fn to_array(self) -> [u8; LANES];

    /// Load the first 16 bytes of `bytes`.
    ///
    /// Panics if `bytes` is shorter than 16.
    fn load(bytes: &[u8]) -> Self;

    /// Per-byte logical shift right by 4.
    fn high_nibbles(self) -> Self;

    /// Table lookup with `pshufb` semantics: a lane whose index has bit 7 set
    /// yields 0, otherwise it yields `table[index & 0x0F]`.
    fn lookup(table: Self, indices: Self) -> Self;

    /// Splice two vectors: `prev[K..16]` followed by `cur[0..K]`.
    ///
    /// With `K = 15`, lane `i` holds what was at position `i - 1` in the
    /// byte stream.
    fn splice<const K: i32>(cur: Self, prev: Self) -> Self;

    /// Lane-wise unsigned saturating subtraction.
    fn saturating_sub(self, rhs: Self) -> Self;

    /// Lane-wise unsigned saturating addition.
    fn saturating_add(self, rhs: Self) -> Self;

    /// Lane-wise wrapping addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Lane-wise wrapping subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Lane-wise bitwise or.
    fn or(self, rhs: Self) -> Self;

    /// Lane mask of `self < rhs`, comparing lanes as `i8`.
    fn signed_lt(self, rhs: Self) -> Self;

    /// Lane mask of `self > rhs`, comparing lanes as `i8`.
    fn signed_gt(self, rhs: Self) -> Self;

    /// True if every lane is zero.
    fn is_zero(self) -> bool;

    /// True if any lane has its high bit set.
    fn any_high_bit(self) -> bool;
}
