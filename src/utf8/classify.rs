//! Per-chunk range classification.
//!
//! Each 16-byte chunk is classified without branches: every byte gets a
//! range index from its own high nibble and from the lead bytes up to three
//! positions behind it, and is then checked against that range's bounds.
//! Lead bytes in the last lanes of one chunk govern the first lanes of the
//! next, so the previous chunk's bytes and lengths are carried forward.

use super::tables::{
    ASCII_CARRY_MAX, DF_EE_ADJUST, EF_FE_ADJUST, FIRST_LEN, FIRST_RANGE, RANGE_MAX, RANGE_MIN,
};
use crate::simd::Lanes;

/// The lookup tables loaded into lane vectors.
#[derive(Clone, Copy)]
struct Tables<V> {
    first_len: V,
    first_range: V,
    range_min: V,
    range_max: V,
    df_ee: V,
    ef_fe: V,
    ascii_carry_max: V,
}

impl<V: Lanes> Tables<V> {
    #[inline(always)]
    fn load() -> Self {
        Self {
            first_len: V::from_array(FIRST_LEN),
            first_range: V::from_array(FIRST_RANGE),
            range_min: V::from_array(RANGE_MIN),
            range_max: V::from_array(RANGE_MAX),
            df_ee: V::from_array(DF_EE_ADJUST),
            ef_fe: V::from_array(EF_FE_ADJUST),
            ascii_carry_max: V::from_array(ASCII_CARRY_MAX),
        }
    }
}

/// State carried from one chunk to the next.
#[derive(Clone, Copy)]
pub struct Carry<V> {
    /// Raw bytes of the previous chunk.
    pub input: V,
    /// Sequence length minus one for each byte of the previous chunk.
    pub first_len: V,
}

impl<V: Lanes> Carry<V> {
    /// Carry as if the previous byte was ASCII.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            input: V::zero(),
            first_len: V::zero(),
        }
    }
}

/// Chunk-by-chunk UTF-8 classifier.
///
/// Errors accumulate in a lane mask that is never cleared.
pub struct Classifier<V> {
    tables: Tables<V>,
    carry: Carry<V>,
    error: V,
}

impl<V: Lanes> Classifier<V> {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            tables: Tables::load(),
            carry: Carry::new(),
            error: V::zero(),
        }
    }

    /// Feed one chunk, taking the ASCII shortcut when no high bit is set.
    #[inline(always)]
    pub fn push(&mut self, chunk: V) {
        if chunk.any_high_bit() {
            self.classify(chunk);
        } else {
            self.ascii(chunk);
        }
    }

    /// Full range classification of one chunk.
    #[inline(always)]
    pub fn classify(&mut self, chunk: V) {
        let t = &self.tables;
        let prev = self.carry;

        let high_nibbles = chunk.high_nibbles();
        let first_len = V::lookup(t.first_len, high_nibbles);

        // Lead bytes: 8 for 0xC0 - 0xFF, 0 otherwise
        let mut range = V::lookup(t.first_range, high_nibbles);

        // Byte after a lead: first_len of the byte one behind
        range = range.or(V::splice::<15>(first_len, prev.first_len));

        // Two behind: saturating_sub(first_len, 1)
        let one = V::splat(1);
        range = range.or(V::splice::<14>(
            first_len.saturating_sub(one),
            prev.first_len.saturating_sub(one),
        ));

        // Three behind: saturating_sub(first_len, 2)
        let two = V::splat(2);
        range = range.or(V::splice::<13>(
            first_len.saturating_sub(two),
            prev.first_len.saturating_sub(two),
        ));

        // Now:
        // - 8 for C0 - FF
        // - 3 for 1st byte after F0 - FF
        // - 2 for 1st byte after E0 - EF, 2nd after F0 - FF
        // - 1 for 1st byte after C0 - DF, 2nd after E0 - EF, 3rd after F0 - FF
        // - 0 otherwise
        // Overlapping sequences OR together into 9 - 11.
        // E.g. F1 80 C2 90 --> 8 3 10 2

        // Narrow the 2nd byte after E0, ED, F0 and F4.
        //
        // prev:     | EF  F0 ... FE | FF  00  ...  DE | DF  E0 ... EE |
        // pos:      | 0   1      15 | 16  17  ...  239| 240 241    255|
        // pos-240:  | 0   0      0  | 0   0   ...  0  | 0   1      15 |
        // pos+112:  | 112 113    127|      >= 128     |     >= 128    |
        let shifted = V::splice::<15>(chunk, prev.input);
        let pos = shifted.wrapping_sub(V::splat(0xEF));
        let adjust = V::lookup(t.df_ee, pos.saturating_sub(V::splat(240)))
            .wrapping_add(V::lookup(t.ef_fe, pos.saturating_add(V::splat(112))));
        range = range.wrapping_add(adjust);

        let min = V::lookup(t.range_min, range);
        let max = V::lookup(t.range_max, range);
        self.error = self
            .error
            .or(chunk.signed_lt(min))
            .or(chunk.signed_gt(max));

        self.carry = Carry {
            input: chunk,
            first_len,
        };
    }

    /// Handle a chunk known to be pure ASCII.
    ///
    /// The chunk itself cannot be malformed; the only failure is a sequence
    /// from the previous chunk that still expects continuation bytes.
    #[inline(always)]
    pub fn ascii(&mut self, chunk: V) {
        self.error = self
            .error
            .or(self.carry.first_len.signed_gt(self.tables.ascii_carry_max));
        self.carry = Carry {
            input: chunk,
            first_len: V::zero(),
        };
    }

    /// True once any lane of any chunk has failed.
    #[inline(always)]
    pub fn has_error(&self) -> bool {
        !self.error.is_zero()
    }

    /// Raw bytes of the most recent chunk.
    #[inline(always)]
    pub fn last_chunk(&self) -> V {
        self.carry.input
    }
}
