//! Lookup tables encoding the UTF-8 grammar (RFC 3629) as byte ranges.
//!
//! Every byte of the input is assigned a *range index*; the byte is legal
//! exactly when it lies in `[RANGE_MIN[index], RANGE_MAX[index]]`, compared
//! as signed bytes.
//!
//! | Index | Position                        | Legal bytes |
//! |-------|---------------------------------|-------------|
//! | 0     | lead byte, ASCII                | 00 - 7F     |
//! | 1     | continuation                    | 80 - BF     |
//! | 2     | 2nd continuation of 3/4-byte    | 80 - BF     |
//! | 3     | 1st continuation of 4-byte      | 80 - BF     |
//! | 4     | 2nd byte after E0               | A0 - BF     |
//! | 5     | 2nd byte after ED               | 80 - 9F     |
//! | 6     | 2nd byte after F0               | 90 - BF     |
//! | 7     | 2nd byte after F4               | 80 - 8F     |
//! | 8     | lead byte, non-ASCII            | C2 - F4     |
//! | 9-15  | overlapping sequences           | none        |
//!
//! Indices 9 to 15 have min `0x7F` and max `0x80`, which as `i8` is
//! `127 > -128`, so no byte passes.
//!
//! These tables must not be edited: an off-by-one silently accepts
//! overlong or surrogate encodings.

/// High nibble of a lead byte to sequence length minus one.
///
/// - 0x00 - 0xBF: 0
/// - 0xC0 - 0xDF: 1
/// - 0xE0 - 0xEF: 2
/// - 0xF0 - 0xFF: 3
pub const FIRST_LEN: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 3];

/// High nibble to range index 8 for every byte in 0xC0 - 0xFF.
pub const FIRST_RANGE: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 8, 8, 8];

/// Minimum legal byte per range index.
pub const RANGE_MIN: [u8; 16] = [
    0x00, 0x80, 0x80, 0x80, 0xA0, 0x80, 0x90, 0x80, //
    0xC2, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F,
];

/// Maximum legal byte per range index.
pub const RANGE_MAX: [u8; 16] = [
    0x7F, 0xBF, 0xBF, 0xBF, 0xBF, 0x9F, 0xBF, 0x8F, //
    0xF4, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
];

/// Range adjustment for the byte after E0 (slot 1) and ED (slot 14).
///
/// Indexed by `saturating_sub(prev - 0xEF, 240)`.
pub const DF_EE_ADJUST: [u8; 16] = [0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0];

/// Range adjustment for the byte after F0 (slot 1) and F4 (slot 5).
///
/// Indexed by `saturating_add(prev - 0xEF, 112)`; anything past 0xFE lands
/// at 128 or above and looks up 0.
pub const EF_FE_ADJUST: [u8; 16] = [0, 3, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// Per-lane ceiling on the previous chunk's sequence length when the
/// current chunk is pure ASCII.
///
/// A lead byte at lane 13, 14 or 15 may still be waiting for bytes that an
/// ASCII chunk cannot provide. Lanes 0 - 12 always finish inside their own
/// chunk, so their ceiling is unreachable.
pub const ASCII_CARRY_MAX: [u8; 16] = [9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 2, 1, 0];
