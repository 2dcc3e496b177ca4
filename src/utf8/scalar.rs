//! Byte-by-byte UTF-8 validation.
//!
//! The vectorized scan only vouches for whole 16-byte chunks. Short inputs and
//! the bytes after the last full chunk are handed to a [`ScalarFallback`],
//! whose verdict is final for that range.

use super::Utf8ErrorKind;

/// Failure reported by a [`ScalarFallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackError {
    /// Offset of the first invalid byte, relative to the slice the fallback
    /// was given, if known.
    pub offset: Option<usize>,
    /// What went wrong, or [`Utf8ErrorKind::Unspecified`].
    pub kind: Utf8ErrorKind,
}

impl FallbackError {
    /// Interpret a C-style status code.
    ///
    /// `0` means valid, a positive value is the offset of the first invalid
    /// byte, and any other value means invalid at an unknown location.
    ///
    /// ```
    /// use utf8_range::utf8::FallbackError;
    ///
    /// assert_eq!(FallbackError::check_code(0), Ok(()));
    /// assert_eq!(FallbackError::check_code(3).unwrap_err().offset, Some(3));
    /// assert_eq!(FallbackError::check_code(-1).unwrap_err().offset, None);
    /// ```
    pub fn check_code(code: i64) -> Result<(), FallbackError> {
        match code {
            0 => Ok(()),
            n if n > 0 => Err(FallbackError {
                offset: usize::try_from(n).ok(),
                kind: Utf8ErrorKind::Unspecified,
            }),
            _ => Err(FallbackError {
                offset: None,
                kind: Utf8ErrorKind::Unspecified,
            }),
        }
    }
}

/// A scalar validator for the ranges the vectorized scan cannot finish.
///
/// Implementations must return `Ok(())` exactly when `input` is entirely
/// well-formed UTF-8.
///
/// Any `Fn(&[u8]) -> i64` following the status code convention of
/// [`FallbackError::check_code`] is a fallback.
pub trait ScalarFallback {
    /// Validate `input` in full.
    fn validate(&self, input: &[u8]) -> Result<(), FallbackError>;
}

/// The built-in fallback: [`validate_scalar`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteByByte;

impl ScalarFallback for ByteByByte {
    #[inline]
    fn validate(&self, input: &[u8]) -> Result<(), FallbackError> {
        validate_scalar(input)
    }
}

impl<F> ScalarFallback for F
where
    F: Fn(&[u8]) -> i64,
{
    #[inline]
    fn validate(&self, input: &[u8]) -> Result<(), FallbackError> {
        FallbackError::check_code(self(input))
    }
}

#[inline(always)]
fn fail(offset: usize, kind: Utf8ErrorKind) -> Result<(), FallbackError> {
    Err(FallbackError {
        offset: Some(offset),
        kind,
    })
}

/// Validate UTF-8 one sequence at a time.
///
/// Reports the offset and kind of the first violation.
pub fn validate_scalar(input: &[u8]) -> Result<(), FallbackError> {
    let mut pos = 0;
    let len = input.len();

    while pos < len {
        let byte = input[pos];

        // Determine sequence length from lead byte
        let seq_len = match byte {
            0x00..=0x7F => {
                pos += 1;
                continue;
            }
            // Continuation bytes appearing as lead
            0x80..=0xBF => return fail(pos, Utf8ErrorKind::InvalidLeadByte),
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            0xF8..=0xFF => return fail(pos, Utf8ErrorKind::InvalidLeadByte),
        };

        // Continuation bytes are checked before truncation so that a lead
        // followed by ASCII reports the ASCII byte.
        let available = (len - pos).min(seq_len);
        for i in 1..available {
            if !is_continuation_byte(input[pos + i]) {
                return fail(pos + i, Utf8ErrorKind::InvalidContinuationByte);
            }
        }
        if available < seq_len {
            return fail(pos, Utf8ErrorKind::TruncatedSequence);
        }

        match seq_len {
            2 => {
                // Lead byte 0xC0 or 0xC1 would encode < 0x80
                if byte <= 0xC1 {
                    return fail(pos, Utf8ErrorKind::OverlongEncoding);
                }
            }
            3 => {
                let cp = ((byte as u32 & 0x0F) << 12)
                    | ((input[pos + 1] as u32 & 0x3F) << 6)
                    | (input[pos + 2] as u32 & 0x3F);

                if cp < 0x800 {
                    return fail(pos, Utf8ErrorKind::OverlongEncoding);
                }
                if (0xD800..=0xDFFF).contains(&cp) {
                    return fail(pos, Utf8ErrorKind::SurrogateCodepoint);
                }
            }
            _ => {
                let cp = ((byte as u32 & 0x07) << 18)
                    | ((input[pos + 1] as u32 & 0x3F) << 12)
                    | ((input[pos + 2] as u32 & 0x3F) << 6)
                    | (input[pos + 3] as u32 & 0x3F);

                if cp < 0x10000 {
                    return fail(pos, Utf8ErrorKind::OverlongEncoding);
                }
                if cp > 0x10FFFF {
                    return fail(pos, Utf8ErrorKind::OutOfRangeCodepoint);
                }
            }
        }

        pos += seq_len;
    }

    Ok(())
}

/// Check if a byte is a valid UTF-8 continuation byte (0x80-0xBF).
#[inline(always)]
fn is_continuation_byte(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}
