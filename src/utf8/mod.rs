//! Vectorized UTF-8 validation.
//!
//! The input is processed 16 bytes at a time. Each byte is given a *range
//! index* from the lead bytes up to three positions before it, and is legal
//! exactly when it lies inside that range's bounds (see [`tables`]). Pure
//! ASCII chunks skip the classification and only check that the previous
//! chunk did not end mid-sequence.
//!
//! Once the full chunks are exhausted, the trailing bytes of the last chunk
//! that start an unconfirmed sequence are re-offered, together with the
//! remaining short tail, to a byte-by-byte [`ScalarFallback`].
//!
//! ## Errors
//!
//! - A malformed byte inside a fully scanned chunk yields
//!   [`Utf8ErrorKind::MalformedSequence`] with no offset.
//! - A defect in the tail is reported by the fallback, usually with the
//!   offset and the specific violation.
//!
//! ```
//! use utf8_range::utf8::{validate_utf8, Utf8ErrorKind};
//!
//! assert!(validate_utf8(b"Hello, world!").is_ok());
//! assert!(validate_utf8("日本語のテキストと絵文字 🎉".as_bytes()).is_ok());
//!
//! // Overlong NUL in a short buffer: reported by the fallback
//! let err = validate_utf8(&[0xC0, 0x80]).unwrap_err();
//! assert_eq!(err.kind, Utf8ErrorKind::OverlongEncoding);
//! assert_eq!(err.offset, Some(0));
//!
//! // Surrogate inside the first full chunk: no offset
//! let mut bytes = [b'a'; 32];
//! bytes[4..7].copy_from_slice(&[0xED, 0xA0, 0x80]);
//! let err = validate_utf8(&bytes).unwrap_err();
//! assert_eq!(err.kind, Utf8ErrorKind::MalformedSequence);
//! assert_eq!(err.offset, None);
//! ```

pub(crate) mod classify;
pub(crate) mod scan;
pub mod scalar;
pub mod tables;

pub use scalar::{validate_scalar, ByteByByte, FallbackError, ScalarFallback};

use crate::simd::portable::Portable;
use crate::{Backend, Config};

/// Error information for UTF-8 validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Error {
    /// The kind of UTF-8 error.
    pub kind: Utf8ErrorKind,
    /// Byte offset of the first invalid byte in the whole input, when the
    /// failing stage reports one.
    pub offset: Option<usize>,
}

impl Utf8Error {
    #[inline]
    pub(crate) fn malformed() -> Self {
        Self {
            kind: Utf8ErrorKind::MalformedSequence,
            offset: None,
        }
    }

    #[inline]
    pub(crate) fn from_fallback(err: FallbackError, base: usize) -> Self {
        Self {
            kind: err.kind,
            offset: err.offset.map(|o| base + o),
        }
    }

    /// Line and column (both 1-indexed, column in bytes) of the error within
    /// `input`.
    ///
    /// Returns `None` if the error carries no offset or the offset lies
    /// outside `input`. Lines are counted on demand, so validation itself
    /// never pays for them.
    ///
    /// ```
    /// use utf8_range::utf8::validate_utf8;
    ///
    /// let input = b"first\nsecond \xFF";
    /// let err = validate_utf8(input).unwrap_err();
    /// assert_eq!(err.line_column(input), Some((2, 8)));
    /// ```
    pub fn line_column(&self, input: &[u8]) -> Option<(usize, usize)> {
        let offset = self.offset?;
        if offset >= input.len() {
            return None;
        }
        let before = &input[..offset];
        let line = 1 + before.iter().filter(|&&b| b == b'\n').count();
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |p| p + 1);
        Some((line, offset - line_start + 1))
    }
}

impl core::fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{} at byte {}", self.kind, offset),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for Utf8Error {}

/// The specific type of UTF-8 validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8ErrorKind {
    /// A byte inside a fully scanned chunk is outside the range its position
    /// allows: an illegal lead or continuation byte, an overlong or surrogate
    /// encoding, or a code point above U+10FFFF.
    MalformedSequence,

    /// A byte in the range 0x80-0xBF appeared where a lead byte was expected,
    /// or a byte 0xF8-0xFF appeared at all.
    InvalidLeadByte,

    /// A byte outside the range 0x80-0xBF appeared where a continuation byte was expected.
    InvalidContinuationByte,

    /// A character was encoded using more bytes than necessary.
    /// For example, encoding ASCII 'A' (U+0041) as `C1 81` instead of `41`.
    OverlongEncoding,

    /// A surrogate code point (U+D800-U+DFFF) was encoded.
    SurrogateCodepoint,

    /// A code point above U+10FFFF was encoded.
    OutOfRangeCodepoint,

    /// A multi-byte sequence was truncated at the end of input.
    TruncatedSequence,

    /// A custom fallback rejected the tail without saying why.
    Unspecified,
}

impl Utf8ErrorKind {
    /// True for errors found in the tail by the scalar fallback rather than
    /// by the chunk scan.
    #[inline]
    pub fn is_tail(self) -> bool {
        !matches!(self, Self::MalformedSequence)
    }
}

impl core::fmt::Display for Utf8ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedSequence => write!(f, "malformed UTF-8 sequence"),
            Self::InvalidLeadByte => write!(f, "invalid UTF-8 lead byte"),
            Self::InvalidContinuationByte => write!(f, "invalid UTF-8 continuation byte"),
            Self::OverlongEncoding => write!(f, "overlong UTF-8 encoding"),
            Self::SurrogateCodepoint => write!(f, "surrogate code point in UTF-8"),
            Self::OutOfRangeCodepoint => write!(f, "code point above U+10FFFF"),
            Self::TruncatedSequence => write!(f, "truncated UTF-8 sequence"),
            Self::Unspecified => write!(f, "invalid UTF-8"),
        }
    }
}

/// How a successful validation split the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Report {
    /// Leading bytes vouched for by the chunk scan and not re-checked.
    pub vectorized: usize,
    /// Trailing bytes checked by the scalar fallback, including any bytes of
    /// the last chunk that were re-offered.
    pub residual: usize,
}

/// A UTF-8 validator bound to one backend and one scalar fallback.
///
/// ```
/// use utf8_range::utf8::Utf8Validator;
/// use utf8_range::{Backend, Config};
///
/// let portable = Utf8Validator::with_config(Config { backend: Backend::Portable });
/// assert_eq!(portable.backend(), Backend::Portable);
///
/// let report = portable.validate_report("thirty-nine bytes of plain ASCII text.!".as_bytes()).unwrap();
/// assert_eq!(report.vectorized, 32);
/// assert_eq!(report.residual, 7);
/// ```
#[derive(Debug, Clone)]
pub struct Utf8Validator<F = ByteByByte> {
    backend: Backend,
    fallback: F,
}

impl Utf8Validator {
    /// Validator on the best backend for this CPU with the built-in fallback.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Validator on the configured backend, resolved against this CPU.
    pub fn with_config(config: Config) -> Self {
        Self {
            backend: config.backend.resolve(),
            fallback: ByteByByte,
        }
    }
}

impl Default for Utf8Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ScalarFallback> Utf8Validator<F> {
    /// Replace the scalar fallback.
    pub fn with_fallback<G: ScalarFallback>(self, fallback: G) -> Utf8Validator<G> {
        Utf8Validator {
            backend: self.backend,
            fallback,
        }
    }

    /// The concrete backend in use; never [`Backend::Auto`].
    #[inline]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Validate that `input` is well-formed UTF-8.
    #[inline]
    pub fn validate(&self, input: &[u8]) -> Result<(), Utf8Error> {
        self.validate_report(input).map(|_| ())
    }

    /// Validate `input`, reporting how many bytes each stage covered.
    pub fn validate_report(&self, input: &[u8]) -> Result<Utf8Report, Utf8Error> {
        match self.backend {
            #[cfg(target_arch = "x86_64")]
            Backend::Ssse3 => {
                // SAFETY: `Backend::resolve` only yields Ssse3 when the CPU
                // has SSSE3 and SSE4.1.
                unsafe { scan_sse(input, &self.fallback) }
            }
            #[cfg(target_arch = "aarch64")]
            Backend::Neon => scan_neon(input, &self.fallback),
            _ => scan::scan::<Portable, F>(input, &self.fallback),
        }
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "ssse3,sse4.1")]
unsafe fn scan_sse<F: ScalarFallback>(
    input: &[u8],
    fallback: &F,
) -> Result<Utf8Report, Utf8Error> {
    scan::scan::<crate::simd::x86::Sse, F>(input, fallback)
}

#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
unsafe fn scan_neon_inner<F: ScalarFallback>(
    input: &[u8],
    fallback: &F,
) -> Result<Utf8Report, Utf8Error> {
    scan::scan::<crate::simd::neon::Neon, F>(input, fallback)
}

#[cfg(target_arch = "aarch64")]
#[inline]
fn scan_neon<F: ScalarFallback>(input: &[u8], fallback: &F) -> Result<Utf8Report, Utf8Error> {
    // SAFETY: NEON is mandatory on aarch64.
    unsafe { scan_neon_inner(input, fallback) }
}

/// Validate that the input is valid UTF-8.
///
/// Uses the fastest backend available on this CPU.
///
/// # Examples
///
/// ```
/// use utf8_range::utf8::validate_utf8;
///
/// assert!(validate_utf8(b"").is_ok());
/// assert!(validate_utf8("🎉🎉🎉🎉🎉".as_bytes()).is_ok());
///
/// // Invalid: truncated sequence after a full chunk
/// let mut bytes = b"sixteen ascii by".to_vec();
/// bytes.push(0xC2);
/// assert!(validate_utf8(&bytes).is_err());
/// ```
#[inline]
pub fn validate_utf8(input: &[u8]) -> Result<(), Utf8Error> {
    Utf8Validator::new().validate(input)
}

/// Validate UTF-8 and report how the work was split.
#[inline]
pub fn validate_utf8_report(input: &[u8]) -> Result<Utf8Report, Utf8Error> {
    Utf8Validator::new().validate_report(input)
}

/// Validate UTF-8 using only the scalar (byte-by-byte) algorithm.
#[inline]
pub fn validate_utf8_scalar(input: &[u8]) -> Result<(), Utf8Error> {
    validate_scalar(input).map_err(|e| Utf8Error::from_fallback(e, 0))
}

/// Returns true if `input` is well-formed UTF-8.
#[inline]
pub fn is_utf8(input: &[u8]) -> bool {
    validate_utf8(input).is_ok()
}
