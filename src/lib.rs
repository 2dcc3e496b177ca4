//! # utf8-range
//!
//! Vectorized, table-driven UTF-8 validation.
//!
//! Input is validated 16 bytes at a time by mapping every byte to a legal
//! `[min, max]` range derived from the lead bytes before it. The grammar of
//! RFC 3629 is encoded entirely in six 16-entry lookup tables, so each chunk
//! costs the same handful of vector operations regardless of content. Pure
//! ASCII chunks take a shorter path.
//!
//! ## Module Organization
//!
//! - [`utf8`] - validation entry points, error types, scalar fallback
//! - [`utf8::tables`] - the range lookup tables
//!
//! ## Quick Start
//!
//! ```
//! use utf8_range::utf8::{validate_utf8, Utf8ErrorKind};
//!
//! assert!(validate_utf8("Grüße, 世界 🎉".as_bytes()).is_ok());
//!
//! let err = validate_utf8(&[0xE0, 0xA0]).unwrap_err();
//! assert_eq!(err.kind, Utf8ErrorKind::TruncatedSequence);
//! ```
//!
//! ## Features
//!
//! - `std` (default) - runtime CPU detection for the SSSE3 backend on x86_64.
//!   Without it, the backend is chosen from compile-time target features.
//! - `serde` - Enable serialization/deserialization of [`Config`]

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-width lane primitives (internal).
pub(crate) mod simd;

/// Vectorized UTF-8 validation.
pub mod utf8;

pub use utf8::{is_utf8, validate_utf8, Utf8Error, Utf8ErrorKind, Utf8Validator};

// =============================================================================
// Configuration
// =============================================================================

/// Which lane implementation runs the chunk scan.
///
/// All backends return identical results for every input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Backend {
    /// Pick the fastest backend this CPU supports.
    #[default]
    Auto,
    /// Portable 16-byte array emulation.
    Portable,
    /// SSSE3 + SSE4.1 (x86_64).
    Ssse3,
    /// NEON (aarch64).
    Neon,
}

impl Backend {
    /// Returns true if this backend can run on the current CPU.
    pub fn is_available(self) -> bool {
        match self {
            Backend::Auto | Backend::Portable => true,
            #[cfg(target_arch = "x86_64")]
            Backend::Ssse3 => simd::x86::is_available(),
            #[cfg(target_arch = "aarch64")]
            Backend::Neon => true,
            #[allow(unreachable_patterns)]
            _ => false,
        }
    }

    /// The concrete backend to use for this request.
    ///
    /// `Auto` and unavailable backends resolve to the fastest available one.
    pub fn resolve(self) -> Backend {
        match self {
            Backend::Auto => Self::fastest(),
            b if b.is_available() => b,
            _ => Self::fastest(),
        }
    }

    fn fastest() -> Backend {
        if Backend::Ssse3.is_available() {
            Backend::Ssse3
        } else if Backend::Neon.is_available() {
            Backend::Neon
        } else {
            Backend::Portable
        }
    }
}

/// Configuration for building a [`Utf8Validator`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Backend for the chunk scan (default: [`Backend::Auto`])
    pub backend: Backend,
}
