//! Chunk loop and tail hand-off.
//!
//! Full 16-byte chunks go through the [`Classifier`]. What is left over, plus
//! any sequence the last chunk started but could not see the end of, goes to
//! the scalar fallback.

use super::classify::Classifier;
use super::scalar::ScalarFallback;
use super::{Utf8Error, Utf8Report};
use crate::simd::{Lanes, LANES};

/// Validate `input` with lane type `V`, delegating the tail to `fallback`.
#[inline(always)]
pub fn scan<V, F>(input: &[u8], fallback: &F) -> Result<Utf8Report, Utf8Error>
where
    V: Lanes,
    F: ScalarFallback + ?Sized,
{
    let mut classifier = Classifier::<V>::new();
    let mut chunks = input.chunks_exact(LANES);
    for chunk in &mut chunks {
        classifier.push(V::load(chunk));
    }
    let scanned = input.len() - chunks.remainder().len();

    if classifier.has_error() {
        return Err(Utf8Error::malformed());
    }

    let lookahead = if scanned == 0 {
        0
    } else {
        lookahead(&classifier.last_chunk().to_array())
    };
    let start = scanned - lookahead;

    fallback
        .validate(&input[start..])
        .map_err(|e| Utf8Error::from_fallback(e, start))?;

    Ok(Utf8Report {
        vectorized: start,
        residual: input.len() - start,
    })
}

/// Number of trailing bytes of the last chunk that belong to a sequence the
/// chunk could not confirm as complete.
///
/// Walks lanes 15, 14 and 13 looking for a lead byte (above 0xBF). A lead at
/// lane 12 or earlier always ends inside the chunk.
#[inline]
pub fn lookahead(last: &[u8; LANES]) -> usize {
    if last[15] > 0xBF {
        1
    } else if last[14] > 0xBF {
        2
    } else if last[13] > 0xBF {
        3
    } else {
        0
    }
}
