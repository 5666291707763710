//! Byte buffers of arbitrary length and alignment
//!
//! A destination is split into three parts:
//!
//! ```text
//!   address % W != 0          aligned                      n - lead - middle
//! ┌───────────────┬──────────────────────────────────┬────────────────┐
//! │  lead (< W)   │  middle: whole W-byte words      │  trail (< W)   │
//! └───────────────┴──────────────────────────────────┴────────────────┘
//!   one word, LE     one word per W bytes, host order   one word, LE
//! ```
//!
//! The lead and trail each take a fresh word and keep its low bytes,
//! least significant first. The middle is a word run with the outer retry
//! bound of [`crate::words`].

use log::trace;

use crate::config::RetryLimits;
use crate::error::RdrandError;
use crate::fetch::fetch;
use crate::source::EntropySource;
use crate::word::Word;
use crate::words::fill_run;

/// How a buffer at a given address splits into lead, middle and trail.
///
/// Invariants:
/// - `lead_len + middle_words * word_bytes + trail_len == len`
/// - `lead_len < word_bytes` and `trail_len < word_bytes`
/// - `(address + lead_len) % word_bytes == 0` unless the whole buffer fits
///   in the lead
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decomposition {
    pub lead_len: usize,
    pub middle_words: usize,
    pub trail_len: usize,
    pub word_bytes: usize,
}

impl Decomposition {
    /// Split `len` bytes starting at `address` on `word_bytes` boundaries.
    ///
    /// `word_bytes` must be a power of two.
    pub const fn of(address: usize, len: usize, word_bytes: usize) -> Self {
        debug_assert!(word_bytes.is_power_of_two());

        let misalignment = address & (word_bytes - 1);
        let lead_len = if misalignment == 0 {
            0
        } else {
            let to_boundary = word_bytes - misalignment;
            if to_boundary < len {
                to_boundary
            } else {
                len
            }
        };

        let remaining = len - lead_len;
        Self {
            lead_len,
            middle_words: remaining / word_bytes,
            trail_len: remaining % word_bytes,
            word_bytes,
        }
    }

    /// Split `buf` for fetch unit `W`.
    pub fn for_slice<W: Word>(buf: &[u8]) -> Self {
        Self::of(buf.as_ptr() as usize, buf.len(), W::BYTES)
    }

    /// Bytes covered by the middle word run
    pub const fn middle_len(&self) -> usize {
        self.middle_words * self.word_bytes
    }

    /// Total bytes covered
    pub const fn len(&self) -> usize {
        self.lead_len + self.middle_len() + self.trail_len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Successful draws needed to fill the buffer.
    pub const fn fetches(&self) -> usize {
        (self.lead_len > 0) as usize + self.middle_words + (self.trail_len > 0) as usize
    }
}

/// Fill `dest` with random bytes, fetching `W`-sized words from `source`.
///
/// The lead, middle and trail are filled in that order. The first failure
/// is returned as-is and whatever was written before it stays written;
/// treat the buffer as undefined after an error. Nothing outside `dest` is
/// ever touched. An empty `dest` succeeds without consulting `source`.
pub fn fill_bytes<W, S>(source: &S, dest: &mut [u8], limits: &RetryLimits) -> Result<(), RdrandError>
where
    W: Word,
    S: EntropySource + ?Sized,
{
    let split = Decomposition::for_slice::<W>(dest);
    trace!(
        "rdrand: fill {} bytes as lead={} words={} trail={}",
        dest.len(),
        split.lead_len,
        split.middle_words,
        split.trail_len
    );

    let (lead, rest) = dest.split_at_mut(split.lead_len);
    let (middle, trail) = rest.split_at_mut(split.middle_len());

    if !lead.is_empty() {
        splice_le(fetch::<W, S>(source, true, limits)?, lead);
    }

    fill_run::<W, S, _, _, _>(
        source,
        middle.chunks_exact_mut(W::BYTES),
        limits,
        |chunk, word| chunk.copy_from_slice(word.to_ne_bytes().as_ref()),
    )?;

    if !trail.is_empty() {
        splice_le(fetch::<W, S>(source, true, limits)?, trail);
    }

    Ok(())
}

/// Write the low `dest.len()` bytes of `word`, least significant first.
fn splice_le<W: Word>(word: W, dest: &mut [u8]) {
    let bytes = word.to_le_bytes();
    dest.copy_from_slice(&bytes.as_ref()[..dest.len()]);
}


// ============================================================================
// Kani Proofs for Decomposition
// ============================================================================

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: the three parts always cover exactly `len` bytes
    #[kani::proof]
    fn decomposition_covers_len() {
        let address: usize = kani::any();
        let len: usize = kani::any();
        let wide: bool = kani::any();
        let word_bytes = if wide { 8 } else { 4 };

        let split = Decomposition::of(address, len, word_bytes);

        kani::assert(
            split.lead_len + split.middle_words * word_bytes + split.trail_len == len,
            "lead + middle * W + trail must equal len",
        );
        kani::assert(split.lead_len < word_bytes, "lead shorter than one word");
        kani::assert(split.trail_len < word_bytes, "trail shorter than one word");
    }

    /// Proof: the middle run always starts on a word boundary
    #[kani::proof]
    fn middle_is_aligned() {
        let address: usize = kani::any();
        let len: usize = kani::any();
        let split = Decomposition::of(address, len, 8);

        if split.middle_words > 0 || split.trail_len > 0 {
            kani::assert(
                address.wrapping_add(split.lead_len) % 8 == 0,
                "middle run must start aligned",
            );
        }
    }

    /// Proof: short buffers never get a middle run
    #[kani::proof]
    fn short_buffer_has_no_middle() {
        let address: usize = kani::any();
        let len: usize = kani::any();
        kani::assume(len < 4);

        let split = Decomposition::of(address, len, 4);
        kani::assert(split.middle_words == 0, "n < W must not run the word filler");
    }
}
