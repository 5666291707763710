//! Whole-word runs
//!
//! Each word is fetched through an outer retry loop layered on top of the
//! inner retry of [`crate::fetch`]. The outer loop only repeats on
//! `NotReady`; `Unsupported` ends it at once since it cannot change.

use log::warn;

use crate::config::RetryLimits;
use crate::error::RdrandError;
use crate::fetch::fetch;
use crate::source::EntropySource;
use crate::word::Word;

/// Fill every element of `dest`, in order, with a fresh word.
///
/// On failure the last error is returned and the words already written
/// stay in `dest`.
pub fn fill_words<W, S>(source: &S, dest: &mut [W], limits: &RetryLimits) -> Result<(), RdrandError>
where
    W: Word,
    S: EntropySource + ?Sized,
{
    fill_run::<W, S, _, _, _>(source, dest.iter_mut(), limits, |slot, word| *slot = word)
}

/// Drive one outer-retried fetch per slot and hand each word to `store`.
pub(crate) fn fill_run<W, S, T, I, F>(
    source: &S,
    slots: I,
    limits: &RetryLimits,
    mut store: F,
) -> Result<(), RdrandError>
where
    W: Word,
    S: EntropySource + ?Sized,
    I: Iterator<Item = T>,
    F: FnMut(T, W),
{
    for (index, slot) in slots.enumerate() {
        let word = fetch_for_run::<W, S>(source, limits).map_err(|e| {
            if e.is_transient() {
                warn!(
                    "rdrand: word {} of run not ready after {} fetches",
                    index, limits.fill_attempts
                );
            }
            e
        })?;
        store(slot, word);
    }
    Ok(())
}

fn fetch_for_run<W, S>(source: &S, limits: &RetryLimits) -> Result<W, RdrandError>
where
    W: Word,
    S: EntropySource + ?Sized,
{
    let mut last = RdrandError::NotReady;
    for _ in 0..limits.fill_attempts.max(1) {
        match fetch::<W, S>(source, true, limits) {
            Ok(word) => return Ok(word),
            Err(RdrandError::Unsupported) => return Err(RdrandError::Unsupported),
            Err(e) => last = e,
        }
    }
    Err(last)
}
