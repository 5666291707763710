//! Single-value fetch with bounded retry

use log::debug;

use crate::config::RetryLimits;
use crate::error::RdrandError;
use crate::source::EntropySource;
use crate::word::Word;

/// Fetch one value of width `W` from `source`.
///
/// # Returns
/// * `Ok(value)` - the first attempt that produced a value
/// * `Err(RdrandError::Unsupported)` - no hardware support; nothing attempted
/// * `Err(RdrandError::NotReady)` - every attempt declined
///
/// With `retry == false` exactly one attempt is made. With `retry == true`
/// up to `limits.attempts` consecutive attempts are made.
pub fn fetch<W, S>(source: &S, retry: bool, limits: &RetryLimits) -> Result<W, RdrandError>
where
    W: Word,
    S: EntropySource + ?Sized,
{
    if !source.is_supported() {
        return Err(RdrandError::Unsupported);
    }

    let attempts = limits.attempts_for(retry);
    for _ in 0..attempts {
        if let Some(value) = W::step(source) {
            return Ok(value);
        }
    }

    if retry {
        debug!("rdrand: {}-bit fetch not ready after {} attempts", W::BITS, attempts);
    }
    Err(RdrandError::NotReady)
}
