//! RDRAND hardware random source
//!
//! This crate binds the platform-free algorithms of `rdrand-core` to the
//! x86 RDRAND instruction and exposes them as free functions.
//!
//! # Platform Implementations
//!
//! - **x86 / x86_64**: CPUID vendor check (`GenuineIntel`) then the
//!   RDRAND feature bit; values from `RDRAND r16/r32/r64`
//! - **Everything else**: reported as unsupported, every call returns
//!   `RdrandError::Unsupported`
//!
//! # Usage
//!
//! ```no_run
//! use rdrand_hal::{fill_random_bytes, RdrandError};
//!
//! let mut key = [0u8; 32];
//! match fill_random_bytes(&mut key) {
//!     Ok(()) => {}
//!     Err(RdrandError::NotReady) => { /* try again later */ }
//!     Err(RdrandError::Unsupported) => { /* use another source */ }
//! }
//! ```
//!
//! The support probe runs once per process and is cached lock-free; every
//! other call is a bounded, synchronous loop over the instruction.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod x86;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use x86 as arch;

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
mod unsupported;
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
use unsupported as arch;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use rdrand_core::{
    Decomposition, EntropySource, NativeWord, Rdrand, RdrandError, RetryLimits, Status,
    SupportState, Word, WORD_BYTES,
};

use rdrand_core::SupportCache;

/// Process-wide support cache
static SUPPORT: SupportCache = SupportCache::new();

/// Handle used by the free functions (default retry limits)
const RDRAND: Rdrand<HardwareSource> = Rdrand::new(HardwareSource);

/// The CPU's RDRAND instruction as an [`EntropySource`].
///
/// Every instance shares the process-wide support cache. Each `try_*`
/// call checks support first, so the instruction is never executed on a
/// CPU that lacks it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HardwareSource;

impl EntropySource for HardwareSource {
    fn is_supported(&self) -> bool {
        SUPPORT.get_or_probe(arch::probe)
    }

    fn try_u16(&self) -> Option<u16> {
        if !self.is_supported() {
            return None;
        }
        // SAFETY: support was confirmed by the CPUID probe above.
        unsafe { arch::rdrand16() }
    }

    fn try_u32(&self) -> Option<u32> {
        if !self.is_supported() {
            return None;
        }
        // SAFETY: support was confirmed by the CPUID probe above.
        unsafe { arch::rdrand32() }
    }

    fn try_u64(&self) -> Option<u64> {
        if !self.is_supported() {
            return None;
        }
        // SAFETY: support was confirmed by the CPUID probe above.
        unsafe { arch::rdrand64() }
    }
}

/// Cached support state, without probing.
pub fn support_state() -> SupportState {
    SUPPORT.state()
}

/// Whether RDRAND is usable on this CPU (probed once, then cached).
pub fn is_hardware_random_supported() -> bool {
    RDRAND.is_supported()
}

/// Fetch a random `u16`.
///
/// With `retry` up to 10 attempts are made, otherwise exactly one.
pub fn fetch_random_16(retry: bool) -> Result<u16, RdrandError> {
    RDRAND.fetch_u16(retry)
}

/// Fetch a random `u32`.
pub fn fetch_random_32(retry: bool) -> Result<u32, RdrandError> {
    RDRAND.fetch_u32(retry)
}

/// Fetch a random `u64`.
///
/// On 32-bit x86 the value is built from two 32-bit steps.
pub fn fetch_random_64(retry: bool) -> Result<u64, RdrandError> {
    RDRAND.fetch_u64(retry)
}

/// Fetch one platform word.
pub fn fetch_random_word(retry: bool) -> Result<NativeWord, RdrandError> {
    RDRAND.fetch_word(retry)
}

/// Fill `dest` with random words.
///
/// Each word gets up to 10 retrying fetches. On failure the words already
/// written are left in place.
pub fn fetch_random_words(dest: &mut [NativeWord]) -> Result<(), RdrandError> {
    RDRAND.fill_words(dest)
}

/// Fill `dest` with random bytes; any length and alignment.
///
/// On failure `dest` is partially written and should be discarded.
pub fn fill_random_bytes(dest: &mut [u8]) -> Result<(), RdrandError> {
    RDRAND.fill_bytes(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::vec::Vec;

    #[test]
    fn test_support_is_idempotent() {
        let first = is_hardware_random_supported();
        for _ in 0..100 {
            assert_eq!(is_hardware_random_supported(), first);
        }
        let expected = if first {
            SupportState::Supported
        } else {
            SupportState::Unsupported
        };
        assert_eq!(support_state(), expected);
    }

    #[test]
    fn test_support_agrees_across_threads() {
        let answers: Vec<bool> = (0..8)
            .map(|_| thread::spawn(is_hardware_random_supported))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();
        assert!(answers.iter().all(|&a| a == answers[0]));
        assert_eq!(answers[0], is_hardware_random_supported());
    }

    #[test]
    fn test_hardware_source_respects_support() {
        let source = HardwareSource;
        if source.is_supported() {
            assert!(fetch_random_64(true).is_ok());
        } else {
            assert_eq!(source.try_u16(), None);
            assert_eq!(source.try_u32(), None);
            assert_eq!(source.try_u64(), None);
            assert_eq!(fetch_random_16(false), Err(RdrandError::Unsupported));
            assert_eq!(fetch_random_words(&mut [0; 4]), Err(RdrandError::Unsupported));
        }
    }

    #[test]
    fn test_empty_fill_always_succeeds() {
        assert_eq!(fill_random_bytes(&mut []), Ok(()));
        assert_eq!(fetch_random_words(&mut []), Ok(()));
    }
}
