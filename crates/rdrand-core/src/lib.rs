//! RDRAND Core - Retry-Aware Filling over a Hardware Entropy Source
//!
//! This crate contains the **pure, platform-free** logic that turns a
//! single-attempt hardware random step into bounded-retry fetches, whole
//! word runs, and byte buffers of arbitrary length and alignment.
//!
//! # Design Principles
//!
//! 1. **No hardware dependency**: CPUID and RDRAND live in `rdrand-hal`
//! 2. **Bounded**: every operation terminates within fixed retry limits
//! 3. **Explicit outcomes**: every fetch returns `Result<_, RdrandError>`
//! 4. **Verifiable**: decomposition arithmetic is checked by Kani proofs
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       rdrand-core                           │
//! │                                                             │
//! │   ┌───────────────┐    ┌───────────────┐                   │
//! │   │ EntropySource │    │ SupportCache  │                   │
//! │   │  try_u16/32/64│    │ tri-state     │                   │
//! │   └───────┬───────┘    └───────────────┘                   │
//! │           ▼                                                 │
//! │   ┌───────────────┐    ┌───────────────┐   ┌─────────────┐ │
//! │   │   fetch()     │───▶│ fill_words()  │──▶│ fill_bytes()│ │
//! │   │ inner retries │    │ outer retries │   │ lead/mid/   │ │
//! │   └───────────────┘    └───────────────┘   │ trail       │ │
//! │                                            └─────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              │ used by
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       rdrand-hal                            │
//! │   - CPUID probe (vendor string + feature bit)               │
//! │   - RDRAND steps, process-wide support cache                │
//! │   - Free-function API and C ABI exports                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - `error` - `RdrandError` and the integer `Status` codes
//! - `word` - `Word` trait and the platform `NativeWord`
//! - `source` - `EntropySource` trait (single hardware attempts)
//! - `support` - `SupportState` and the lock-free `SupportCache`
//! - `config` - `RetryLimits`
//! - `fetch` - single-value fetch with bounded retry
//! - `words` - whole-word runs with the outer retry bound
//! - `bytes` - arbitrary byte buffers (the lead/middle/trail split)
//! - `mock` - deterministic scripted source for tests

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod bytes;
pub mod config;
pub mod error;
pub mod fetch;
pub mod mock;
pub mod source;
pub mod support;
pub mod word;
pub mod words;


pub use bytes::{fill_bytes, Decomposition};
pub use config::RetryLimits;
pub use error::{RdrandError, Status};
pub use fetch::fetch;
pub use mock::MockSource;
pub use source::EntropySource;
pub use support::{SupportCache, SupportState};
pub use word::{NativeWord, Word, WORD_BYTES};
pub use words::fill_words;

/// A hardware source paired with the retry limits applied to it.
///
/// This is the entry point most callers want: it bundles the
/// single-attempt [`EntropySource`] with a [`RetryLimits`] and exposes
/// every operation of the crate as a method.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rdrand<S> {
    source: S,
    limits: RetryLimits,
}

impl<S: EntropySource> Rdrand<S> {
    /// Create a handle using the default limits (10 inner, 10 outer).
    pub const fn new(source: S) -> Self {
        Self {
            source,
            limits: RetryLimits::DEFAULT,
        }
    }

    /// Create a handle with explicit retry limits.
    pub const fn with_limits(source: S, limits: RetryLimits) -> Self {
        Self { source, limits }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn limits(&self) -> RetryLimits {
        self.limits
    }

    /// Whether the hardware instruction is usable (cached by the source).
    pub fn is_supported(&self) -> bool {
        self.source.is_supported()
    }

    pub fn fetch_u16(&self, retry: bool) -> Result<u16, RdrandError> {
        fetch(&self.source, retry, &self.limits)
    }

    pub fn fetch_u32(&self, retry: bool) -> Result<u32, RdrandError> {
        fetch(&self.source, retry, &self.limits)
    }

    pub fn fetch_u64(&self, retry: bool) -> Result<u64, RdrandError> {
        fetch(&self.source, retry, &self.limits)
    }

    /// Fetch one platform word (`u64` on 64-bit targets, `u32` otherwise).
    pub fn fetch_word(&self, retry: bool) -> Result<NativeWord, RdrandError> {
        fetch(&self.source, retry, &self.limits)
    }

    /// Fill every element of `dest` with a fresh word.
    pub fn fill_words<W: Word>(&self, dest: &mut [W]) -> Result<(), RdrandError> {
        fill_words(&self.source, dest, &self.limits)
    }

    /// Fill `dest` with random bytes using platform-word fetches.
    pub fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RdrandError> {
        fill_bytes::<NativeWord, _>(&self.source, dest, &self.limits)
    }
}
