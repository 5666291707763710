//! Deterministic entropy source for testing
//!
//! `MockSource` replays an arithmetic value sequence and can be scripted to
//! decline attempts, so retry bounds and failure propagation can be tested
//! without hardware. All state is atomic, so a shared `&MockSource` is
//! `Sync`; scripting is meant to be done from a single test thread.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};

use crate::source::EntropySource;
use crate::support::SupportCache;

const DEFAULT_START: u64 = 0x9E37_79B9_7F4A_7C15;
const DEFAULT_STEP: u64 = 0xBF58_476D_1CE4_E5B9;
const UNLIMITED: u64 = u64::MAX;

/// Mock entropy source for unit testing
#[derive(Debug)]
pub struct MockSource {
    /// Answer reported by the probe
    supported: bool,
    /// Cached probe result, as a real source would keep it
    support: SupportCache,
    /// Number of times the probe actually ran
    probes: AtomicU64,
    /// Next value handed out
    next: AtomicU64,
    /// Added to `next` after each successful draw
    step: u64,
    /// Attempts left that must decline
    pending_failures: AtomicU32,
    /// Decline every attempt
    failing: AtomicBool,
    /// Successful draws left before every attempt declines
    budget: AtomicU64,
    /// All step calls
    attempts: AtomicU64,
    /// Step calls that produced a value
    draws: AtomicU64,
}

impl MockSource {
    /// Create a supported source with a fixed pseudo-random sequence
    pub fn new() -> Self {
        Self::with_sequence(DEFAULT_START, DEFAULT_STEP)
    }

    /// Create a supported source producing `start`, `start + step`, ...
    ///
    /// Narrow fetches keep the low bits of each value.
    pub fn with_sequence(start: u64, step: u64) -> Self {
        Self::build(true, start, step)
    }

    /// Create a source whose probe reports no hardware support
    pub fn unsupported() -> Self {
        Self::build(false, DEFAULT_START, DEFAULT_STEP)
    }

    fn build(supported: bool, start: u64, step: u64) -> Self {
        Self {
            supported,
            support: SupportCache::new(),
            probes: AtomicU64::new(0),
            next: AtomicU64::new(start),
            step,
            pending_failures: AtomicU32::new(0),
            failing: AtomicBool::new(false),
            budget: AtomicU64::new(UNLIMITED),
            attempts: AtomicU64::new(0),
            draws: AtomicU64::new(0),
        }
    }

    /// Decline the next `count` attempts
    pub fn fail_next(&self, count: u32) {
        self.pending_failures.store(count, Ordering::SeqCst);
    }

    /// Decline every attempt from now on
    pub fn fail_always(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Allow `draws` more successful draws, then decline every attempt
    pub fn fail_after(&self, draws: u64) {
        self.budget.store(draws, Ordering::SeqCst);
    }

    /// Clear every scripted failure
    pub fn recover(&self) {
        self.pending_failures.store(0, Ordering::SeqCst);
        self.failing.store(false, Ordering::SeqCst);
        self.budget.store(UNLIMITED, Ordering::SeqCst);
    }

    /// Get the number of step calls
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Get the number of step calls that produced a value
    pub fn draws(&self) -> u64 {
        self.draws.load(Ordering::SeqCst)
    }

    /// Get the number of times the support probe ran
    pub fn probes(&self) -> u64 {
        self.probes.load(Ordering::SeqCst)
    }

    /// Zero the attempt and draw counters
    pub fn reset_counters(&self) {
        self.attempts.store(0, Ordering::SeqCst);
        self.draws.store(0, Ordering::SeqCst);
    }

    fn attempt(&self) -> Option<u64> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return None;
        }
        let declined = self
            .pending_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if declined {
            return None;
        }
        let within_budget = self
            .budget
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |b| match b {
                UNLIMITED => Some(UNLIMITED),
                0 => None,
                b => Some(b - 1),
            })
            .is_ok();
        if !within_budget {
            return None;
        }

        self.draws.fetch_add(1, Ordering::SeqCst);
        Some(self.next.fetch_add(self.step, Ordering::SeqCst))
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for MockSource {
    fn is_supported(&self) -> bool {
        self.support.get_or_probe(|| {
            self.probes.fetch_add(1, Ordering::SeqCst);
            self.supported
        })
    }

    fn try_u16(&self) -> Option<u16> {
        self.attempt().map(|v| v as u16)
    }

    fn try_u32(&self) -> Option<u32> {
        self.attempt().map(|v| v as u32)
    }

    fn try_u64(&self) -> Option<u64> {
        self.attempt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence() {
        let source = MockSource::with_sequence(10, 5);
        assert_eq!(source.try_u64(), Some(10));
        assert_eq!(source.try_u32(), Some(15));
        assert_eq!(source.try_u16(), Some(20));
        assert_eq!(source.draws(), 3);
    }

    #[test]
    fn test_sequence_wraps() {
        let source = MockSource::with_sequence(u64::MAX, 2);
        assert_eq!(source.try_u64(), Some(u64::MAX));
        assert_eq!(source.try_u64(), Some(1));
    }

    #[test]
    fn test_fail_next() {
        let source = MockSource::with_sequence(1, 1);
        source.fail_next(2);
        assert_eq!(source.try_u32(), None);
        assert_eq!(source.try_u32(), None);
        assert_eq!(source.try_u32(), Some(1));
        assert_eq!(source.attempts(), 3);
        assert_eq!(source.draws(), 1);
    }

    #[test]
    fn test_fail_after_and_recover() {
        let source = MockSource::with_sequence(1, 1);
        source.fail_after(1);
        assert_eq!(source.try_u64(), Some(1));
        assert_eq!(source.try_u64(), None);
        assert_eq!(source.try_u64(), None);

        source.recover();
        assert_eq!(source.try_u64(), Some(2));
    }

    #[test]
    fn test_fail_always() {
        let source = MockSource::new();
        source.fail_always();
        for _ in 0..20 {
            assert_eq!(source.try_u16(), None);
        }
        assert_eq!(source.attempts(), 20);
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn test_probe_is_cached() {
        let source = MockSource::unsupported();
        for _ in 0..10 {
            assert!(!source.is_supported());
        }
        assert_eq!(source.probes(), 1);
    }
}
