//! Lazily probed, process-wide support flag
//!
//! The probe is a pure function of fixed CPU state, so two threads racing
//! through first-time initialization compute the same answer. No lock is
//! taken: the first `compare_exchange` away from `Unknown` wins and every
//! later reader sees that value.

use core::sync::atomic::{AtomicU8, Ordering};

/// Support cache states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum SupportState {
    /// Not probed yet
    Unknown = 0,
    /// The instruction is usable
    Supported = 1,
    /// The instruction is absent (or the vendor check failed)
    Unsupported = 2,
}

impl SupportState {
    /// Convert from u8
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Unknown),
            1 => Some(Self::Supported),
            2 => Some(Self::Unsupported),
            _ => None,
        }
    }

    fn from_probe(supported: bool) -> Self {
        if supported {
            Self::Supported
        } else {
            Self::Unsupported
        }
    }
}

/// Tri-state cache that never reverts to `Unknown` once resolved.
#[derive(Debug)]
pub struct SupportCache {
    state: AtomicU8,
}

impl SupportCache {
    /// Create an unresolved cache (usable in a `static`).
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(SupportState::Unknown as u8),
        }
    }

    /// Current state without probing.
    pub fn state(&self) -> SupportState {
        SupportState::from_u8(self.state.load(Ordering::Acquire)).unwrap_or(SupportState::Unknown)
    }

    /// Return the cached answer, running `probe` if nothing is cached yet.
    ///
    /// `probe` may run more than once when several threads arrive before
    /// the first store; only the first stored result is ever observed.
    pub fn get_or_probe<F: FnOnce() -> bool>(&self, probe: F) -> bool {
        match self.state() {
            SupportState::Supported => return true,
            SupportState::Unsupported => return false,
            SupportState::Unknown => {}
        }

        let probed = SupportState::from_probe(probe());
        match self.state.compare_exchange(
            SupportState::Unknown as u8,
            probed as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => probed == SupportState::Supported,
            Err(existing) => existing == SupportState::Supported as u8,
        }
    }
}

impl Default for SupportCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::AtomicUsize;

    #[test]
    fn test_starts_unknown() {
        let cache = SupportCache::new();
        assert_eq!(cache.state(), SupportState::Unknown);
    }

    #[test]
    fn test_probe_runs_once() {
        let cache = SupportCache::new();
        let probes = AtomicUsize::new(0);
        for _ in 0..5 {
            let supported = cache.get_or_probe(|| {
                probes.fetch_add(1, Ordering::SeqCst);
                true
            });
            assert!(supported);
        }
        assert_eq!(probes.load(Ordering::SeqCst), 1);
        assert_eq!(cache.state(), SupportState::Supported);
    }

    #[test]
    fn test_unsupported_is_cached() {
        let cache = SupportCache::new();
        assert!(!cache.get_or_probe(|| false));
        // A later probe that would disagree is never consulted.
        assert!(!cache.get_or_probe(|| true));
        assert_eq!(cache.state(), SupportState::Unsupported);
    }

    #[test]
    fn test_threads_converge() {
        use std::sync::Arc;
        use std::thread;
        use std::vec::Vec;

        let cache = Arc::new(SupportCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_probe(|| true))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(cache.state(), SupportState::Supported);
    }

    #[test]
    fn test_state_from_u8() {
        assert_eq!(SupportState::from_u8(0), Some(SupportState::Unknown));
        assert_eq!(SupportState::from_u8(1), Some(SupportState::Supported));
        assert_eq!(SupportState::from_u8(2), Some(SupportState::Unsupported));
        assert_eq!(SupportState::from_u8(3), None);
    }
}
