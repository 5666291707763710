//! Retry configuration

/// Default number of hardware attempts per fetch
pub const RETRY_LIMIT: u32 = 10;

/// Bounded retry limits.
///
/// Two levels are applied: `attempts` bounds the hardware steps inside a
/// single retrying fetch, and `fill_attempts` bounds how many retrying
/// fetches a word-run fill makes for one word. The worst case for one
/// word is therefore `attempts * fill_attempts` hardware steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RetryLimits {
    /// Hardware attempts per retrying fetch
    pub attempts: u32,
    /// Retrying fetches per word in a word-run fill
    pub fill_attempts: u32,
}

impl RetryLimits {
    /// 10 inner attempts, 10 outer attempts
    pub const DEFAULT: Self = Self {
        attempts: RETRY_LIMIT,
        fill_attempts: RETRY_LIMIT,
    };

    /// Create limits. Zero values are raised to one so every fetch makes
    /// at least one attempt.
    pub const fn new(attempts: u32, fill_attempts: u32) -> Self {
        Self {
            attempts: if attempts == 0 { 1 } else { attempts },
            fill_attempts: if fill_attempts == 0 { 1 } else { fill_attempts },
        }
    }

    /// Hardware attempts for one fetch with the given retry flag.
    pub fn attempts_for(&self, retry: bool) -> u32 {
        if retry {
            self.attempts.max(1)
        } else {
            1
        }
    }
}

impl Default for RetryLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
