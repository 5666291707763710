//! x86 / x86_64 RDRAND backend
//!
//! - `cpuid` - two-stage support probe
//! - `random` - single-attempt RDRAND steps

mod cpuid;
mod random;

pub(crate) use cpuid::probe;
pub(crate) use random::{rdrand16, rdrand32, rdrand64};
