//! Single RDRAND attempts
//!
//! Each function executes the instruction once and reports the carry
//! flag: `None` means the DRNG had no value ready. Retrying is left to
//! `rdrand-core`.

#[cfg(target_arch = "x86")]
use core::arch::x86::{_rdrand16_step, _rdrand32_step};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{_rdrand16_step, _rdrand32_step, _rdrand64_step};

/// Read a random 16-bit value
///
/// # Safety
/// The CPU must support RDRAND.
#[inline]
pub unsafe fn rdrand16() -> Option<u16> {
    let mut value = 0u16;
    // SAFETY: the caller guarantees RDRAND support.
    let ok = unsafe { _rdrand16_step(&mut value) };
    (ok != 0).then_some(value)
}

/// Read a random 32-bit value
///
/// # Safety
/// The CPU must support RDRAND.
#[inline]
pub unsafe fn rdrand32() -> Option<u32> {
    let mut value = 0u32;
    // SAFETY: the caller guarantees RDRAND support.
    let ok = unsafe { _rdrand32_step(&mut value) };
    (ok != 0).then_some(value)
}

/// Read a random 64-bit value
///
/// # Safety
/// The CPU must support RDRAND.
#[cfg(target_arch = "x86_64")]
#[inline]
pub unsafe fn rdrand64() -> Option<u64> {
    let mut value = 0u64;
    // SAFETY: the caller guarantees RDRAND support.
    let ok = unsafe { _rdrand64_step(&mut value) };
    (ok != 0).then_some(value)
}

/// Read a random 64-bit value as two 32-bit steps, low half first
///
/// Fails if either half fails.
///
/// # Safety
/// The CPU must support RDRAND.
#[cfg(target_arch = "x86")]
#[inline]
pub unsafe fn rdrand64() -> Option<u64> {
    // SAFETY: forwarded from the caller.
    let lo = unsafe { rdrand32() }?;
    let hi = unsafe { rdrand32() }?;
    Some(u64::from(lo) | (u64::from(hi) << 32))
}
