//! Backend for targets without RDRAND
//!
//! The probe always fails, so `HardwareSource` never reaches the step
//! functions; they exist to keep the call sites identical to x86.

pub fn probe() -> bool {
    log::debug!("rdrand: not an x86 target, hardware source unsupported");
    false
}

/// # Safety
/// Always safe; `unsafe` only to match the x86 signature.
pub unsafe fn rdrand16() -> Option<u16> {
    None
}

/// # Safety
/// Always safe; `unsafe` only to match the x86 signature.
pub unsafe fn rdrand32() -> Option<u32> {
    None
}

/// # Safety
/// Always safe; `unsafe` only to match the x86 signature.
pub unsafe fn rdrand64() -> Option<u64> {
    None
}
