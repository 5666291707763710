//! C ABI exports
//!
//! These functions keep the classic `rdrand.h` interface: every call
//! returns an integer status (`1` success, `-1` not ready, `-3`
//! unsupported) and writes through caller-supplied pointers.
//!
//! ```c
//! int rdrand_16(uint16_t *x, int retry);
//! int rdrand_32(uint32_t *x, int retry);
//! int rdrand_64(uint64_t *x, int retry);            /* 64-bit targets */
//! int rdrand_get_n_32(unsigned int n, uint32_t *x);
//! int rdrand_get_n_64(unsigned int n, uint64_t *x); /* 64-bit targets */
//! int rdrand_get_bytes(unsigned int n, unsigned char *buffer);
//! int rdrand_supported(void);
//! ```
//!
//! A null destination with a non-zero count yields
//! [`RDRAND_INVALID_ARGUMENT`]. A zero count succeeds for any pointer.

use core::ffi::{c_int, c_uint};
use core::slice;

use crate::{RdrandError, Status, Word, RDRAND};

pub const RDRAND_SUCCESS: c_int = Status::Success as c_int;
pub const RDRAND_NOT_READY: c_int = Status::NotReady as c_int;
pub const RDRAND_SUPPORTED: c_int = Status::Supported as c_int;
pub const RDRAND_UNSUPPORTED: c_int = Status::Unsupported as c_int;
pub const RDRAND_SUPPORT_UNKNOWN: c_int = Status::SupportUnknown as c_int;
/// ABI-only: a required pointer was null
pub const RDRAND_INVALID_ARGUMENT: c_int = -5;

fn status<T>(result: &Result<T, RdrandError>) -> c_int {
    Status::of(result).code() as c_int
}

/// Write one fetched value through `x`.
///
/// # Safety
/// `x` must be null or valid for a write of `T`.
unsafe fn store<T>(x: *mut T, fetch: impl FnOnce() -> Result<T, RdrandError>) -> c_int {
    if x.is_null() {
        return RDRAND_INVALID_ARGUMENT;
    }
    let result = fetch();
    let code = status(&result);
    if let Ok(value) = result {
        // SAFETY: non-null, and the caller guarantees validity.
        unsafe { x.write(value) };
    }
    code
}

/// Fill `n` words at `x`.
///
/// # Safety
/// When `n > 0`, `x` must be null or valid and aligned for `n` writes of `W`.
unsafe fn fill_n<W: Word>(n: c_uint, x: *mut W) -> c_int {
    if n == 0 {
        return RDRAND_SUCCESS;
    }
    if x.is_null() {
        return RDRAND_INVALID_ARGUMENT;
    }
    // SAFETY: non-null, and the caller guarantees `n` valid, aligned slots.
    let dest = unsafe { slice::from_raw_parts_mut(x, n as usize) };
    status(&RDRAND.fill_words(dest))
}

/// 1 if RDRAND is usable, 0 otherwise.
#[no_mangle]
pub extern "C" fn rdrand_supported() -> c_int {
    RDRAND.is_supported() as c_int
}

/// # Safety
/// `x` must be null or valid for a write of `u16`.
#[no_mangle]
pub unsafe extern "C" fn rdrand_16(x: *mut u16, retry: c_int) -> c_int {
    unsafe { store(x, || RDRAND.fetch_u16(retry != 0)) }
}

/// # Safety
/// `x` must be null or valid for a write of `u32`.
#[no_mangle]
pub unsafe extern "C" fn rdrand_32(x: *mut u32, retry: c_int) -> c_int {
    unsafe { store(x, || RDRAND.fetch_u32(retry != 0)) }
}

/// # Safety
/// `x` must be null or valid for a write of `u64`.
#[cfg(target_pointer_width = "64")]
#[no_mangle]
pub unsafe extern "C" fn rdrand_64(x: *mut u64, retry: c_int) -> c_int {
    unsafe { store(x, || RDRAND.fetch_u64(retry != 0)) }
}

/// # Safety
/// When `n > 0`, `x` must be null or valid and aligned for `n` `u32` writes.
#[no_mangle]
pub unsafe extern "C" fn rdrand_get_n_32(n: c_uint, x: *mut u32) -> c_int {
    unsafe { fill_n(n, x) }
}

/// # Safety
/// When `n > 0`, `x` must be null or valid and aligned for `n` `u64` writes.
#[cfg(target_pointer_width = "64")]
#[no_mangle]
pub unsafe extern "C" fn rdrand_get_n_64(n: c_uint, x: *mut u64) -> c_int {
    unsafe { fill_n(n, x) }
}

/// Fill `n` bytes at any alignment.
///
/// # Safety
/// When `n > 0`, `buffer` must be null or valid for `n` byte writes.
#[no_mangle]
pub unsafe extern "C" fn rdrand_get_bytes(n: c_uint, buffer: *mut u8) -> c_int {
    if n == 0 {
        return RDRAND_SUCCESS;
    }
    if buffer.is_null() {
        return RDRAND_INVALID_ARGUMENT;
    }
    // SAFETY: non-null, and the caller guarantees `n` writable bytes.
    let dest = unsafe { slice::from_raw_parts_mut(buffer, n as usize) };
    status(&RDRAND.fill_bytes(dest))
}
