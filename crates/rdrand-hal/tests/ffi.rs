//! C ABI tests (requires the `ffi` feature)

use core::ptr;

use rdrand_hal::ffi::{
    rdrand_16, rdrand_32, rdrand_get_bytes, rdrand_get_n_32, rdrand_supported,
    RDRAND_INVALID_ARGUMENT, RDRAND_NOT_READY, RDRAND_SUCCESS, RDRAND_SUPPORTED,
    RDRAND_SUPPORT_UNKNOWN, RDRAND_UNSUPPORTED,
};
use rdrand_hal::is_hardware_random_supported;

fn expected_status() -> i32 {
    if is_hardware_random_supported() {
        RDRAND_SUCCESS
    } else {
        RDRAND_UNSUPPORTED
    }
}

#[test]
fn test_status_codes_match_header() {
    assert_eq!(RDRAND_SUCCESS, 1);
    assert_eq!(RDRAND_NOT_READY, -1);
    assert_eq!(RDRAND_SUPPORTED, -2);
    assert_eq!(RDRAND_UNSUPPORTED, -3);
    assert_eq!(RDRAND_SUPPORT_UNKNOWN, -4);
}

#[test]
fn test_supported_flag() {
    assert_eq!(rdrand_supported() == 1, is_hardware_random_supported());
}

#[test]
fn test_single_values() {
    let mut a = 0u16;
    let mut b = 0u32;
    assert_eq!(unsafe { rdrand_16(&mut a, 1) }, expected_status());
    assert_eq!(unsafe { rdrand_32(&mut b, 1) }, expected_status());
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_u64_exports() {
    use rdrand_hal::ffi::{rdrand_64, rdrand_get_n_64};

    let mut x = 0u64;
    assert_eq!(unsafe { rdrand_64(&mut x, 1) }, expected_status());

    let mut words = [0u64; 8];
    assert_eq!(
        unsafe { rdrand_get_n_64(words.len() as u32, words.as_mut_ptr()) },
        expected_status()
    );
}

#[test]
fn test_null_pointers_rejected() {
    assert_eq!(unsafe { rdrand_16(ptr::null_mut(), 1) }, RDRAND_INVALID_ARGUMENT);
    assert_eq!(unsafe { rdrand_32(ptr::null_mut(), 0) }, RDRAND_INVALID_ARGUMENT);
    assert_eq!(unsafe { rdrand_get_n_32(4, ptr::null_mut()) }, RDRAND_INVALID_ARGUMENT);
    assert_eq!(unsafe { rdrand_get_bytes(4, ptr::null_mut()) }, RDRAND_INVALID_ARGUMENT);
}

#[test]
fn test_zero_count_succeeds_for_any_pointer() {
    assert_eq!(unsafe { rdrand_get_n_32(0, ptr::null_mut()) }, RDRAND_SUCCESS);
    assert_eq!(unsafe { rdrand_get_bytes(0, ptr::null_mut()) }, RDRAND_SUCCESS);
}

#[test]
fn test_get_bytes_misaligned() {
    let mut buf = [0u8; 40];
    let status = unsafe { rdrand_get_bytes(33, buf.as_mut_ptr().add(3)) };
    assert_eq!(status, expected_status());
    assert_eq!(&buf[..3], &[0, 0, 0]);
    assert_eq!(&buf[36..], &[0, 0, 0, 0]);
}

#[test]
fn test_get_n_32() {
    let mut words = [0u32; 12];
    let status = unsafe { rdrand_get_n_32(words.len() as u32, words.as_mut_ptr()) };
    assert_eq!(status, expected_status());
}
