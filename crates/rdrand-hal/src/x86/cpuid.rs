//! RDRAND support detection via CPUID
//!
//! Stage one reads the leaf 0 vendor string and requires `GenuineIntel`.
//! Stage two reads leaf 1 and checks the RDRAND feature bit (ECX bit 30).

use log::debug;
use raw_cpuid::CpuId;

/// Vendor string the probe accepts
pub const INTEL_VENDOR: &str = "GenuineIntel";

/// Run the probe against the current CPU.
pub fn probe() -> bool {
    let cpuid = CpuId::new();
    let vendor = cpuid.get_vendor_info();
    let vendor = vendor.as_ref().map(|v| v.as_str()).unwrap_or("");
    let has_rdrand = cpuid.get_feature_info().is_some_and(|f| f.has_rdrand());

    let supported = accepts(vendor, has_rdrand);
    debug!(
        "rdrand: cpuid vendor={:?} rdrand_bit={} supported={}",
        vendor, has_rdrand, supported
    );
    supported
}

/// Both stages must pass.
fn accepts(vendor: &str, has_rdrand: bool) -> bool {
    vendor == INTEL_VENDOR && has_rdrand
}
