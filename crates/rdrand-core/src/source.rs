//! Single-attempt hardware entropy source trait

/// A hardware random number source.
///
/// Implementations provide exactly one hardware attempt per `try_*` call
/// and never retry internally. Retry policy is applied by [`crate::fetch`].
///
/// # Implementations
///
/// - **x86/x86_64**: `rdrand-hal::HardwareSource` (CPUID probe + RDRAND)
/// - **Tests**: [`crate::MockSource`] with scripted failures
pub trait EntropySource {
    /// Whether the instruction is usable on this CPU.
    ///
    /// The first call may probe the hardware; implementations must cache
    /// the answer so every later call returns the same value.
    fn is_supported(&self) -> bool;

    /// One 16-bit attempt. `None` means the hardware produced no value.
    fn try_u16(&self) -> Option<u16>;

    /// One 32-bit attempt. `None` means the hardware produced no value.
    fn try_u32(&self) -> Option<u32>;

    /// One 64-bit attempt. `None` means the hardware produced no value.
    fn try_u64(&self) -> Option<u64>;
}

impl<S: EntropySource + ?Sized> EntropySource for &S {
    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    fn try_u16(&self) -> Option<u16> {
        (**self).try_u16()
    }

    fn try_u32(&self) -> Option<u32> {
        (**self).try_u32()
    }

    fn try_u64(&self) -> Option<u64> {
        (**self).try_u64()
    }
}
