//! Fetch units
//!
//! The hardware produces 16-, 32- or 64-bit values. `Word` abstracts the
//! width so the fill algorithms can be written once and checked for both
//! 4-byte and 8-byte platforms on any host.

use core::fmt::Debug;

use crate::source::EntropySource;

/// A value the hardware can produce in one step.
pub trait Word: Copy + Default + Eq + Debug + Send + Sync + 'static {
    /// Width in bytes
    const BYTES: usize;

    /// Width in bits, for log messages
    const BITS: u32;

    /// Byte representation of one word
    type Bytes: AsRef<[u8]> + AsMut<[u8]>;

    /// One hardware attempt at this width.
    fn step<S: EntropySource + ?Sized>(source: &S) -> Option<Self>;

    /// Bytes least-significant first, independent of host byte order.
    fn to_le_bytes(self) -> Self::Bytes;

    /// Bytes in host order, as a direct word store would lay them out.
    fn to_ne_bytes(self) -> Self::Bytes;
}

macro_rules! impl_word {
    ($ty:ty, $step:ident) => {
        impl Word for $ty {
            const BYTES: usize = core::mem::size_of::<$ty>();
            const BITS: u32 = <$ty>::BITS;
            type Bytes = [u8; core::mem::size_of::<$ty>()];

            #[inline]
            fn step<S: EntropySource + ?Sized>(source: &S) -> Option<Self> {
                source.$step()
            }

            #[inline]
            fn to_le_bytes(self) -> Self::Bytes {
                <$ty>::to_le_bytes(self)
            }

            #[inline]
            fn to_ne_bytes(self) -> Self::Bytes {
                <$ty>::to_ne_bytes(self)
            }
        }
    };
}

impl_word!(u16, try_u16);
impl_word!(u32, try_u32);
impl_word!(u64, try_u64);

/// The platform fetch unit: 8 bytes on 64-bit targets, 4 bytes otherwise.
#[cfg(target_pointer_width = "64")]
pub type NativeWord = u64;

/// The platform fetch unit: 8 bytes on 64-bit targets, 4 bytes otherwise.
#[cfg(not(target_pointer_width = "64"))]
pub type NativeWord = u32;

/// Alignment granularity of buffer fills
pub const WORD_BYTES: usize = NativeWord::BYTES;
