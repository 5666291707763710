//! Failure outcomes and their integer status codes

use core::fmt;

/// Random fetch errors
///
/// Callers must not treat the two variants the same way: `NotReady` means
/// "try again later", `Unsupported` means "this platform cannot do this".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RdrandError {
    /// The hardware declined to produce a value within the retry budget
    NotReady,
    /// The CPU lacks the instruction (permanent for the process)
    Unsupported,
}

impl RdrandError {
    /// Whether a later, independent call may succeed.
    pub fn is_transient(self) -> bool {
        matches!(self, Self::NotReady)
    }

    /// Integer status code for this error.
    pub fn status(self) -> Status {
        match self {
            Self::NotReady => Status::NotReady,
            Self::Unsupported => Status::Unsupported,
        }
    }
}

impl fmt::Display for RdrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => f.write_str("hardware random source not ready"),
            Self::Unsupported => f.write_str("hardware random source not supported"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RdrandError {}

/// Integer status codes shared with the C ABI.
///
/// `Supported` and `SupportUnknown` describe the support cache; they are
/// never returned by a fetch or fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum Status {
    Success = 1,
    NotReady = -1,
    Supported = -2,
    Unsupported = -3,
    SupportUnknown = -4,
}

impl Status {
    /// Convert from the raw code
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            1 => Some(Self::Success),
            -1 => Some(Self::NotReady),
            -2 => Some(Self::Supported),
            -3 => Some(Self::Unsupported),
            -4 => Some(Self::SupportUnknown),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Collapse a call outcome into its status.
    pub fn of<T>(result: &Result<T, RdrandError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(e) => e.status(),
        }
    }
}

impl From<RdrandError> for Status {
    fn from(e: RdrandError) -> Self {
        e.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(RdrandError::NotReady.is_transient());
        assert!(!RdrandError::Unsupported.is_transient());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Success.code(), 1);
        assert_eq!(RdrandError::NotReady.status().code(), -1);
        assert_eq!(RdrandError::Unsupported.status().code(), -3);
        assert_eq!(Status::of::<()>(&Ok(())), Status::Success);
        assert_eq!(Status::of::<u32>(&Err(RdrandError::NotReady)), Status::NotReady);
    }

    #[test]
    fn test_status_from_i32() {
        for status in [
            Status::Success,
            Status::NotReady,
            Status::Supported,
            Status::Unsupported,
            Status::SupportUnknown,
        ] {
            assert_eq!(Status::from_i32(status.code()), Some(status));
        }
        assert_eq!(Status::from_i32(0), None);
        assert_eq!(Status::from_i32(-5), None);
    }

    #[test]
    fn test_display() {
        use std::string::ToString;
        assert_eq!(
            RdrandError::NotReady.to_string(),
            "hardware random source not ready"
        );
    }
}
