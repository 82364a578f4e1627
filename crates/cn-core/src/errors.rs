//! Error types for campus-navigator.
//!
//! Schedule resolution itself never fails: a missing rule degrades to a
//! closed result. Errors are produced only at the edges, when text is parsed
//! into dates, times, or facility identifiers, and when a rule store is
//! validated at construction time.

use thiserror::Error;

/// The top-level error type used throughout campus-navigator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Time-of-day error (malformed `HH:mm`, out-of-range hour or minute).
    #[error("time error: {0}")]
    Time(String),

    /// A facility identifier outside the closed enumeration.
    #[error("unknown facility: {0}")]
    UnknownFacility(String),

    /// Schedule or engine configuration is malformed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout campus-navigator.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cn_core::{ensure, errors::Error};
/// fn positive(x: i32) -> cn_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use cn_core::{fail, errors::Error};
/// fn always_err() -> cn_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(n: u8) -> Result<u8> {
        ensure!(n < 24, "hour {n} out of range");
        Ok(n)
    }

    #[test]
    fn ensure_maps_to_precondition() {
        assert_eq!(checked(9), Ok(9));
        assert_eq!(
            checked(25),
            Err(Error::Precondition("hour 25 out of range".into()))
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::UnknownFacility("gym".into()).to_string(),
            "unknown facility: gym"
        );
        assert_eq!(
            Error::Config("range ends before it starts".into()).to_string(),
            "invalid configuration: range ends before it starts"
        );
    }
}
