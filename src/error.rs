//! Error values returned by `RingBuffer`.

#[cfg(feature = "std")]
use std::error::Error;
use std::fmt;

/// Error value indicating insufficient capacity
///
/// This error only occur to `RingBuffer<_, Wrapping>`.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct CapacityError<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

const CAPERROR: &str = "insufficient capacity";

#[cfg(feature = "std")]
impl<T> Error for CapacityError<T> {}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CAPERROR)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CapacityError: {}", CAPERROR)
    }
}

/// Error value returned when a buffer is requested with zero slots.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ZeroCapacityError;

#[cfg(feature = "std")]
impl Error for ZeroCapacityError {}

impl fmt::Display for ZeroCapacityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("capacity must be non-zero")
    }
}
