//! URL building error.

use core::fmt;

use alloc::collections::TryReserveError;

use crate::buffer::BufferTooSmallError;

/// Error on fallible URL building.
///
/// Returned by [`Builder::try_build`][`crate::build::Builder::try_build`] and
/// [`Builder::write_to_byte_slice`][`crate::build::Builder::write_to_byte_slice`].
#[derive(Debug, Clone)]
pub struct Error {
    /// Inner error representation.
    // Use indirect private type to keep `BufferTooSmallError` private.
    repr: ErrorRepr,
}

impl Error {
    /// Returns the kind of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::EmptyHost => ErrorKind::EmptyHost,
            ErrorRepr::EmptyUsername => ErrorKind::EmptyUsername,
            ErrorRepr::BufferFull(_) => ErrorKind::BufferFull,
            ErrorRepr::Allocate(_) => ErrorKind::Allocate,
        }
    }

    /// Creates an error for a structured base without host.
    #[inline]
    #[must_use]
    pub(crate) fn empty_host() -> Self {
        Self {
            repr: ErrorRepr::EmptyHost,
        }
    }

    /// Creates an error for an authentication without username.
    #[inline]
    #[must_use]
    pub(crate) fn empty_username() -> Self {
        Self {
            repr: ErrorRepr::EmptyUsername,
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            ErrorRepr::EmptyHost => f.write_str("host must not be empty"),
            ErrorRepr::EmptyUsername => {
                f.write_str("username must not be empty when authentication is given")
            }
            ErrorRepr::BufferFull(_) => f.write_str("buffer full"),
            ErrorRepr::Allocate(_) => f.write_str("memory allocation failed"),
        }
    }
}

impl From<BufferTooSmallError> for Error {
    #[inline]
    fn from(e: BufferTooSmallError) -> Self {
        Self {
            repr: ErrorRepr::BufferFull(e),
        }
    }
}

impl From<TryReserveError> for Error {
    #[inline]
    fn from(e: TryReserveError) -> Self {
        Self {
            repr: ErrorRepr::Allocate(e),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.repr {
            ErrorRepr::EmptyHost | ErrorRepr::EmptyUsername => None,
            ErrorRepr::BufferFull(e) => Some(e),
            ErrorRepr::Allocate(e) => Some(e),
        }
    }
}

/// Kind of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Structured base has an empty host.
    EmptyHost,
    /// Authentication is given but its username is empty.
    EmptyUsername,
    /// Destination buffer is too small.
    BufferFull,
    /// Memory allocation failed.
    Allocate,
}

/// Internal representation of `Error`.
// Wrapped errors are only read by `std::error::Error::source()`.
#[cfg_attr(not(feature = "std"), allow(dead_code))]
#[derive(Debug, Clone)]
enum ErrorRepr {
    /// Host is empty.
    EmptyHost,
    /// Username is empty.
    EmptyUsername,
    /// Fixed-size buffer is too small.
    BufferFull(BufferTooSmallError),
    /// Memory allocation error.
    Allocate(TryReserveError),
}
