//! Buffers.

use core::fmt;

use alloc::collections::TryReserveError;
use alloc::string::String;

/// An error indicating that the buffer is too small.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BufferTooSmallError(());

impl BufferTooSmallError {
    /// Creates a new error.
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self(())
    }
}

impl fmt::Display for BufferTooSmallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("destination buffer does not have enough capacity")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for BufferTooSmallError {}

/// Byte slice as a `fmt::Write` destination.
#[derive(Debug)]
pub(crate) struct ByteSliceBuf<'a> {
    /// Target slice.
    buf: &'a mut [u8],
    /// Content length, not the buffer size.
    len: usize,
    /// Set when a write did not fit.
    overflowed: bool,
}

impl<'a> ByteSliceBuf<'a> {
    /// Creates a byte slice buffer.
    #[inline]
    #[must_use]
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            len: 0,
            overflowed: false,
        }
    }

    /// Returns the written content.
    ///
    /// Returns an error if any write did not fit in the slice.
    pub(crate) fn into_str(self) -> Result<&'a str, BufferTooSmallError> {
        if self.overflowed {
            return Err(BufferTooSmallError::new());
        }
        let bytes = &self.buf[..self.len];
        // Only whole `&str`s are copied in, so the content is valid UTF-8.
        core::str::from_utf8(bytes).map_err(|_| BufferTooSmallError::new())
    }
}

impl fmt::Write for ByteSliceBuf<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let s_end = self.len + s.len();
        if self.buf.len() < s_end {
            self.overflowed = true;
            return Err(fmt::Error);
        }

        self.buf[self.len..s_end].copy_from_slice(s.as_bytes());
        self.len = s_end;

        Ok(())
    }
}

/// `fmt::Write for String` panics on allocation failure, so use custom wrapper.
#[derive(Debug)]
pub(crate) struct FmtWritableString<'a> {
    /// Backend buffer.
    buf: &'a mut String,
    /// Memory allocation error.
    error: Option<TryReserveError>,
}

impl<'a> FmtWritableString<'a> {
    /// Creates a new writer.
    #[inline]
    #[must_use]
    pub(crate) fn new(buf: &'a mut String) -> Self {
        Self { buf, error: None }
    }

    /// Takes the allocation error, if any write failed.
    #[inline]
    pub(crate) fn take_error(&mut self) -> Option<TryReserveError> {
        self.error.take()
    }
}

impl fmt::Write for FmtWritableString<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Err(e) = self.buf.try_reserve(s.len()) {
            self.error = Some(e);
            return Err(fmt::Error);
        }
        self.buf.push_str(s);
        Ok(())
    }
}
