//! Percent encoding.
//!
//! Keys and values of a query are encoded so that they cannot be confused
//! with the `&`, `=`, and `#` separators of the query string.

use core::fmt::{self, Write as _};

/// A proxy to percent-encode a key or a value of a query pair.
///
/// Keys and values share one encoding. Every character other than
/// `unreserved` (ASCII alphanumerics, `-`, `.`, `_`, and `~`) is written as
/// `%XX` of its UTF-8 bytes, with uppercase hex digits.
///
/// # Examples
///
/// ```
/// use url_builder::percent_encode::PercentEncoded;
///
/// let encoded = PercentEncoded::from_query_part("a b&c=d/\u{03B1}");
/// assert_eq!(encoded.to_string(), "a%20b%26c%3Dd%2F%CE%B1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PercentEncoded<T> {
    /// Raw string before being encoded.
    raw: T,
}

impl<T: fmt::Display> PercentEncoded<T> {
    /// Creates an encoded string from a raw query key or value.
    pub fn from_query_part(raw: T) -> Self {
        Self { raw }
    }
}

impl<T: fmt::Display> fmt::Display for PercentEncoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Filter that encodes a character before written if necessary.
        struct Filter<'a, 'b> {
            /// Writer.
            writer: &'a mut fmt::Formatter<'b>,
        }
        impl fmt::Write for Filter<'_, '_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                s.chars().try_for_each(|c| self.write_char(c))
            }
            fn write_char(&mut self, c: char) -> fmt::Result {
                if c.is_ascii() && is_ascii_unreserved(c as u8) {
                    self.writer.write_char(c)
                } else {
                    write_pct_encoded_char(&mut self.writer, c)
                }
            }
        }
        let mut filter = Filter { writer: f };
        write!(filter, "{}", self.raw)
    }
}

/// Checks if the given ASCII byte matches `unreserved` rule.
#[inline]
fn is_ascii_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Percent-encodes the given character and writes it.
#[inline]
fn write_pct_encoded_char<W: fmt::Write>(writer: &mut W, c: char) -> fmt::Result {
    let mut buf = [0_u8; 4];
    let buf = c.encode_utf8(&mut buf);
    buf.bytes().try_for_each(|b| write!(writer, "%{:02X}", b))
}
