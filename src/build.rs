//! URL builder.
//!
//! A URL is written in two phases:
//!
//! 1. authority: `scheme://[username[:password]@]host[:port]`, or the literal base.
//! 2. resource: `[/path][?query][#fragment]`.
//!
//! # Examples
//!
//! ```
//! use url_builder::build::Builder;
//! use url_builder::ports::DefaultPorts;
//! use url_builder::{StructuredBase, UrlSpec};
//!
//! let spec = UrlSpec::new(StructuredBase::new("wss", "chat.example.com").with_port(443))
//!     .with_path("/socket");
//!
//! // `wss` is not in the standard table.
//! assert_eq!(
//!     Builder::new().build(&spec),
//!     "wss://chat.example.com:443/socket"
//! );
//!
//! let builder = Builder::new().with_default_ports(DefaultPorts::well_known());
//! assert_eq!(builder.build(&spec), "wss://chat.example.com/socket");
//! ```

use core::fmt::{self, Write as _};

use alloc::string::String;

use crate::buffer::{ByteSliceBuf, FmtWritableString};
use crate::components::{Base, Query, StructuredBase, UrlSpec};
use crate::error::Error;
use crate::format::{eq_str_display, formatted_len};
use crate::percent_encode::PercentEncoded;
use crate::ports::DefaultPorts;

/// Builds the URL string using the standard default-port table.
///
/// This is same as `Builder::new().build(spec)`.
///
/// # Examples
///
/// ```
/// use url_builder::{build, UrlSpec};
///
/// let spec = UrlSpec::new("https://www.example.com")
///     .with_query_pair("height", "16")
///     .with_query_pair("width", "32");
/// assert_eq!(build(&spec), "https://www.example.com?height=16&width=32");
/// ```
#[must_use]
pub fn build(spec: &UrlSpec) -> String {
    Builder::new().build(spec)
}

/// URL builder.
///
/// A builder only holds the default-port table, so one builder can be
/// shared to build any number of URLs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Builder {
    /// Default ports to omit.
    default_ports: DefaultPorts,
}

impl Builder {
    /// Creates a builder with [`DefaultPorts::standard`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_ports: DefaultPorts::standard(),
        }
    }

    /// Replaces the default-port table.
    #[inline]
    #[must_use]
    pub fn with_default_ports(mut self, default_ports: DefaultPorts) -> Self {
        self.default_ports = default_ports;
        self
    }

    /// Returns the default-port table.
    #[inline]
    #[must_use]
    pub fn default_ports(&self) -> &DefaultPorts {
        &self.default_ports
    }

    /// Returns a proxy to write the URL through [`fmt::Display`].
    ///
    /// Nothing is allocated until the proxy is formatted.
    #[inline]
    #[must_use]
    pub fn display<'a>(&'a self, spec: &'a UrlSpec) -> Built<'a> {
        Built {
            spec,
            default_ports: &self.default_ports,
        }
    }

    /// Builds the URL string.
    ///
    /// # Panics
    ///
    /// Panics if failed to allocate memory.
    /// To avoid panic on allocation failure, use [`try_build`][`Self::try_build`].
    #[must_use]
    pub fn build(&self, spec: &UrlSpec) -> String {
        use alloc::string::ToString;

        self.display(spec).to_string()
    }

    /// Validates the input and builds the URL string.
    ///
    /// # Failures
    ///
    /// This fails if:
    ///
    /// * the structured base has an empty host,
    /// * the authentication has an empty username, or
    /// * failed to allocate memory.
    pub fn try_build(&self, spec: &UrlSpec) -> Result<String, Error> {
        validate(spec)?;
        let built = self.display(spec);
        let mut buf = String::new();
        buf.try_reserve(formatted_len(&built))?;
        let mut writer = FmtWritableString::new(&mut buf);
        if write!(writer, "{}", built).is_err() {
            if let Some(e) = writer.take_error() {
                return Err(e.into());
            }
        }
        Ok(buf)
    }

    /// Validates the input and writes the URL to the given byte slice.
    ///
    /// # Failures
    ///
    /// This fails if:
    ///
    /// * the structured base has an empty host,
    /// * the authentication has an empty username, or
    /// * the buffer is not large enough.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_builder::build::Builder;
    /// use url_builder::error::ErrorKind;
    /// use url_builder::UrlSpec;
    ///
    /// let spec = UrlSpec::new("http://example.com").with_path("index.html");
    ///
    /// let mut buf = [0_u8; 64];
    /// let built = Builder::new().write_to_byte_slice(&spec, &mut buf)?;
    /// assert_eq!(built, "http://example.com/index.html");
    ///
    /// let mut small = [0_u8; 8];
    /// let err = Builder::new()
    ///     .write_to_byte_slice(&spec, &mut small)
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::BufferFull);
    /// # Ok::<_, url_builder::Error>(())
    /// ```
    pub fn write_to_byte_slice<'b>(
        &self,
        spec: &UrlSpec,
        buf: &'b mut [u8],
    ) -> Result<&'b str, Error> {
        validate(spec)?;
        let mut writer = ByteSliceBuf::new(buf);
        // Overflow is recorded by the writer and reported by `into_str`.
        let _ = write!(writer, "{}", self.display(spec));
        Ok(writer.into_str()?)
    }
}

/// A proxy to write the built URL.
///
/// Created by [`Builder::display`].
#[derive(Debug, Clone, Copy)]
pub struct Built<'a> {
    /// Source description.
    spec: &'a UrlSpec,
    /// Default ports to omit.
    default_ports: &'a DefaultPorts,
}

impl fmt::Display for Built<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_authority(f, &self.spec.base, self.default_ports)?;
        write_resource(f, self.spec)
    }
}

impl PartialEq<str> for Built<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        eq_str_display(other, self)
    }
}

impl PartialEq<&str> for Built<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        eq_str_display(other, self)
    }
}

impl fmt::Display for UrlSpec {
    /// Writes the URL using the standard default-port table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let default_ports = DefaultPorts::standard();
        Built {
            spec: self,
            default_ports: &default_ports,
        }
        .fmt(f)
    }
}

/// Checks the fields which the types cannot enforce.
fn validate(spec: &UrlSpec) -> Result<(), Error> {
    let base = match &spec.base {
        Base::Literal(_) => return Ok(()),
        Base::Structured(base) => base,
    };
    if base.host.is_empty() {
        return Err(Error::empty_host());
    }
    if let Some(auth) = &base.authentication {
        if auth.username.is_empty() {
            return Err(Error::empty_username());
        }
    }
    Ok(())
}

/// Writes the authority phase.
fn write_authority<W: fmt::Write>(
    writer: &mut W,
    base: &Base,
    default_ports: &DefaultPorts,
) -> fmt::Result {
    let base = match base {
        Base::Literal(s) => return writer.write_str(s),
        Base::Structured(base) => base,
    };
    let StructuredBase {
        scheme,
        host,
        authentication,
        port,
    } = base;

    if let Some(scheme) = scheme {
        writer.write_str(scheme)?;
        writer.write_str("://")?;
    }
    if let Some(auth) = authentication {
        writer.write_str(&auth.username)?;
        if let Some(password) = &auth.password {
            writer.write_char(':')?;
            writer.write_str(password)?;
        }
        writer.write_char('@')?;
    }
    writer.write_str(host)?;
    if let Some(port) = *port {
        let is_default = scheme
            .as_deref()
            .map_or(false, |scheme| default_ports.is_default(scheme, port));
        if is_default {
            #[cfg(feature = "tracing")]
            tracing::trace!(scheme = scheme.as_deref(), port, "omitting default port");
        } else {
            write!(writer, ":{}", port)?;
        }
    }
    Ok(())
}

/// Writes the resource phase.
fn write_resource<W: fmt::Write>(writer: &mut W, spec: &UrlSpec) -> fmt::Result {
    if let Some(path) = spec.path.as_deref() {
        if !path.is_empty() {
            let rest = match path.strip_prefix('/') {
                Some(rest) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(path, "stripping leading slash");
                    rest
                }
                None => path,
            };
            writer.write_char('/')?;
            writer.write_str(rest)?;
        }
    }
    if let Some(query) = spec.query.as_ref().filter(|q| !q.is_empty()) {
        writer.write_char('?')?;
        write_query(writer, query)?;
    }
    if let Some(fragment) = &spec.fragment {
        writer.write_char('#')?;
        writer.write_str(fragment)?;
    }
    Ok(())
}

/// Writes the query pairs without the leading `?`.
fn write_query<W: fmt::Write>(writer: &mut W, query: &Query) -> fmt::Result {
    for (i, (key, value)) in query.iter().enumerate() {
        if i != 0 {
            writer.write_char('&')?;
        }
        write!(
            writer,
            "{}={}",
            PercentEncoded::from_query_part(key),
            PercentEncoded::from_query_part(value)
        )?;
    }
    Ok(())
}
