//! Default ports of schemes.
//!
//! A port that equals the default port of the scheme is implied by the scheme,
//! and is omitted from the built URL.
//!
//! # Examples
//!
//! ```
//! use url_builder::ports::DefaultPorts;
//!
//! let ports = DefaultPorts::standard();
//! assert_eq!(ports.get("https"), Some(443));
//! assert_eq!(ports.get("HTTP"), Some(80));
//! assert_eq!(ports.get("ftp"), None);
//!
//! let ports = ports.with("ftp", 21);
//! assert!(ports.is_default("ftp", 21));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

/// Table of default ports, keyed by scheme.
///
/// Schemes are compared ASCII case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefaultPorts {
    /// Entries in insertion order.
    ///
    /// Schemes are stored as given, and no two entries have the same scheme
    /// modulo ASCII case.
    entries: Vec<(String, u16)>,
}

impl DefaultPorts {
    /// Creates an empty table.
    ///
    /// With an empty table, no port is ever omitted.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a table with `http` (80) and `https` (443).
    #[must_use]
    pub fn standard() -> Self {
        Self::new().with("http", 80).with("https", 443)
    }

    /// Creates a table with the standard entries, `ws` (80), `wss` (443) and `ftp` (21).
    #[must_use]
    pub fn well_known() -> Self {
        Self::standard()
            .with("ws", 80)
            .with("wss", 443)
            .with("ftp", 21)
    }

    /// Returns the table with the given entry added.
    #[inline]
    #[must_use]
    pub fn with(mut self, scheme: impl Into<String>, port: u16) -> Self {
        self.insert(scheme, port);
        self
    }

    /// Sets the default port of the scheme, and returns the previous one.
    pub fn insert(&mut self, scheme: impl Into<String>, port: u16) -> Option<u16> {
        let scheme = scheme.into();
        match self.position(&scheme) {
            Some(i) => Some(core::mem::replace(&mut self.entries[i].1, port)),
            None => {
                self.entries.push((scheme, port));
                None
            }
        }
    }

    /// Removes the scheme from the table, and returns its default port.
    pub fn remove(&mut self, scheme: &str) -> Option<u16> {
        self.position(scheme).map(|i| self.entries.remove(i).1)
    }

    /// Returns the default port of the scheme.
    #[must_use]
    pub fn get(&self, scheme: &str) -> Option<u16> {
        self.position(scheme).map(|i| self.entries[i].1)
    }

    /// Returns true if the port is the default port of the scheme.
    #[inline]
    #[must_use]
    pub fn is_default(&self, scheme: &str, port: u16) -> bool {
        self.get(scheme) == Some(port)
    }

    /// Returns an iterator of `(scheme, port)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> + '_ {
        self.entries.iter().map(|(s, p)| (s.as_str(), *p))
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the index of the scheme.
    fn position(&self, scheme: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(s, _)| s.eq_ignore_ascii_case(scheme))
    }
}

impl Default for DefaultPorts {
    /// Same as [`DefaultPorts::standard`].
    #[inline]
    fn default() -> Self {
        Self::standard()
    }
}

impl<S: Into<String>> FromIterator<(S, u16)> for DefaultPorts {
    fn from_iter<I: IntoIterator<Item = (S, u16)>>(iter: I) -> Self {
        let mut ports = Self::new();
        ports.extend(iter);
        ports
    }
}

impl<S: Into<String>> Extend<(S, u16)> for DefaultPorts {
    fn extend<I: IntoIterator<Item = (S, u16)>>(&mut self, iter: I) {
        for (scheme, port) in iter {
            self.insert(scheme, port);
        }
    }
}

#[cfg(feature = "serde")]
mod __serde {
    use super::DefaultPorts;

    use core::fmt;

    use alloc::string::String;

    use serde::{
        de::{self, MapAccess, Visitor},
        ser::SerializeMap,
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl Serialize for DefaultPorts {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (scheme, port) in self.iter() {
                map.serialize_entry(scheme, &port)?;
            }
            map.end()
        }
    }

    /// Custom map visitor for `DefaultPorts`.
    struct DefaultPortsVisitor;

    impl<'de> Visitor<'de> for DefaultPortsVisitor {
        type Value = DefaultPorts;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from scheme to port number")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut ports = DefaultPorts::new();
            while let Some((scheme, port)) = access.next_entry::<String, u16>()? {
                if ports.insert(scheme, port).is_some() {
                    return Err(de::Error::custom("duplicate scheme in default port table"));
                }
            }
            Ok(ports)
        }
    }

    impl<'de> Deserialize<'de> for DefaultPorts {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(DefaultPortsVisitor)
        }
    }
}
