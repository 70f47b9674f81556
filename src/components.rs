//! Components of a URL description.
//!
//! A [`UrlSpec`] describes a URL by its parts. The base (scheme and authority)
//! is either a pre-formed string or a [`StructuredBase`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::format::Censored;

/// Structured description of a URL.
///
/// # Examples
///
/// ```
/// use url_builder::{StructuredBase, UrlSpec};
///
/// let spec = UrlSpec::new(StructuredBase::new("https", "www.example.com").with_port(8443))
///     .with_path("/search")
///     .with_query_pair("q", "rust")
///     .with_fragment("results");
/// assert_eq!(
///     spec.to_string(),
///     "https://www.example.com:8443/search?q=rust#results"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UrlSpec {
    /// Scheme and authority.
    pub base: Base,
    /// Resource path.
    ///
    /// A leading slash is optional.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub path: Option<String>,
    /// Query.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub query: Option<Query>,
    /// Fragment, without the leading `#`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub fragment: Option<String>,
}

impl UrlSpec {
    /// Creates a description with only the base.
    #[inline]
    #[must_use]
    pub fn new(base: impl Into<Base>) -> Self {
        Self {
            base: base.into(),
            path: None,
            query: None,
            fragment: None,
        }
    }

    /// Sets the path.
    #[inline]
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the query.
    #[inline]
    #[must_use]
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a key-value pair to the query.
    #[must_use]
    pub fn with_query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.get_or_insert_with(Query::new).insert(key, value);
        self
    }

    /// Sets the fragment.
    #[inline]
    #[must_use]
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }
}

/// Scheme and authority of a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Base {
    /// Pre-formed string, used verbatim.
    Literal(String),
    /// Base built from its parts.
    Structured(StructuredBase),
}

impl From<&str> for Base {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Literal(s.into())
    }
}

impl From<String> for Base {
    #[inline]
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl From<StructuredBase> for Base {
    #[inline]
    fn from(base: StructuredBase) -> Self {
        Self::Structured(base)
    }
}

/// Base built from scheme, credentials, host, and port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructuredBase {
    /// Scheme, without `://`.
    ///
    /// When absent, the base starts with the credentials or the host.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub scheme: Option<String>,
    /// Host.
    #[cfg_attr(feature = "serde", serde(rename = "domains", alias = "hostname"))]
    pub host: String,
    /// Credentials.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub authentication: Option<Authentication>,
    /// Port.
    ///
    /// Omitted from the output if it is the default port of the scheme.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub port: Option<u16>,
}

impl StructuredBase {
    /// Creates a base from the scheme and the host.
    #[inline]
    #[must_use]
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: Some(scheme.into()),
            host: host.into(),
            authentication: None,
            port: None,
        }
    }

    /// Creates a base without scheme.
    #[inline]
    #[must_use]
    pub fn without_scheme(host: impl Into<String>) -> Self {
        Self {
            scheme: None,
            host: host.into(),
            authentication: None,
            port: None,
        }
    }

    /// Sets the port.
    #[inline]
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the credentials.
    #[inline]
    #[must_use]
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }
}

/// Credentials rendered as the userinfo.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Authentication {
    /// Username.
    pub username: String,
    /// Password.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub password: Option<String>,
}

impl Authentication {
    /// Creates credentials with only the username.
    #[inline]
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: None,
        }
    }

    /// Sets the password.
    #[inline]
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

impl core::fmt::Debug for Authentication {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Authentication")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| Censored))
            .finish()
    }
}

/// Ordered mapping from query key to value.
///
/// Pairs are kept in insertion order. Inserting an existing key replaces its
/// value and keeps its position.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    /// Pairs in insertion order, with unique keys.
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Sets the value of the key, and returns the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(core::mem::replace(v, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    /// Returns the value of the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns an iterator of key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of pairs.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the query has no pairs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        query.extend(iter);
        query
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Query {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

#[cfg(feature = "serde")]
mod __serde {
    use super::Query;

    use core::fmt;

    use alloc::string::String;

    use serde::{
        de::{MapAccess, Visitor},
        ser::SerializeMap,
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl Serialize for Query {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (k, v) in self.iter() {
                map.serialize_entry(k, v)?;
            }
            map.end()
        }
    }

    /// Custom map visitor for `Query`, which keeps the entry order.
    struct QueryVisitor;

    impl<'de> Visitor<'de> for QueryVisitor {
        type Value = Query;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from query key to value")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut query = Query::new();
            while let Some((k, v)) = access.next_entry::<String, String>()? {
                query.insert(k, v);
            }
            Ok(query)
        }
    }

    impl<'de> Deserialize<'de> for Query {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(QueryVisitor)
        }
    }
}
