//! Newtype wrappers for opaque references.
//!
//! The engine never looks inside an image reference: it may be a file path,
//! an `https://` URL or a `data:` URI produced by the editor.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// A reference to an embeddable image resource.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ImageRef(Arc<str>);

impl ImageRef {
    /// Creates a new ImageRef from a string
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    /// Returns the string representation of this reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `None` for blank input, which the editor uses to mean "no image".
    pub fn non_empty(uri: &str) -> Option<Self> {
        if uri.trim().is_empty() {
            None
        } else {
            Some(Self::new(uri))
        }
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ImageRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ImageRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(ImageRef::from)
    }
}
