//! # Stark Signature
//!
//! The `(r, s)` pair of a Stark ECDSA signature as the REST API carries it:
//! two hex strings under the keys `r` and `s`.
//!
//! Records that embed a signature treat it opaquely. They delegate equality
//! and serialization to this type and never inspect the components.

use serde::{Deserialize, Serialize};

/// A Stark ECDSA signature over a transfer message hash.
///
/// Components are kept as the strings the API sent. No curve or range
/// checks happen here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Signature {
    r: String,
    s: String,
}

impl Signature {
    /// Build a signature from its `r` and `s` components.
    pub fn new(r: impl Into<String>, s: impl Into<String>) -> Self {
        Self {
            r: r.into(),
            s: s.into(),
        }
    }

    /// The `r` component.
    pub fn r(&self) -> &str {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &str {
        &self.s
    }

    pub fn set_r(&mut self, r: impl Into<String>) {
        self.r = r.into();
    }

    pub fn set_s(&mut self, s: impl Into<String>) {
        self.s = s.into();
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(r={}, s={})", self.r, self.s)
    }
}
