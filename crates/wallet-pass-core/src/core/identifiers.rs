// crates/wallet-pass-core/src/core/identifiers.rs
// ============================================================================
// Module: Wallet Pass Identifiers
// Description: Canonical opaque identifiers carried in pass headers.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Pass headers carry three identifiers: the pass type identifier and team
//! identifier issued by the wallet vendor, and the serial number assigned by
//! the persistence layer. Identifiers are opaque and serialize as strings.
//! Emptiness is checked at config load and assembly boundaries rather than
//! within these wrappers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Pass type identifier registered with the wallet vendor (`pass.com.example`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassTypeIdentifier(String);

impl PassTypeIdentifier {
    /// Creates a new pass type identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PassTypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PassTypeIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PassTypeIdentifier {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Developer team identifier that owns the signing certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamIdentifier(String);

impl TeamIdentifier {
    /// Creates a new team identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TeamIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TeamIdentifier {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Stable serial number assigned to a stored record by the persistence layer.
///
/// # Invariants
/// - The assembler rejects blank serial numbers before building a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    /// Creates a new serial number.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the serial number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the serial number is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for SerialNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SerialNumber {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
