// crates/wallet-pass-core/src/core/address.rs
// ============================================================================
// Module: Wallet Pass Postal Address
// Description: Postal address components and their two rendering rules.
// Purpose: Keep the contact-card and back-field address rules named and separate.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A postal address is five optional components treated as one group: the
//! presence of any component triggers address output. Two rendering rules
//! exist and are intentionally not merged:
//! - [`PostalAddress::vcard_components`] keeps all five positions, leaving
//!   absent components empty (`street;city;region;postal;country`).
//! - [`PostalAddress::display_line`] drops blank components and joins the rest
//!   with `", "` for the back of the pass.
//!
//! The divergence is inherited from the form backend and may be unintended;
//! callers pick the rule explicitly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::records::present;

// ============================================================================
// SECTION: Postal Address
// ============================================================================

/// Postal address components as submitted by the business-card form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    /// Street line (form key `address`).
    #[serde(default, rename = "address")]
    pub street: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Region or state (form key `state`).
    #[serde(default, rename = "state")]
    pub region: Option<String>,
    /// Postal code (form key `zipCode`).
    #[serde(default, rename = "zipCode")]
    pub postal_code: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<String>,
}

impl PostalAddress {
    /// Returns the components in fixed order: street, city, region, postal code, country.
    #[must_use]
    pub fn components(&self) -> [Option<&str>; 5] {
        [
            present(self.street.as_ref()),
            present(self.city.as_ref()),
            present(self.region.as_ref()),
            present(self.postal_code.as_ref()),
            present(self.country.as_ref()),
        ]
    }

    /// Returns true when at least one component is present.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.components().iter().any(Option::is_some)
    }

    /// Renders the five `;`-separated positions used by the contact card.
    ///
    /// Returns `None` when no component is present. Absent components render
    /// as empty positions so the five-part structure is preserved.
    #[must_use]
    pub fn vcard_components(&self) -> Option<String> {
        if !self.is_present() {
            return None;
        }
        let parts: Vec<&str> =
            self.components().into_iter().map(Option::unwrap_or_default).collect();
        Some(parts.join(";"))
    }

    /// Renders a comma-joined line containing only non-blank components.
    ///
    /// Returns `None` when every component is absent or whitespace.
    #[must_use]
    pub fn display_line(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .components()
            .into_iter()
            .flatten()
            .filter(|component| !component.trim().is_empty())
            .collect();
        if parts.is_empty() { None } else { Some(parts.join(", ")) }
    }
}
