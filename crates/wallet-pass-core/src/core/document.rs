// crates/wallet-pass-core/src/core/document.rs
// ============================================================================
// Module: Wallet Pass Definition Document
// Description: Unsigned pass-definition document handed to the signing engine.
// Purpose: Model the header, colors, field groups, barcode, and expiration of a pass.
// Dependencies: crate::core::{identifiers, records}, serde, time
// ============================================================================

//! ## Overview
//! A [`PassDefinitionDocument`] is the logical content of a pass before it is
//! signed and bundled. It is built fresh per request, never mutated after
//! assembly, and serialized with the wallet vendor's camelCase keys. The field
//! groups are nested under the style key (`generic`, `storeCard`, `coupon`),
//! matching the layout the signing engine consumes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::identifiers::PassTypeIdentifier;
use crate::core::identifiers::SerialNumber;
use crate::core::identifiers::TeamIdentifier;
use crate::core::records::StampVisual;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Pass format version emitted in every document.
pub const PASS_FORMAT_VERSION: u32 = 1;

/// Text encoding declared for every barcode payload.
pub const BARCODE_MESSAGE_ENCODING: &str = "utf-8";

// ============================================================================
// SECTION: Fields
// ============================================================================

/// Single key/label/value entry shown on a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassField {
    /// Stable field key.
    pub key: String,
    /// Localized label.
    pub label: String,
    /// Display value.
    pub value: String,
}

impl PassField {
    /// Creates a new field.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Ordered field groups of a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassFieldGroups {
    /// Primary fields.
    pub primary_fields: Vec<PassField>,
    /// Secondary fields.
    pub secondary_fields: Vec<PassField>,
    /// Auxiliary fields.
    pub auxiliary_fields: Vec<PassField>,
    /// Back-of-pass fields.
    pub back_fields: Vec<PassField>,
}

impl PassFieldGroups {
    /// Iterates every field across the four groups in display order.
    pub fn iter(&self) -> impl Iterator<Item = &PassField> {
        self.primary_fields
            .iter()
            .chain(&self.secondary_fields)
            .chain(&self.auxiliary_fields)
            .chain(&self.back_fields)
    }

    /// Finds a field by key across all groups.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&PassField> {
        self.iter().find(|field| field.key == key)
    }
}

// ============================================================================
// SECTION: Style
// ============================================================================

/// Pass styles produced by the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassStyle {
    /// Business cards.
    Generic,
    /// Loyalty stamp cards.
    StoreCard,
    /// Coupons.
    Coupon,
}

impl PassStyle {
    /// Returns the style key used in the document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::StoreCard => "storeCard",
            Self::Coupon => "coupon",
        }
    }
}

impl fmt::Display for PassStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field groups nested under their style key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassStructure {
    /// `generic` structure.
    Generic(PassFieldGroups),
    /// `storeCard` structure.
    StoreCard(PassFieldGroups),
    /// `coupon` structure.
    Coupon(PassFieldGroups),
}

impl PassStructure {
    /// Wraps field groups under the given style.
    #[must_use]
    pub const fn new(style: PassStyle, fields: PassFieldGroups) -> Self {
        match style {
            PassStyle::Generic => Self::Generic(fields),
            PassStyle::StoreCard => Self::StoreCard(fields),
            PassStyle::Coupon => Self::Coupon(fields),
        }
    }

    /// Returns the pass style.
    #[must_use]
    pub const fn style(&self) -> PassStyle {
        match self {
            Self::Generic(_) => PassStyle::Generic,
            Self::StoreCard(_) => PassStyle::StoreCard,
            Self::Coupon(_) => PassStyle::Coupon,
        }
    }

    /// Returns the field groups.
    #[must_use]
    pub const fn fields(&self) -> &PassFieldGroups {
        match self {
            Self::Generic(fields) | Self::StoreCard(fields) | Self::Coupon(fields) => fields,
        }
    }
}

// ============================================================================
// SECTION: Barcode
// ============================================================================

/// Supported barcode symbologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarcodeFormat {
    /// QR code.
    #[serde(rename = "PKBarcodeFormatQR")]
    Qr,
    /// PDF417.
    #[serde(rename = "PKBarcodeFormatPDF417")]
    Pdf417,
    /// Aztec.
    #[serde(rename = "PKBarcodeFormatAztec")]
    Aztec,
    /// Code 128.
    #[serde(rename = "PKBarcodeFormatCode128")]
    Code128,
}

impl BarcodeFormat {
    /// Every supported symbology.
    pub const ALL: [Self; 4] = [Self::Qr, Self::Pdf417, Self::Aztec, Self::Code128];

    /// Returns the wire name (`PKBarcodeFormatQR`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Qr => "PKBarcodeFormatQR",
            Self::Pdf417 => "PKBarcodeFormatPDF417",
            Self::Aztec => "PKBarcodeFormatAztec",
            Self::Code128 => "PKBarcodeFormatCode128",
        }
    }

    /// Parses an exact wire name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == value)
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Barcode descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barcode {
    /// Encoded payload.
    pub message: String,
    /// Symbology.
    pub format: BarcodeFormat,
    /// Payload text encoding (always `utf-8`).
    pub message_encoding: String,
    /// Text shown under the barcode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl Barcode {
    /// Creates a UTF-8 barcode without alternate text.
    #[must_use]
    pub fn new(message: impl Into<String>, format: BarcodeFormat) -> Self {
        Self {
            message: message.into(),
            format,
            message_encoding: BARCODE_MESSAGE_ENCODING.to_string(),
            alt_text: None,
        }
    }

    /// Sets the alternate text.
    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }
}

// ============================================================================
// SECTION: Stamp Card Details
// ============================================================================

/// Stamp-card section consumed by the stamp strip renderer.
///
/// # Invariants
/// - Theme colors are device-palette strings when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StampCardDetails {
    /// Stamps required for the reward.
    pub goal: u32,
    /// Stamps collected so far.
    pub current_stamps: u32,
    /// Reward granted at the goal.
    pub reward: String,
    /// Visual for collected stamps.
    pub active_stamp: StampVisual,
    /// Visual for empty slots.
    pub inactive_stamp: StampVisual,
    /// Stamp strip background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamp_background_color: Option<String>,
    /// Stamp outline color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamp_outline_color: Option<String>,
    /// Fill color for collected stamps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_stamp_fill_color: Option<String>,
    /// Fill color for empty slots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_stamp_fill_color: Option<String>,
    /// Lifecycle flag.
    pub is_active: bool,
}

// ============================================================================
// SECTION: Document
// ============================================================================

/// Unsigned pass-definition document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassDefinitionDocument {
    /// Format version (always [`PASS_FORMAT_VERSION`]).
    pub format_version: u32,
    /// Pass type identifier.
    pub pass_type_identifier: PassTypeIdentifier,
    /// Serial number of the stored record.
    pub serial_number: SerialNumber,
    /// Team identifier.
    pub team_identifier: TeamIdentifier,
    /// Organization name.
    pub organization_name: String,
    /// Accessibility description.
    pub description: String,
    /// Text shown next to the logo.
    pub logo_text: String,
    /// Value text color (`rgb(r, g, b)`).
    pub foreground_color: String,
    /// Background color (`rgb(r, g, b)`).
    pub background_color: String,
    /// Label text color (`rgb(r, g, b)`).
    pub label_color: String,
    /// Field groups under their style key.
    #[serde(flatten)]
    pub structure: PassStructure,
    /// Barcode descriptor.
    pub barcode: Barcode,
    /// Expiration timestamp.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub expiration_date: Option<OffsetDateTime>,
    /// Stamp-card section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamp_card: Option<StampCardDetails>,
}

impl PassDefinitionDocument {
    /// Returns the pass style.
    #[must_use]
    pub const fn style(&self) -> PassStyle {
        self.structure.style()
    }

    /// Returns the field groups.
    #[must_use]
    pub const fn fields(&self) -> &PassFieldGroups {
        self.structure.fields()
    }
}
