// crates/wallet-pass-core/src/core/labels.rs
// ============================================================================
// Module: Wallet Pass Field Labels
// Description: Localized labels for pass fields and header fallbacks.
// Purpose: Keep user-visible pass text out of the field tables.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every label shown on a pass is a [`Label`] resolved through a
//! [`PassLocale`]. Spanish is the default deployment locale; English is
//! available for other deployments. Resolution is an exhaustive match, so a
//! label missing from one locale is a compile error rather than a runtime gap.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Locale
// ============================================================================

/// Locales with a complete pass label catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassLocale {
    /// Spanish (default).
    #[default]
    Es,
    /// English.
    En,
}

impl PassLocale {
    /// Every supported locale.
    pub const ALL: [Self; 2] = [Self::Es, Self::En];

    /// Returns the locale tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Parses a locale tag such as `es`, `es_PE`, or `en-US`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let primary = normalized.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Returns the label text for this locale.
    #[must_use]
    pub const fn label(self, label: Label) -> &'static str {
        match self {
            Self::Es => label.spanish(),
            Self::En => label.english(),
        }
    }

    /// Default business-card description template; `{name}` is the full name.
    #[must_use]
    pub const fn business_card_description_template(self) -> &'static str {
        match self {
            Self::Es => "Business Card de {name} - YaVendió",
            Self::En => "Business card for {name} - YaVendió",
        }
    }
}

impl fmt::Display for PassLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Labels
// ============================================================================

/// User-visible text keys used on passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Full name field.
    Name,
    /// Job title field.
    Job,
    /// Company field.
    Company,
    /// Email field.
    Email,
    /// Phone field.
    Phone,
    /// Combined contact back field.
    ContactInfo,
    /// Social profiles back field.
    SocialMedia,
    /// Postal address back field.
    Address,
    /// Organization fallback when no company is given.
    PersonalCard,
    /// Stamp progress field.
    Stamps,
    /// Stamp-card reward field.
    Reward,
    /// Description field.
    Description,
    /// Coupon title field.
    Title,
    /// Coupon discount field.
    Discount,
}

impl Label {
    /// Every label, used for catalog completeness checks.
    pub const ALL: [Self; 14] = [
        Self::Name,
        Self::Job,
        Self::Company,
        Self::Email,
        Self::Phone,
        Self::ContactInfo,
        Self::SocialMedia,
        Self::Address,
        Self::PersonalCard,
        Self::Stamps,
        Self::Reward,
        Self::Description,
        Self::Title,
        Self::Discount,
    ];

    /// Spanish catalog.
    const fn spanish(self) -> &'static str {
        match self {
            Self::Name => "Nombre",
            Self::Job => "Cargo",
            Self::Company => "Empresa",
            Self::Email => "Email",
            Self::Phone => "Teléfono",
            Self::ContactInfo => "Contacto",
            Self::SocialMedia => "Redes Sociales",
            Self::Address => "Dirección",
            Self::PersonalCard => "Tarjeta Personal",
            Self::Stamps => "Sellos",
            Self::Reward => "Recompensa",
            Self::Description => "Descripción",
            Self::Title => "Título",
            Self::Discount => "Descuento",
        }
    }

    /// English catalog.
    const fn english(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Job => "Job Title",
            Self::Company => "Company",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::ContactInfo => "Contact",
            Self::SocialMedia => "Social Media",
            Self::Address => "Address",
            Self::PersonalCard => "Personal Card",
            Self::Stamps => "Stamps",
            Self::Reward => "Reward",
            Self::Description => "Description",
            Self::Title => "Title",
            Self::Discount => "Discount",
        }
    }
}
