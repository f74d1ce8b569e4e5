// crates/wallet-pass-core/src/core/records.rs
// ============================================================================
// Module: Wallet Pass Input Records
// Description: Validated form records for business cards, stamp cards, and coupons.
// Purpose: Define the input contract handed over by the form/validation layer.
// Dependencies: crate::core::{address, error}, serde, time
// ============================================================================

//! ## Overview
//! Records mirror the admin forms and deserialize from their camelCase JSON.
//! The form layer validates them first; [`ContactRecord::validate`] and the
//! sibling `validate` methods re-check the required-field invariants so the
//! assembler never builds a document from a record that broke the contract.
//! Optional strings that are empty or whitespace-only are treated as absent
//! throughout.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::address::PostalAddress;
use crate::core::error::PassError;

// ============================================================================
// SECTION: Presence Helpers
// ============================================================================

/// Returns the value when it is present and not blank.
pub(crate) fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.trim().is_empty())
}

/// Ensures a required string is non-blank.
fn require(field: &'static str, value: &str) -> Result<(), PassError> {
    if value.trim().is_empty() {
        return Err(PassError::MissingRequiredField {
            field,
        });
    }
    Ok(())
}

/// Performs a minimal syntactic email check (`local@domain.tld`, no whitespace).
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

// ============================================================================
// SECTION: Social Profiles
// ============================================================================

/// Social networks rendered on business cards, in their fixed output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    /// LinkedIn profile.
    LinkedIn,
    /// Twitter profile.
    Twitter,
    /// Instagram profile.
    Instagram,
    /// Facebook profile.
    Facebook,
}

impl SocialNetwork {
    /// Fixed output order shared by the contact card and the pass back fields.
    pub const ORDERED: [Self; 4] = [Self::LinkedIn, Self::Twitter, Self::Instagram, Self::Facebook];

    /// Human-readable network name (`LinkedIn`).
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
        }
    }

    /// Contact-card URL type tag (`LINKEDIN`).
    #[must_use]
    pub const fn vcard_type(self) -> &'static str {
        match self {
            Self::LinkedIn => "LINKEDIN",
            Self::Twitter => "TWITTER",
            Self::Instagram => "INSTAGRAM",
            Self::Facebook => "FACEBOOK",
        }
    }
}

/// Optional social-profile URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfiles {
    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Twitter profile URL.
    #[serde(default)]
    pub twitter: Option<String>,
    /// Instagram profile URL.
    #[serde(default)]
    pub instagram: Option<String>,
    /// Facebook profile URL.
    #[serde(default)]
    pub facebook: Option<String>,
}

impl SocialProfiles {
    /// Returns the profile URL for a network when present.
    #[must_use]
    pub fn get(&self, network: SocialNetwork) -> Option<&str> {
        let value = match network {
            SocialNetwork::LinkedIn => &self.linkedin,
            SocialNetwork::Twitter => &self.twitter,
            SocialNetwork::Instagram => &self.instagram,
            SocialNetwork::Facebook => &self.facebook,
        };
        present(value.as_ref())
    }

    /// Returns the present profiles in fixed network order.
    #[must_use]
    pub fn entries(&self) -> Vec<(SocialNetwork, &str)> {
        SocialNetwork::ORDERED
            .into_iter()
            .filter_map(|network| self.get(network).map(|value| (network, value)))
            .collect()
    }
}

// ============================================================================
// SECTION: Contact Record
// ============================================================================

/// Person or business contact details.
///
/// # Invariants
/// - `first_name` and `last_name` are non-blank.
/// - `email`, when present, is syntactically valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Job title.
    #[serde(default)]
    pub job_title: Option<String>,
    /// Organization name.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Website URL.
    #[serde(default)]
    pub website: Option<String>,
    /// Social-profile URLs.
    #[serde(flatten)]
    pub social: SocialProfiles,
    /// Postal address components.
    #[serde(flatten)]
    pub address: PostalAddress,
}

impl ContactRecord {
    /// Creates a record with only the required names set.
    #[must_use]
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Returns `"{given} {family}"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Job title when present.
    #[must_use]
    pub fn job_title(&self) -> Option<&str> {
        present(self.job_title.as_ref())
    }

    /// Company name when present.
    #[must_use]
    pub fn company_name(&self) -> Option<&str> {
        present(self.company_name.as_ref())
    }

    /// Email when present.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        present(self.email.as_ref())
    }

    /// Phone when present.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        present(self.phone.as_ref())
    }

    /// Website when present.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        present(self.website.as_ref())
    }

    /// Re-checks the contact invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PassError::MissingRequiredField`] for blank names and
    /// [`PassError::InvalidFieldValue`] for a malformed email.
    pub fn validate(&self) -> Result<(), PassError> {
        require("firstName", &self.first_name)?;
        require("lastName", &self.last_name)?;
        if let Some(email) = self.email()
            && !is_valid_email(email)
        {
            return Err(PassError::InvalidFieldValue {
                field: "email",
                reason: "must be a valid email address".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Shared Pass Inputs
// ============================================================================

/// Display colors submitted as `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassColors {
    /// Background color.
    pub background_color: String,
    /// Foreground (value text) color.
    pub foreground_color: String,
    /// Label text color.
    pub label_color: String,
}

/// Barcode selection submitted with a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeRequest {
    /// Raw symbology name (`PKBarcodeFormatQR`); validated at assembly.
    pub barcode_format: String,
    /// Explicit barcode payload overriding the default.
    #[serde(default)]
    pub barcode_message: Option<String>,
}

impl BarcodeRequest {
    /// Explicit barcode message when present.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        present(self.barcode_message.as_ref())
    }
}

// ============================================================================
// SECTION: Business Card Record
// ============================================================================

/// Business-card form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCardRecord {
    /// Contact details.
    #[serde(flatten)]
    pub contact: ContactRecord,
    /// Display colors.
    #[serde(flatten)]
    pub colors: PassColors,
    /// Barcode selection.
    #[serde(flatten)]
    pub barcode: BarcodeRequest,
}

impl BusinessCardRecord {
    /// Re-checks the record invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PassError`] when a contact invariant is violated.
    pub fn validate(&self) -> Result<(), PassError> {
        self.contact.validate()
    }
}

// ============================================================================
// SECTION: Stamp Card Record
// ============================================================================

/// Expiration policy for stamp cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpirationType {
    /// Never expires.
    Unlimited,
    /// Expires at a fixed calendar date.
    Fixed,
    /// Expires a configured duration after issuance.
    FixedAfterIssuing,
}

/// Stamp-slot visual selector submitted by the form (`icon` or `image`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StampVisualKind {
    /// Named icon.
    Icon,
    /// Uploaded image.
    Image,
}

/// Visual used to draw a stamp slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "reference", rename_all = "lowercase")]
pub enum StampVisual {
    /// Named icon reference.
    Icon(String),
    /// Uploaded image reference.
    Image(String),
}

impl StampVisual {
    /// Returns the icon or image reference.
    #[must_use]
    pub fn reference(&self) -> &str {
        match self {
            Self::Icon(reference) | Self::Image(reference) => reference,
        }
    }

    /// Returns the selector matching this visual.
    #[must_use]
    pub const fn kind(&self) -> StampVisualKind {
        match self {
            Self::Icon(_) => StampVisualKind::Icon,
            Self::Image(_) => StampVisualKind::Image,
        }
    }

    /// Form key holding this visual's reference within `slot`.
    const fn form_field(&self, slot: &StampSlotFields) -> &'static str {
        match self {
            Self::Icon(_) => slot.icon,
            Self::Image(_) => slot.image,
        }
    }
}

/// Form field names for one stamp slot.
struct StampSlotFields {
    /// Icon reference key.
    icon: &'static str,
    /// Image reference key.
    image: &'static str,
}

/// Form keys of the collected-stamp slot.
const ACTIVE_SLOT: StampSlotFields = StampSlotFields {
    icon: "activeStampIcon",
    image: "activeStampImage",
};

/// Form keys of the empty-stamp slot.
const INACTIVE_SLOT: StampSlotFields = StampSlotFields {
    icon: "inactiveStampIcon",
    image: "inactiveStampImage",
};

/// Builds a slot visual from the form's selector and the reference it selects.
fn visual_from_form(
    slot: &StampSlotFields,
    kind: StampVisualKind,
    icon: Option<&String>,
    image: Option<&String>,
) -> Result<StampVisual, PassError> {
    match kind {
        StampVisualKind::Icon => present(icon)
            .map(|reference| StampVisual::Icon(reference.to_string()))
            .ok_or(PassError::MissingRequiredField {
                field: slot.icon,
            }),
        StampVisualKind::Image => present(image)
            .map(|reference| StampVisual::Image(reference.to_string()))
            .ok_or(PassError::MissingRequiredField {
                field: slot.image,
            }),
    }
}

/// Splits a slot visual back into the form's icon and image keys.
fn visual_to_form(visual: StampVisual) -> (StampVisualKind, Option<String>, Option<String>) {
    let kind = visual.kind();
    match visual {
        StampVisual::Icon(reference) => (kind, Some(reference), None),
        StampVisual::Image(reference) => (kind, None, Some(reference)),
    }
}

/// Optional stamp theme colors submitted as `#RRGGBB`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StampTheme {
    /// Stamp strip background color.
    #[serde(default)]
    pub stamp_background_color: Option<String>,
    /// Stamp outline color.
    #[serde(default)]
    pub stamp_outline_color: Option<String>,
    /// Fill color for collected stamps.
    #[serde(default)]
    pub active_stamp_fill_color: Option<String>,
    /// Fill color for empty stamp slots.
    #[serde(default)]
    pub inactive_stamp_fill_color: Option<String>,
}

/// Loyalty stamp-card form submission.
///
/// Serializes as the flat form shape: each stamp slot is a
/// `{slot}StampType` selector plus `{slot}StampIcon` or `{slot}StampImage`.
///
/// # Invariants
/// - `title`, `description`, and `reward` are non-blank.
/// - `goal >= 1`. `current_stamps <= goal` is expected but not enforced.
/// - `expiration_date` is set when `expiration_type` is [`ExpirationType::Fixed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StampCardForm", into = "StampCardForm")]
pub struct StampCardRecord {
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
    /// Stamps required for the reward.
    pub goal: u32,
    /// Stamps collected so far.
    pub current_stamps: u32,
    /// Reward granted at the goal.
    pub reward: String,
    /// Expiration policy.
    pub expiration_type: ExpirationType,
    /// Fixed expiration date.
    pub expiration_date: Option<OffsetDateTime>,
    /// Issue date used for duration-based expiration.
    pub issue_date: Option<OffsetDateTime>,
    /// Visual for collected stamps.
    pub active_stamp: StampVisual,
    /// Visual for empty stamp slots.
    pub inactive_stamp: StampVisual,
    /// Display colors.
    pub colors: PassColors,
    /// Stamp theme colors.
    pub theme: StampTheme,
    /// Barcode selection.
    pub barcode: BarcodeRequest,
    /// Lifecycle flag.
    pub is_active: bool,
}

/// Wire shape of the stamp-card form.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StampCardForm {
    /// Card title.
    title: String,
    /// Card description.
    description: String,
    /// Stamps required for the reward.
    goal: u32,
    /// Stamps collected so far.
    #[serde(default)]
    current_stamps: u32,
    /// Reward granted at the goal.
    reward: String,
    /// Expiration policy.
    expiration_type: ExpirationType,
    /// Fixed expiration date.
    #[serde(default, with = "time::serde::rfc3339::option")]
    expiration_date: Option<OffsetDateTime>,
    /// Issue date used for duration-based expiration.
    #[serde(default, with = "time::serde::rfc3339::option")]
    issue_date: Option<OffsetDateTime>,
    /// Collected-stamp selector.
    active_stamp_type: StampVisualKind,
    /// Collected-stamp icon reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active_stamp_icon: Option<String>,
    /// Collected-stamp image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active_stamp_image: Option<String>,
    /// Empty-slot selector.
    inactive_stamp_type: StampVisualKind,
    /// Empty-slot icon reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inactive_stamp_icon: Option<String>,
    /// Empty-slot image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inactive_stamp_image: Option<String>,
    /// Display colors.
    #[serde(flatten)]
    colors: PassColors,
    /// Stamp theme colors.
    #[serde(flatten)]
    theme: StampTheme,
    /// Barcode selection.
    #[serde(flatten)]
    barcode: BarcodeRequest,
    /// Lifecycle flag.
    #[serde(default)]
    is_active: bool,
}

impl TryFrom<StampCardForm> for StampCardRecord {
    type Error = PassError;

    fn try_from(form: StampCardForm) -> Result<Self, Self::Error> {
        let active_stamp = visual_from_form(
            &ACTIVE_SLOT,
            form.active_stamp_type,
            form.active_stamp_icon.as_ref(),
            form.active_stamp_image.as_ref(),
        )?;
        let inactive_stamp = visual_from_form(
            &INACTIVE_SLOT,
            form.inactive_stamp_type,
            form.inactive_stamp_icon.as_ref(),
            form.inactive_stamp_image.as_ref(),
        )?;
        Ok(Self {
            title: form.title,
            description: form.description,
            goal: form.goal,
            current_stamps: form.current_stamps,
            reward: form.reward,
            expiration_type: form.expiration_type,
            expiration_date: form.expiration_date,
            issue_date: form.issue_date,
            active_stamp,
            inactive_stamp,
            colors: form.colors,
            theme: form.theme,
            barcode: form.barcode,
            is_active: form.is_active,
        })
    }
}

impl From<StampCardRecord> for StampCardForm {
    fn from(record: StampCardRecord) -> Self {
        let (active_stamp_type, active_stamp_icon, active_stamp_image) =
            visual_to_form(record.active_stamp);
        let (inactive_stamp_type, inactive_stamp_icon, inactive_stamp_image) =
            visual_to_form(record.inactive_stamp);
        Self {
            title: record.title,
            description: record.description,
            goal: record.goal,
            current_stamps: record.current_stamps,
            reward: record.reward,
            expiration_type: record.expiration_type,
            expiration_date: record.expiration_date,
            issue_date: record.issue_date,
            active_stamp_type,
            active_stamp_icon,
            active_stamp_image,
            inactive_stamp_type,
            inactive_stamp_icon,
            inactive_stamp_image,
            colors: record.colors,
            theme: record.theme,
            barcode: record.barcode,
            is_active: record.is_active,
        }
    }
}

impl StampCardRecord {
    /// Re-checks the record invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PassError::MissingRequiredField`] or
    /// [`PassError::InvalidFieldValue`] when an invariant is violated.
    pub fn validate(&self) -> Result<(), PassError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("reward", &self.reward)?;
        if self.goal == 0 {
            return Err(PassError::InvalidFieldValue {
                field: "goal",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.expiration_type == ExpirationType::Fixed && self.expiration_date.is_none() {
            return Err(PassError::MissingRequiredField {
                field: "expirationDate",
            });
        }
        require(self.active_stamp.form_field(&ACTIVE_SLOT), self.active_stamp.reference())?;
        require(self.inactive_stamp.form_field(&INACTIVE_SLOT), self.inactive_stamp.reference())?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Coupon Record
// ============================================================================

/// Coupon discount kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Percentage off.
    Percentage,
    /// Fixed amount off.
    Fixed,
}

/// Coupon form submission.
///
/// # Invariants
/// - `title` and `description` are non-blank.
/// - `discount_value` is finite and at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponRecord {
    /// Coupon title.
    pub title: String,
    /// Coupon description.
    pub description: String,
    /// Discount amount.
    pub discount_value: f64,
    /// Discount kind.
    pub discount_type: DiscountType,
    /// Explicit barcode payload overriding the default.
    #[serde(default)]
    pub barcode_message: Option<String>,
    /// Display colors.
    #[serde(flatten)]
    pub colors: PassColors,
}

impl CouponRecord {
    /// Explicit barcode message when present.
    #[must_use]
    pub fn barcode_message(&self) -> Option<&str> {
        present(self.barcode_message.as_ref())
    }

    /// Renders the discount as `"{value}%"` or `"{currency}{value}"`.
    #[must_use]
    pub fn discount_label(&self, currency_symbol: &str) -> String {
        match self.discount_type {
            DiscountType::Percentage => format!("{}%", self.discount_value),
            DiscountType::Fixed => format!("{currency_symbol}{}", self.discount_value),
        }
    }

    /// Re-checks the record invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PassError::MissingRequiredField`] or
    /// [`PassError::InvalidFieldValue`] when an invariant is violated.
    pub fn validate(&self) -> Result<(), PassError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        if !self.discount_value.is_finite() || self.discount_value < 1.0 {
            return Err(PassError::InvalidFieldValue {
                field: "discountValue",
                reason: "must be a number of at least 1".to_string(),
            });
        }
        Ok(())
    }
}
