// crates/wallet-pass-core/src/runtime/assembler.rs
// ============================================================================
// Module: Wallet Pass Definition Assembler
// Description: Pure assembly of pass documents from validated records.
// Purpose: Turn business-card, stamp-card, and coupon records into pass documents.
// Dependencies: crate::core, time, url
// ============================================================================

//! ## Overview
//! The assembler is a pure function of its inputs: the record, the serial
//! number assigned by persistence, the injected [`AssemblerConfig`], and an
//! [`AssemblyContext`] carrying the request time. It never reads the clock,
//! the environment, or the filesystem, so assembling the same inputs twice
//! yields identical documents.
//!
//! Each assembly re-checks the record invariants, normalizes colors into the
//! device palette, evaluates the field tables, resolves the barcode payload,
//! and computes the expiration. Any failure aborts with a [`PassError`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::Duration;
use time::OffsetDateTime;
use url::Url;

use crate::core::color::hex_to_device_palette;
use crate::core::document::Barcode;
use crate::core::document::BarcodeFormat;
use crate::core::document::PASS_FORMAT_VERSION;
use crate::core::document::PassDefinitionDocument;
use crate::core::document::PassFieldGroups;
use crate::core::document::PassStructure;
use crate::core::document::PassStyle;
use crate::core::document::StampCardDetails;
use crate::core::error::PassError;
use crate::core::fields;
use crate::core::fields::CouponFace;
use crate::core::fields::build_fields;
use crate::core::hashing::DEFAULT_HASH_ALGORITHM;
use crate::core::hashing::HashAlgorithm;
use crate::core::identifiers::PassTypeIdentifier;
use crate::core::identifiers::SerialNumber;
use crate::core::identifiers::TeamIdentifier;
use crate::core::labels::Label;
use crate::core::labels::PassLocale;
use crate::core::records::BusinessCardRecord;
use crate::core::records::CouponRecord;
use crate::core::records::ExpirationType;
use crate::core::records::PassColors;
use crate::core::records::StampCardRecord;
use crate::core::records::present;
use crate::core::vcard::encode_contact_card;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default organization name for stamp cards and coupons.
pub const DEFAULT_ORGANIZATION_NAME: &str = "YaVendió";
/// Default validity of `FIXED_AFTER_ISSUING` stamp cards, in days.
pub const DEFAULT_STAMP_CARD_VALIDITY_DAYS: u32 = 365;
/// Default coupon validity, in days.
pub const DEFAULT_COUPON_VALIDITY_DAYS: u32 = 30;
/// Default currency symbol for fixed-amount coupons.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "S/";
/// Placeholder substituted with the full name in description templates.
pub const NAME_PLACEHOLDER: &str = "{name}";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Deployment settings injected into every assembly call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Pass type identifier written into every document.
    pub pass_type_identifier: PassTypeIdentifier,
    /// Team identifier written into every document.
    pub team_identifier: TeamIdentifier,
    /// Organization name for stamp cards and coupons.
    pub organization_name: String,
    /// Label locale.
    pub locale: PassLocale,
    /// Business-card description template; `None` uses the locale default.
    pub description_template: Option<String>,
    /// Validity added to the issue date of `FIXED_AFTER_ISSUING` stamp cards.
    pub stamp_card_validity: Duration,
    /// Validity added to the request time of coupons.
    pub coupon_validity: Duration,
    /// Currency symbol prefixed to fixed-amount discounts.
    pub currency_symbol: String,
    /// Base URL of redemption links (`{base}/redeem/{serial}`).
    pub redemption_base_url: Option<Url>,
    /// Hash algorithm used for document digests.
    pub hash_algorithm: HashAlgorithm,
}

impl AssemblerConfig {
    /// Creates a configuration with the given identifiers and default settings.
    #[must_use]
    pub fn new(pass_type_identifier: PassTypeIdentifier, team_identifier: TeamIdentifier) -> Self {
        Self {
            pass_type_identifier,
            team_identifier,
            organization_name: DEFAULT_ORGANIZATION_NAME.to_string(),
            locale: PassLocale::default(),
            description_template: None,
            stamp_card_validity: Duration::days(i64::from(DEFAULT_STAMP_CARD_VALIDITY_DAYS)),
            coupon_validity: Duration::days(i64::from(DEFAULT_COUPON_VALIDITY_DAYS)),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            redemption_base_url: None,
            hash_algorithm: DEFAULT_HASH_ALGORITHM,
        }
    }

    /// Returns the business-card description template in effect.
    #[must_use]
    pub fn description_template(&self) -> &str {
        present(self.description_template.as_ref())
            .unwrap_or_else(|| self.locale.business_card_description_template())
    }
}

/// Per-request context supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyContext {
    /// Time the pass was requested; used for relative expirations.
    pub requested_at: OffsetDateTime,
}

impl AssemblyContext {
    /// Creates a context for the given request time.
    #[must_use]
    pub const fn new(requested_at: OffsetDateTime) -> Self {
        Self {
            requested_at,
        }
    }
}

// ============================================================================
// SECTION: Assembler
// ============================================================================

/// Pass assembler bound to one deployment configuration.
#[derive(Debug, Clone)]
pub struct PassAssembler {
    /// Injected configuration.
    config: AssemblerConfig,
}

impl PassAssembler {
    /// Creates an assembler for the given configuration.
    #[must_use]
    pub const fn new(config: AssemblerConfig) -> Self {
        Self {
            config,
        }
    }

    /// Returns the injected configuration.
    #[must_use]
    pub const fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Assembles a business card.
    ///
    /// # Errors
    ///
    /// Returns [`PassError`] when the record or configuration is invalid.
    pub fn business_card(
        &self,
        record: &BusinessCardRecord,
        serial: &SerialNumber,
        ctx: &AssemblyContext,
    ) -> Result<PassDefinitionDocument, PassError> {
        assemble_business_card(record, serial, &self.config, ctx)
    }

    /// Assembles a stamp card.
    ///
    /// # Errors
    ///
    /// Returns [`PassError`] when the record or configuration is invalid.
    pub fn stamp_card(
        &self,
        record: &StampCardRecord,
        serial: &SerialNumber,
        ctx: &AssemblyContext,
    ) -> Result<PassDefinitionDocument, PassError> {
        assemble_stamp_card(record, serial, &self.config, ctx)
    }

    /// Assembles a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`PassError`] when the record or configuration is invalid.
    pub fn coupon(
        &self,
        record: &CouponRecord,
        serial: &SerialNumber,
        ctx: &AssemblyContext,
    ) -> Result<PassDefinitionDocument, PassError> {
        assemble_coupon(record, serial, &self.config, ctx)
    }
}

// ============================================================================
// SECTION: Business Card
// ============================================================================

/// Assembles a `generic` business-card document.
///
/// The request time in `ctx` is unused; business cards never expire.
///
/// # Errors
///
/// Returns [`PassError`] when the record breaks an invariant, a color does not
/// convert, or the barcode format is unsupported.
pub fn assemble_business_card(
    record: &BusinessCardRecord,
    serial: &SerialNumber,
    config: &AssemblerConfig,
    _ctx: &AssemblyContext,
) -> Result<PassDefinitionDocument, PassError> {
    require_serial(serial)?;
    record.validate()?;
    let contact = &record.contact;
    let locale = config.locale;
    let full_name = contact.full_name();

    let format = parse_barcode_format(&record.barcode.barcode_format)?;
    let message =
        resolve_barcode_message(record.barcode.message(), || encode_contact_card(contact));

    let fields = PassFieldGroups {
        primary_fields: build_fields(fields::BUSINESS_CARD_PRIMARY, contact, locale),
        secondary_fields: build_fields(fields::BUSINESS_CARD_SECONDARY, contact, locale),
        auxiliary_fields: build_fields(fields::BUSINESS_CARD_AUXILIARY, contact, locale),
        back_fields: build_fields(fields::BUSINESS_CARD_BACK, contact, locale),
    };

    let header = Header {
        organization_name: contact
            .company_name()
            .unwrap_or_else(|| locale.label(Label::PersonalCard))
            .to_string(),
        description: config.description_template().replace(NAME_PLACEHOLDER, &full_name),
        logo_text: contact.company_name().map_or(full_name, str::to_string),
    };

    build_document(DocumentParts {
        config,
        serial,
        header,
        colors: &record.colors,
        structure: PassStructure::new(PassStyle::Generic, fields),
        barcode: Barcode::new(message, format),
        expiration_date: None,
        stamp_card: None,
    })
}

// ============================================================================
// SECTION: Stamp Card
// ============================================================================

/// Assembles a `storeCard` loyalty stamp-card document.
///
/// # Errors
///
/// Returns [`PassError`] when the record breaks an invariant, a color does not
/// convert, the barcode format is unsupported, or the expiration overflows.
pub fn assemble_stamp_card(
    record: &StampCardRecord,
    serial: &SerialNumber,
    config: &AssemblerConfig,
    ctx: &AssemblyContext,
) -> Result<PassDefinitionDocument, PassError> {
    require_serial(serial)?;
    record.validate()?;
    let locale = config.locale;

    let format = parse_barcode_format(&record.barcode.barcode_format)?;
    let message = match record.barcode.message() {
        Some(explicit) => explicit.to_string(),
        None => default_redemption_message(config, serial)?,
    };
    let expiration_date = resolve_stamp_card_expiration(record, config, ctx)?;

    let theme = &record.theme;
    let details = StampCardDetails {
        goal: record.goal,
        current_stamps: record.current_stamps,
        reward: record.reward.clone(),
        active_stamp: record.active_stamp.clone(),
        inactive_stamp: record.inactive_stamp.clone(),
        stamp_background_color: normalize_optional_color(
            "stampBackgroundColor",
            theme.stamp_background_color.as_ref(),
        )?,
        stamp_outline_color: normalize_optional_color(
            "stampOutlineColor",
            theme.stamp_outline_color.as_ref(),
        )?,
        active_stamp_fill_color: normalize_optional_color(
            "activeStampFillColor",
            theme.active_stamp_fill_color.as_ref(),
        )?,
        inactive_stamp_fill_color: normalize_optional_color(
            "inactiveStampFillColor",
            theme.inactive_stamp_fill_color.as_ref(),
        )?,
        is_active: record.is_active,
    };

    let fields = PassFieldGroups {
        primary_fields: build_fields(fields::STAMP_CARD_PRIMARY, record, locale),
        secondary_fields: build_fields(fields::STAMP_CARD_SECONDARY, record, locale),
        auxiliary_fields: Vec::new(),
        back_fields: build_fields(fields::STAMP_CARD_BACK, record, locale),
    };

    let header = Header {
        organization_name: config.organization_name.clone(),
        description: record.title.clone(),
        logo_text: record.title.clone(),
    };

    build_document(DocumentParts {
        config,
        serial,
        header,
        colors: &record.colors,
        structure: PassStructure::new(PassStyle::StoreCard, fields),
        barcode: Barcode::new(message, format),
        expiration_date,
        stamp_card: Some(details),
    })
}

/// Computes a stamp card's expiration from its policy.
///
/// - `UNLIMITED`: no expiration.
/// - `FIXED`: the record's expiration date, verbatim.
/// - `FIXED_AFTER_ISSUING`: the issue date (or the request time when absent)
///   plus the configured stamp-card validity.
///
/// # Errors
///
/// Returns [`PassError::MissingRequiredField`] when a `FIXED` card has no
/// expiration date and [`PassError::ExpirationOverflow`] when the sum is out
/// of range.
pub fn resolve_stamp_card_expiration(
    record: &StampCardRecord,
    config: &AssemblerConfig,
    ctx: &AssemblyContext,
) -> Result<Option<OffsetDateTime>, PassError> {
    match record.expiration_type {
        ExpirationType::Unlimited => Ok(None),
        ExpirationType::Fixed => record.expiration_date.map(Some).ok_or(
            PassError::MissingRequiredField {
                field: "expirationDate",
            },
        ),
        ExpirationType::FixedAfterIssuing => {
            let issued = record.issue_date.unwrap_or(ctx.requested_at);
            add_validity(issued, config.stamp_card_validity).map(Some)
        }
    }
}

// ============================================================================
// SECTION: Coupon
// ============================================================================

/// Assembles a `coupon` document.
///
/// Coupons always use a QR barcode whose alternate text is the title, and
/// expire the configured coupon validity after the request time.
///
/// # Errors
///
/// Returns [`PassError`] when the record breaks an invariant, a color does not
/// convert, or the expiration overflows.
pub fn assemble_coupon(
    record: &CouponRecord,
    serial: &SerialNumber,
    config: &AssemblerConfig,
    ctx: &AssemblyContext,
) -> Result<PassDefinitionDocument, PassError> {
    require_serial(serial)?;
    record.validate()?;
    let locale = config.locale;

    let message = match record.barcode_message() {
        Some(explicit) => explicit.to_string(),
        None => default_redemption_message(config, serial)?,
    };
    let expiration_date = add_validity(ctx.requested_at, config.coupon_validity)?;

    let face = CouponFace {
        title: record.title.clone(),
        description: record.description.clone(),
        discount: record.discount_label(&config.currency_symbol),
    };
    let fields = PassFieldGroups {
        primary_fields: build_fields(fields::COUPON_PRIMARY, &face, locale),
        secondary_fields: build_fields(fields::COUPON_SECONDARY, &face, locale),
        auxiliary_fields: build_fields(fields::COUPON_AUXILIARY, &face, locale),
        back_fields: Vec::new(),
    };

    let header = Header {
        organization_name: config.organization_name.clone(),
        description: record.description.clone(),
        logo_text: record.title.clone(),
    };

    build_document(DocumentParts {
        config,
        serial,
        header,
        colors: &record.colors,
        structure: PassStructure::new(PassStyle::Coupon, fields),
        barcode: Barcode::new(message, BarcodeFormat::Qr).with_alt_text(record.title.clone()),
        expiration_date: Some(expiration_date),
        stamp_card: None,
    })
}

// ============================================================================
// SECTION: Barcode Resolution
// ============================================================================

/// Returns the explicit message when present, otherwise the computed default.
///
/// Blank explicit messages count as absent. The default is only computed when
/// it is used.
pub fn resolve_barcode_message<F>(explicit: Option<&str>, default: F) -> String
where
    F: FnOnce() -> String,
{
    explicit.filter(|message| !message.trim().is_empty()).map_or_else(default, str::to_string)
}

/// Parses a record's barcode format.
///
/// # Errors
///
/// Returns [`PassError::UnsupportedBarcodeFormat`] for unknown symbologies.
pub fn parse_barcode_format(raw: &str) -> Result<BarcodeFormat, PassError> {
    BarcodeFormat::parse(raw).ok_or_else(|| PassError::UnsupportedBarcodeFormat {
        format: raw.to_string(),
    })
}

/// Builds `{base}/redeem/{serial}`.
///
/// A trailing slash on the base is ignored and the serial is percent-encoded
/// as a single path segment.
///
/// # Errors
///
/// Returns [`PassError::InvalidConfiguration`] when the base URL cannot carry
/// path segments.
pub fn redemption_link(base: &Url, serial: &SerialNumber) -> Result<Url, PassError> {
    let mut link = base.clone();
    link.set_query(None);
    link.set_fragment(None);
    {
        let mut segments = link.path_segments_mut().map_err(|()| {
            PassError::InvalidConfiguration(format!("redemption base url cannot be a base: {base}"))
        })?;
        segments.pop_if_empty().push("redeem").push(serial.as_str());
    }
    Ok(link)
}

/// Redemption link when configured, otherwise the serial number.
fn default_redemption_message(
    config: &AssemblerConfig,
    serial: &SerialNumber,
) -> Result<String, PassError> {
    match &config.redemption_base_url {
        Some(base) => redemption_link(base, serial).map(String::from),
        None => Ok(serial.to_string()),
    }
}

// ============================================================================
// SECTION: Document Construction
// ============================================================================

/// Header strings that differ per pass kind.
struct Header {
    /// Organization name.
    organization_name: String,
    /// Accessibility description.
    description: String,
    /// Logo text.
    logo_text: String,
}

/// Inputs of the shared document builder.
struct DocumentParts<'a> {
    /// Injected configuration.
    config: &'a AssemblerConfig,
    /// Record serial number.
    serial: &'a SerialNumber,
    /// Per-kind header strings.
    header: Header,
    /// Raw record colors.
    colors: &'a PassColors,
    /// Styled field groups.
    structure: PassStructure,
    /// Resolved barcode.
    barcode: Barcode,
    /// Resolved expiration.
    expiration_date: Option<OffsetDateTime>,
    /// Stamp-card section.
    stamp_card: Option<StampCardDetails>,
}

/// Normalizes colors and assembles the final document.
fn build_document(parts: DocumentParts<'_>) -> Result<PassDefinitionDocument, PassError> {
    let DocumentParts {
        config,
        serial,
        header,
        colors,
        structure,
        barcode,
        expiration_date,
        stamp_card,
    } = parts;
    Ok(PassDefinitionDocument {
        format_version: PASS_FORMAT_VERSION,
        pass_type_identifier: config.pass_type_identifier.clone(),
        serial_number: serial.clone(),
        team_identifier: config.team_identifier.clone(),
        organization_name: header.organization_name,
        description: header.description,
        logo_text: header.logo_text,
        foreground_color: normalize_color("foregroundColor", &colors.foreground_color)?,
        background_color: normalize_color("backgroundColor", &colors.background_color)?,
        label_color: normalize_color("labelColor", &colors.label_color)?,
        structure,
        barcode,
        expiration_date,
        stamp_card,
    })
}

/// Converts a record color to the device palette.
fn normalize_color(field: &'static str, hex: &str) -> Result<String, PassError> {
    hex_to_device_palette(hex).map_err(|source| PassError::ColorConversion {
        field,
        source,
    })
}

/// Converts an optional record color when present.
fn normalize_optional_color(
    field: &'static str,
    hex: Option<&String>,
) -> Result<Option<String>, PassError> {
    present(hex).map(|value| normalize_color(field, value)).transpose()
}

/// Rejects blank serial numbers.
fn require_serial(serial: &SerialNumber) -> Result<(), PassError> {
    if serial.is_blank() {
        return Err(PassError::MissingRequiredField {
            field: "serialNumber",
        });
    }
    Ok(())
}

/// Adds a validity duration, failing on overflow.
fn add_validity(start: OffsetDateTime, validity: Duration) -> Result<OffsetDateTime, PassError> {
    start.checked_add(validity).ok_or(PassError::ExpirationOverflow)
}
