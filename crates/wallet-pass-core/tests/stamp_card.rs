// crates/wallet-pass-core/tests/stamp_card.rs
// ============================================================================
// Module: Stamp Card Assembly Tests
// Description: End-to-end tests for loyalty stamp-card assembly.
// ============================================================================
//! ## Overview
//! Covers the three expiration policies, the stamp section, and barcode
//! defaults for stamp cards.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use time::Duration;
use time::macros::datetime;
use url::Url;
use wallet_pass_core::AssemblerConfig;
use wallet_pass_core::AssemblyContext;
use wallet_pass_core::BarcodeRequest;
use wallet_pass_core::ExpirationType;
use wallet_pass_core::PassColors;
use wallet_pass_core::PassError;
use wallet_pass_core::PassStyle;
use wallet_pass_core::PassTypeIdentifier;
use wallet_pass_core::SerialNumber;
use wallet_pass_core::StampCardRecord;
use wallet_pass_core::StampTheme;
use wallet_pass_core::StampVisual;
use wallet_pass_core::TeamIdentifier;
use wallet_pass_core::runtime::assemble_stamp_card;
use wallet_pass_core::runtime::resolve_stamp_card_expiration;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a configuration with a 90-day stamp-card validity.
fn config() -> AssemblerConfig {
    let mut config = AssemblerConfig::new(
        PassTypeIdentifier::new("pass.com.example.loyalty"),
        TeamIdentifier::new("ABCDE12345"),
    );
    config.organization_name = "Café Andino".to_string();
    config.stamp_card_validity = Duration::days(90);
    config
}

/// Fixed request context.
fn ctx() -> AssemblyContext {
    AssemblyContext::new(datetime!(2026-03-01 12:00 UTC))
}

/// Builds an unlimited stamp card with three of ten stamps.
fn record() -> StampCardRecord {
    StampCardRecord {
        title: "Café Club".to_string(),
        description: "Collect ten stamps for a free coffee".to_string(),
        goal: 10,
        current_stamps: 3,
        reward: "Free coffee".to_string(),
        expiration_type: ExpirationType::Unlimited,
        expiration_date: None,
        issue_date: None,
        active_stamp: StampVisual::Icon("coffee".to_string()),
        inactive_stamp: StampVisual::Image("https://cdn.example.com/empty.png".to_string()),
        colors: PassColors {
            background_color: "#3B2F2F".to_string(),
            foreground_color: "#FFFFFF".to_string(),
            label_color: "#F5DEB3".to_string(),
        },
        theme: StampTheme::default(),
        barcode: BarcodeRequest {
            barcode_format: "PKBarcodeFormatQR".to_string(),
            barcode_message: None,
        },
        is_active: true,
    }
}

// ============================================================================
// SECTION: Document Shape
// ============================================================================

#[test]
fn stamp_card_header_and_fields() {
    let doc = assemble_stamp_card(&record(), &SerialNumber::new("sc-1"), &config(), &ctx()).unwrap();
    assert_eq!(doc.style(), PassStyle::StoreCard);
    assert_eq!(doc.organization_name, "Café Andino");
    assert_eq!(doc.description, "Café Club");
    assert_eq!(doc.logo_text, "Café Club");
    assert_eq!(doc.background_color, "rgb(59, 47, 47)");

    let fields = doc.fields();
    assert_eq!(fields.primary_fields[0].key, "stamps");
    assert_eq!(fields.primary_fields[0].value, "3 / 10");
    assert_eq!(fields.primary_fields[0].label, "Sellos");
    assert_eq!(fields.secondary_fields[0].value, "Free coffee");
    assert!(fields.auxiliary_fields.is_empty());
    assert_eq!(fields.back_fields[0].key, "description");
}

#[test]
fn stamp_section_carries_progress_and_theme() {
    let mut record = record();
    record.theme.stamp_outline_color = Some("#FF0000".to_string());
    record.theme.active_stamp_fill_color = Some(String::new());
    let doc = assemble_stamp_card(&record, &SerialNumber::new("sc-2"), &config(), &ctx()).unwrap();
    let details = doc.stamp_card.unwrap();
    assert_eq!(details.goal, 10);
    assert_eq!(details.current_stamps, 3);
    assert_eq!(details.active_stamp, StampVisual::Icon("coffee".to_string()));
    assert_eq!(details.stamp_outline_color.as_deref(), Some("rgb(255, 0, 0)"));
    assert_eq!(details.active_stamp_fill_color, None);
    assert_eq!(details.stamp_background_color, None);
    assert!(details.is_active);
}

#[test]
fn invalid_theme_color_is_rejected() {
    let mut record = record();
    record.theme.inactive_stamp_fill_color = Some("#12345".to_string());
    let err = assemble_stamp_card(&record, &SerialNumber::new("sc-3"), &config(), &ctx()).unwrap_err();
    assert!(matches!(
        err,
        PassError::ColorConversion { field: "inactiveStampFillColor", .. }
    ));
}

// ============================================================================
// SECTION: Expiration
// ============================================================================

#[test]
fn unlimited_cards_never_expire() {
    assert_eq!(resolve_stamp_card_expiration(&record(), &config(), &ctx()).unwrap(), None);
}

#[test]
fn fixed_cards_use_date_verbatim() {
    let mut record = record();
    record.expiration_type = ExpirationType::Fixed;
    record.expiration_date = Some(datetime!(2026-12-31 23:59 UTC));
    let doc = assemble_stamp_card(&record, &SerialNumber::new("sc-4"), &config(), &ctx()).unwrap();
    assert_eq!(doc.expiration_date, Some(datetime!(2026-12-31 23:59 UTC)));
}

#[test]
fn fixed_cards_without_date_fail() {
    let mut record = record();
    record.expiration_type = ExpirationType::Fixed;
    let err = resolve_stamp_card_expiration(&record, &config(), &ctx()).unwrap_err();
    assert_eq!(err, PassError::MissingRequiredField { field: "expirationDate" });
}

#[test]
fn fixed_after_issuing_adds_validity_to_issue_date() {
    let mut record = record();
    record.expiration_type = ExpirationType::FixedAfterIssuing;
    record.issue_date = Some(datetime!(2026-01-15 10:00 UTC));
    let expiration = resolve_stamp_card_expiration(&record, &config(), &ctx()).unwrap();
    assert_eq!(expiration, Some(datetime!(2026-04-15 10:00 UTC)));
}

#[test]
fn fixed_after_issuing_falls_back_to_request_time() {
    let mut record = record();
    record.expiration_type = ExpirationType::FixedAfterIssuing;
    let expiration = resolve_stamp_card_expiration(&record, &config(), &ctx()).unwrap();
    assert_eq!(expiration, Some(datetime!(2026-05-30 12:00 UTC)));
}

#[test]
fn expiration_overflow_is_reported() {
    let mut record = record();
    record.expiration_type = ExpirationType::FixedAfterIssuing;
    record.issue_date = Some(datetime!(9999-12-01 00:00 UTC));
    let err = resolve_stamp_card_expiration(&record, &config(), &ctx()).unwrap_err();
    assert_eq!(err, PassError::ExpirationOverflow);
}

#[test]
fn expiration_serializes_as_rfc3339() {
    let mut record = record();
    record.expiration_type = ExpirationType::FixedAfterIssuing;
    record.issue_date = Some(datetime!(2026-01-15 10:00 UTC));
    let doc = assemble_stamp_card(&record, &SerialNumber::new("sc-5"), &config(), &ctx()).unwrap();
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["expirationDate"], "2026-04-15T10:00:00Z");
    assert_eq!(value["storeCard"]["primaryFields"][0]["value"], "3 / 10");
    assert_eq!(value["stampCard"]["activeStamp"]["type"], "icon");
}

// ============================================================================
// SECTION: Barcode
// ============================================================================

#[test]
fn barcode_defaults_to_serial_without_redemption_base() {
    let doc = assemble_stamp_card(&record(), &SerialNumber::new("sc-6"), &config(), &ctx()).unwrap();
    assert_eq!(doc.barcode.message, "sc-6");
}

#[test]
fn barcode_defaults_to_redemption_link() {
    let mut config = config();
    config.redemption_base_url = Some(Url::parse("https://api.example.com").unwrap());
    let doc = assemble_stamp_card(&record(), &SerialNumber::new("sc-7"), &config, &ctx()).unwrap();
    assert_eq!(doc.barcode.message, "https://api.example.com/redeem/sc-7");
}

#[test]
fn explicit_stamp_barcode_message_wins() {
    let mut record = record();
    record.barcode.barcode_message = Some("LOYALTY-7".to_string());
    let doc = assemble_stamp_card(&record, &SerialNumber::new("sc-8"), &config(), &ctx()).unwrap();
    assert_eq!(doc.barcode.message, "LOYALTY-7");
}
