// crates/wallet-pass-core/src/core/fields.rs
// ============================================================================
// Module: Wallet Pass Field Tables
// Description: Declarative field rules and the builder that evaluates them.
// Purpose: Keep each pass kind's field layout in ordered, testable tables.
// Dependencies: crate::core::{document, labels, records}
// ============================================================================

//! ## Overview
//! A field group is an ordered table of [`FieldRule`] entries. Each rule names
//! a key, a [`Label`], and an extractor returning `None` when the field must be
//! omitted. [`build_fields`] evaluates a table in order, so table order is the
//! display order. Multi-line back-field values join their lines with the same
//! literal `\n` sequence the contact card uses.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::document::PassField;
use crate::core::labels::Label;
use crate::core::labels::PassLocale;
use crate::core::records::ContactRecord;
use crate::core::records::StampCardRecord;
use crate::core::vcard::VCARD_LINE_SEPARATOR;

// ============================================================================
// SECTION: Field Rules
// ============================================================================

/// One entry of a field table.
pub struct FieldRule<S> {
    /// Stable field key.
    pub key: &'static str,
    /// Label resolved through the locale.
    pub label: Label,
    /// Extracts the display value; `None` omits the field.
    pub value: fn(&S) -> Option<String>,
}

/// Evaluates a field table against a source, keeping fields that yield a value.
#[must_use]
pub fn build_fields<S>(rules: &[FieldRule<S>], source: &S, locale: PassLocale) -> Vec<PassField> {
    rules
        .iter()
        .filter_map(|rule| {
            (rule.value)(source)
                .map(|value| PassField::new(rule.key, locale.label(rule.label), value))
        })
        .collect()
}

// ============================================================================
// SECTION: Business Card Tables
// ============================================================================

/// Business-card primary fields.
pub const BUSINESS_CARD_PRIMARY: &[FieldRule<ContactRecord>] = &[FieldRule {
    key: "name",
    label: Label::Name,
    value: contact_full_name,
}];

/// Business-card secondary fields.
pub const BUSINESS_CARD_SECONDARY: &[FieldRule<ContactRecord>] = &[
    FieldRule {
        key: "job",
        label: Label::Job,
        value: contact_job_title,
    },
    FieldRule {
        key: "company",
        label: Label::Company,
        value: contact_company,
    },
];

/// Business-card auxiliary fields.
pub const BUSINESS_CARD_AUXILIARY: &[FieldRule<ContactRecord>] = &[
    FieldRule {
        key: "email",
        label: Label::Email,
        value: contact_email,
    },
    FieldRule {
        key: "phone",
        label: Label::Phone,
        value: contact_phone,
    },
];

/// Business-card back fields.
pub const BUSINESS_CARD_BACK: &[FieldRule<ContactRecord>] = &[
    FieldRule {
        key: "contactInfo",
        label: Label::ContactInfo,
        value: contact_info_lines,
    },
    FieldRule {
        key: "socialMedia",
        label: Label::SocialMedia,
        value: social_media_lines,
    },
    FieldRule {
        key: "address",
        label: Label::Address,
        value: address_line,
    },
];

/// Full name.
fn contact_full_name(contact: &ContactRecord) -> Option<String> {
    Some(contact.full_name())
}

/// Job title when present.
fn contact_job_title(contact: &ContactRecord) -> Option<String> {
    contact.job_title().map(str::to_string)
}

/// Company name when present.
fn contact_company(contact: &ContactRecord) -> Option<String> {
    contact.company_name().map(str::to_string)
}

/// Email when present.
fn contact_email(contact: &ContactRecord) -> Option<String> {
    contact.email().map(str::to_string)
}

/// Phone when present.
fn contact_phone(contact: &ContactRecord) -> Option<String> {
    contact.phone().map(str::to_string)
}

/// Email, phone, and website lines; always emitted, empty when all are absent.
fn contact_info_lines(contact: &ContactRecord) -> Option<String> {
    let lines: Vec<&str> =
        [contact.email(), contact.phone(), contact.website()].into_iter().flatten().collect();
    Some(lines.join(VCARD_LINE_SEPARATOR))
}

/// `Network: value` lines in fixed network order.
fn social_media_lines(contact: &ContactRecord) -> Option<String> {
    let lines: Vec<String> = contact
        .social
        .entries()
        .into_iter()
        .map(|(network, profile)| format!("{}: {profile}", network.display_name()))
        .collect();
    join_lines(&lines)
}

/// Comma-joined non-blank address components.
fn address_line(contact: &ContactRecord) -> Option<String> {
    contact.address.display_line()
}

/// Joins lines with the literal separator, or `None` when there are none.
fn join_lines<T: AsRef<str>>(lines: &[T]) -> Option<String> {
    if lines.is_empty() {
        return None;
    }
    let parts: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    Some(parts.join(VCARD_LINE_SEPARATOR))
}

// ============================================================================
// SECTION: Stamp Card Tables
// ============================================================================

/// Stamp-card primary fields.
pub const STAMP_CARD_PRIMARY: &[FieldRule<StampCardRecord>] = &[FieldRule {
    key: "stamps",
    label: Label::Stamps,
    value: stamp_progress,
}];

/// Stamp-card secondary fields.
pub const STAMP_CARD_SECONDARY: &[FieldRule<StampCardRecord>] = &[FieldRule {
    key: "reward",
    label: Label::Reward,
    value: stamp_reward,
}];

/// Stamp-card back fields.
pub const STAMP_CARD_BACK: &[FieldRule<StampCardRecord>] = &[FieldRule {
    key: "description",
    label: Label::Description,
    value: stamp_description,
}];

/// `"{current} / {goal}"`.
fn stamp_progress(card: &StampCardRecord) -> Option<String> {
    Some(format!("{} / {}", card.current_stamps, card.goal))
}

/// Reward text.
fn stamp_reward(card: &StampCardRecord) -> Option<String> {
    Some(card.reward.clone())
}

/// Description text.
fn stamp_description(card: &StampCardRecord) -> Option<String> {
    Some(card.description.clone())
}

// ============================================================================
// SECTION: Coupon Tables
// ============================================================================

/// Display values of a coupon after the discount has been formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponFace {
    /// Coupon title.
    pub title: String,
    /// Coupon description.
    pub description: String,
    /// Formatted discount (`20%`, `S/15`).
    pub discount: String,
}

/// Coupon primary fields.
pub const COUPON_PRIMARY: &[FieldRule<CouponFace>] = &[FieldRule {
    key: "primary",
    label: Label::Title,
    value: coupon_title,
}];

/// Coupon secondary fields.
pub const COUPON_SECONDARY: &[FieldRule<CouponFace>] = &[FieldRule {
    key: "secondary",
    label: Label::Description,
    value: coupon_description,
}];

/// Coupon auxiliary fields.
pub const COUPON_AUXILIARY: &[FieldRule<CouponFace>] = &[FieldRule {
    key: "auxiliary",
    label: Label::Discount,
    value: coupon_discount,
}];

/// Title text.
fn coupon_title(face: &CouponFace) -> Option<String> {
    Some(face.title.clone())
}

/// Description text.
fn coupon_description(face: &CouponFace) -> Option<String> {
    Some(face.description.clone())
}

/// Formatted discount.
fn coupon_discount(face: &CouponFace) -> Option<String> {
    Some(face.discount.clone())
}
