// crates/wallet-pass-core/src/core/vcard.rs
// ============================================================================
// Module: Wallet Pass Contact-Card Encoder
// Description: vCard 3.0 text, data URI, and contact query-link encoders.
// Purpose: Produce the contact payload embedded in business-card barcodes.
// Dependencies: crate::core::records, base64, url
// ============================================================================

//! ## Overview
//! The contact card is emitted as vCard 3.0 lines in a fixed order, omitting
//! optional lines whose value is absent. Lines are joined with the literal
//! two-character sequence `\n` (backslash, `n`), not a newline: scanners of
//! the deployed passes expect that form inside the barcode payload.
//!
//! Values are emitted verbatim. vCard escaping of `;`, `,`, and newlines is
//! not applied, so values containing them produce malformed lines.

// ============================================================================
// SECTION: Imports
// ============================================================================

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use url::Url;

use crate::core::records::ContactRecord;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Literal separator placed between contact-card lines.
pub const VCARD_LINE_SEPARATOR: &str = "\\n";

/// Media type prefix of the contact-card data URI.
pub const VCARD_DATA_URI_PREFIX: &str = "data:text/vcard;base64,";

// ============================================================================
// SECTION: Encoders
// ============================================================================

/// Returns the contact-card lines in output order.
#[must_use]
pub fn contact_card_lines(contact: &ContactRecord) -> Vec<String> {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{};{};;;", contact.last_name, contact.first_name),
        format!("FN:{}", contact.full_name()),
    ];
    if let Some(title) = contact.job_title() {
        lines.push(format!("TITLE:{title}"));
    }
    if let Some(company) = contact.company_name() {
        lines.push(format!("ORG:{company}"));
    }
    if let Some(email) = contact.email() {
        lines.push(format!("EMAIL;type=INTERNET;type=WORK:{email}"));
    }
    if let Some(phone) = contact.phone() {
        lines.push(format!("TEL;type=CELL:{phone}"));
    }
    if let Some(website) = contact.website() {
        lines.push(format!("URL;type=WORK:{website}"));
    }
    for (network, profile) in contact.social.entries() {
        lines.push(format!("URL;type={}:{profile}", network.vcard_type()));
    }
    if let Some(address) = contact.address.vcard_components() {
        lines.push(format!("ADR;type=WORK:;;{address}"));
    }
    lines.push("END:VCARD".to_string());
    lines
}

/// Encodes a contact as a vCard 3.0 text block.
#[must_use]
pub fn encode_contact_card(contact: &ContactRecord) -> String {
    contact_card_lines(contact).join(VCARD_LINE_SEPARATOR)
}

/// Encodes a contact as `data:text/vcard;base64,...`.
#[must_use]
pub fn encode_contact_card_data_uri(contact: &ContactRecord) -> String {
    let text = encode_contact_card(contact);
    format!("{VCARD_DATA_URI_PREFIX}{}", STANDARD.encode(text.as_bytes()))
}

/// Appends `given`, `family`, `email`, and `phone` query parameters to a base URL.
///
/// Email and phone are appended only when present. Existing query pairs on
/// the base URL are kept.
#[must_use]
pub fn encode_contact_query_link(contact: &ContactRecord, base: &Url) -> Url {
    let mut link = base.clone();
    {
        let mut query = link.query_pairs_mut();
        query.append_pair("given", &contact.first_name);
        query.append_pair("family", &contact.last_name);
        if let Some(email) = contact.email() {
            query.append_pair("email", email);
        }
        if let Some(phone) = contact.phone() {
            query.append_pair("phone", phone);
        }
    }
    link
}
