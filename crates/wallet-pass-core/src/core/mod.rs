// crates/wallet-pass-core/src/core/mod.rs
// ============================================================================
// Module: Wallet Pass Core Types
// Description: Records, documents, and pure encoders for wallet passes.
// Purpose: Provide stable, serializable types shared by the assembler and hosts.
// Dependencies: serde, time, url
// ============================================================================

//! ## Overview
//! Core types describe what goes into a pass (validated form records) and
//! what comes out (the unsigned pass-definition document), plus the pure
//! color and contact-card encoders the assembler composes.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod address;
pub mod color;
pub mod document;
pub mod error;
pub mod fields;
pub mod hashing;
pub mod identifiers;
pub mod labels;
pub mod records;
pub mod vcard;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use address::PostalAddress;
pub use color::ColorError;
pub use color::ColorNotation;
pub use color::Rgb;
pub use color::complementary_color;
pub use color::device_palette_to_hex;
pub use color::hex_to_device_palette;
pub use color::pick_readable_text_color;
pub use document::BARCODE_MESSAGE_ENCODING;
pub use document::Barcode;
pub use document::BarcodeFormat;
pub use document::PASS_FORMAT_VERSION;
pub use document::PassDefinitionDocument;
pub use document::PassField;
pub use document::PassFieldGroups;
pub use document::PassStructure;
pub use document::PassStyle;
pub use document::StampCardDetails;
pub use error::PassError;
pub use fields::CouponFace;
pub use fields::FieldRule;
pub use fields::build_fields;
pub use hashing::DEFAULT_HASH_ALGORITHM;
pub use hashing::EncodedPass;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use hashing::encode_pass;
pub use identifiers::PassTypeIdentifier;
pub use identifiers::SerialNumber;
pub use identifiers::TeamIdentifier;
pub use labels::Label;
pub use labels::PassLocale;
pub use records::BarcodeRequest;
pub use records::BusinessCardRecord;
pub use records::ContactRecord;
pub use records::CouponRecord;
pub use records::DiscountType;
pub use records::ExpirationType;
pub use records::PassColors;
pub use records::SocialNetwork;
pub use records::SocialProfiles;
pub use records::StampCardRecord;
pub use records::StampTheme;
pub use records::StampVisual;
pub use records::StampVisualKind;
pub use vcard::encode_contact_card;
pub use vcard::encode_contact_card_data_uri;
pub use vcard::encode_contact_query_link;
