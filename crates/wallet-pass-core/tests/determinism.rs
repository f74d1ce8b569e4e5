// crates/wallet-pass-core/tests/determinism.rs
// ============================================================================
// Module: Determinism and Hashing Tests
// Description: Tests for byte-stable canonical output and sink delivery.
// ============================================================================
//! ## Overview
//! Assembling the same inputs twice must yield identical canonical JSON and
//! identical digests; sinks report the same digest.

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

use serde_json::json;
use time::macros::datetime;
use wallet_pass_core::AssemblerConfig;
use wallet_pass_core::AssemblyContext;
use wallet_pass_core::BusinessCardRecord;
use wallet_pass_core::DEFAULT_HASH_ALGORITHM;
use wallet_pass_core::InMemoryPassSink;
use wallet_pass_core::PassAssembler;
use wallet_pass_core::PassDefinitionDocument;
use wallet_pass_core::PassSink;
use wallet_pass_core::PassTypeIdentifier;
use wallet_pass_core::SerialNumber;
use wallet_pass_core::TeamIdentifier;
use wallet_pass_core::hashing::canonical_json_bytes;
use wallet_pass_core::hashing::encode_pass;

/// Assembles the reference business card.
fn assemble() -> PassDefinitionDocument {
    let record: BusinessCardRecord = serde_json::from_value(json!({
        "firstName": "Ana",
        "lastName": "Quispe",
        "companyName": "Andes Labs",
        "email": "ana@andes.pe",
        "instagram": "@ana",
        "city": "Lima",
        "backgroundColor": "#102030",
        "foregroundColor": "#FFFFFF",
        "labelColor": "#AABBCC",
        "barcodeFormat": "PKBarcodeFormatAztec"
    }))
    .unwrap();
    let assembler = PassAssembler::new(AssemblerConfig::new(
        PassTypeIdentifier::new("pass.com.example.card"),
        TeamIdentifier::new("ABCDE12345"),
    ));
    let ctx = AssemblyContext::new(datetime!(2026-03-01 12:00 UTC));
    assembler.business_card(&record, &SerialNumber::new("bc-42"), &ctx).unwrap()
}

#[test]
fn assembling_twice_is_byte_identical() {
    let first = canonical_json_bytes(&assemble()).unwrap();
    let second = canonical_json_bytes(&assemble()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn digest_is_stable() {
    let first = encode_pass(&assemble(), DEFAULT_HASH_ALGORITHM).unwrap().digest;
    let second = encode_pass(&assemble(), DEFAULT_HASH_ALGORITHM).unwrap().digest;
    assert_eq!(first, second);
    assert_eq!(first.value.len(), 64);
    assert!(first.to_string().starts_with("sha256:"));
}

#[test]
fn canonical_document_round_trips() {
    let doc = assemble();
    let bytes = canonical_json_bytes(&doc).unwrap();
    let parsed: PassDefinitionDocument = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn in_memory_sink_reports_document_digest() {
    let doc = assemble();
    let mut sink = InMemoryPassSink::new();
    let receipt = sink.deliver(&doc).unwrap();
    assert_eq!(receipt.serial_number.as_str(), "bc-42");
    assert_eq!(receipt.location, "memory://bc-42");
    let encoded = encode_pass(&doc, DEFAULT_HASH_ALGORITHM).unwrap();
    assert_eq!(receipt.digest, encoded.digest);
    assert_eq!(sink.get("bc-42").unwrap(), encoded.bytes.as_slice());
    assert_eq!(sink.len(), 1);
}
