// crates/wallet-pass-core/src/core/error.rs
// ============================================================================
// Module: Wallet Pass Assembly Errors
// Description: Typed failures raised while assembling pass documents.
// Purpose: Give callers one local, non-retryable error type per assembly call.
// Dependencies: crate::core::color, thiserror
// ============================================================================

//! ## Overview
//! Assembly fails closed: a record that breaks an invariant, carries a color
//! that does not convert, or names an unknown barcode symbology yields a
//! [`PassError`] and no document. All errors are synchronous and local; none
//! are worth retrying with the same input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::color::ColorError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by the pass assembler and record validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassError {
    /// A record color could not be normalized to the device palette.
    #[error("color conversion failed for {field}: {source}")]
    ColorConversion {
        /// Record key of the offending color.
        field: &'static str,
        /// Underlying format error.
        #[source]
        source: ColorError,
    },
    /// A required field is absent or blank.
    #[error("missing required field: {field}")]
    MissingRequiredField {
        /// Record key of the missing field.
        field: &'static str,
    },
    /// A field is present but violates its constraint.
    #[error("invalid value for {field}: {reason}")]
    InvalidFieldValue {
        /// Record key of the offending field.
        field: &'static str,
        /// Constraint that was violated.
        reason: String,
    },
    /// The requested barcode symbology is not one of the four supported formats.
    #[error("unsupported barcode format: {format}")]
    UnsupportedBarcodeFormat {
        /// Raw format string from the record.
        format: String,
    },
    /// Adding the validity duration overflowed the representable date range.
    #[error("expiration date is out of range")]
    ExpirationOverflow,
    /// Injected assembler configuration cannot serve the request.
    #[error("invalid assembler configuration: {0}")]
    InvalidConfiguration(String),
}
