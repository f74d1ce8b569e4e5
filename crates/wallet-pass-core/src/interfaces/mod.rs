// crates/wallet-pass-core/src/interfaces/mod.rs
// ============================================================================
// Module: Wallet Pass Interfaces
// Description: Hand-off seam between the assembler and the signing engine.
// Purpose: Define the contract a pass signing/bundling collaborator implements.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The assembler never signs or archives passes. Hosts deliver each finished
//! [`PassDefinitionDocument`] to a [`PassSink`], which may sign and bundle it,
//! persist it for a later signing step, or forward it elsewhere. Sinks must
//! fail closed and report where the document went.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::document::PassDefinitionDocument;
use crate::core::hashing::HashDigest;
use crate::core::identifiers::SerialNumber;

// ============================================================================
// SECTION: Pass Sink
// ============================================================================

/// Receipt returned by a sink after accepting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Serial number of the delivered pass.
    pub serial_number: SerialNumber,
    /// Location or external reference of the delivered document.
    pub location: String,
    /// Digest of the canonical document bytes.
    pub digest: HashDigest,
}

/// Pass sink errors.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Sink I/O failed.
    #[error("pass sink io error: {0}")]
    Io(String),
    /// Document could not be encoded for delivery.
    #[error("pass sink encoding error: {0}")]
    Encoding(String),
    /// Sink rejected the document.
    #[error("pass sink rejected document: {0}")]
    Rejected(String),
}

/// Destination for finished pass documents.
pub trait PassSink {
    /// Delivers a finished document.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the document cannot be delivered.
    fn deliver(&mut self, document: &PassDefinitionDocument)
    -> Result<DeliveryReceipt, SinkError>;
}
