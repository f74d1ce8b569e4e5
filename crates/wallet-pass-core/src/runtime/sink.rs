// crates/wallet-pass-core/src/runtime/sink.rs
// ============================================================================
// Module: Wallet Pass In-Memory Sink
// Description: Simple in-memory pass sink for tests and local demos.
// Purpose: Provide a deterministic sink implementation without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides an in-memory implementation of [`PassSink`] that keeps
//! the canonical bytes of every delivered document keyed by serial number. It
//! is not intended for production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::document::PassDefinitionDocument;
use crate::core::hashing::DEFAULT_HASH_ALGORITHM;
use crate::core::hashing::HashAlgorithm;
use crate::core::hashing::encode_pass;
use crate::interfaces::DeliveryReceipt;
use crate::interfaces::PassSink;
use crate::interfaces::SinkError;

// ============================================================================
// SECTION: In-Memory Sink
// ============================================================================

/// In-memory pass sink for tests and demos.
#[derive(Debug, Clone)]
pub struct InMemoryPassSink {
    /// Canonical document bytes keyed by serial number.
    documents: BTreeMap<String, Vec<u8>>,
    /// Hash algorithm for receipts.
    algorithm: HashAlgorithm,
}

impl Default for InMemoryPassSink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPassSink {
    /// Creates an empty sink using the default hash algorithm.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            documents: BTreeMap::new(),
            algorithm: DEFAULT_HASH_ALGORITHM,
        }
    }

    /// Returns the canonical bytes delivered for a serial number.
    #[must_use]
    pub fn get(&self, serial_number: &str) -> Option<&[u8]> {
        self.documents.get(serial_number).map(Vec::as_slice)
    }

    /// Returns the number of delivered documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true when nothing has been delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl PassSink for InMemoryPassSink {
    fn deliver(
        &mut self,
        document: &PassDefinitionDocument,
    ) -> Result<DeliveryReceipt, SinkError> {
        let encoded = encode_pass(document, self.algorithm)
            .map_err(|err| SinkError::Encoding(err.to_string()))?;
        let serial_number = document.serial_number.clone();
        self.documents.insert(serial_number.to_string(), encoded.bytes);
        Ok(DeliveryReceipt {
            location: format!("memory://{serial_number}"),
            serial_number,
            digest: encoded.digest,
        })
    }
}
