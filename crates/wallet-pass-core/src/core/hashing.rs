// crates/wallet-pass-core/src/core/hashing.rs
// ============================================================================
// Module: Wallet Pass Canonical Hashing
// Description: RFC 8785 JSON canonicalization and content hashing utilities.
// Purpose: Provide byte-stable pass JSON and a content digest per document.
// Dependencies: serde, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! Pass documents are written as RFC 8785 (JCS) canonical JSON so that
//! assembling the same record twice produces byte-identical output. The
//! SHA-256 digest of those bytes identifies the document in audit events.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

use crate::core::document::PassDefinitionDocument;

// ============================================================================
// SECTION: Hash Algorithm
// ============================================================================

/// Digest algorithms for pass documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    /// SHA-256.
    Sha256,
}

impl HashAlgorithm {
    /// Prefix used when a digest is rendered as text (`sha256`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

/// Algorithm used for pass receipts unless configured otherwise.
pub const DEFAULT_HASH_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha256;

// ============================================================================
// SECTION: Hash Digest
// ============================================================================

/// Digest of a canonical pass document.
///
/// Renders as `{algorithm}:{hex}` in CLI output and audit events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashDigest {
    /// Algorithm that produced the digest.
    pub algorithm: HashAlgorithm,
    /// Lowercase hex digest.
    pub value: String,
}

impl HashDigest {
    /// Wraps raw digest bytes.
    #[must_use]
    pub fn new(algorithm: HashAlgorithm, bytes: &[u8]) -> Self {
        Self {
            algorithm,
            value: hex_encode(bytes),
        }
    }
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm.label(), self.value)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while encoding a pass document.
#[derive(Debug, Error)]
pub enum HashError {
    /// The document could not be written as canonical JSON.
    #[error("failed to canonicalize json: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Pass Encoding
// ============================================================================

/// Canonical `pass.json` bytes together with their digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPass {
    /// RFC 8785 canonical JSON of the document.
    pub bytes: Vec<u8>,
    /// Digest of `bytes`.
    pub digest: HashDigest,
}

/// Encodes a pass document as canonical JSON and digests the result.
///
/// Sinks and the CLI stdout path share this encoding.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when serialization fails.
pub fn encode_pass(
    document: &PassDefinitionDocument,
    algorithm: HashAlgorithm,
) -> Result<EncodedPass, HashError> {
    let bytes = canonical_json_bytes(document)?;
    let digest = hash_bytes(algorithm, &bytes);
    Ok(EncodedPass {
        bytes,
        digest,
    })
}

/// Returns RFC 8785 canonical JSON bytes for a serializable value.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when serialization fails.
pub fn canonical_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, HashError> {
    serde_jcs::to_vec(value).map_err(|err| HashError::Canonicalization(err.to_string()))
}

/// Digests raw bytes.
#[must_use]
pub fn hash_bytes(algorithm: HashAlgorithm, bytes: &[u8]) -> HashDigest {
    match algorithm {
        HashAlgorithm::Sha256 => HashDigest::new(algorithm, &Sha256::digest(bytes)),
    }
}

// ============================================================================
// SECTION: Hex Encoding
// ============================================================================

/// Encodes bytes as lowercase hex.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(char::from(HEX[usize::from(byte >> 4)]));
        out.push(char::from(HEX[usize::from(byte & 0x0f)]));
    }
    out
}
