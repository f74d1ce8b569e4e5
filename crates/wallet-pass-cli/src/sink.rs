// crates/wallet-pass-cli/src/sink.rs
// ============================================================================
// Module: File Pass Sink
// Description: Writes canonical pass definitions into an output directory.
// Purpose: Hand finished documents to an offline signing step through disk.
// Dependencies: wallet-pass-core
// ============================================================================

//! ## Overview
//! [`FilePassSink`] implements [`PassSink`] by writing the canonical JSON of
//! a document to `pass.json` inside its output directory. The file is written
//! to a temporary sibling first and renamed into place, so a reader never sees
//! a partial document. The receipt digest covers exactly the bytes on disk.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use wallet_pass_core::DEFAULT_HASH_ALGORITHM;
use wallet_pass_core::DeliveryReceipt;
use wallet_pass_core::HashAlgorithm;
use wallet_pass_core::PassDefinitionDocument;
use wallet_pass_core::PassSink;
use wallet_pass_core::SinkError;
use wallet_pass_core::encode_pass;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// File name of the pass definition inside the output directory.
pub const PASS_DEFINITION_FILE: &str = "pass.json";

/// Temporary file name used while writing.
const PASS_DEFINITION_TEMP_FILE: &str = "pass.json.tmp";

// ============================================================================
// SECTION: File Sink
// ============================================================================

/// Pass sink that writes canonical documents to disk.
#[derive(Debug, Clone)]
pub struct FilePassSink {
    /// Output directory.
    root: PathBuf,
    /// Hash algorithm for receipts.
    algorithm: HashAlgorithm,
}

impl FilePassSink {
    /// Creates a sink writing into `root` with the default hash algorithm.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_algorithm(root, DEFAULT_HASH_ALGORITHM)
    }

    /// Creates a sink writing into `root` with an explicit hash algorithm.
    #[must_use]
    pub fn with_algorithm(root: impl Into<PathBuf>, algorithm: HashAlgorithm) -> Self {
        Self {
            root: root.into(),
            algorithm,
        }
    }

    /// Returns the output directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path the pass definition is written to.
    #[must_use]
    pub fn definition_path(&self) -> PathBuf {
        self.root.join(PASS_DEFINITION_FILE)
    }
}

impl PassSink for FilePassSink {
    fn deliver(
        &mut self,
        document: &PassDefinitionDocument,
    ) -> Result<DeliveryReceipt, SinkError> {
        if document.serial_number.is_blank() {
            return Err(SinkError::Rejected("serial number is blank".to_string()));
        }
        let encoded = encode_pass(document, self.algorithm)
            .map_err(|err| SinkError::Encoding(err.to_string()))?;
        fs::create_dir_all(&self.root).map_err(|err| SinkError::Io(err.to_string()))?;
        let temp_path = self.root.join(PASS_DEFINITION_TEMP_FILE);
        let final_path = self.definition_path();
        fs::write(&temp_path, &encoded.bytes).map_err(|err| SinkError::Io(err.to_string()))?;
        fs::rename(&temp_path, &final_path).map_err(|err| SinkError::Io(err.to_string()))?;
        Ok(DeliveryReceipt {
            serial_number: document.serial_number.clone(),
            location: final_path.display().to_string(),
            digest: encoded.digest,
        })
    }
}
