// crates/wallet-pass-cli/src/audit.rs
// ============================================================================
// Module: Pass Audit Logging
// Description: Structured audit events for pass assembly runs.
// Purpose: Emit one JSON line per assembly attempt without hard dependencies.
// Dependencies: serde, serde_json, wallet-pass-core, wallet-pass-config
// ============================================================================

//! ## Overview
//! Every `generate` command records a [`PassAuditEvent`] describing which kind
//! of pass was assembled, for which serial number, the digest of the canonical
//! document, and whether assembly succeeded. Sinks write JSON lines to stderr
//! or append them to a file selected by the `[audit]` config section.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use wallet_pass_config::AuditConfig;
use wallet_pass_core::HashDigest;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Event name recorded for assembly attempts.
pub const PASS_ASSEMBLY_EVENT: &str = "pass_assembly";

/// Pass kind recorded in audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    /// Business card (generic style).
    BusinessCard,
    /// Stamp card (store-card style).
    StampCard,
    /// Coupon.
    Coupon,
}

impl PassKind {
    /// Returns the stable label used in audit output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BusinessCard => "business_card",
            Self::StampCard => "stamp_card",
            Self::Coupon => "coupon",
        }
    }
}

/// Assembly outcome recorded in audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    /// Document assembled and delivered.
    Success,
    /// Assembly or delivery failed.
    Failure,
}

/// Pass assembly audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct PassAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Kind of pass requested.
    pub pass_kind: PassKind,
    /// Serial number requested by the caller.
    pub serial_number: String,
    /// Digest of the canonical document when one was produced.
    pub document_hash: Option<HashDigest>,
    /// Attempt outcome.
    pub outcome: AuditOutcome,
    /// Error message on failure.
    pub error: Option<String>,
}

/// Inputs required to construct a pass audit event.
pub struct PassAuditEventParams {
    /// Kind of pass requested.
    pub pass_kind: PassKind,
    /// Serial number requested by the caller.
    pub serial_number: String,
    /// Digest of the canonical document when one was produced.
    pub document_hash: Option<HashDigest>,
    /// Attempt outcome.
    pub outcome: AuditOutcome,
    /// Error message on failure.
    pub error: Option<String>,
}

impl PassAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: PassAuditEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: PASS_ASSEMBLY_EVENT,
            timestamp_ms,
            pass_kind: params.pass_kind,
            serial_number: params.serial_number,
            document_hash: params.document_hash,
            outcome: params.outcome,
            error: params.error,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for pass assembly events.
pub trait AuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &PassAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record(&self, event: &PassAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that appends JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl AuditSink for FileAuditSink {
    fn record(&self, event: &PassAuditEvent) {
        if let Ok(mut file) = self.file.lock()
            && serde_json::to_writer(&mut *file, event).is_ok()
        {
            let _ = writeln!(file);
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &PassAuditEvent) {}
}

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Builds the audit sink selected by configuration.
///
/// # Errors
///
/// Returns an error if a configured audit file cannot be opened.
pub fn audit_sink_from_config(config: &AuditConfig) -> io::Result<Box<dyn AuditSink>> {
    if !config.enabled {
        return Ok(Box::new(NoopAuditSink));
    }
    match &config.path {
        Some(path) => Ok(Box::new(FileAuditSink::new(Path::new(path))?)),
        None => Ok(Box::new(StderrAuditSink)),
    }
}
