// crates/wallet-pass-cli/src/lib.rs
// ============================================================================
// Module: Wallet Pass CLI Library
// Description: Shared helpers for the wallet-pass command-line binary.
// Purpose: Expose localization, audit, and file sink modules to the binary.
// Dependencies: serde, serde_json, wallet-pass-core, wallet-pass-config
// ============================================================================

//! ## Overview
//! The library half of the CLI holds everything the binary needs that is worth
//! testing on its own: the message catalog, the structured audit sinks, and
//! the file-backed [`wallet_pass_core::PassSink`] used for `--output`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod i18n;
pub mod sink;
