// crates/wallet-pass-config/src/lib.rs
// ============================================================================
// Module: Wallet Pass Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for wallet-pass.toml semantics.
// Dependencies: wallet-pass-core, serde, toml
// ============================================================================

//! ## Overview
//! `wallet-pass-config` defines the deployment configuration for the wallet
//! pass tools: pass identifiers, validity windows, link bases, signing
//! certificate paths, and audit output. Validation is strict and fail-closed,
//! and a validated config converts into the core's injected
//! [`wallet_pass_core::AssemblerConfig`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
