// crates/wallet-pass-core/src/lib.rs
// ============================================================================
// Module: Wallet Pass Core Library
// Description: Public API surface for the wallet pass assembly pipeline.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Wallet pass core turns validated business-card, stamp-card, and coupon
//! records into unsigned pass-definition documents and vCard contact
//! payloads. It is transport-agnostic: form handling, persistence, and
//! signing live behind explicit interfaces owned by the host.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::DeliveryReceipt;
pub use interfaces::PassSink;
pub use interfaces::SinkError;
pub use runtime::AssemblerConfig;
pub use runtime::AssemblyContext;
pub use runtime::InMemoryPassSink;
pub use runtime::PassAssembler;
