// crates/wallet-pass-core/src/runtime/mod.rs
// ============================================================================
// Module: Wallet Pass Runtime
// Description: Pass assembler and in-memory sink.
// Purpose: Build pass documents from records and hand them to sinks.
// Dependencies: crate::{core, interfaces}, time, url
// ============================================================================

//! ## Overview
//! Runtime modules implement pass assembly on top of the core types. Hosts
//! (the CLI, an HTTP layer) must all call into the same assembler so every
//! surface produces identical documents for identical inputs.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod assembler;
pub mod sink;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use assembler::AssemblerConfig;
pub use assembler::AssemblyContext;
pub use assembler::PassAssembler;
pub use assembler::assemble_business_card;
pub use assembler::assemble_coupon;
pub use assembler::assemble_stamp_card;
pub use assembler::parse_barcode_format;
pub use assembler::redemption_link;
pub use assembler::resolve_barcode_message;
pub use assembler::resolve_stamp_card_expiration;
pub use sink::InMemoryPassSink;
