// crates/wallet-pass-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for wallet-pass-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use wallet_pass_config::ConfigError;
use wallet_pass_config::WalletPassConfig;

/// Result type for tests that report failures as strings.
pub type TestResult = Result<(), String>;

/// Parses a TOML string into a `WalletPassConfig` without validation.
pub fn config_from_toml(toml_str: &str) -> Result<WalletPassConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<WalletPassConfig, toml::de::Error> {
    config_from_toml("")
}

/// Asserts that validation failed with a message containing `needle`.
pub fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid config".to_string()),
    }
}
