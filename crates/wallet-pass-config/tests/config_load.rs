//! Config file loading tests for wallet-pass-config.
// crates/wallet-pass-config/tests/config_load.rs
// =============================================================================
// Module: Config Load Tests
// Description: Validate file loading, size limits, and error classification.
// Purpose: Ensure disk loading is bounded and fails closed.
// =============================================================================

use std::fs;
use std::path::Path;

use wallet_pass_config::ConfigError;
use wallet_pass_config::WalletPassConfig;

mod common;

use common::TestResult;

#[test]
fn loads_explicit_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("wallet-pass.toml");
    fs::write(&path, "[coupon]\nvalidity_days = 14\n").map_err(|err| err.to_string())?;
    let config = WalletPassConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config.coupon.validity_days != 14 {
        return Err("coupon validity not loaded".to_string());
    }
    if config.source_path.as_deref() != Some(path.as_path()) {
        return Err("source path not recorded".to_string());
    }
    Ok(())
}

#[test]
fn missing_explicit_file_is_io_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    match WalletPassConfig::load(Some(&path)) {
        Err(ConfigError::Io(_)) => Ok(()),
        other => Err(format!("expected io error, got {}", describe(&other))),
    }
}

#[test]
fn malformed_toml_is_parse_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[pass\n").map_err(|err| err.to_string())?;
    match WalletPassConfig::load(Some(&path)) {
        Err(ConfigError::Parse(_)) => Ok(()),
        other => Err(format!("expected parse error, got {}", describe(&other))),
    }
}

#[test]
fn oversized_file_is_rejected() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("huge.toml");
    let padding = format!("# {}\n", "x".repeat(1024 * 1024));
    fs::write(&path, padding).map_err(|err| err.to_string())?;
    match WalletPassConfig::load(Some(&path)) {
        Err(ConfigError::Invalid(message)) if message.contains("size limit") => Ok(()),
        other => Err(format!("expected size rejection, got {}", describe(&other))),
    }
}

#[test]
fn invalid_values_fail_on_load() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("invalid.toml");
    fs::write(&path, "[stamp_card]\nvalidity_days = 0\n").map_err(|err| err.to_string())?;
    match WalletPassConfig::load(Some(&path)) {
        Err(ConfigError::Invalid(_)) => Ok(()),
        other => Err(format!("expected invalid config, got {}", describe(&other))),
    }
}

#[test]
fn signing_material_resolves_relative_to_config_dir() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("wallet-pass.toml");
    fs::write(
        &path,
        "[certificates]\nwwdr_path = \"certs/wwdr.pem\"\nsigner_cert_path = \
         \"/etc/wallet/signer.pem\"\nsigner_key_path = \"certs/signer.key\"\n\
         signer_key_passphrase_env = \"SIGNER_KEY_PASSPHRASE\"\n",
    )
    .map_err(|err| err.to_string())?;
    let config = WalletPassConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    let material = config.signing_material().ok_or("signing material missing")?;
    if material.wwdr_path != dir.path().join("certs/wwdr.pem") {
        return Err(format!("unexpected wwdr path {}", material.wwdr_path.display()));
    }
    if material.signer_cert_path != Path::new("/etc/wallet/signer.pem") {
        return Err("absolute signer path was rewritten".to_string());
    }
    if material.signer_key_path != dir.path().join("certs/signer.key") {
        return Err(format!("unexpected key path {}", material.signer_key_path.display()));
    }
    if material.signer_key_passphrase_env.as_deref() != Some("SIGNER_KEY_PASSPHRASE") {
        return Err("passphrase variable not carried".to_string());
    }
    Ok(())
}

#[test]
fn signing_material_absent_without_certificates() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("wallet-pass.toml");
    fs::write(&path, "[coupon]\nvalidity_days = 14\n").map_err(|err| err.to_string())?;
    let config = WalletPassConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config.signing_material().is_some() {
        return Err("signing material should be absent".to_string());
    }
    Ok(())
}

/// Summarizes a load result for failure messages.
fn describe(result: &Result<WalletPassConfig, ConfigError>) -> String {
    match result {
        Ok(_) => "ok".to_string(),
        Err(err) => err.to_string(),
    }
}
