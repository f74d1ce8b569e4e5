// crates/wallet-pass-cli/tests/commands.rs
// ============================================================================
// Module: CLI Command Tests
// Description: Runs the wallet-pass binary against temporary inputs.
// Purpose: Validate generate, vcard, color, and config commands end to end.
// Dependencies: wallet-pass-cli binary, serde_json, tempfile
// ============================================================================

//! ## Overview
//! Each test runs the compiled `wallet-pass` binary inside a temporary working
//! directory with the config and language environment variables cleared, so
//! results depend only on the files the test writes.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use serde_json::Value;
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a command for the binary isolated from ambient configuration.
fn wallet_pass(dir: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_wallet-pass"));
    command.current_dir(dir).env_remove("WALLET_PASS_CONFIG").env_remove("WALLET_PASS_LANG");
    command
}

/// Runs the binary with `args` inside `dir`.
fn run(dir: &Path, args: &[&str]) -> Output {
    wallet_pass(dir).args(args).output().unwrap()
}

/// Returns stdout as UTF-8 text.
fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// Returns stderr as UTF-8 text.
fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

/// Writes a config with a redemption base and a file audit log.
fn write_config(dir: &Path) -> PathBuf {
    let audit_path = dir.join("audit.jsonl");
    let content = format!(
        "[pass]\npass_type_identifier = \"pass.com.example.cli\"\nteam_identifier = \
         \"ABCDE12345\"\norganization_name = \"Tienda Norte\"\n\n[links]\nredemption_base = \
         \"https://redeem.example.com/\"\n\n[audit]\npath = \"{}\"\n",
        audit_path.display()
    );
    let path = dir.join("wallet-pass.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Writes a JSON value to `name` inside `dir`.
fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec(value).unwrap()).unwrap();
    path
}

/// Reads every audit line written under `dir`.
fn audit_lines(dir: &Path) -> Vec<Value> {
    fs::read_to_string(dir.join("audit.jsonl"))
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

/// Business-card form submission.
fn business_card_json() -> Value {
    json!({
        "firstName": "Ana",
        "lastName": "Quispe",
        "jobTitle": "Chef",
        "email": "ana@example.com",
        "backgroundColor": "#000000",
        "foregroundColor": "#FFFFFF",
        "labelColor": "#CCCCCC",
        "barcodeFormat": "PKBarcodeFormatQR"
    })
}

/// Stamp-card form submission.
fn stamp_card_json() -> Value {
    json!({
        "title": "Café Club",
        "description": "Collect ten stamps",
        "goal": 10,
        "currentStamps": 4,
        "reward": "Free coffee",
        "expirationType": "FIXED_AFTER_ISSUING",
        "issueDate": "2026-01-01T00:00:00Z",
        "activeStampType": "icon",
        "activeStampIcon": "coffee",
        "inactiveStampType": "icon",
        "inactiveStampIcon": "circle",
        "backgroundColor": "#3B2F2F",
        "foregroundColor": "#FFFFFF",
        "labelColor": "#F5DEB3",
        "barcodeFormat": "PKBarcodeFormatQR",
        "isActive": true
    })
}

/// Coupon form submission.
fn coupon_json() -> Value {
    json!({
        "title": "Weekend deal",
        "description": "Any pastry",
        "discountValue": 15,
        "discountType": "fixed",
        "backgroundColor": "#112233",
        "foregroundColor": "#FFFFFF",
        "labelColor": "#CCCCCC"
    })
}

/// Creates a temporary working directory.
fn workdir() -> TempDir {
    tempfile::tempdir().unwrap()
}

// ============================================================================
// SECTION: Generate Commands
// ============================================================================

/// Writes a business card to the output directory and audits the run.
#[test]
fn business_card_generate_writes_pass_json_and_audit_event() {
    let dir = workdir();
    let config = write_config(dir.path());
    let input = write_json(dir.path(), "card.json", &business_card_json());
    let out = dir.path().join("out");

    let output = run(
        dir.path(),
        &[
            "business-card",
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--serial",
            "bc-001",
            "--output",
            out.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("sha256:"));

    let pass: Value = serde_json::from_slice(&fs::read(out.join("pass.json")).unwrap()).unwrap();
    assert_eq!(pass["passTypeIdentifier"], "pass.com.example.cli");
    assert_eq!(pass["teamIdentifier"], "ABCDE12345");
    assert_eq!(pass["serialNumber"], "bc-001");
    assert_eq!(pass["generic"]["primaryFields"][0]["value"], "Ana Quispe");
    assert_eq!(pass["barcode"]["format"], "PKBarcodeFormatQR");

    let events = audit_lines(dir.path());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["pass_kind"], "business_card");
    assert_eq!(events[0]["serial_number"], "bc-001");
    assert_eq!(events[0]["outcome"], "success");
    assert!(stdout(&output).contains(events[0]["document_hash"]["value"].as_str().unwrap()));
}

/// Prints a stamp card as canonical JSON when no output directory is given.
#[test]
fn stamp_card_generate_prints_canonical_json() {
    let dir = workdir();
    let config = write_config(dir.path());
    let input = write_json(dir.path(), "stamp.json", &stamp_card_json());

    let output = run(
        dir.path(),
        &[
            "stamp-card",
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--serial",
            "stamp-001",
            "--issued-at",
            "2026-03-01T12:00:00Z",
            "--config",
            config.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let pass: Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(pass["organizationName"], "Tienda Norte");
    assert_eq!(pass["storeCard"]["primaryFields"][0]["value"], "4 / 10");
    assert_eq!(pass["barcode"]["message"], "https://redeem.example.com/redeem/stamp-001");
    assert_eq!(pass["expirationDate"], "2027-01-01T00:00:00Z");
}

/// Rejects an invalid coupon and records a failure event.
#[test]
fn coupon_generate_rejects_invalid_record_and_audits_failure() {
    let dir = workdir();
    let config = write_config(dir.path());
    let mut coupon = coupon_json();
    coupon["discountValue"] = json!(0);
    let input = write_json(dir.path(), "coupon.json", &coupon);
    let out = dir.path().join("out");

    let output = run(
        dir.path(),
        &[
            "coupon",
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--serial",
            "cp-001",
            "--output",
            out.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("discountValue"));
    assert!(!out.join("pass.json").exists());

    let events = audit_lines(dir.path());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["pass_kind"], "coupon");
    assert_eq!(events[0]["outcome"], "failure");
    assert!(events[0]["document_hash"].is_null());
}

/// Writes a valid coupon with the configured currency symbol.
#[test]
fn coupon_generate_formats_fixed_discount() {
    let dir = workdir();
    let config = write_config(dir.path());
    let input = write_json(dir.path(), "coupon.json", &coupon_json());

    let output = run(
        dir.path(),
        &[
            "coupon",
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--serial",
            "cp-002",
            "--issued-at",
            "2026-03-01T12:00:00Z",
            "--config",
            config.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let pass: Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(pass["coupon"]["auxiliaryFields"][0]["value"], "S/15");
    assert_eq!(pass["expirationDate"], "2026-03-31T12:00:00Z");
}

/// Rejects a malformed request timestamp.
#[test]
fn generate_rejects_invalid_issued_at() {
    let dir = workdir();
    let config = write_config(dir.path());
    let input = write_json(dir.path(), "coupon.json", &coupon_json());

    let output = run(
        dir.path(),
        &[
            "coupon",
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--serial",
            "cp-003",
            "--issued-at",
            "yesterday",
            "--config",
            config.to_str().unwrap(),
        ],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--issued-at"));
}

/// Reports unparseable record files.
#[test]
fn generate_reports_malformed_input() {
    let dir = workdir();
    let config = write_config(dir.path());
    let input = dir.path().join("broken.json");
    fs::write(&input, "{not json").unwrap();

    let output = run(
        dir.path(),
        &[
            "business-card",
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--serial",
            "bc-002",
            "--config",
            config.to_str().unwrap(),
        ],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to parse business card record"));
}

// ============================================================================
// SECTION: Contact-Card Commands
// ============================================================================

/// Encodes a contact card in all three formats.
#[test]
fn vcard_encode_supports_text_data_uri_and_link() {
    let dir = workdir();
    let input = write_json(
        dir.path(),
        "contact.json",
        &json!({ "firstName": "Ana", "lastName": "Quispe", "phone": "+51 999" }),
    );
    let path = input.to_str().unwrap();

    let text = run(dir.path(), &["vcard", "encode", "--input", path]);
    assert!(text.status.success(), "stderr: {}", stderr(&text));
    let text = stdout(&text);
    assert!(text.starts_with("BEGIN:VCARD\\nVERSION:3.0\\nN:Quispe;Ana;;;\\n"));
    assert!(text.trim_end().ends_with("END:VCARD"));

    let data_uri = run(dir.path(), &["vcard", "encode", "--input", path, "--format", "data-uri"]);
    assert!(stdout(&data_uri).starts_with("data:text/vcard;base64,"));

    let link = run(dir.path(), &["vcard", "encode", "--input", path, "--format", "link"]);
    assert!(link.status.success(), "stderr: {}", stderr(&link));
    assert!(stdout(&link).starts_with("https://contact.example.com/?given=Ana&family=Quispe"));
}

/// Rejects contacts missing a required name.
#[test]
fn vcard_encode_rejects_missing_last_name() {
    let dir = workdir();
    let input = write_json(dir.path(), "contact.json", &json!({ "firstName": "Ana", "lastName": " " }));
    let output = run(dir.path(), &["vcard", "encode", "--input", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("lastName"));
}

// ============================================================================
// SECTION: Color Commands
// ============================================================================

/// Converts between the two color notations.
#[test]
fn color_commands_convert_values() {
    let dir = workdir();
    assert_eq!(stdout(&run(dir.path(), &["color", "to-rgb", "#FF0000"])).trim(), "rgb(255, 0, 0)");
    assert_eq!(stdout(&run(dir.path(), &["color", "to-hex", "rgb(0, 255, 127)"])).trim(), "#00ff7f");
    assert_eq!(stdout(&run(dir.path(), &["color", "text-color", "#FFFFFF"])).trim(), "#000000");
    assert_eq!(stdout(&run(dir.path(), &["color", "complement", "#000000"])).trim(), "#ffffff");
}

/// Fails on malformed colors.
#[test]
fn color_command_rejects_invalid_value() {
    let dir = workdir();
    let output = run(dir.path(), &["color", "to-rgb", "not-a-color"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not-a-color"));
}

// ============================================================================
// SECTION: Config and Locale
// ============================================================================

/// Accepts the defaults when no config file exists.
#[test]
fn config_validate_accepts_defaults() {
    let dir = workdir();
    let output = run(dir.path(), &["config", "validate"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "Config validated successfully.");
}

/// Reports configured signing certificates resolved against the config directory.
#[test]
fn config_validate_reports_signing_certificates() {
    let dir = workdir();
    let path = dir.path().join("signing.toml");
    fs::write(
        &path,
        "[certificates]\nwwdr_path = \"wwdr.pem\"\nsigner_cert_path = \"signer.pem\"\n\
         signer_key_path = \"signer.key\"\n",
    )
    .unwrap();
    let output = run(dir.path(), &["config", "validate", "--config", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Config validated successfully.");
    assert_eq!(
        lines[1],
        format!(
            "Signing certificates: wwdr={}, signer={}, key={}",
            dir.path().join("wwdr.pem").display(),
            dir.path().join("signer.pem").display(),
            dir.path().join("signer.key").display()
        )
    );
}

/// Rejects unknown config keys.
#[test]
fn config_validate_rejects_unknown_keys() {
    let dir = workdir();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[pass]\nunknown = true\n").unwrap();
    let output = run(dir.path(), &["config", "validate", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load config"));
}

/// Localizes output through the flag and the environment.
#[test]
fn spanish_output_via_flag_and_env() {
    let dir = workdir();
    let flag = run(dir.path(), &["--lang", "es", "config", "validate"]);
    assert_eq!(stdout(&flag).trim(), "Configuración validada correctamente.");

    let env = wallet_pass(dir.path())
        .env("WALLET_PASS_LANG", "es-PE")
        .args(["config", "validate"])
        .output()
        .unwrap();
    assert_eq!(stdout(&env).trim(), "Configuración validada correctamente.");
}

/// Rejects an unsupported language in the environment.
#[test]
fn invalid_language_env_fails() {
    let dir = workdir();
    let output = wallet_pass(dir.path())
        .env("WALLET_PASS_LANG", "fr")
        .args(["config", "validate"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("WALLET_PASS_LANG"));
}

/// Prints the package version.
#[test]
fn version_flag_prints_version() {
    let dir = workdir();
    let output = run(dir.path(), &["--version"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), format!("wallet-pass {}", env!("CARGO_PKG_VERSION")));
}
