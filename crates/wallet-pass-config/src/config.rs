// crates/wallet-pass-config/src/config.rs
// ============================================================================
// Module: Wallet Pass Configuration
// Description: Configuration loading and validation for the wallet pass tools.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: wallet-pass-core, serde, time, toml, url
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The path is resolved from an explicit argument, then the
//! `WALLET_PASS_CONFIG` environment variable, then `wallet-pass.toml` in the
//! working directory. Only the implicit default file may be missing, in which
//! case built-in defaults apply. Invalid configuration always fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use time::Duration;
use url::Url;
use wallet_pass_core::AssemblerConfig;
use wallet_pass_core::DEFAULT_HASH_ALGORITHM;
use wallet_pass_core::PassLocale;
use wallet_pass_core::PassTypeIdentifier;
use wallet_pass_core::TeamIdentifier;
use wallet_pass_core::runtime::assembler::DEFAULT_COUPON_VALIDITY_DAYS;
use wallet_pass_core::runtime::assembler::DEFAULT_CURRENCY_SYMBOL;
use wallet_pass_core::runtime::assembler::DEFAULT_ORGANIZATION_NAME;
use wallet_pass_core::runtime::assembler::DEFAULT_STAMP_CARD_VALIDITY_DAYS;
use wallet_pass_core::runtime::assembler::NAME_PLACEHOLDER;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "wallet-pass.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "WALLET_PASS_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of identifiers and header strings.
pub(crate) const MAX_TEXT_LENGTH: usize = 256;
/// Maximum length of a configured URL.
pub(crate) const MAX_URL_LENGTH: usize = 2048;
/// Maximum length of the currency symbol.
pub(crate) const MAX_CURRENCY_SYMBOL_LENGTH: usize = 8;
/// Maximum validity window in days.
pub(crate) const MAX_VALIDITY_DAYS: u32 = 3650;
/// Required length of a team identifier.
pub(crate) const TEAM_IDENTIFIER_LENGTH: usize = 10;
/// Default pass type identifier.
pub(crate) const DEFAULT_PASS_TYPE_IDENTIFIER: &str = "pass.com.example.walletpass";
/// Default team identifier.
pub(crate) const DEFAULT_TEAM_IDENTIFIER: &str = "ABCDE12345";
/// Default contact-link base URL.
pub(crate) const DEFAULT_CONTACT_LINK_BASE: &str = "https://contact.example.com/";

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Wallet pass tool configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WalletPassConfig {
    /// Pass header configuration.
    #[serde(default)]
    pub pass: PassConfig,
    /// Stamp-card configuration.
    #[serde(default)]
    pub stamp_card: StampCardConfig,
    /// Coupon configuration.
    #[serde(default)]
    pub coupon: CouponConfig,
    /// Link base configuration.
    #[serde(default)]
    pub links: LinksConfig,
    /// Signing certificate paths handed to the signing collaborator.
    #[serde(default)]
    pub certificates: Option<CertificatesConfig>,
    /// Audit output configuration.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Path the configuration was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl WalletPassConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved.path)?;
        if resolved.source == ConfigSource::Default && !resolved.path.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let bytes = fs::read(&resolved.path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config = Self::from_toml_str(content)?;
        config.source_path = Some(resolved.path);
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pass.validate()?;
        self.stamp_card.validate()?;
        self.coupon.validate()?;
        self.links.validate()?;
        if let Some(certificates) = &self.certificates {
            certificates.validate()?;
        }
        self.audit.validate()?;
        Ok(())
    }

    /// Converts the configuration into the assembler's injected settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn assembler_config(&self) -> Result<AssemblerConfig, ConfigError> {
        self.validate()?;
        Ok(AssemblerConfig {
            pass_type_identifier: PassTypeIdentifier::new(self.pass.pass_type_identifier.trim()),
            team_identifier: TeamIdentifier::new(self.pass.team_identifier.trim()),
            organization_name: self.pass.organization_name.clone(),
            locale: self.pass.locale,
            description_template: self.pass.description_template.clone(),
            stamp_card_validity: Duration::days(i64::from(self.stamp_card.validity_days)),
            coupon_validity: Duration::days(i64::from(self.coupon.validity_days)),
            currency_symbol: self.coupon.currency_symbol.clone(),
            redemption_base_url: self.links.redemption_base_url()?,
            hash_algorithm: DEFAULT_HASH_ALGORITHM,
        })
    }

    /// Returns the signing certificate files when `[certificates]` is set.
    ///
    /// Relative paths are taken from the directory of the loaded config file.
    #[must_use]
    pub fn signing_material(&self) -> Option<SigningMaterial> {
        let base_dir = self.source_path.as_deref().and_then(Path::parent);
        self.certificates.as_ref().map(|certificates| certificates.resolve(base_dir))
    }
}

/// Pass header configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PassConfig {
    /// Pass type identifier registered with the wallet vendor.
    #[serde(default = "default_pass_type_identifier")]
    pub pass_type_identifier: String,
    /// Team identifier that owns the signing certificate.
    #[serde(default = "default_team_identifier")]
    pub team_identifier: String,
    /// Organization name for stamp cards and coupons.
    #[serde(default = "default_organization_name")]
    pub organization_name: String,
    /// Business-card description template; must contain `{name}`.
    #[serde(default)]
    pub description_template: Option<String>,
    /// Label locale.
    #[serde(default)]
    pub locale: PassLocale,
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            pass_type_identifier: default_pass_type_identifier(),
            team_identifier: default_team_identifier(),
            organization_name: default_organization_name(),
            description_template: None,
            locale: PassLocale::default(),
        }
    }
}

impl PassConfig {
    /// Validates pass header configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_text("pass.pass_type_identifier", &self.pass_type_identifier)?;
        let pass_type = self.pass_type_identifier.trim();
        if !pass_type.starts_with("pass.") {
            return Err(ConfigError::Invalid(
                "pass.pass_type_identifier must start with `pass.`".to_string(),
            ));
        }
        if pass_type.ends_with('.')
            || pass_type.contains("..")
            || !pass_type.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '.' || ch == '-')
        {
            return Err(ConfigError::Invalid(
                "pass.pass_type_identifier must be a reverse-DNS identifier".to_string(),
            ));
        }
        let team = self.team_identifier.trim();
        if team.len() != TEAM_IDENTIFIER_LENGTH
            || !team.chars().all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit())
        {
            return Err(ConfigError::Invalid(format!(
                "pass.team_identifier must be {TEAM_IDENTIFIER_LENGTH} uppercase alphanumerics"
            )));
        }
        validate_text("pass.organization_name", &self.organization_name)?;
        if let Some(template) = &self.description_template {
            validate_text("pass.description_template", template)?;
            if !template.contains(NAME_PLACEHOLDER) {
                return Err(ConfigError::Invalid(format!(
                    "pass.description_template must contain {NAME_PLACEHOLDER}"
                )));
            }
        }
        Ok(())
    }
}

/// Stamp-card configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StampCardConfig {
    /// Days added to the issue date of `FIXED_AFTER_ISSUING` cards.
    #[serde(default = "default_stamp_card_validity_days")]
    pub validity_days: u32,
}

impl Default for StampCardConfig {
    fn default() -> Self {
        Self {
            validity_days: default_stamp_card_validity_days(),
        }
    }
}

impl StampCardConfig {
    /// Validates stamp-card configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_validity_days("stamp_card.validity_days", self.validity_days)
    }
}

/// Coupon configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CouponConfig {
    /// Days added to the request time of coupons.
    #[serde(default = "default_coupon_validity_days")]
    pub validity_days: u32,
    /// Currency symbol prefixed to fixed-amount discounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for CouponConfig {
    fn default() -> Self {
        Self {
            validity_days: default_coupon_validity_days(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl CouponConfig {
    /// Validates coupon configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_validity_days("coupon.validity_days", self.validity_days)?;
        let symbol = self.currency_symbol.trim();
        if symbol.is_empty() {
            return Err(ConfigError::Invalid("coupon.currency_symbol must be non-empty".to_string()));
        }
        if symbol.chars().count() > MAX_CURRENCY_SYMBOL_LENGTH {
            return Err(ConfigError::Invalid("coupon.currency_symbol exceeds max length".to_string()));
        }
        Ok(())
    }
}

/// Link base configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LinksConfig {
    /// Base URL of contact query links.
    #[serde(default = "default_contact_link_base")]
    pub contact_link_base: String,
    /// Base URL of redemption links (`{base}/redeem/{serial}`).
    #[serde(default)]
    pub redemption_base: Option<String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            contact_link_base: default_contact_link_base(),
            redemption_base: None,
        }
    }
}

impl LinksConfig {
    /// Validates link configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        parse_http_url("links.contact_link_base", &self.contact_link_base)?;
        if let Some(base) = &self.redemption_base {
            parse_http_url("links.redemption_base", base)?;
        }
        Ok(())
    }

    /// Returns the parsed contact-link base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the URL is invalid.
    pub fn contact_link_base_url(&self) -> Result<Url, ConfigError> {
        parse_http_url("links.contact_link_base", &self.contact_link_base)
    }

    /// Returns the parsed redemption base URL when configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the URL is invalid.
    pub fn redemption_base_url(&self) -> Result<Option<Url>, ConfigError> {
        self.redemption_base
            .as_deref()
            .map(|base| parse_http_url("links.redemption_base", base))
            .transpose()
    }
}

/// Signing certificate paths for the signing collaborator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CertificatesConfig {
    /// Wallet vendor intermediate certificate (PEM).
    pub wwdr_path: String,
    /// Signer certificate (PEM).
    pub signer_cert_path: String,
    /// Signer private key (PEM).
    pub signer_key_path: String,
    /// Environment variable holding the signer key passphrase.
    #[serde(default)]
    pub signer_key_passphrase_env: Option<String>,
}

impl CertificatesConfig {
    /// Resolves the configured paths, joining relative ones onto `base_dir`.
    #[must_use]
    pub fn resolve(&self, base_dir: Option<&Path>) -> SigningMaterial {
        let resolve = |value: &str| {
            let path = Path::new(value.trim());
            match base_dir {
                Some(base) if path.is_relative() => base.join(path),
                _ => path.to_path_buf(),
            }
        };
        SigningMaterial {
            wwdr_path: resolve(&self.wwdr_path),
            signer_cert_path: resolve(&self.signer_cert_path),
            signer_key_path: resolve(&self.signer_key_path),
            signer_key_passphrase_env: self
                .signer_key_passphrase_env
                .as_deref()
                .map(str::trim)
                .map(str::to_string),
        }
    }

    /// Validates certificate configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_path_string("certificates.wwdr_path", &self.wwdr_path)?;
        validate_path_string("certificates.signer_cert_path", &self.signer_cert_path)?;
        validate_path_string("certificates.signer_key_path", &self.signer_key_path)?;
        if let Some(name) = &self.signer_key_passphrase_env {
            let name = name.trim();
            if name.is_empty()
                || !name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
            {
                return Err(ConfigError::Invalid(
                    "certificates.signer_key_passphrase_env must be an environment variable name"
                        .to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Certificate files handed to the signing collaborator.
///
/// The pipeline never opens these files; it only resolves and reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningMaterial {
    /// Wallet vendor intermediate certificate.
    pub wwdr_path: PathBuf,
    /// Signer certificate.
    pub signer_cert_path: PathBuf,
    /// Signer private key.
    pub signer_key_path: PathBuf,
    /// Environment variable holding the signer key passphrase.
    pub signer_key_passphrase_env: Option<String>,
}

/// Audit output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Enable structured audit events.
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,
    /// Optional audit log path (JSON lines); stderr when unset.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            path: None,
        }
    }
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("audit.path", path)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Where the config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    /// Explicit path argument.
    Explicit,
    /// Environment variable override.
    Environment,
    /// Implicit default file name.
    Default,
}

/// Resolved config path and its origin.
struct ResolvedPath {
    /// Path to read.
    path: PathBuf,
    /// Origin of the path.
    source: ConfigSource,
}

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<ResolvedPath, ConfigError> {
    if let Some(path) = path {
        return Ok(ResolvedPath {
            path: path.to_path_buf(),
            source: ConfigSource::Explicit,
        });
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(ResolvedPath {
            path: PathBuf::from(env_path),
            source: ConfigSource::Environment,
        });
    }
    Ok(ResolvedPath {
        path: PathBuf::from(DEFAULT_CONFIG_NAME),
        source: ConfigSource::Default,
    })
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    let path = Path::new(trimmed);
    for component in path.components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates a non-empty, bounded header string.
fn validate_text(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TEXT_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    Ok(())
}

/// Validates a validity window in days.
fn validate_validity_days(field: &str, days: u32) -> Result<(), ConfigError> {
    if days == 0 || days > MAX_VALIDITY_DAYS {
        return Err(ConfigError::Invalid(format!(
            "{field} must be between 1 and {MAX_VALIDITY_DAYS}"
        )));
    }
    Ok(())
}

/// Parses an absolute `http`/`https` URL that can carry path segments.
fn parse_http_url(field: &str, value: &str) -> Result<Url, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    let url = Url::parse(trimmed)
        .map_err(|err| ConfigError::Invalid(format!("{field} is not a valid url: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::Invalid(format!("{field} must be an http or https url")));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::Invalid(format!("{field} must include a host")));
    }
    Ok(url)
}

/// Default pass type identifier.
fn default_pass_type_identifier() -> String {
    DEFAULT_PASS_TYPE_IDENTIFIER.to_string()
}

/// Default team identifier.
fn default_team_identifier() -> String {
    DEFAULT_TEAM_IDENTIFIER.to_string()
}

/// Default organization name.
fn default_organization_name() -> String {
    DEFAULT_ORGANIZATION_NAME.to_string()
}

/// Default stamp-card validity in days.
const fn default_stamp_card_validity_days() -> u32 {
    DEFAULT_STAMP_CARD_VALIDITY_DAYS
}

/// Default coupon validity in days.
const fn default_coupon_validity_days() -> u32 {
    DEFAULT_COUPON_VALIDITY_DAYS
}

/// Default currency symbol.
fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

/// Default contact-link base URL.
fn default_contact_link_base() -> String {
    DEFAULT_CONTACT_LINK_BASE.to_string()
}

/// Default audit logging enabled.
const fn default_audit_enabled() -> bool {
    true
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only assertions use unwrap for clarity.")]

    use super::*;

    #[test]
    fn validate_path_string_accepts_valid_path() {
        assert!(validate_path_string("field", "certs/signer.pem").is_ok());
    }

    #[test]
    fn validate_path_string_rejects_empty_string() {
        assert!(validate_path_string("field", "   ").is_err());
    }

    #[test]
    fn validate_path_string_rejects_long_component() {
        let long = "a".repeat(MAX_PATH_COMPONENT_LENGTH + 1);
        assert!(validate_path_string("field", &long).is_err());
    }

    #[test]
    fn explicit_path_takes_precedence() {
        let resolved = resolve_path(Some(Path::new("custom.toml"))).unwrap();
        assert_eq!(resolved.source, ConfigSource::Explicit);
        assert_eq!(resolved.path, PathBuf::from("custom.toml"));
    }

    #[test]
    fn http_url_parser_rejects_other_schemes() {
        assert!(parse_http_url("links.x", "ftp://example.com").is_err());
        assert!(parse_http_url("links.x", "mailto:ops@example.com").is_err());
        assert!(parse_http_url("links.x", "https://example.com/base").is_ok());
    }
}
