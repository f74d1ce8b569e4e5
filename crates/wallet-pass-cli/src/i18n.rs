// crates/wallet-pass-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings in English and Spanish catalogs.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The wallet-pass CLI stores user-facing strings in a small translation
//! catalog so every message is worded once per locale. All runtime output
//! should be routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
///
/// # Invariants
/// - Variants are stable for CLI parsing and catalog lookup.
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// Spanish.
    Es,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }
}

/// Ordered list of supported CLI locales.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Es];

/// Environment variable for CLI locale selection.
pub const LANG_ENV_VAR: &str = "WALLET_PASS_LANG";

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `path`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"path"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "wallet-pass {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("input.kind.business_card", "business card record"),
    ("input.kind.stamp_card", "stamp card record"),
    ("input.kind.coupon", "coupon record"),
    ("input.kind.contact", "contact record"),
    ("input.read_failed", "Failed to read {kind} at {path}: {error}"),
    (
        "input.read_too_large",
        "Refusing to read {kind} at {path} because it is {size} bytes (limit {limit}).",
    ),
    ("input.parse_failed", "Failed to parse {kind} at {path}: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config validated successfully."),
    ("config.validate.signing", "Signing certificates: wwdr={wwdr}, signer={cert}, key={key}"),
    ("generate.issued_at_invalid", "Invalid --issued-at value '{value}': {error}"),
    ("generate.assembly_failed", "Failed to assemble {kind}: {error}"),
    ("generate.encode_failed", "Failed to encode pass definition: {error}"),
    ("generate.deliver_failed", "Failed to write pass definition: {error}"),
    ("generate.written", "Pass definition written to {path} ({digest})"),
    ("audit.open_failed", "Failed to open audit log {path}: {error}"),
    ("vcard.invalid_record", "Invalid contact record: {error}"),
    ("color.invalid", "Invalid color '{value}': {error}"),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'es'."),
];

/// Static Spanish catalog entries.
const CATALOG_ES: &[(&str, &str)] = &[
    ("main.version", "wallet-pass {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "salida"),
    ("output.write_failed", "No se pudo escribir en {stream}: {error}"),
    ("input.kind.business_card", "registro de tarjeta de presentación"),
    ("input.kind.stamp_card", "registro de tarjeta de sellos"),
    ("input.kind.coupon", "registro de cupón"),
    ("input.kind.contact", "registro de contacto"),
    ("input.read_failed", "No se pudo leer {kind} en {path}: {error}"),
    (
        "input.read_too_large",
        "Se rechaza leer {kind} en {path} porque ocupa {size} bytes (límite {limit}).",
    ),
    ("input.parse_failed", "No se pudo interpretar {kind} en {path}: {error}"),
    ("config.load_failed", "No se pudo cargar la configuración: {error}"),
    ("config.validate.ok", "Configuración validada correctamente."),
    (
        "config.validate.signing",
        "Certificados de firma: wwdr={wwdr}, firmante={cert}, clave={key}",
    ),
    ("generate.issued_at_invalid", "Valor de --issued-at no válido '{value}': {error}"),
    ("generate.assembly_failed", "No se pudo ensamblar {kind}: {error}"),
    ("generate.encode_failed", "No se pudo codificar la definición del pase: {error}"),
    ("generate.deliver_failed", "No se pudo escribir la definición del pase: {error}"),
    ("generate.written", "Definición del pase escrita en {path} ({digest})"),
    ("audit.open_failed", "No se pudo abrir el registro de auditoría {path}: {error}"),
    ("vcard.invalid_record", "Registro de contacto no válido: {error}"),
    ("color.invalid", "Color no válido '{value}': {error}"),
    ("i18n.lang.invalid_env", "Valor no válido para {env}: {value}. Se esperaba 'en' o 'es'."),
];

/// Returns the raw catalog entries for the requested locale.
#[cfg(test)]
pub(crate) const fn catalog_entries_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Es => CATALOG_ES,
    }
}

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_ES_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Es => CATALOG_ES_MAP.get_or_init(|| CATALOG_ES.iter().copied().collect()),
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    translate_for(current_locale(), key, args)
}

/// Translates `key` for an explicit locale while substituting `args`.
#[must_use]
pub fn translate_for(locale: Locale, key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
