// crates/wallet-pass-cli/src/main.rs
// ============================================================================
// Module: Wallet Pass CLI Entry Point
// Description: Command dispatcher for pass assembly and encoding utilities.
// Purpose: Provide a safe, localized CLI over the wallet pass assembler.
// Dependencies: clap, serde_json, thiserror, time, wallet-pass-core, wallet-pass-config
// ============================================================================

//! ## Overview
//! The wallet-pass CLI reads validated record JSON, assembles unsigned pass
//! definitions, and either prints them as canonical JSON or writes them to an
//! output directory for the signing step. It also exposes the contact-card
//! encoder and the color helpers. All user-facing strings are routed through
//! the i18n catalog. Inputs are untrusted: reads are bounded and every record
//! is validated before assembly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use wallet_pass_cli::audit::AuditOutcome;
use wallet_pass_cli::audit::AuditSink;
use wallet_pass_cli::audit::PassAuditEvent;
use wallet_pass_cli::audit::PassAuditEventParams;
use wallet_pass_cli::audit::PassKind;
use wallet_pass_cli::audit::audit_sink_from_config;
use wallet_pass_cli::i18n::LANG_ENV_VAR;
use wallet_pass_cli::i18n::Locale;
use wallet_pass_cli::i18n::set_locale;
use wallet_pass_cli::sink::FilePassSink;
use wallet_pass_cli::t;
use wallet_pass_config::WalletPassConfig;
use wallet_pass_core::AssemblyContext;
use wallet_pass_core::BusinessCardRecord;
use wallet_pass_core::ContactRecord;
use wallet_pass_core::CouponRecord;
use wallet_pass_core::HashDigest;
use wallet_pass_core::PassAssembler;
use wallet_pass_core::PassDefinitionDocument;
use wallet_pass_core::PassSink;
use wallet_pass_core::SerialNumber;
use wallet_pass_core::StampCardRecord;
use wallet_pass_core::complementary_color;
use wallet_pass_core::device_palette_to_hex;
use wallet_pass_core::encode_contact_card;
use wallet_pass_core::encode_contact_card_data_uri;
use wallet_pass_core::encode_contact_query_link;
use wallet_pass_core::encode_pass;
use wallet_pass_core::hex_to_device_palette;
use wallet_pass_core::pick_readable_text_color;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a record JSON input file.
const MAX_RECORD_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "wallet-pass", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `WALLET_PASS_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Business card pass utilities.
    BusinessCard {
        /// Selected business card subcommand.
        #[command(subcommand)]
        command: PassCommand,
    },
    /// Stamp card pass utilities.
    StampCard {
        /// Selected stamp card subcommand.
        #[command(subcommand)]
        command: PassCommand,
    },
    /// Coupon pass utilities.
    Coupon {
        /// Selected coupon subcommand.
        #[command(subcommand)]
        command: PassCommand,
    },
    /// Contact-card utilities.
    Vcard {
        /// Selected contact-card subcommand.
        #[command(subcommand)]
        command: VcardCommand,
    },
    /// Color conversion utilities.
    Color {
        /// Selected color subcommand.
        #[command(subcommand)]
        command: ColorCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Pass assembly subcommands shared by every pass kind.
#[derive(Subcommand, Debug)]
enum PassCommand {
    /// Assemble an unsigned pass definition from a record file.
    Generate(GenerateCommand),
}

/// Contact-card subcommands.
#[derive(Subcommand, Debug)]
enum VcardCommand {
    /// Encode a contact record as a contact card.
    Encode(VcardEncodeCommand),
}

/// Color subcommands.
#[derive(Subcommand, Debug)]
enum ColorCommand {
    /// Convert `#RRGGBB` to `rgb(r, g, b)`.
    ToRgb(ColorValueArgs),
    /// Convert `rgb(r, g, b)` to `#rrggbb`.
    ToHex(ColorValueArgs),
    /// Pick a readable text color for a background.
    TextColor(ColorValueArgs),
    /// Compute the complementary color.
    Complement(ColorValueArgs),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for pass generation.
#[derive(Args, Debug)]
struct GenerateCommand {
    /// Path to the record JSON file.
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
    /// Serial number assigned to the pass.
    #[arg(long, value_name = "ID")]
    serial: String,
    /// Output directory for `pass.json` (prints to stdout when omitted).
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,
    /// Request timestamp (RFC 3339) used for relative expirations; defaults to now.
    #[arg(long, value_name = "RFC3339")]
    issued_at: Option<String>,
    /// Optional config file path (defaults to wallet-pass.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Contact-card output formats.
#[derive(ValueEnum, Copy, Clone, Debug, Default)]
enum VcardFormatArg {
    /// Literal contact-card text.
    #[default]
    Text,
    /// Base64 `data:` URI.
    DataUri,
    /// Contact link with query parameters.
    Link,
}

/// Arguments for contact-card encoding.
#[derive(Args, Debug)]
struct VcardEncodeCommand {
    /// Path to the contact record JSON file.
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = VcardFormatArg::Text)]
    format: VcardFormatArg,
    /// Optional config file path (used for the contact link base).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Color value argument.
#[derive(Args, Debug)]
struct ColorValueArgs {
    /// Color value to convert.
    #[arg(value_name = "VALUE")]
    value: String,
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to wallet-pass.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Spanish.
    Es,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV_VAR).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::BusinessCard {
            command,
        } => command_pass(PassKind::BusinessCard, command),
        Commands::StampCard {
            command,
        } => command_pass(PassKind::StampCard, command),
        Commands::Coupon {
            command,
        } => command_pass(PassKind::Coupon, command),
        Commands::Vcard {
            command,
        } => command_vcard(command),
        Commands::Color {
            command,
        } => command_color(command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Pass Commands
// ============================================================================

/// Dispatches pass subcommands.
fn command_pass(kind: PassKind, command: PassCommand) -> CliResult<ExitCode> {
    match command {
        PassCommand::Generate(command) => command_generate(kind, &command),
    }
}

/// Executes the `generate` command and records an audit event.
fn command_generate(kind: PassKind, command: &GenerateCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let audit = open_audit_sink(&config)?;
    let outcome = generate_pass(kind, command, &config);
    let params = match &outcome {
        Ok(digest) => PassAuditEventParams {
            pass_kind: kind,
            serial_number: command.serial.clone(),
            document_hash: Some(digest.clone()),
            outcome: AuditOutcome::Success,
            error: None,
        },
        Err(err) => PassAuditEventParams {
            pass_kind: kind,
            serial_number: command.serial.clone(),
            document_hash: None,
            outcome: AuditOutcome::Failure,
            error: Some(err.to_string()),
        },
    };
    audit.record(&PassAuditEvent::new(params));
    outcome.map(|_| ExitCode::SUCCESS)
}

/// Assembles and emits one pass, returning the digest of the emitted bytes.
fn generate_pass(
    kind: PassKind,
    command: &GenerateCommand,
    config: &WalletPassConfig,
) -> CliResult<HashDigest> {
    let assembler_config = config
        .assembler_config()
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let algorithm = assembler_config.hash_algorithm;
    let assembler = PassAssembler::new(assembler_config);
    let ctx = AssemblyContext::new(resolve_requested_at(command.issued_at.as_deref())?);
    let serial = SerialNumber::new(command.serial.as_str());
    let document = assemble(kind, &assembler, &command.input, &serial, &ctx)?;

    match &command.output {
        Some(dir) => {
            let mut sink = FilePassSink::with_algorithm(dir, algorithm);
            let receipt = sink
                .deliver(&document)
                .map_err(|err| CliError::new(t!("generate.deliver_failed", error = err)))?;
            write_stdout_line(&t!(
                "generate.written",
                path = receipt.location,
                digest = receipt.digest
            ))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(receipt.digest)
        }
        None => {
            let encoded = encode_pass(&document, algorithm)
                .map_err(|err| CliError::new(t!("generate.encode_failed", error = err)))?;
            write_stdout_bytes_with_newline(&encoded.bytes)?;
            Ok(encoded.digest)
        }
    }
}

/// Reads the record for `kind` and runs the matching assembler.
fn assemble(
    kind: PassKind,
    assembler: &PassAssembler,
    input: &Path,
    serial: &SerialNumber,
    ctx: &AssemblyContext,
) -> CliResult<PassDefinitionDocument> {
    let label = input_kind_label(kind);
    let result = match kind {
        PassKind::BusinessCard => {
            let record: BusinessCardRecord = read_record_json(input, &label)?;
            assembler.business_card(&record, serial, ctx)
        }
        PassKind::StampCard => {
            let record: StampCardRecord = read_record_json(input, &label)?;
            assembler.stamp_card(&record, serial, ctx)
        }
        PassKind::Coupon => {
            let record: CouponRecord = read_record_json(input, &label)?;
            assembler.coupon(&record, serial, ctx)
        }
    };
    result.map_err(|err| CliError::new(t!("generate.assembly_failed", kind = label, error = err)))
}

/// Parses the optional request timestamp, defaulting to the current time.
fn resolve_requested_at(value: Option<&str>) -> CliResult<OffsetDateTime> {
    match value {
        Some(raw) => OffsetDateTime::parse(raw.trim(), &Rfc3339).map_err(|err| {
            CliError::new(t!("generate.issued_at_invalid", value = raw, error = err))
        }),
        None => Ok(OffsetDateTime::now_utc()),
    }
}

/// Returns the localized input label for a pass kind.
fn input_kind_label(kind: PassKind) -> String {
    match kind {
        PassKind::BusinessCard => t!("input.kind.business_card"),
        PassKind::StampCard => t!("input.kind.stamp_card"),
        PassKind::Coupon => t!("input.kind.coupon"),
    }
}

// ============================================================================
// SECTION: Contact-Card Commands
// ============================================================================

/// Dispatches contact-card subcommands.
fn command_vcard(command: VcardCommand) -> CliResult<ExitCode> {
    match command {
        VcardCommand::Encode(command) => command_vcard_encode(&command),
    }
}

/// Executes the contact-card encode command.
fn command_vcard_encode(command: &VcardEncodeCommand) -> CliResult<ExitCode> {
    let label = t!("input.kind.contact");
    let contact: ContactRecord = read_record_json(&command.input, &label)?;
    contact
        .validate()
        .map_err(|err| CliError::new(t!("vcard.invalid_record", error = err)))?;
    let rendered = match command.format {
        VcardFormatArg::Text => encode_contact_card(&contact),
        VcardFormatArg::DataUri => encode_contact_card_data_uri(&contact),
        VcardFormatArg::Link => {
            let config = load_config(command.config.as_deref())?;
            let base = config
                .links
                .contact_link_base_url()
                .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
            encode_contact_query_link(&contact, &base).to_string()
        }
    };
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Color Commands
// ============================================================================

/// Executes color subcommands.
fn command_color(command: ColorCommand) -> CliResult<ExitCode> {
    let (value, result) = match &command {
        ColorCommand::ToRgb(args) => (&args.value, hex_to_device_palette(&args.value)),
        ColorCommand::ToHex(args) => (&args.value, device_palette_to_hex(&args.value)),
        ColorCommand::TextColor(args) => {
            (&args.value, pick_readable_text_color(&args.value).map(str::to_string))
        }
        ColorCommand::Complement(args) => (&args.value, complementary_color(&args.value)),
    };
    let rendered =
        result.map_err(|err| CliError::new(t!("color.invalid", value = value, error = err)))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    if let Some(material) = config.signing_material() {
        write_stdout_line(&t!(
            "config.validate.signing",
            wwdr = material.wwdr_path.display(),
            cert = material.signer_cert_path.display(),
            key = material.signer_key_path.display()
        ))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Loads configuration with localized errors.
fn load_config(path: Option<&Path>) -> CliResult<WalletPassConfig> {
    WalletPassConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Opens the audit sink selected by configuration.
fn open_audit_sink(config: &WalletPassConfig) -> CliResult<Box<dyn AuditSink>> {
    audit_sink_from_config(&config.audit).map_err(|err| {
        let path = config.audit.path.as_deref().unwrap_or_default();
        CliError::new(t!("audit.open_failed", path = path, error = err))
    })
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Errors returned by bounded file reads.
#[derive(Debug)]
enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let read_limit = limit.saturating_add(1);
    let mut limited = file.take(read_limit);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

/// Reads and parses a record JSON file.
fn read_record_json<T: DeserializeOwned>(path: &Path, kind: &str) -> CliResult<T> {
    let bytes = read_bytes_with_limit(path, MAX_RECORD_BYTES).map_err(|err| match err {
        ReadLimitError::Io(err) => CliError::new(t!(
            "input.read_failed",
            kind = kind,
            path = path.display(),
            error = err
        )),
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(t!(
            "input.read_too_large",
            kind = kind,
            path = path.display(),
            size = size,
            limit = limit
        )),
    })?;
    serde_json::from_slice(&bytes).map_err(|err| {
        CliError::new(t!("input.parse_failed", kind = kind, path = path.display(), error = err))
    })
}

// ============================================================================
// SECTION: Locale Helpers
// ============================================================================

/// Resolves the output locale from the flag, then the environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV_VAR, value = value))
        });
    }
    Ok(Locale::En)
}

/// Converts CLI language selections into locales.
impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Es => Self::Es,
        }
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout with a trailing newline.
fn write_stdout_bytes_with_newline(bytes: &[u8]) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    stdout
        .write_all(bytes)
        .and_then(|()| stdout.write_all(b"\n"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
