//! CLI argument definitions for `ffi-serde`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use ffi_serde_cli::DriverOptions;
use ffi_serde_cli::logging::{LogConfig, LogFormat};
use ffi_serde_core::{DEFAULT_HEADER, GenerateOptions};

#[derive(Parser)]
#[command(
    name = "ffi-serde",
    version,
    about = "Add serde support to bindgen-generated FFI structs and unions",
    long_about = "Add serde support to bindgen-generated FFI structs and unions.\n\n\
                  `annotate` appends Serialize, Deserialize to eligible derive lists in place.\n\
                  `generate` writes byte-copy Serialize/Deserialize impls to a separate file.\n\
                  Use one strategy per bindings file; combining them yields conflicting impls."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Append `Serialize, Deserialize` to eligible derive lists, in place.
    Annotate(AnnotateArgs),

    /// Write byte-copy serde impls for every struct and union.
    Generate(GenerateArgs),

    /// Show how each declaration is handled by both strategies.
    Classify(ClassifyArgs),
}

/// Options shared by every subcommand.
#[derive(Args)]
pub struct InputArgs {
    /// Directory holding the binding files.
    #[arg(long = "dir", value_name = "DIR", default_value = "src/x86")]
    pub dir: PathBuf,

    /// File name prefix of binding files.
    #[arg(long = "prefix", value_name = "PREFIX", default_value = "bindings_")]
    pub prefix: String,

    /// Report what would change without writing anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct AnnotateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Extension appended to each rewritten file's backup copy.
    #[arg(long = "backup-suffix", value_name = "SUFFIX", default_value = "bak")]
    pub backup_suffix: String,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// File name prefix of generated units (`bindings_x.rs` -> `serialize_x.rs`).
    #[arg(long = "output-prefix", value_name = "PREFIX", default_value = "serialize_")]
    pub output_prefix: String,

    /// Comment written at the top of each generated unit.
    #[arg(long = "header", value_name = "TEXT", default_value = DEFAULT_HEADER)]
    pub header: String,
}

#[derive(Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the classification as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

impl Cli {
    /// Build logging configuration from CLI flags with consistent precedence.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = match self.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => self.verbosity.tracing_level_filter(),
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let mut config = LogConfig::default()
            .with_level_filter(level_filter)
            .with_format(format)
            .with_log_file(self.log_file.clone());
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}

impl InputArgs {
    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            dir: self.dir.clone(),
            prefix: self.prefix.clone(),
            dry_run: self.dry_run,
            ..DriverOptions::default()
        }
    }
}

impl AnnotateArgs {
    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            backup_suffix: self.backup_suffix.clone(),
            ..self.input.driver_options()
        }
    }
}

impl GenerateArgs {
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            output_prefix: self.output_prefix.clone(),
            header: self.header.clone(),
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
