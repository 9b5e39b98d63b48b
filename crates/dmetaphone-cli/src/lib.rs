// dmetaphone-cli: shared utilities for the command-line tools.

use std::process;

use dmetaphone::{DoubleMetaphone, EncoderOptions, OptionsError, PhoneticCode};
use dmetaphone_core::normalize::normalize_word;
use serde::Serialize;

/// Error type for the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("invalid number for {flag}: {value:?}")]
    InvalidNumber { flag: String, value: String },

    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options shared by the command-line tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub encoder: EncoderOptions,
    /// Fold diacritics and uppercase before encoding.
    pub fold: bool,
    /// Print one JSON object per word instead of tab-separated columns.
    pub json: bool,
    pub verbose: bool,
}

impl CliOptions {
    pub fn encoder(&self) -> DoubleMetaphone {
        DoubleMetaphone::with_options(self.encoder)
    }

    /// Encode `word`, folding it first when `--fold` was given.
    pub fn encode(&self, word: &str) -> PhoneticCode {
        let encoder = self.encoder();
        if self.fold {
            encoder.encode(&normalize_word(word))
        } else {
            encoder.encode(word)
        }
    }
}

/// Parse the shared options out of `args`.
///
/// Recognized: `-n N`, `--max-len N`, `--max-len=N`, `--classic`, `--fold`,
/// `--json`, `-v`/`--verbose`. Returns `(options, remaining_args)`.
pub fn parse_options(args: &[String]) -> Result<(CliOptions, Vec<String>), CliError> {
    let mut options = CliOptions::default();
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--max-len=") {
            options.encoder = with_max_len(options.encoder, "--max-len", val)?;
        } else if arg == "--max-len" || arg == "-n" {
            let val = iter
                .next()
                .ok_or_else(|| CliError::MissingValue(arg.clone()))?;
            options.encoder = with_max_len(options.encoder, arg, val)?;
        } else if arg == "--classic" {
            options.encoder = EncoderOptions::classic();
        } else if arg == "--fold" {
            options.fold = true;
        } else if arg == "--json" {
            options.json = true;
        } else if arg == "--verbose" || arg == "-v" {
            options.verbose = true;
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((options, remaining))
}

fn with_max_len(
    options: EncoderOptions,
    flag: &str,
    value: &str,
) -> Result<EncoderOptions, CliError> {
    let len = value.parse::<usize>().map_err(|_| CliError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })?;
    Ok(options.with_max_code_len(len)?)
}

/// Install the logger. `RUST_LOG` wins; otherwise `--verbose` selects
/// `debug` and the default is `warn`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// One encoded word, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct EncodedWord<'a> {
    pub word: &'a str,
    #[serde(flatten)]
    pub code: &'a PhoneticCode,
}

/// Format one encoded word as an output line (without the newline).
pub fn format_line(word: &str, code: &PhoneticCode, json: bool) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string(&EncodedWord { word, code })?);
    }
    Ok(format!("{word}\t{}\t{}", code.primary, code.alternate))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
