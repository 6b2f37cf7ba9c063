// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::{OutputFormat, RequestFormat};

/// Command-line arguments for `taskorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskorder",
    version,
    about = "Suggest a dependency-respecting execution order for a set of tasks.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the schedule request (JSON or TOML), or `-` for stdin.
    #[arg(long, value_name = "PATH", default_value = "-")]
    pub request: String,

    /// Request encoding. Inferred from the file extension when omitted.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<RequestFormat>,

    /// How to print the response.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "json")]
    pub output: OutputFormat,

    /// Annotate each task with its dependency level (text output only).
    #[arg(long)]
    pub levels: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// `None` when the request is read from stdin.
    pub fn request_path(&self) -> Option<PathBuf> {
        if self.request == "-" {
            None
        } else {
            Some(PathBuf::from(&self.request))
        }
    }

    /// Explicit `--format`, else inferred from the path, else JSON.
    pub fn effective_format(&self) -> RequestFormat {
        match (self.format, self.request_path()) {
            (Some(fmt), _) => fmt,
            (None, Some(path)) => RequestFormat::from_path(&path),
            (None, None) => RequestFormat::default(),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
