use std::path::Path;

use clap::ValueEnum;

/// Encoding of a schedule request document.
///
/// - `Json`: the default, and what stdin is assumed to carry.
/// - `Toml`: a `[[tasks]]` array of tables with the same camelCase keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RequestFormat {
    Json,
    Toml,
}

impl Default for RequestFormat {
    fn default() -> Self {
        RequestFormat::Json
    }
}

impl RequestFormat {
    /// Guess the format from a file extension. Anything that is not
    /// `.toml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => RequestFormat::Toml,
            _ => RequestFormat::Json,
        }
    }
}

/// How the response is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The `ScheduleResponse` wire document.
    Json,
    /// A numbered, human-readable list.
    Text,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json
    }
}
