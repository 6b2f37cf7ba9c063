// src/request/loader.rs

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::request::model::{RawScheduleRequest, ScheduleRequest};
use crate::types::RequestFormat;

/// Parse a request document held in memory.
///
/// Deserialization only; no boundary validation.
pub fn parse_str(contents: &str, format: RequestFormat) -> Result<RawScheduleRequest> {
    let request: RawScheduleRequest = match format {
        RequestFormat::Json => serde_json::from_str(contents)?,
        RequestFormat::Toml => toml::from_str(contents)?,
    };
    Ok(request)
}

/// Load a request document from a given path and return the raw `RawScheduleRequest`.
///
/// The format is inferred from the extension (see [`RequestFormat::from_path`]).
/// This does **not** run boundary validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawScheduleRequest> {
    let path = path.as_ref();
    load_from_path_as(path, RequestFormat::from_path(path))
}

/// Like [`load_from_path`] but with an explicit format.
pub fn load_from_path_as(path: impl AsRef<Path>, format: RequestFormat) -> Result<RawScheduleRequest> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(?path, ?format, bytes = contents.len(), "read schedule request");
    parse_str(&contents, format)
}

/// Read a whole request document from any reader (typically stdin).
pub fn load_from_reader(mut reader: impl Read, format: RequestFormat) -> Result<RawScheduleRequest> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    debug!(?format, bytes = contents.len(), "read schedule request from reader");
    parse_str(&contents, format)
}

/// Load a request from path and run boundary validation.
///
/// This is the recommended entry point for file-based callers:
///
/// - Reads JSON or TOML.
/// - Applies field defaults (handled by `serde`).
/// - Rejects empty task lists, blank titles and negative estimates.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ScheduleRequest> {
    let raw = load_from_path(&path)?;
    Ok(ScheduleRequest::try_from(raw)?)
}
