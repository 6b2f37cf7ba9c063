// src/request/mod.rs

//! The request/response boundary around the scheduling core.
//!
//! Responsibilities:
//! - Define the serde wire model (`model.rs`).
//! - Load a request document from disk or stdin (`loader.rs`).
//! - Reject malformed requests before they reach the core (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_from_reader, parse_str};
pub use model::{RawScheduleRequest, ScheduleRequest, ScheduleResponse, TaskSpec};
pub use validate::NO_TASKS_MESSAGE;
