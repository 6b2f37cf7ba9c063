// src/lib.rs

pub mod cli;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod output;
pub mod request;
pub mod schedule;
pub mod types;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::errors::RequestRejected;
use crate::request::{RawScheduleRequest, ScheduleRequest, ScheduleResponse};
use crate::schedule::{ScheduleResult, plan};

pub use crate::request::TaskSpec;
pub use crate::schedule::generate_schedule;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - request loading (file or stdin)
/// - boundary validation
/// - the scheduling pipeline
/// - response rendering to stdout
///
/// Boundary rejections come back as a response with an empty order rather
/// than an error; only I/O and parse failures are `Err`.
pub fn run(args: &CliArgs) -> Result<ScheduleResponse> {
    let format = args.effective_format();
    let raw = match args.request_path() {
        Some(path) => request::loader::load_from_path_as(&path, format)?,
        None => request::load_from_reader(std::io::stdin().lock(), format)?,
    };

    let (response, plan) = schedule_raw(raw);

    let rendered = output::render(&response, args.output, plan.as_ref().filter(|_| args.levels))?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }

    debug!(
        tasks = response.recommended_order.len(),
        message = %response.message,
        "run complete"
    );
    Ok(response)
}

/// Validate a raw request and schedule it.
///
/// Returns the wire response plus, on success, the plan with levels.
/// Boundary rejections become a response with an empty order.
pub fn schedule_raw(raw: RawScheduleRequest) -> (ScheduleResponse, Option<schedule::SchedulePlan>) {
    let request = match ScheduleRequest::try_from(raw) {
        Ok(request) => request,
        Err(RequestRejected(message)) => {
            info!(%message, "request rejected at boundary");
            let response = ScheduleResponse {
                recommended_order: Vec::new(),
                message,
            };
            return (response, None);
        }
    };

    info!(tasks = request.tasks().len(), "scheduling request");
    let outcome = plan(request.tasks());
    let kept = outcome.as_ref().ok().cloned();
    let response = ScheduleResponse::from(ScheduleResult::from(outcome));
    (response, kept)
}

/// Schedule an already-validated request.
pub fn schedule_request(request: &ScheduleRequest) -> ScheduleResponse {
    generate_schedule(request.tasks()).into()
}
