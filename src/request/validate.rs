// src/request/validate.rs

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::errors::RequestRejected;
use crate::request::model::{RawScheduleRequest, ScheduleRequest};

/// Rejection text for a request that carries no tasks at all.
pub const NO_TASKS_MESSAGE: &str = "Tasks are required for scheduling";

impl TryFrom<RawScheduleRequest> for ScheduleRequest {
    type Error = RequestRejected;

    fn try_from(raw: RawScheduleRequest) -> Result<Self, Self::Error> {
        validate_raw_request(&raw)?;
        Ok(ScheduleRequest::new_unchecked(raw.tasks))
    }
}

/// Boundary checks run before the scheduling core sees a request.
///
/// This rejects:
/// - an empty task list
/// - blank titles
/// - negative `estimatedHours`
///
/// It deliberately does **not** reject dependencies on unknown titles or
/// duplicate titles; both are only logged.
fn validate_raw_request(req: &RawScheduleRequest) -> Result<(), RequestRejected> {
    ensure_has_tasks(req)?;
    validate_task_fields(req)?;
    report_duplicate_titles(req);
    report_unknown_dependencies(req);
    Ok(())
}

fn ensure_has_tasks(req: &RawScheduleRequest) -> Result<(), RequestRejected> {
    if req.tasks.is_empty() {
        return Err(RequestRejected(NO_TASKS_MESSAGE.to_string()));
    }
    Ok(())
}

fn validate_task_fields(req: &RawScheduleRequest) -> Result<(), RequestRejected> {
    for (idx, task) in req.tasks.iter().enumerate() {
        if task.title.trim().is_empty() {
            return Err(RequestRejected(format!(
                "task #{} has an empty title",
                idx + 1
            )));
        }
        if task.estimated_hours < 0 {
            return Err(RequestRejected(format!(
                "task '{}' has negative estimatedHours ({})",
                task.title, task.estimated_hours
            )));
        }
    }
    Ok(())
}

fn report_duplicate_titles(req: &RawScheduleRequest) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for task in req.tasks.iter() {
        *counts.entry(task.title.as_str()).or_default() += 1;
    }

    let mut duplicates: Vec<&str> = counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(title, _)| title)
        .collect();
    duplicates.sort_unstable();

    if !duplicates.is_empty() {
        warn!(
            ?duplicates,
            "request contains duplicate task titles; only the last task per title is scheduled"
        );
    }
}

fn report_unknown_dependencies(req: &RawScheduleRequest) {
    let titles: HashSet<&str> = req.tasks.iter().map(|t| t.title.as_str()).collect();
    for task in req.tasks.iter() {
        for dep in task.dependencies.iter() {
            if !titles.contains(dep.as_str()) {
                debug!(
                    task = %task.title,
                    dependency = %dep,
                    "dependency not present in request; ignoring"
                );
            }
        }
    }
}
