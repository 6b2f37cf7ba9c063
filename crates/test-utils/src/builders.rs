#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use taskorder::request::{RawScheduleRequest, ScheduleRequest, TaskSpec};

/// Builder for `ScheduleRequest` to simplify test setup.
pub struct ScheduleRequestBuilder {
    request: RawScheduleRequest,
}

impl ScheduleRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: RawScheduleRequest { tasks: Vec::new() },
        }
    }

    pub fn with_task(mut self, task: TaskSpec) -> Self {
        self.request.tasks.push(task);
        self
    }

    /// The unvalidated request, e.g. to serialize to a file.
    pub fn build_raw(self) -> RawScheduleRequest {
        self.request
    }

    pub fn build(self) -> ScheduleRequest {
        ScheduleRequest::try_from(self.request).expect("Failed to build valid request from builder")
    }

    pub fn tasks(self) -> Vec<TaskSpec> {
        self.request.tasks
    }
}

impl Default for ScheduleRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskSpec`.
pub struct TaskSpecBuilder {
    task: TaskSpec,
}

impl TaskSpecBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            task: TaskSpec::new(title),
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn hours(mut self, hours: i32) -> Self {
        self.task.estimated_hours = hours;
        self
    }

    /// Due at midnight on `ymd` ("2024-01-03").
    pub fn due(mut self, ymd: &str) -> Self {
        let date = NaiveDate::parse_from_str(ymd, "%Y-%m-%d").expect("due date must be YYYY-MM-DD");
        self.task.due_date = Some(date.and_hms_opt(0, 0, 0).expect("midnight is valid"));
        self
    }

    pub fn due_at(mut self, at: NaiveDateTime) -> Self {
        self.task.due_date = Some(at);
        self
    }

    pub fn build(self) -> TaskSpec {
        self.task
    }
}
