// src/request/model.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleResult;

/// A schedule request exactly as read from JSON or TOML.
///
/// ```json
/// {
///   "tasks": [
///     { "title": "Design", "estimatedHours": 4, "dueDate": "2024-01-02" },
///     { "title": "Build", "estimatedHours": 8, "dependencies": ["Design"] }
///   ]
/// }
/// ```
///
/// or, equivalently:
///
/// ```toml
/// [[tasks]]
/// title = "Design"
/// estimatedHours = 4
/// dueDate = 2024-01-02
///
/// [[tasks]]
/// title = "Build"
/// estimatedHours = 8
/// dependencies = ["Design"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScheduleRequest {
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

/// A request that passed boundary validation (see `request::validate`).
///
/// Only obtainable through `TryFrom<RawScheduleRequest>`, so holding one
/// means the task list is non-empty and every title is non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    tasks: Vec<TaskSpec>,
}

impl ScheduleRequest {
    pub(crate) fn new_unchecked(tasks: Vec<TaskSpec>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[TaskSpec] {
        &self.tasks
    }
}

/// One schedulable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    /// Display name and graph identity. Assumed unique within a request.
    pub title: String,

    /// Duration estimate; only ever used as a tie-breaker.
    #[serde(default)]
    pub estimated_hours: i32,

    /// Primary tie-breaker. `None` sorts after every present date.
    #[serde(
        default,
        with = "due_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDateTime>,

    /// Titles that must come before this task. Titles missing from the
    /// request are ignored.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TaskSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            estimated_hours: 0,
            due_date: None,
            dependencies: Vec::new(),
        }
    }
}

/// Wire form of a schedule outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub recommended_order: Vec<String>,
    pub message: String,
}

impl From<ScheduleResult> for ScheduleResponse {
    fn from(result: ScheduleResult) -> Self {
        Self {
            recommended_order: result.recommended_order,
            message: result.message,
        }
    }
}

/// Lenient `dueDate` handling.
///
/// Accepts RFC 3339 timestamps (normalised to UTC), naive date-times and
/// bare dates (midnight). In TOML the value may also be a native datetime.
/// Blank strings count as "no due date".
pub mod due_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DueDateRepr {
        Text(String),
        Toml(toml::value::Datetime),
    }

    pub fn parse(raw: &str) -> Result<NaiveDateTime, String> {
        let s = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.naive_utc());
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(dt);
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(date.and_time(NaiveTime::MIN));
        }

        Err(format!("invalid dueDate '{raw}'"))
    }

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(OUTPUT_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Option::<DueDateRepr>::deserialize(deserializer)? {
            None => return Ok(None),
            Some(DueDateRepr::Text(s)) => s,
            Some(DueDateRepr::Toml(dt)) => dt.to_string(),
        };

        if text.trim().is_empty() {
            return Ok(None);
        }

        parse(&text).map(Some).map_err(serde::de::Error::custom)
    }
}
