// src/output.rs

//! Rendering of schedule responses for stdout.

use std::fmt::Write as _;

use crate::errors::Result;
use crate::request::ScheduleResponse;
use crate::schedule::SchedulePlan;
use crate::types::OutputFormat;

/// Render `response` in the requested format.
///
/// `plan` is only consulted for text output, to annotate levels. It must be
/// the plan `response` was built from.
pub fn render(
    response: &ScheduleResponse,
    format: OutputFormat,
    plan: Option<&SchedulePlan>,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Text => Ok(render_text(response, plan)),
    }
}

fn render_text(response: &ScheduleResponse, plan: Option<&SchedulePlan>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", response.message);

    if response.recommended_order.is_empty() {
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "recommended order ({}):", response.recommended_order.len());
    match plan {
        Some(plan) => {
            for (idx, task) in plan.tasks.iter().enumerate() {
                let _ = writeln!(out, "  {:>3}. {}  [level {}]", idx + 1, task.title, task.level);
            }
        }
        None => {
            for (idx, title) in response.recommended_order.iter().enumerate() {
                let _ = writeln!(out, "  {:>3}. {title}", idx + 1);
            }
        }
    }

    out
}
