//! Terminal report rendering - ASCII only, one line per service.

use owo_colors::OwoColorize;
use vigil_common::{CheckResult, Status};

/// Render the final report as printable lines: a header followed by one
/// `service -> STATUS (method)` line per result, in the order given.
pub fn render(results: &[CheckResult]) -> Vec<String> {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push("Service Status Report:".to_string());
    for result in results {
        lines.push(render_line(result));
    }
    lines
}

fn render_line(result: &CheckResult) -> String {
    // Pad before colorizing so ANSI codes do not skew the columns
    let padded = format!("{:<4}", result.status.label());
    let status = match result.status {
        Status::Up => padded.green().to_string(),
        Status::Down => padded.red().to_string(),
    };
    format!("{:<30} -> {} ({})", result.service, status, result.method)
}
