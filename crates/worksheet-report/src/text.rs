//! Plain-text preview.

use worksheet_core::Preview;
use worksheet_layout::{ProblemLines, number_label};

const LABEL_WIDTH: usize = 5;

/// Renders a preview as numbered stacked problems.
///
/// ```text
/// Math Worksheet
///
/// 1.     47
///      +  8
///      _____
///
/// 1 problem
/// ```
pub fn render_preview_text(preview: &Preview) -> String {
    let mut lines: Vec<String> = vec![preview.settings.title.clone()];
    if let Some(description) = preview.description() {
        lines.push(description);
    }
    for (index, problem) in preview.problems.iter().enumerate() {
        lines.push(String::new());
        let stacked = ProblemLines::stacked(problem);
        for (row, line) in stacked.to_lines().into_iter().enumerate() {
            let label = if row == 0 {
                number_label(index)
            } else {
                String::new()
            };
            lines.push(format!("{label:<LABEL_WIDTH$}{line}"));
        }
    }
    lines.push(String::new());
    lines.push(match preview.problems.len() {
        1 => "1 problem".to_string(),
        count => format!("{count} problems"),
    });
    lines.join("\n")
}
