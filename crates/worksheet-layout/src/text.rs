//! Column-arithmetic text for a single problem, and the header strings.
//!
//! Operands are right-aligned to the wider of the two, so digits of the same
//! place value line up the way they do on paper:
//!
//! ```text
//!     47
//!   +  8
//!   _____
//! ```

use serde::{Deserialize, Serialize};
use worksheet_model::Problem;

/// Answer line used by the compact preview.
pub const PREVIEW_ANSWER_LINE: &str = "_____";

pub const NAME_FIELD: &str = "Name: _______________";
pub const DATE_FIELD: &str = "Date: _______________";

/// The three stacked lines of a problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemLines {
    pub top: String,
    pub operator: String,
    pub answer_line: String,
}

impl ProblemLines {
    /// Compact form used by the on-screen preview.
    pub fn stacked(problem: &Problem) -> Self {
        let a = problem.operand_a.to_string();
        let b = problem.operand_b.to_string();
        let width = a.len().max(b.len());
        Self {
            top: format!("  {a:>width$}"),
            operator: format!("{} {b:>width$}", problem.operation.symbol()),
            answer_line: PREVIEW_ANSWER_LINE.to_string(),
        }
    }

    /// Printed form: digits separated by spaces, both lines right-aligned to
    /// a common width, answer line two characters wider.
    pub fn spaced(problem: &Problem) -> Self {
        let a = problem.operand_a.to_string();
        let b = problem.operand_b.to_string();
        let width = a.len().max(b.len());
        let top = spread_digits(&a, width);
        let operator = format!("{} {}", problem.operation.symbol(), spread_digits(&b, width));
        let line_width = char_width(&top).max(char_width(&operator));
        Self {
            top: format!("{top:>line_width$}"),
            operator: format!("{operator:>line_width$}"),
            answer_line: "_".repeat(line_width + 2),
        }
    }

    pub fn to_lines(&self) -> [&str; 3] {
        [
            self.top.as_str(),
            self.operator.as_str(),
            self.answer_line.as_str(),
        ]
    }
}

/// Right-aligns `digits` to `width` and puts a space between characters.
pub fn spread_digits(digits: &str, width: usize) -> String {
    let padded = format!("{digits:>width$}");
    let mut spread = String::with_capacity(padded.len() * 2);
    for (idx, ch) in padded.chars().enumerate() {
        if idx > 0 {
            spread.push(' ');
        }
        spread.push(ch);
    }
    spread
}

/// Score field with the problem count as denominator.
pub fn score_field(problem_count: usize) -> String {
    format!("Score: ___ / {problem_count}")
}

/// Problem number label, 1-based.
pub fn number_label(index: usize) -> String {
    format!("{}.", index + 1)
}

fn char_width(text: &str) -> usize {
    text.chars().count()
}
