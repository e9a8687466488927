//! Property-based invariant tests for worksheet page layout.
//!
//! Verifies:
//! 1. Problem `i` sits in column `i % 3` and row `i / 3`
//! 2. Every cell, including its answer line, stays above the bottom margin
//! 3. Cells never overlap vertically within a column
//! 4. Row height never exceeds the cap and never grows with more problems
//! 5. Printed operand lines share one width per problem

use proptest::prelude::*;
use worksheet_layout::{PageGeometry, ProblemLines, layout_problems};
use worksheet_model::{Operation, Problem};

// ── Helpers ─────────────────────────────────────────────────────────────

fn problem_strategy() -> impl Strategy<Value = Problem> {
    (0u64..=99_999, 0u64..=99_999, 0usize..4).prop_map(|(a, b, op)| {
        let operation = Operation::ALL[op];
        let (a, b) = match operation {
            Operation::Subtraction => (a.max(b), a.min(b)),
            Operation::Division => (a.saturating_mul(b.max(1)), b.max(1)),
            _ => (a, b),
        };
        Problem::new(operation, a, b).expect("strategy builds valid problems")
    })
}

fn problems_strategy() -> impl Strategy<Value = Vec<Problem>> {
    prop::collection::vec(problem_strategy(), 1..=18)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Grid assignment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cells_fill_rows_left_to_right(problems in problems_strategy()) {
        let layout = layout_problems("Sheet", &problems, &PageGeometry::LETTER);
        prop_assert_eq!(layout.cells.len(), problems.len());
        for (index, cell) in layout.cells.iter().enumerate() {
            prop_assert_eq!(cell.index, index);
            prop_assert_eq!(cell.column, index % 3);
            prop_assert_eq!(cell.row, index / 3);
            prop_assert_eq!(cell.problem, problems[index]);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Everything fits on the page
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cells_stay_inside_page(problems in problems_strategy()) {
        let page = PageGeometry::LETTER;
        let layout = layout_problems("Sheet", &problems, &page);
        for item in layout.text_items() {
            prop_assert!(item.y >= 0.0);
            prop_assert!(item.y <= page.height - page.bottom_margin + page.answer_line_offset);
            prop_assert!(item.x >= page.margin && item.x <= page.width - page.margin);
        }
        for cell in &layout.cells {
            prop_assert!(cell.y + layout.row_height <= page.height - page.bottom_margin + 1e-9);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. No vertical overlap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rows_leave_room_for_answer_line(problems in problems_strategy()) {
        let page = PageGeometry::LETTER;
        let layout = layout_problems("Sheet", &problems, &page);
        prop_assert!(layout.row_height > page.answer_line_offset);
        for pair in layout.cells.windows(4) {
            let (upper, lower) = (&pair[0], &pair[3]);
            prop_assert_eq!(upper.column, lower.column);
            prop_assert!(lower.y - upper.y >= layout.row_height - 1e-9);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Row height
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn row_height_is_capped_and_monotone(count in 0usize..=18) {
        let page = PageGeometry::LETTER;
        let height = page.row_height(count);
        prop_assert!(height <= page.max_row_height);
        prop_assert!(page.row_height(count + 1) <= height);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Operand alignment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn spaced_lines_share_width(problem in problem_strategy()) {
        let lines = ProblemLines::spaced(&problem);
        prop_assert_eq!(lines.top.chars().count(), lines.operator.chars().count());
        prop_assert_eq!(lines.answer_line.chars().count(), lines.top.chars().count() + 2);
        prop_assert!(lines.top.trim_start().starts_with(|c: char| c.is_ascii_digit()));
    }
}
