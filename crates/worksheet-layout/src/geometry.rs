//! Page geometry in PDF points (1/72 inch), measured from the top-left corner.

use serde::{Deserialize, Serialize};

/// Fixed page measurements used to place a worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    /// Left/right margin for the title and header row.
    pub margin: f64,
    pub title_y: f64,
    pub title_size: f64,
    pub header_y: f64,
    pub header_size: f64,
    /// Distance from the header row to the first problem row.
    pub header_gap: f64,
    pub bottom_margin: f64,
    /// Row height used when few rows are needed.
    pub max_row_height: f64,
    /// Extra inset of the problem grid beyond `margin`, left side.
    pub grid_left_inset: f64,
    /// Extra inset of the problem grid beyond `margin`, right side.
    pub grid_right_inset: f64,
    pub columns: usize,
    pub label_size: f64,
    pub problem_size: f64,
    /// Offset of the operand text from the problem number.
    pub content_indent: f64,
    pub top_line_offset: f64,
    pub operator_line_offset: f64,
    pub answer_line_offset: f64,
}

impl PageGeometry {
    /// US Letter portrait, 612 x 792 points.
    pub const LETTER: PageGeometry = PageGeometry {
        width: 612.0,
        height: 792.0,
        margin: 28.0,
        title_y: 48.0,
        title_size: 18.0,
        header_y: 92.0,
        header_size: 12.0,
        header_gap: 58.0,
        bottom_margin: 40.0,
        max_row_height: 108.0,
        grid_left_inset: 40.0,
        grid_right_inset: 20.0,
        columns: 3,
        label_size: 10.0,
        problem_size: 18.0,
        content_indent: 24.0,
        top_line_offset: 10.0,
        operator_line_offset: 32.0,
        answer_line_offset: 38.0,
    };

    /// Y coordinate of the first problem row.
    pub fn grid_top(&self) -> f64 {
        self.header_y + self.header_gap
    }

    /// Vertical space left for problem rows below the header.
    pub fn available_height(&self) -> f64 {
        self.height - self.grid_top() - self.bottom_margin
    }

    pub fn rows_for(&self, problem_count: usize) -> usize {
        problem_count.div_ceil(self.columns.max(1))
    }

    /// Row height that fits `problem_count` problems on one page, capped at
    /// `max_row_height`.
    pub fn row_height(&self, problem_count: usize) -> f64 {
        let rows = self.rows_for(problem_count);
        if rows == 0 {
            return self.max_row_height;
        }
        self.max_row_height
            .min((self.available_height() / rows as f64).floor())
    }

    pub fn grid_left(&self) -> f64 {
        self.margin + self.grid_left_inset
    }

    pub fn grid_width(&self) -> f64 {
        self.width - self.grid_left() - (self.margin + self.grid_right_inset)
    }

    pub fn column_width(&self) -> f64 {
        self.grid_width() / self.columns.max(1) as f64
    }

    pub fn column_x(&self, column: usize) -> f64 {
        self.grid_left() + column as f64 * self.column_width()
    }

    /// Width of each of the three header slots (Name, Date, Score).
    pub fn header_slot_width(&self) -> f64 {
        (self.width - 2.0 * self.margin) / 3.0
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::LETTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_measurements() {
        let page = PageGeometry::LETTER;
        assert_eq!(page.grid_top(), 150.0);
        assert_eq!(page.available_height(), 602.0);
        assert_eq!(page.grid_left(), 68.0);
        assert_eq!(page.grid_width(), 496.0);
    }

    #[test]
    fn row_height_shrinks_with_density() {
        let page = PageGeometry::LETTER;
        assert_eq!(page.row_height(3), 108.0);
        assert_eq!(page.row_height(15), 108.0);
        assert_eq!(page.row_height(16), 100.0);
        assert_eq!(page.row_height(18), 100.0);
        assert_eq!(page.row_height(0), 108.0);
    }

    #[test]
    fn columns_split_grid_evenly() {
        let page = PageGeometry::LETTER;
        let width = page.column_width();
        assert!((page.column_x(1) - page.column_x(0) - width).abs() < 1e-9);
        assert!((page.column_x(2) + width - (page.width - 48.0)).abs() < 1e-9);
    }
}
