//! Grid placement of a worksheet on a single page.
//!
//! Problems fill a fixed three-column grid row by row: problem `i` lands in
//! column `i % 3`, row `i / 3`. The row height shrinks as rows are added so
//! the whole sheet always fits on one page.

use serde::{Deserialize, Serialize};
use tracing::debug;
use worksheet_model::{Problem, Worksheet};

use crate::geometry::PageGeometry;
use crate::text::{DATE_FIELD, NAME_FIELD, ProblemLines, number_label, score_field};

/// Horizontal anchor of a text item relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Typeface role; renderers map roles to concrete fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    /// Proportional face for the title.
    Title,
    /// Header fields (Name, Date, Score).
    Header,
    /// Problem numbers.
    Label,
    /// Monospace face for operands and answer lines.
    Problem,
}

/// A string placed on the page. `y` is the text baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub font: FontRole,
    pub align: Align,
}

/// A problem placed in the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutCell {
    /// Position in the problem list, 0-based.
    pub index: usize,
    pub problem: Problem,
    pub column: usize,
    pub row: usize,
    /// Left edge of the cell's column.
    pub x: f64,
    /// Top of the cell's row (baseline of the number label).
    pub y: f64,
    pub lines: ProblemLines,
}

/// One worksheet laid out on one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub geometry: PageGeometry,
    pub title: TextItem,
    /// Name, Date and Score, left to right.
    pub header: [TextItem; 3],
    pub row_height: f64,
    pub cells: Vec<LayoutCell>,
}

impl PageLayout {
    /// Every string on the page with its position, in drawing order.
    pub fn text_items(&self) -> Vec<TextItem> {
        let geometry = &self.geometry;
        let mut items = Vec::with_capacity(4 + self.cells.len() * 4);
        items.push(self.title.clone());
        items.extend(self.header.iter().cloned());
        for cell in &self.cells {
            items.push(TextItem {
                text: number_label(cell.index),
                x: cell.x,
                y: cell.y,
                size: geometry.label_size,
                font: FontRole::Label,
                align: Align::Left,
            });
            let content_x = cell.x + geometry.content_indent;
            let offsets = [
                geometry.top_line_offset,
                geometry.operator_line_offset,
                geometry.answer_line_offset,
            ];
            for (line, offset) in cell.lines.to_lines().into_iter().zip(offsets) {
                items.push(TextItem {
                    text: line.to_string(),
                    x: content_x,
                    y: cell.y + offset,
                    size: geometry.problem_size,
                    font: FontRole::Problem,
                    align: Align::Left,
                });
            }
        }
        items
    }

    pub fn rows(&self) -> usize {
        self.geometry.rows_for(self.cells.len())
    }
}

/// Column and row of the `index`-th problem.
pub fn grid_position(index: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1);
    (index % columns, index / columns)
}

/// Places a problem list and its header on a page.
pub fn layout_problems(title: &str, problems: &[Problem], geometry: &PageGeometry) -> PageLayout {
    let row_height = geometry.row_height(problems.len());
    let grid_top = geometry.grid_top();
    let cells = problems
        .iter()
        .enumerate()
        .map(|(index, problem)| {
            let (column, row) = grid_position(index, geometry.columns);
            LayoutCell {
                index,
                problem: *problem,
                column,
                row,
                x: geometry.column_x(column),
                y: grid_top + row as f64 * row_height,
                lines: ProblemLines::spaced(problem),
            }
        })
        .collect();
    debug!(problem_count = problems.len(), row_height, "page laid out");

    PageLayout {
        geometry: *geometry,
        title: TextItem {
            text: title.to_string(),
            x: geometry.margin,
            y: geometry.title_y,
            size: geometry.title_size,
            font: FontRole::Title,
            align: Align::Left,
        },
        header: header_row(problems.len(), geometry),
        row_height,
        cells,
    }
}

/// Places a worksheet on a page.
pub fn layout_worksheet(worksheet: &Worksheet, geometry: &PageGeometry) -> PageLayout {
    layout_problems(&worksheet.title, &worksheet.problems, geometry)
}

/// One page per worksheet, in order.
pub fn layout_worksheets(worksheets: &[Worksheet], geometry: &PageGeometry) -> Vec<PageLayout> {
    worksheets
        .iter()
        .map(|worksheet| layout_worksheet(worksheet, geometry))
        .collect()
}

fn header_row(problem_count: usize, geometry: &PageGeometry) -> [TextItem; 3] {
    let field = |text: String, x: f64, align: Align| TextItem {
        text,
        x,
        y: geometry.header_y,
        size: geometry.header_size,
        font: FontRole::Header,
        align,
    };
    [
        field(NAME_FIELD.to_string(), geometry.margin, Align::Left),
        field(
            DATE_FIELD.to_string(),
            geometry.margin + geometry.header_slot_width() * 1.5,
            Align::Center,
        ),
        field(
            score_field(problem_count),
            geometry.width - geometry.margin,
            Align::Right,
        ),
    ]
}
