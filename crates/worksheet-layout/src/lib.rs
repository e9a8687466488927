//! Page layout for printed worksheets.
//!
//! A worksheet becomes a [`PageLayout`]: a title, a header row and a
//! three-column grid of problems, with every position in points from the
//! page's top-left corner. Renderers only draw what the layout hands them.

pub mod geometry;
pub mod page;
pub mod text;

pub use geometry::PageGeometry;
pub use page::{
    Align, FontRole, LayoutCell, PageLayout, TextItem, grid_position, layout_problems,
    layout_worksheet, layout_worksheets,
};
pub use text::{
    DATE_FIELD, NAME_FIELD, PREVIEW_ANSWER_LINE, ProblemLines, number_label, score_field,
    spread_digits,
};
