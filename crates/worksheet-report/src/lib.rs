//! Worksheet output generation.
//!
//! Renders previews and laid-out pages in several formats:
//!
//! - **Text**: numbered stacked problems for a terminal preview
//! - **HTML**: preview list markup and absolutely positioned worksheet pages
//! - **JSON**: page layouts with every coordinate, for other renderers
//! - **PDF**: one Letter page per worksheet

mod common;
mod html;
mod json;
mod pdf;
mod text;

pub use common::{OutputFormat, export_file_name, write_document};
pub use html::{preview_html, worksheet_html, write_worksheet_html};
pub use json::{layouts_json, write_layouts_json};
pub use pdf::{build_pdf, encode_win_ansi, write_pdf};
pub use text::render_preview_text;
