//! Shared helpers for worksheet output.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::info;

use worksheet_core::ExportPlan;
use worksheet_layout::PageLayout;

use crate::{html, json, pdf};

/// Document format written by an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pdf,
    Html,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Suggested file name for an export in `format`, e.g. `worksheet.html`.
pub fn export_file_name(plan: &ExportPlan, format: OutputFormat) -> PathBuf {
    Path::new(&plan.file_name).with_extension(format.extension())
}

/// Writes laid-out pages to `path` in the given format.
pub fn write_document(path: &Path, format: OutputFormat, pages: &[PageLayout]) -> Result<()> {
    ensure_parent_dir(path)?;
    match format {
        OutputFormat::Pdf => pdf::write_pdf(path, pages)?,
        OutputFormat::Html => html::write_worksheet_html(path, pages)?,
        OutputFormat::Json => json::write_layouts_json(path, pages)?,
    }
    info!(
        path = %path.display(),
        %format,
        page_count = pages.len(),
        "document written"
    );
    Ok(())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

/// Write a simple text element.
pub(crate) fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write a text element carrying a `class` attribute.
pub(crate) fn write_classed_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    class: &str,
    text: &str,
) -> Result<()> {
    let mut start = BytesStart::new(name);
    start.push_attribute(("class", class));
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
