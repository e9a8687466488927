//! JSON page layouts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use worksheet_layout::PageLayout;

/// Serializes laid-out pages as a pretty-printed JSON array.
pub fn layouts_json(pages: &[PageLayout]) -> Result<String> {
    serde_json::to_string_pretty(pages).context("serialize page layouts")
}

pub fn write_layouts_json(path: &Path, pages: &[PageLayout]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, pages).context("serialize page layouts")?;
    writer.flush().context("flush json output")?;
    Ok(())
}
