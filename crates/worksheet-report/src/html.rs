//! HTML output: the preview list and printable worksheet pages.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use worksheet_core::Preview;
use worksheet_layout::{Align, FontRole, PageLayout, ProblemLines, TextItem, number_label};

use crate::common::{write_classed_element, write_text_element};

const PAGE_STYLE: &str = "\
.page { position: relative; page-break-after: always; font-family: Helvetica, Arial, sans-serif; }
.page span, .page pre { position: absolute; margin: 0; white-space: pre; }
.page pre { font-family: Courier, monospace; line-height: 1; }
";

/// Preview markup: the title, the optional description and an ordered list
/// of stacked problems.
pub fn preview_html(preview: &Preview) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    let mut section = BytesStart::new("section");
    section.push_attribute(("class", "preview"));
    xml.write_event(Event::Start(section))?;
    write_text_element(&mut xml, "h2", &preview.settings.title)?;
    if let Some(description) = preview.description() {
        write_classed_element(&mut xml, "p", "description", &description)?;
    }

    let mut list = BytesStart::new("ol");
    list.push_attribute(("class", "problems"));
    xml.write_event(Event::Start(list))?;
    for problem in &preview.problems {
        let lines = ProblemLines::stacked(problem);
        xml.write_event(Event::Start(BytesStart::new("li")))?;
        write_classed_element(&mut xml, "pre", "vprob", &lines.to_lines().join("\n"))?;
        xml.write_event(Event::End(BytesEnd::new("li")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("ol")))?;
    xml.write_event(Event::End(BytesEnd::new("section")))?;

    String::from_utf8(xml.into_inner()).context("preview markup is not utf-8")
}

/// Standalone HTML document with one absolutely positioned page per layout.
pub fn worksheet_html(pages: &[PageLayout]) -> Result<String> {
    let first = pages
        .first()
        .ok_or_else(|| anyhow!("no worksheets supplied for html export"))?;
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    xml.write_event(Event::Start(BytesStart::new("html")))?;
    xml.write_event(Event::Start(BytesStart::new("head")))?;
    let mut meta = BytesStart::new("meta");
    meta.push_attribute(("charset", "utf-8"));
    xml.write_event(Event::Empty(meta))?;
    write_text_element(&mut xml, "title", &first.title.text)?;
    write_text_element(&mut xml, "style", PAGE_STYLE)?;
    xml.write_event(Event::End(BytesEnd::new("head")))?;

    xml.write_event(Event::Start(BytesStart::new("body")))?;
    for page in pages {
        write_page(&mut xml, page)?;
    }
    xml.write_event(Event::End(BytesEnd::new("body")))?;
    xml.write_event(Event::End(BytesEnd::new("html")))?;

    let body = String::from_utf8(xml.into_inner()).context("worksheet markup is not utf-8")?;
    Ok(format!("<!DOCTYPE html>\n{body}\n"))
}

pub fn write_worksheet_html(path: &Path, pages: &[PageLayout]) -> Result<()> {
    let html = worksheet_html(pages)?;
    fs::write(path, html).with_context(|| format!("write {}", path.display()))
}

fn write_page<W: Write>(xml: &mut Writer<W>, page: &PageLayout) -> Result<()> {
    let geometry = &page.geometry;
    let mut section = BytesStart::new("section");
    section.push_attribute(("class", "page"));
    let size = format!(
        "width: {}pt; height: {}pt;",
        geometry.width, geometry.height
    );
    section.push_attribute(("style", size.as_str()));
    xml.write_event(Event::Start(section))?;

    write_positioned(xml, "span", "title", &page.title)?;
    for field in &page.header {
        write_positioned(xml, "span", "field", field)?;
    }

    for cell in &page.cells {
        let mut problem = BytesStart::new("div");
        problem.push_attribute(("class", "problem"));
        let index = cell.index.to_string();
        problem.push_attribute(("data-index", index.as_str()));
        xml.write_event(Event::Start(problem))?;
        let label = TextItem {
            text: number_label(cell.index),
            x: cell.x,
            y: cell.y,
            size: geometry.label_size,
            font: FontRole::Label,
            align: Align::Left,
        };
        write_positioned(xml, "span", "label", &label)?;
        let body = TextItem {
            text: cell.lines.to_lines().join("\n"),
            x: cell.x + geometry.content_indent,
            y: cell.y + geometry.top_line_offset,
            size: geometry.problem_size,
            font: FontRole::Problem,
            align: Align::Left,
        };
        write_positioned(xml, "pre", "vprob", &body)?;
        xml.write_event(Event::End(BytesEnd::new("div")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("section")))?;
    Ok(())
}

/// Writes `item` with its baseline placed at the layout coordinates.
fn write_positioned<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    class: &str,
    item: &TextItem,
) -> Result<()> {
    let mut start = BytesStart::new(name);
    start.push_attribute(("class", class));
    let style = position_style(item);
    start.push_attribute(("style", style.as_str()));
    xml.write_event(Event::Start(start))?;
    xml.write_event(Event::Text(BytesText::new(&item.text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn position_style(item: &TextItem) -> String {
    let top = item.y - item.size;
    let shift = match item.align {
        Align::Left => "",
        Align::Center => " transform: translateX(-50%);",
        Align::Right => " transform: translateX(-100%);",
    };
    format!(
        "left: {}pt; top: {}pt; font-size: {}pt;{shift}",
        round2(item.x),
        round2(top),
        item.size
    )
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
