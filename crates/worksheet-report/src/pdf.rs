//! PDF output: one Letter page per worksheet.
//!
//! Pages use the standard Type 1 fonts, so nothing is embedded. Text is
//! encoded as WinAnsi, which covers the `×` and `÷` operator symbols.
//! Layout coordinates are measured from the top-left corner; PDF user space
//! starts at the bottom-left, so every baseline is flipped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use tracing::debug;

use worksheet_layout::{Align, FontRole, PageLayout, TextItem};

const PDF_VERSION: &str = "1.5";

/// Advance width of every Courier glyph, as a fraction of the font size.
const COURIER_ADVANCE: f64 = 0.6;

/// Resource names of the page fonts.
const TEXT_FONT: &str = "F1";
const MONO_FONT: &str = "F2";

/// Builds a PDF document with one page per layout.
pub fn build_pdf(pages: &[PageLayout]) -> Result<Document> {
    if pages.is_empty() {
        return Err(anyhow!("no worksheets supplied for pdf export"));
    }

    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();
    let text_font = standard_font(&mut doc, "Helvetica");
    let mono_font = standard_font(&mut doc, "Courier");
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            TEXT_FONT => text_font,
            MONO_FONT => mono_font,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for (index, page) in pages.iter().enumerate() {
        let content = page_content(page);
        let encoded = content
            .encode()
            .with_context(|| format!("encode content stream for page {}", index + 1))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => media_box(page),
        });
        kids.push(page_id.into());
        debug!(page = index + 1, problem_count = page.cells.len(), "pdf page built");
    }

    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();
    Ok(doc)
}

pub fn write_pdf(path: &Path, pages: &[PageLayout]) -> Result<()> {
    let mut doc = build_pdf(pages)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    doc.save_to(&mut writer)
        .with_context(|| format!("write {}", path.display()))?;
    writer.flush().context("flush pdf output")?;
    Ok(())
}

/// Encodes text as WinAnsi bytes. Characters outside the code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match u32::from(ch) {
            code @ 0x20..=0x7E => code as u8,
            // Latin-1 supplement maps one to one, including × (D7) and ÷ (F7).
            code @ 0xA0..=0xFF => code as u8,
            _ => b'?',
        })
        .collect()
}

fn standard_font(doc: &mut Document, base_font: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    })
}

fn media_box(page: &PageLayout) -> Vec<Object> {
    vec![
        0.into(),
        0.into(),
        real(page.geometry.width),
        real(page.geometry.height),
    ]
}

fn page_content(page: &PageLayout) -> Content {
    let height = page.geometry.height;
    let mut operations = Vec::new();
    for item in page.text_items() {
        let x = item.x - aligned_offset(&item);
        let y = height - item.y;
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![font_resource(item.font).into(), real(item.size)],
        ));
        operations.push(Operation::new("Td", vec![real(x), real(y)]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_win_ansi(&item.text))],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }
}

fn font_resource(role: FontRole) -> &'static str {
    match role {
        FontRole::Title | FontRole::Label => TEXT_FONT,
        FontRole::Header | FontRole::Problem => MONO_FONT,
    }
}

/// Distance to move left so the anchor lands where `align` puts it.
///
/// Only monospace items are measured; proportional text is always
/// left-aligned in the layout.
fn aligned_offset(item: &TextItem) -> f64 {
    let width = item.text.chars().count() as f64 * item.size * COURIER_ADVANCE;
    match item.align {
        Align::Left => 0.0,
        Align::Center => width / 2.0,
        Align::Right => width,
    }
}

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}
