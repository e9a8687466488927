//! Integration tests for worksheet rendering.

use insta::assert_snapshot;
use lopdf::content::Content;
use lopdf::{Document, Object};
use rand::SeedableRng;
use rand::rngs::StdRng;

use worksheet_core::{Preview, plan_export, preview, read_settings};
use worksheet_layout::{PageGeometry, layout_worksheets};
use worksheet_model::{Operation, Problem, RawSettings};
use worksheet_report::{
    OutputFormat, export_file_name, layouts_json, preview_html, render_preview_text,
    worksheet_html, write_document,
};

fn problem(operation: Operation, a: u64, b: u64) -> Problem {
    Problem::new(operation, a, b).expect("valid problem")
}

fn fixed_preview(worksheet_count: i64) -> Preview {
    let raw = RawSettings::new()
        .with_bounds(1.0, 500.0)
        .with_operations(&Operation::ALL)
        .with_worksheet_count(worksheet_count);
    Preview {
        settings: read_settings(&raw).expect("valid settings"),
        problems: vec![
            problem(Operation::Addition, 47, 8),
            problem(Operation::Subtraction, 305, 41),
            problem(Operation::Multiplication, 6, 120),
            problem(Operation::Division, 8, 2),
        ],
    }
}

fn pdf_strings(doc: &Document, page_number: u32) -> Vec<Vec<u8>> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_number).copied().expect("page exists");
    let bytes = doc.get_page_content(page_id).expect("page content");
    let content = Content::decode(&bytes).expect("decode content");
    content
        .operations
        .iter()
        .filter(|operation| operation.operator == "Tj")
        .flat_map(|operation| operation.operands.iter())
        .filter_map(|operand| match operand {
            Object::String(bytes, _) => Some(bytes.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn text_preview_stacks_numbered_problems() {
    let text = render_preview_text(&fixed_preview(3));
    assert_snapshot!(text, @r"
    Math Worksheet
    Preview of 1 worksheet (3 unique worksheets will be generated)

    1.     47
         +  8
         _____

    2.     305
         -  41
         _____

    3.       6
         × 120
         _____

    4.     8
         ÷ 2
         _____

    4 problems
    ");
}

#[test]
fn single_sheet_preview_has_no_description() {
    let text = render_preview_text(&fixed_preview(1));
    assert!(text.starts_with("Math Worksheet\n\n1."));
    assert!(!text.contains("unique worksheets"));
}

#[test]
fn preview_html_lists_stacked_problems() {
    let html = preview_html(&fixed_preview(2)).expect("render preview html");
    assert!(html.contains(r#"<ol class="problems">"#));
    assert!(html.contains("<pre class=\"vprob\">  47\n+  8\n_____</pre>"));
    assert!(html.contains("<pre class=\"vprob\">  8\n÷ 2\n_____</pre>"));
    assert!(html.contains("2 unique worksheets will be generated"));
    assert_eq!(html.matches("<li>").count(), 4);
}

#[test]
fn worksheet_html_has_one_section_per_page() {
    let preview = fixed_preview(1);
    let pages = layout_worksheets(&[preview.worksheet()], &PageGeometry::LETTER);
    let html = worksheet_html(&pages).expect("render worksheet html");
    assert!(html.starts_with("<!DOCTYPE html>\n<html>"));
    assert_eq!(html.matches(r#"<section class="page""#).count(), 1);
    assert!(html.contains("Score: ___ / 4"));
    assert!(html.contains(r#"data-index="3""#));
}

#[test]
fn json_layout_keeps_coordinates() {
    let preview = fixed_preview(1);
    let pages = layout_worksheets(&[preview.worksheet()], &PageGeometry::LETTER);
    let json = layouts_json(&pages).expect("serialize layouts");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
    let cells = value[0]["cells"].as_array().expect("cells array");
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[3]["column"], 0);
    assert_eq!(cells[3]["row"], 1);
    assert_eq!(cells[0]["y"], 150.0);
}

#[test]
fn pdf_export_writes_one_page_per_sheet() {
    let raw = RawSettings::new()
        .with_bounds(2.0, 12.0)
        .with_operations(&[Operation::Multiplication, Operation::Division])
        .with_problem_count(4)
        .with_worksheet_count(3);
    let settings = read_settings(&raw).expect("valid settings");
    let mut rng = StdRng::seed_from_u64(7);
    let shown = preview(&mut rng, &settings).expect("preview");
    let plan = plan_export(&mut rng, &settings, Some(&shown)).expect("plan");
    let pages = layout_worksheets(&plan.worksheets, &PageGeometry::LETTER);

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(export_file_name(&plan, OutputFormat::Pdf));
    write_document(&path, OutputFormat::Pdf, &pages).expect("write pdf");

    let bytes = std::fs::read(&path).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF-1.5"));
    assert!(path.ends_with("worksheets_3_sheets.pdf"));

    let doc = Document::load(&path).expect("load pdf");
    assert_eq!(doc.get_pages().len(), 3);
    let strings = pdf_strings(&doc, 2);
    assert!(strings.contains(&b"Math Worksheet - Sheet 2".to_vec()));
    assert!(strings.contains(&b"Score: ___ / 4".to_vec()));
    assert!(strings.contains(&b"4.".to_vec()));
    let operators: Vec<u8> = plan.worksheets[1]
        .problems
        .iter()
        .map(|problem| if problem.operation == Operation::Division { 0xF7 } else { 0xD7 })
        .collect();
    for symbol in operators {
        assert!(strings.iter().any(|text| text.first() == Some(&symbol)));
    }
}

#[test]
fn html_and_json_exports_create_parent_directories() {
    let preview = fixed_preview(1);
    let pages = layout_worksheets(&[preview.worksheet()], &PageGeometry::LETTER);
    let dir = tempfile::tempdir().expect("temp dir");

    let html_path = dir.path().join("out/worksheet.html");
    write_document(&html_path, OutputFormat::Html, &pages).expect("write html");
    let json_path = dir.path().join("nested/deeper/worksheet.json");
    write_document(&json_path, OutputFormat::Json, &pages).expect("write json");

    assert!(std::fs::read_to_string(html_path).expect("read html").contains("Math Worksheet"));
    let json = std::fs::read_to_string(json_path).expect("read json");
    assert!(json.trim_start().starts_with('['));
}
