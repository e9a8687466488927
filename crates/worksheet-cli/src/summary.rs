use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use worksheet_cli::pipeline::operation_counts;
use worksheet_model::Operation;

use crate::types::ExportResult;

pub fn print_export_summary(result: &ExportResult) {
    let plan = &result.prepared.plan;
    println!("Output: {}", result.output.display());
    println!("Format: {}", result.format);
    if result.prepared.reused_preview {
        println!("Problems: same as preview");
    }

    let mut header = vec![header_cell("Sheet"), header_cell("Title"), header_cell("Problems")];
    header.extend(
        Operation::ALL
            .iter()
            .map(|operation| header_cell(&operation.symbol().to_string())),
    );
    let mut table = Table::new();
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for index in [0, 2, 3, 4, 5, 6] {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut totals = vec![0usize; Operation::ALL.len()];
    for (index, worksheet) in plan.worksheets.iter().enumerate() {
        let counts = operation_counts(worksheet);
        let mut row = vec![
            Cell::new(index + 1),
            Cell::new(&worksheet.title),
            Cell::new(worksheet.problem_count()),
        ];
        for (slot, operation) in Operation::ALL.iter().enumerate() {
            let count = counts.get(operation).copied().unwrap_or(0);
            totals[slot] += count;
            row.push(count_cell(count));
        }
        table.add_row(row);
    }

    let mut total_row = vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} sheets", plan.worksheets.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(plan.total_problems()).add_attribute(Attribute::Bold),
    ];
    total_row.extend(
        totals
            .iter()
            .map(|count| count_cell(*count).add_attribute(Attribute::Bold)),
    );
    table.add_row(total_row);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
