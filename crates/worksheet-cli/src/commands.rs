use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use worksheet_cli::pipeline::{
    prepare_export, prepare_preview, resolve_output_path, session_rng,
};
use worksheet_layout::{PageGeometry, layout_worksheet};
use worksheet_model::Operation;
use worksheet_report::{
    OutputFormat, layouts_json, preview_html, render_preview_text, write_document,
};

use crate::cli::{ExportArgs, PreviewArgs, PreviewFormatArg};
use crate::summary::apply_table_style;
use crate::types::ExportResult;

pub fn run_operations() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Operation", "Symbol", "Aliases", "Constraint"]);
    apply_table_style(&mut table);
    for operation in Operation::ALL {
        let (aliases, constraint) = match operation {
            Operation::Addition => ("add, +", "no carrying unless --carry"),
            Operation::Subtraction => ("sub, -", "never negative; no borrowing unless --borrow"),
            Operation::Multiplication => ("mul, x, *", "-"),
            Operation::Division => ("div, /", "whole-number quotient, divisor at least 1"),
        };
        table.add_row(vec![
            operation.to_string(),
            operation.symbol().to_string(),
            aliases.to_string(),
            constraint.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Generates a preview and renders it in the requested format.
pub fn run_preview(args: &PreviewArgs) -> Result<String> {
    let span = info_span!("preview", seed = ?args.settings.seed);
    let _guard = span.enter();
    let start = Instant::now();

    let mut rng = session_rng(args.settings.seed);
    let preview = prepare_preview(&args.settings.to_raw(), &mut rng)?;
    let rendered = match args.format {
        PreviewFormatArg::Text => render_preview_text(&preview),
        PreviewFormatArg::Html => preview_html(&preview).context("render preview html")?,
        PreviewFormatArg::Json => {
            let page = layout_worksheet(&preview.worksheet(), &PageGeometry::LETTER);
            layouts_json(&[page])?
        }
    };
    info!(
        problem_count = preview.problems.len(),
        duration_ms = start.elapsed().as_millis(),
        "preview complete"
    );
    Ok(rendered)
}

/// Previews, plans and writes an export.
pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let span = info_span!("export", seed = ?args.settings.seed);
    let _guard = span.enter();
    let start = Instant::now();
    let format = OutputFormat::from(args.format);

    let mut rng = session_rng(args.settings.seed);
    let preview = prepare_preview(&args.settings.to_raw(), &mut rng)?;
    if args.show_preview {
        println!("{}", render_preview_text(&preview));
        println!();
    }

    let prepared = prepare_export(&preview, &mut rng)?;
    let output = resolve_output_path(args.output.as_deref(), &prepared.plan, format);
    write_document(&output, format, &prepared.pages)
        .with_context(|| format!("export {}", output.display()))?;
    info!(
        output = %output.display(),
        worksheet_count = prepared.plan.worksheets.len(),
        problem_count = prepared.plan.total_problems(),
        reused_preview = prepared.reused_preview,
        duration_ms = start.elapsed().as_millis(),
        "export complete"
    );
    Ok(ExportResult {
        output,
        format,
        prepared,
    })
}
