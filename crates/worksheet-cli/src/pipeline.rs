//! Preview and export steps shared by the CLI commands.
//!
//! Each step takes the session RNG explicitly, so a `--seed` run is fully
//! reproducible and the preview handed to the export is the one the user saw.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use worksheet_core::{ExportPlan, Preview, plan_export, preview, read_settings};
use worksheet_layout::{PageGeometry, PageLayout, layout_worksheets};
use worksheet_model::{Operation, RawSettings, Result, Worksheet};
use worksheet_report::{OutputFormat, export_file_name};

/// A planned export together with its laid-out pages.
#[derive(Debug, Clone)]
pub struct PreparedExport {
    pub plan: ExportPlan,
    pub pages: Vec<PageLayout>,
    /// True when the single sheet reuses the previewed problems.
    pub reused_preview: bool,
}

/// RNG for one CLI session: seeded when `seed` is given, otherwise from the
/// thread-local generator.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Validates raw settings and generates the preview problem list.
pub fn prepare_preview(raw: &RawSettings, rng: &mut StdRng) -> Result<Preview> {
    let settings = read_settings(raw)?;
    debug!(
        min = settings.min,
        max = settings.max,
        operations = %settings.operations,
        problem_count = settings.problem_count,
        worksheet_count = settings.worksheet_count,
        "settings accepted"
    );
    Ok(preview(rng, &settings)?)
}

/// Plans the export for a preview and lays out every page.
pub fn prepare_export(shown: &Preview, rng: &mut StdRng) -> Result<PreparedExport> {
    let plan = plan_export(rng, &shown.settings, Some(shown))?;
    let reused_preview = match plan.worksheets.as_slice() {
        [only] => only.problems == shown.problems,
        _ => false,
    };
    let pages = layout_worksheets(&plan.worksheets, &PageGeometry::LETTER);
    Ok(PreparedExport {
        plan,
        pages,
        reused_preview,
    })
}

/// Where an export is written.
///
/// No `output`: the plan's file name in the current directory. An existing
/// directory: the plan's file name inside it. Anything else is used as given.
pub fn resolve_output_path(
    output: Option<&Path>,
    plan: &ExportPlan,
    format: OutputFormat,
) -> PathBuf {
    let file_name = export_file_name(plan, format);
    match output {
        None => file_name,
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
    }
}

/// Problems per operation on one sheet, in operation order.
pub fn operation_counts(worksheet: &Worksheet) -> BTreeMap<Operation, usize> {
    let mut counts = BTreeMap::new();
    for problem in &worksheet.problems {
        *counts.entry(problem.operation).or_insert(0) += 1;
    }
    counts
}
