//! Preview and export planning.
//!
//! The most recent preview is returned to the caller as a [`Preview`] value
//! and handed back to [`plan_export`], so a single-sheet export prints exactly
//! the problems that were shown. Multi-sheet exports always generate a fresh
//! list per sheet.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use worksheet_model::{GenerateError, Problem, Settings, Worksheet};

use crate::generator::generate_list;
use crate::source::UniformSource;

/// File name used for a single-sheet export.
pub const SINGLE_SHEET_FILE_NAME: &str = "worksheet.pdf";

/// Problems shown in the last preview, together with the settings that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub settings: Settings,
    pub problems: Vec<Problem>,
}

impl Preview {
    /// Preview as the worksheet a single-sheet export would print.
    pub fn worksheet(&self) -> Worksheet {
        Worksheet::new(self.settings.title.clone(), self.problems.clone())
    }

    /// Note shown above the preview when several sheets will be exported.
    pub fn description(&self) -> Option<String> {
        preview_description(&self.settings)
    }
}

/// Worksheets to export and the suggested document file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPlan {
    pub worksheets: Vec<Worksheet>,
    pub file_name: String,
}

impl ExportPlan {
    pub fn total_problems(&self) -> usize {
        self.worksheets.iter().map(Worksheet::problem_count).sum()
    }
}

/// Generates a fresh problem list for display.
pub fn preview<S>(rng: &mut S, settings: &Settings) -> Result<Preview, GenerateError>
where
    S: UniformSource + ?Sized,
{
    let problems = generate_list(rng, settings)?;
    debug!(problem_count = problems.len(), "preview generated");
    Ok(Preview {
        settings: settings.clone(),
        problems,
    })
}

/// Plans the worksheets for an export.
///
/// A single sheet reuses the cached preview's problems when there are any;
/// otherwise a list is generated. Several sheets each get their own list and
/// a `"{title} - Sheet {n}"` title.
pub fn plan_export<S>(
    rng: &mut S,
    settings: &Settings,
    cached: Option<&Preview>,
) -> Result<ExportPlan, GenerateError>
where
    S: UniformSource + ?Sized,
{
    if !settings.is_multi_sheet() {
        let problems = match cached {
            Some(preview) if !preview.problems.is_empty() => {
                debug!("reusing preview problems for export");
                preview.problems.clone()
            }
            _ => generate_list(rng, settings)?,
        };
        return Ok(ExportPlan {
            worksheets: vec![Worksheet::new(settings.title.clone(), problems)],
            file_name: SINGLE_SHEET_FILE_NAME.to_string(),
        });
    }

    let mut worksheets = Vec::with_capacity(settings.worksheet_count);
    for sheet in 1..=settings.worksheet_count {
        let problems = generate_list(rng, settings)?;
        debug!(sheet, problem_count = problems.len(), "sheet generated");
        worksheets.push(Worksheet::new(sheet_title(&settings.title, sheet), problems));
    }
    info!(worksheet_count = worksheets.len(), "export planned");
    Ok(ExportPlan {
        worksheets,
        file_name: multi_sheet_file_name(settings.worksheet_count),
    })
}

/// Title of the `sheet`-th page (1-based) in a multi-sheet export.
pub fn sheet_title(title: &str, sheet: usize) -> String {
    format!("{title} - Sheet {sheet}")
}

pub fn multi_sheet_file_name(worksheet_count: usize) -> String {
    format!("worksheets_{worksheet_count}_sheets.pdf")
}

/// Note shown above the preview when several sheets will be exported.
pub fn preview_description(settings: &Settings) -> Option<String> {
    settings.is_multi_sheet().then(|| {
        format!(
            "Preview of 1 worksheet ({} unique worksheets will be generated)",
            settings.worksheet_count
        )
    })
}
