use std::path::PathBuf;

use worksheet_cli::pipeline::PreparedExport;
use worksheet_report::OutputFormat;

#[derive(Debug)]
pub struct ExportResult {
    pub output: PathBuf,
    pub format: OutputFormat,
    pub prepared: PreparedExport,
}
