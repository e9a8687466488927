//! CLI argument definitions for the worksheet generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use worksheet_model::{DEFAULT_TITLE, Operation, RawSettings};
use worksheet_report::OutputFormat;

#[derive(Parser)]
#[command(
    name = "math-worksheet",
    version,
    about = "Arithmetic worksheet generator - preview and export practice problems",
    long_about = "Generate printable arithmetic practice worksheets.\n\n\
                  Problems are drawn from a whole-number range with optional carry and\n\
                  borrow, laid out in a three-column grid, and exported as PDF, HTML or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate one worksheet and print it.
    Preview(PreviewArgs),

    /// Generate worksheets and write them to a document.
    Export(ExportArgs),

    /// List the supported operations.
    Operations,
}

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Preview output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: PreviewFormatArg,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output file or directory (default: suggested file name in the current
    /// directory).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Document format to write.
    #[arg(long = "format", value_enum, default_value = "pdf")]
    pub format: ExportFormatArg,

    /// Print the previewed worksheet before exporting.
    #[arg(long = "show-preview")]
    pub show_preview: bool,
}

/// Worksheet settings, as entered on the form.
///
/// Values are passed through unvalidated; the settings reader reports
/// out-of-range or fractional bounds.
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Smallest operand.
    #[arg(long = "min", default_value_t = 0.0, allow_negative_numbers = true)]
    pub min: f64,

    /// Largest operand.
    #[arg(long = "max", default_value_t = 10.0, allow_negative_numbers = true)]
    pub max: f64,

    /// Include addition (the default when no operation is selected).
    #[arg(long = "add")]
    pub addition: bool,

    /// Include subtraction.
    #[arg(long = "sub")]
    pub subtraction: bool,

    /// Include multiplication.
    #[arg(long = "mul")]
    pub multiplication: bool,

    /// Include division (whole-number quotients only).
    #[arg(long = "div")]
    pub division: bool,

    /// Include an operation by name or symbol (repeatable), e.g. `--op mul --op /`.
    #[arg(long = "op", value_name = "OPERATION")]
    pub operations: Vec<Operation>,

    /// Allow carrying in addition problems.
    #[arg(long = "carry")]
    pub carry: bool,

    /// Allow borrowing in subtraction problems.
    #[arg(long = "borrow")]
    pub borrow: bool,

    /// Problems per worksheet (clamped to 1-18).
    #[arg(
        long = "count",
        value_name = "N",
        default_value_t = 10,
        allow_negative_numbers = true
    )]
    pub problem_count: i64,

    /// Number of worksheets to export (clamped to 1-50).
    #[arg(
        long = "worksheets",
        value_name = "N",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub worksheet_count: i64,

    /// Worksheet title.
    #[arg(long = "title", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Seed for reproducible problem sets.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

impl SettingsArgs {
    pub fn selected_operations(&self) -> Vec<Operation> {
        let flags = [
            (Operation::Addition, self.addition),
            (Operation::Subtraction, self.subtraction),
            (Operation::Multiplication, self.multiplication),
            (Operation::Division, self.division),
        ];
        let selected: Vec<Operation> = flags
            .iter()
            .filter(|(operation, enabled)| *enabled || self.operations.contains(operation))
            .map(|(operation, _)| *operation)
            .collect();
        if selected.is_empty() {
            vec![Operation::Addition]
        } else {
            selected
        }
    }

    pub fn to_raw(&self) -> RawSettings {
        RawSettings::new()
            .with_bounds(self.min, self.max)
            .with_operations(&self.selected_operations())
            .with_carry(self.carry)
            .with_borrow(self.borrow)
            .with_problem_count(self.problem_count)
            .with_worksheet_count(self.worksheet_count)
            .with_title(self.title.clone())
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PreviewFormatArg {
    Text,
    Html,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Pdf,
    Html,
    Json,
}

impl From<ExportFormatArg> for OutputFormat {
    fn from(value: ExportFormatArg) -> Self {
        match value {
            ExportFormatArg::Pdf => OutputFormat::Pdf,
            ExportFormatArg::Html => OutputFormat::Html,
            ExportFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn addition_is_the_default_operation() {
        let cli = Cli::try_parse_from(["math-worksheet", "preview"]).expect("parse");
        let Command::Preview(args) = cli.command else {
            panic!("expected preview command");
        };
        assert_eq!(args.settings.selected_operations(), vec![Operation::Addition]);
        let raw = args.settings.to_raw();
        assert_eq!((raw.min, raw.max), (0.0, 10.0));
        assert_eq!(raw.problem_count, 10);
        assert_eq!(raw.title, DEFAULT_TITLE);
    }

    #[test]
    fn export_flags_map_to_raw_settings() {
        let cli = Cli::try_parse_from([
            "math-worksheet",
            "export",
            "--min",
            "-3",
            "--max",
            "12.5",
            "--sub",
            "--div",
            "--borrow",
            "--worksheets",
            "4",
            "--format",
            "html",
            "-o",
            "out",
        ])
        .expect("parse");
        let Command::Export(args) = cli.command else {
            panic!("expected export command");
        };
        let raw = args.settings.to_raw();
        assert_eq!((raw.min, raw.max), (-3.0, 12.5));
        assert!(!raw.addition && raw.subtraction && raw.division);
        assert!(raw.borrow && !raw.carry);
        assert_eq!(raw.worksheet_count, 4);
        assert_eq!(OutputFormat::from(args.format), OutputFormat::Html);
        assert_eq!(args.output, Some(PathBuf::from("out")));
    }

    #[test]
    fn named_operations_combine_with_flags() {
        let cli = Cli::try_parse_from([
            "math-worksheet",
            "preview",
            "--op",
            "×",
            "--op",
            "div",
            "--add",
        ])
        .expect("parse");
        let Command::Preview(args) = cli.command else {
            panic!("expected preview command");
        };
        assert_eq!(
            args.settings.selected_operations(),
            vec![
                Operation::Addition,
                Operation::Multiplication,
                Operation::Division
            ]
        );
    }

    #[test]
    fn unknown_operation_is_rejected() {
        assert!(Cli::try_parse_from(["math-worksheet", "preview", "--op", "modulo"]).is_err());
    }
}
