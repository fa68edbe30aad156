use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Render one text file per spreadsheet row from a `<<placeholder>>` template.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render a single row and print it, or save it with `--output`.
    Render(RenderArgs),
    /// Write one file per row into a directory.
    Export(ExportArgs),
    /// Check template placeholders against the columns of the data source.
    Check(CheckArgs),
    /// Write a starter template.
    Init(InitArgs),
}

impl Commands {
    pub fn verbose(&self) -> u8 {
        match self {
            Commands::Render(args) => args.common.verbose,
            Commands::Export(args) => args.common.verbose,
            Commands::Check(args) => args.common.verbose,
            Commands::Init(args) => args.verbose,
        }
    }
}

/// Flags shared by every command that reads a template and rows.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// API URL or JSON file with the rows (`-` reads stdin).
    #[arg(short, long, value_name = "URL_OR_FILE")]
    pub source: Option<String>,

    /// Template file (`-` reads stdin).
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Configuration file; defaults to `sheetplate.{json,yaml,yml}` in the working directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fetch timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// 1-based row to render.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub row: u64,

    /// Save to this file, or into this directory as `result_<row>.txt`.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file without asking.
    #[arg(short, long)]
    pub force: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Destination directory for the exported files.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Column that names each file; the first column when omitted.
    #[arg(short = 'n', long, value_name = "COLUMN")]
    pub name_column: Option<String>,

    /// Overwrite existing files without asking.
    #[arg(short, long)]
    pub force: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Fail when any placeholder names an unknown column.
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    /// Where to write the template.
    #[arg(value_name = "FILE", default_value = "template.txt")]
    pub path: PathBuf,

    /// Overwrite an existing file without asking.
    #[arg(short, long)]
    pub force: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments, printing the full help when a required input is missing.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument
            || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
