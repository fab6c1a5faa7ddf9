//! CLI argument definitions for the roster shell.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_core::SortState;
use roster_model::RecordId;
use roster_output::ExportFormat;
use roster_screens::Screen;

use roster_cli::query::{FilterArg, QueryPlan, parse_filter, parse_sort};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Browse and export seeded administrative list screens",
    long_about = "Browse and export seeded administrative list screens.\n\n\
                  Every screen is generated deterministically, then filtered, searched,\n\
                  sorted and paged exactly as the list UI would."
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

    /// Log output format.
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
    /// List the available screens with their filters and sortable fields.
    Screens(ScreensArgs),

    /// Print one page of a screen.
    List(ListArgs),

    /// Export every filtered row of a screen, ignoring pagination.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct ScreensArgs {
    /// Records generated per screen.
    #[arg(long = "count", default_value_t = 100)]
    pub count: usize,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Screen to open.
    #[arg(value_name = "SCREEN")]
    pub screen: Screen,

    /// Records to generate.
    #[arg(long = "count", default_value_t = 100)]
    pub count: usize,

    /// Filter as NAME=VALUE; VALUE `any` clears it. Repeatable.
    #[arg(long = "filter", value_name = "NAME=VALUE", value_parser = parse_filter)]
    pub filters: Vec<FilterArg>,

    /// Case-insensitive text over the screen's searchable fields.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Sort as KEY or KEY:desc.
    #[arg(long = "sort", value_name = "KEY[:DIR]", value_parser = parse_sort)]
    pub sort: Option<SortState>,

    /// Rows per page.
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// 1-based page; out of range values are clamped.
    #[arg(long = "page", value_name = "N")]
    pub page: Option<usize>,

    /// Toggle selection of a record id. Repeatable.
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Select every row of the filtered view.
    #[arg(long = "select-all")]
    pub select_all: bool,

    /// Start from a list state saved with --save-state.
    #[arg(long = "state", value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// JSON array of list events applied after the flags above.
    #[arg(long = "events", value_name = "PATH")]
    pub events: Option<PathBuf>,

    /// Write the resulting list state as JSON.
    #[arg(long = "save-state", value_name = "PATH")]
    pub save_state: Option<PathBuf>,
}

impl QueryArgs {
    pub fn plan(&self) -> anyhow::Result<QueryPlan> {
        let select = self
            .select
            .iter()
            .map(|id| RecordId::new(id.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(QueryPlan {
            filters: self.filters.clone(),
            search: self.search.clone(),
            sort: self.sort.clone(),
            page_size: self.page_size,
            page: self.page,
            select,
            select_all: self.select_all,
        })
    }
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Export format: csv, or html (alias print) for the printable page.
    #[arg(long = "format", value_name = "FORMAT", default_value = "csv")]
    pub format: ExportFormat,

    /// Output file (default: <SCREEN>.<ext> in the current directory, `-` for stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Document title for the print view (default: the screen title).
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Open the browser print dialog when the HTML loads.
    #[arg(long = "auto-print")]
    pub auto_print: bool,

    /// Prefix CSV output with a UTF-8 byte order mark.
    #[arg(long = "bom")]
    pub bom: bool,
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

    fn export_args(argv: &[&str]) -> ExportArgs {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        match cli.command {
            Command::Export(args) => args,
            _ => panic!("expected the export command"),
        }
    }

    #[test]
    fn export_format_accepts_print_alias() {
        let args = export_args(&["roster", "export", "tickets", "--format", "print", "--bom"]);
        assert_eq!(args.format, ExportFormat::Html);
        assert!(args.bom);
        assert_eq!(args.query.screen, Screen::Tickets);

        let args = export_args(&["roster", "export", "users"]);
        assert_eq!(args.format, ExportFormat::Csv);
    }

    #[test]
    fn unsupported_export_format_is_a_usage_error() {
        assert!(Cli::try_parse_from(["roster", "export", "users", "--format", "xlsx"]).is_err());
    }
}
