use std::fmt;
use std::str::FromStr;

use roster_core::ExportSnapshot;

use crate::delimited::{CsvOptions, to_csv_with};
use crate::error::Result;
use crate::layout::ExportLayout;
use crate::print::{PrintOptions, to_print_html};

/// Export target format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Html => "html",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv;charset=utf-8",
            Self::Html => "text/html;charset=utf-8",
        }
    }

    /// `base` with this format's extension appended.
    pub fn file_name(&self, base: &str) -> String {
        format!("{base}.{}", self.extension())
    }

    /// Render `snapshot` in this format; `csv` is only read for CSV and
    /// `print` only for HTML.
    pub fn render<R>(
        &self,
        snapshot: &ExportSnapshot<'_, R>,
        layout: &ExportLayout<R>,
        csv: &CsvOptions,
        print: &PrintOptions,
    ) -> Result<String> {
        match self {
            Self::Csv => to_csv_with(snapshot, layout, csv),
            Self::Html => to_print_html(snapshot, layout, print),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "html" | "print" => Ok(Self::Html),
            other => Err(format!("unsupported export format: {other}")),
        }
    }
}
