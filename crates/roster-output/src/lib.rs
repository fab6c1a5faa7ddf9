//! Export of list views.
//!
//! Both renderers consume an [`roster_core::ExportSnapshot`] (the full
//! filtered and sorted view, not the current page) through the same
//! [`ExportLayout`], so the CSV rows and the printable table always agree:
//!
//! - **CSV**: header row plus one row per record, standard quoting
//! - **Printable HTML**: standalone document with inline styles, ready for
//!   a print dialog

#![deny(unsafe_code)]

mod delimited;
pub mod error;
mod format;
mod layout;
mod print;

pub use delimited::{CsvOptions, to_csv, to_csv_with, write_csv};
pub use error::{ExportError, Result};
pub use format::ExportFormat;
pub use layout::{ExportColumn, ExportLayout};
pub use print::{PrintOptions, to_print_html};
