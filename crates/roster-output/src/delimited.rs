//! CSV rendering of an export snapshot.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use roster_core::ExportSnapshot;
use tracing::debug;

use crate::error::{ExportError, Result};
use crate::layout::ExportLayout;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
    /// Prefix the output with a UTF-8 byte order mark so spreadsheet tools
    /// detect the encoding.
    pub byte_order_mark: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            byte_order_mark: false,
        }
    }
}

impl CsvOptions {
    #[must_use]
    pub fn with_byte_order_mark(mut self, enable: bool) -> Self {
        self.byte_order_mark = enable;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Write the header row and one row per snapshot record.
///
/// Fields containing the delimiter, a quote or a line break are quoted with
/// inner quotes doubled; everything else is written bare.
pub fn write_csv<W, R>(
    mut writer: W,
    snapshot: &ExportSnapshot<'_, R>,
    layout: &ExportLayout<R>,
    options: &CsvOptions,
) -> Result<()>
where
    W: Write,
{
    if layout.is_empty() {
        return Err(ExportError::EmptyLayout);
    }
    if options.byte_order_mark {
        writer.write_all(UTF8_BOM)?;
    }
    let mut csv = WriterBuilder::new()
        .delimiter(options.delimiter)
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);
    csv.write_record(layout.headers())?;
    for record in snapshot.iter() {
        csv.write_record(layout.row(record))?;
    }
    csv.flush()?;
    debug!(
        rows = snapshot.len(),
        columns = layout.len(),
        "csv export written"
    );
    Ok(())
}

/// Render the snapshot as CSV text with default options.
pub fn to_csv<R>(snapshot: &ExportSnapshot<'_, R>, layout: &ExportLayout<R>) -> Result<String> {
    to_csv_with(snapshot, layout, &CsvOptions::default())
}

pub fn to_csv_with<R>(
    snapshot: &ExportSnapshot<'_, R>,
    layout: &ExportLayout<R>,
    options: &CsvOptions,
) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, snapshot, layout, options)?;
    Ok(String::from_utf8(buffer)?)
}
