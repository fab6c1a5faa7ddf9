//! Printable HTML rendering of an export snapshot.
//!
//! The document is self-contained: inline styles, one table whose header
//! and body match the CSV export cell for cell.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use roster_core::ExportSnapshot;
use tracing::debug;

use crate::error::{ExportError, Result};
use crate::layout::ExportLayout;

const DOCTYPE: &[u8] = b"<!DOCTYPE html>\n";

const PRINT_STYLE: &str = "\
body { font-family: Arial, Helvetica, sans-serif; margin: 24px; color: #1f2933; }
h1 { font-size: 20px; margin: 0 0 4px 0; }
p.subtitle { margin: 0 0 16px 0; color: #52606d; }
table { width: 100%; border-collapse: collapse; font-size: 12px; }
th, td { border: 1px solid #cbd2d9; padding: 6px 8px; text-align: left; vertical-align: top; }
th { background: #f0f4f8; font-weight: 600; }
tr:nth-child(even) td { background: #fafbfc; }
p.summary { margin-top: 12px; font-size: 12px; color: #52606d; }
@media print { body { margin: 0; } thead { display: table-header-group; } }";

const PRINT_SCRIPT: &str = "window.onload = function () { window.print(); };";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub title: String,
    pub subtitle: Option<String>,
    /// Pre-formatted generation time; left to the caller so the output stays
    /// deterministic.
    pub generated_at: Option<String>,
    /// Embed a script that opens the print dialog once the page loads.
    pub auto_print: bool,
}

impl PrintOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            generated_at: None,
            auto_print: false,
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_generated_at(mut self, generated_at: impl Into<String>) -> Self {
        self.generated_at = Some(generated_at.into());
        self
    }

    #[must_use]
    pub fn with_auto_print(mut self, enable: bool) -> Self {
        self.auto_print = enable;
        self
    }
}

/// Render the snapshot as a standalone HTML document.
pub fn to_print_html<R>(
    snapshot: &ExportSnapshot<'_, R>,
    layout: &ExportLayout<R>,
    options: &PrintOptions,
) -> Result<String> {
    if layout.is_empty() {
        return Err(ExportError::EmptyLayout);
    }
    let mut html = Writer::new_with_indent(DOCTYPE.to_vec(), b' ', 2);

    emit(
        &mut html,
        Event::Start(BytesStart::new("html").with_attributes([("lang", "en")])),
    )?;
    emit(&mut html, Event::Start(BytesStart::new("head")))?;
    emit(
        &mut html,
        Event::Empty(BytesStart::new("meta").with_attributes([("charset", "utf-8")])),
    )?;
    text_element(&mut html, "title", &options.title, None)?;
    emit(&mut html, Event::Start(BytesStart::new("style")))?;
    emit(&mut html, Event::Text(BytesText::from_escaped(PRINT_STYLE)))?;
    emit(&mut html, Event::End(BytesEnd::new("style")))?;
    emit(&mut html, Event::End(BytesEnd::new("head")))?;

    emit(&mut html, Event::Start(BytesStart::new("body")))?;
    text_element(&mut html, "h1", &options.title, None)?;
    if let Some(subtitle) = &options.subtitle {
        text_element(&mut html, "p", subtitle, Some("subtitle"))?;
    }

    emit(&mut html, Event::Start(BytesStart::new("table")))?;
    emit(&mut html, Event::Start(BytesStart::new("thead")))?;
    emit(&mut html, Event::Start(BytesStart::new("tr")))?;
    for label in layout.headers() {
        text_element(&mut html, "th", label, None)?;
    }
    emit(&mut html, Event::End(BytesEnd::new("tr")))?;
    emit(&mut html, Event::End(BytesEnd::new("thead")))?;

    emit(&mut html, Event::Start(BytesStart::new("tbody")))?;
    for record in snapshot.iter() {
        emit(&mut html, Event::Start(BytesStart::new("tr")))?;
        for cell in layout.row(record) {
            text_element(&mut html, "td", &cell, None)?;
        }
        emit(&mut html, Event::End(BytesEnd::new("tr")))?;
    }
    emit(&mut html, Event::End(BytesEnd::new("tbody")))?;
    emit(&mut html, Event::End(BytesEnd::new("table")))?;

    let summary = match &options.generated_at {
        Some(at) => format!("Total: {} | Generated: {at}", snapshot.len()),
        None => format!("Total: {}", snapshot.len()),
    };
    text_element(&mut html, "p", &summary, Some("summary"))?;

    if options.auto_print {
        emit(&mut html, Event::Start(BytesStart::new("script")))?;
        emit(&mut html, Event::Text(BytesText::from_escaped(PRINT_SCRIPT)))?;
        emit(&mut html, Event::End(BytesEnd::new("script")))?;
    }

    emit(&mut html, Event::End(BytesEnd::new("body")))?;
    emit(&mut html, Event::End(BytesEnd::new("html")))?;

    let mut bytes = html.into_inner();
    bytes.push(b'\n');
    debug!(
        rows = snapshot.len(),
        columns = layout.len(),
        "print document rendered"
    );
    Ok(String::from_utf8(bytes)?)
}

fn text_element(
    html: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
    class: Option<&str>,
) -> Result<()> {
    let mut start = BytesStart::new(name);
    if let Some(class) = class {
        start.push_attribute(("class", class));
    }
    emit(html, Event::Start(start))?;
    emit(html, Event::Text(BytesText::new(text)))?;
    emit(html, Event::End(BytesEnd::new(name)))
}

fn emit(html: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    html.write_event(event)
        .map_err(|error| ExportError::Html(error.to_string()))
}
