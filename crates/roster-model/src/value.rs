//! Typed field values exposed by records.

use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;

/// Date format used whenever a date is rendered as text.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text or an enumeration label.
    Text,
    Number,
    Date,
    Flag,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Flag => "flag",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed view of one field of a record.
///
/// Records hand these out from [`crate::Record::field`]; an absent field is
/// represented by `None` at that call site rather than by a variant here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
    Flag(bool),
}

impl<'a> FieldValue<'a> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Date(_) => FieldKind::Date,
            Self::Flag(_) => FieldKind::Flag,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Canonical text form, shared by filters, search and export.
    ///
    /// Whole numbers render without a fractional part, dates as `YYYY-MM-DD`.
    pub fn display(&self) -> Cow<'a, str> {
        match *self {
            Self::Text(value) => Cow::Borrowed(value),
            Self::Number(value) => Cow::Owned(format_number(value)),
            Self::Date(value) => Cow::Owned(value.format(DATE_FORMAT).to_string()),
            Self::Flag(value) => Cow::Borrowed(if value { "true" } else { "false" }),
        }
    }

    /// Case-insensitive substring test against the display form.
    ///
    /// `needle` must already be lowercase.
    pub fn contains_folded(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.display().to_lowercase().contains(needle)
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn format_number(value: f64) -> String {
    // 2^53: beyond this, f64 no longer represents every integer exactly.
    const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < EXACT_INT_LIMIT {
        #[allow(clippy::cast_possible_truncation)]
        let whole = value as i64;
        whole.to_string()
    } else {
        value.to_string()
    }
}
