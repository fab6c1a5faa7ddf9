//! Schema-less records for data that arrives from outside the generator.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{FieldValue, Record, RecordId};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Flag(bool),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_field(&self) -> Option<FieldValue<'_>> {
        match self {
            Self::Text(value) => Some(FieldValue::Text(value)),
            Self::Number(value) => Some(FieldValue::Number(*value)),
            Self::Date(value) => Some(FieldValue::Date(*value)),
            Self::Flag(value) => Some(FieldValue::Flag(*value)),
            Self::Missing => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    /// `-0.0` is stored as `0.0`; both display as `0`.
    fn from(value: f64) -> Self {
        Self::Number(if value == 0.0 { 0.0 } else { value })
    }
}

impl From<i64> for CellValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// A record whose fields live in a name-keyed map.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub id: RecordId,
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            cells: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(name.into(), value.into());
    }
}

impl Record for Row {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.cells.get(name).and_then(CellValue::as_field)
    }
}
