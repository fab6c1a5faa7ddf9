//! Column layout shared by the CSV and HTML renderers.

use std::fmt;
use std::sync::Arc;

use roster_model::{FieldDef, Record, Schema};

use crate::error::Result;

type ValueFn<R> = dyn Fn(&R) -> String + Send + Sync;

/// One exported column: a header label and how to render a record's cell.
pub struct ExportColumn<R> {
    label: String,
    value: Arc<ValueFn<R>>,
}

impl<R> ExportColumn<R> {
    pub fn new<F>(label: impl Into<String>, value: F) -> Self
    where
        F: Fn(&R) -> String + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            value: Arc::new(value),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self, record: &R) -> String {
        (self.value)(record)
    }
}

impl<R: Record + 'static> ExportColumn<R> {
    /// Render a schema field by its display form; absent fields are empty.
    pub fn field(def: &FieldDef) -> Self {
        let name = def.name.clone();
        Self::new(def.label.clone(), move |record: &R| {
            record
                .field(&name)
                .map(|value| value.display().into_owned())
                .unwrap_or_default()
        })
    }
}

impl<R> Clone for ExportColumn<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            value: Arc::clone(&self.value),
        }
    }
}

impl<R> fmt::Debug for ExportColumn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportColumn")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Fixed, ordered list of export columns.
#[derive(Debug, Clone)]
pub struct ExportLayout<R> {
    columns: Vec<ExportColumn<R>>,
}

impl<R> Default for ExportLayout<R> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}

impl<R> ExportLayout<R> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn column(mut self, column: ExportColumn<R>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(&self) -> &[ExportColumn<R>] {
        &self.columns
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(ExportColumn::label).collect()
    }

    pub fn row(&self, record: &R) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.value(record))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<R: Record + 'static> ExportLayout<R> {
    /// Columns for the named schema fields, labelled from the schema.
    pub fn from_schema<I, S>(schema: &Schema, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut layout = Self::new();
        for name in fields {
            let def = schema.require(name.as_ref())?;
            layout = layout.column(ExportColumn::field(def));
        }
        Ok(layout)
    }

    /// Every schema field, in schema order.
    pub fn all_fields(schema: &Schema) -> Self {
        schema
            .fields()
            .iter()
            .fold(Self::new(), |layout, def| {
                layout.column(ExportColumn::field(def))
            })
    }
}
