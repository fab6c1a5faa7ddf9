//! Field descriptors for a record type.
//!
//! A [`Schema`] is the list of fields a screen exposes to filtering, sorting,
//! search and export. Every name the engine is configured with is checked
//! against it up front, so a typo fails at construction rather than silently
//! matching nothing.

use std::collections::BTreeSet;

use crate::{FieldKind, ModelError, Result};

/// Descriptor of one record field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldDef {
    pub name: String,
    /// Column label used by export headers.
    pub label: String,
    pub kind: FieldKind,
    /// Whether free-text search looks at this field.
    pub searchable: bool,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            kind,
            searchable: false,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Flag)
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }
}

/// Ordered set of field descriptors with unique names.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Schema {
    fields: Vec<FieldDef>,
}

impl Schema {
    pub fn new(fields: Vec<FieldDef>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for field in &fields {
            if field.name.trim().is_empty() {
                return Err(ModelError::EmptyFieldName);
            }
            if !seen.insert(field.name.as_str()) {
                return Err(ModelError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Look up a field, failing when the schema does not declare it.
    pub fn require(&self, name: &str) -> Result<&FieldDef> {
        self.field(name)
            .ok_or_else(|| ModelError::UnknownField(name.to_string()))
    }

    pub fn searchable_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.searchable)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
