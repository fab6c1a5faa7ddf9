use std::collections::HashMap;

use crate::{FieldValue, ModelError, RecordId, Result};

/// An addressable item in a managed collection.
///
/// Implementations expose their fields by name; `None` means the record has
/// no value for that field, which filters treat as a non-match and sorting
/// places after present values.
pub trait Record {
    fn id(&self) -> &RecordId;

    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn id(&self) -> &RecordId {
        (**self).id()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

/// Insertion-ordered records with unique identifiers.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: Vec<R>,
    index: HashMap<RecordId, usize>,
}

impl<R: Record> Collection<R> {
    pub fn new(records: Vec<R>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id().clone(), position).is_some() {
                return Err(ModelError::DuplicateRecordId(record.id().to_string()));
            }
        }
        Ok(Self { records, index })
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.index.contains_key(id)
    }
}

impl<R> Collection<R> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, R> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
