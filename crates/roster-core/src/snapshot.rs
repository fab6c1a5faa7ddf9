use roster_model::Record;

/// The full filtered and sorted view handed to exporters.
///
/// Built on demand by [`crate::ListEngine::snapshot`] and independent of the
/// current page.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSnapshot<'a, R> {
    rows: Vec<&'a R>,
}

impl<'a, R> ExportSnapshot<'a, R> {
    pub fn new(rows: Vec<&'a R>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[&'a R] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a, R: Record> FromIterator<&'a R> for ExportSnapshot<'a, R> {
    fn from_iter<I: IntoIterator<Item = &'a R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
