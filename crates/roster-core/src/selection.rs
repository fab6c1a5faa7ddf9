//! Bulk-selection set that survives paging and filtering.
//!
//! Identifiers stay selected when their records scroll off the page or are
//! hidden by a filter; they only leave the set through an explicit toggle or
//! [`Selection::clear`].

use std::collections::BTreeSet;

use roster_model::{Record, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: BTreeSet<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Flip one identifier; returns whether it is now selected.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// True when `ids` is non-empty and every one of them is selected.
    pub fn all_selected<'a, I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        let mut any = false;
        for id in ids {
            if !self.ids.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// All-or-nothing toggle over the rows of the current page.
    ///
    /// If every id is already selected they are all deselected, otherwise
    /// they are all selected. Identifiers outside `page_ids` are untouched.
    pub fn toggle_all_on_page(&mut self, page_ids: &[RecordId]) {
        if self.all_selected(page_ids) {
            for id in page_ids {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(page_ids.iter().cloned());
        }
    }

    /// Same rule as [`Self::toggle_all_on_page`] over a whole view.
    pub fn toggle_all<R: Record>(&mut self, rows: &[R]) {
        let ids: Vec<RecordId> = rows.iter().map(|row| row.id().clone()).collect();
        self.toggle_all_on_page(&ids);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }

    /// Number of selected identifiers present in `rows`.
    pub fn visible_count<R: Record>(&self, rows: &[R]) -> usize {
        rows.iter().filter(|row| self.is_selected(row.id())).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<RecordId> {
        values.iter().map(|v| RecordId::new(*v).unwrap()).collect()
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection = Selection::new();
        let id = RecordId::new("a").unwrap();
        assert!(selection.toggle(&id));
        assert!(selection.is_selected(&id));
        assert!(!selection.toggle(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn partial_page_selects_the_rest() {
        let page = ids(&["a", "b", "c"]);
        let mut selection = Selection::new();
        selection.toggle(&page[0]);
        selection.toggle_all_on_page(&page);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn full_page_is_deselected_without_touching_others() {
        let page = ids(&["a", "b"]);
        let other = RecordId::new("z").unwrap();
        let mut selection = Selection::new();
        selection.toggle(&other);
        selection.toggle_all_on_page(&page);
        selection.toggle_all_on_page(&page);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![&other]);
    }

    #[test]
    fn empty_page_is_a_no_op() {
        let mut selection = Selection::new();
        selection.toggle_all_on_page(&[]);
        assert!(selection.is_empty());
        assert!(!selection.all_selected(&[]));
    }
}
