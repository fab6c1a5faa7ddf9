//! Filtering and ordering of a collection.

use roster_model::{Record, Schema};
use tracing::debug;

use crate::error::Result;
use crate::filter::{FilterState, PredicateSet};
use crate::search::TextSearch;
use crate::sort::{Comparator, SortState, build_comparator};

/// Records that passed every active predicate, borrowed from the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a, R> {
    rows: Vec<&'a R>,
}

impl<'a, R> FilteredView<'a, R> {
    pub fn rows(&self) -> &[&'a R] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<&'a R> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a, R: Record> FilteredView<'a, R> {
    /// Order the view with `comparator`.
    #[must_use]
    pub fn sorted(mut self, comparator: &Comparator) -> Self {
        comparator.sort(&mut self.rows);
        self
    }
}

/// Predicates, search and schema for one screen.
#[derive(Debug, Clone)]
pub struct QueryEngine<R> {
    schema: Schema,
    predicates: PredicateSet<R>,
    search: TextSearch,
}

impl<R: Record> QueryEngine<R> {
    pub fn new(schema: Schema, predicates: PredicateSet<R>, search: TextSearch) -> Self {
        Self {
            schema,
            predicates,
            search,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn predicates(&self) -> &PredicateSet<R> {
        &self.predicates
    }

    pub fn search(&self) -> &TextSearch {
        &self.search
    }

    /// Subsequence of `records` matching the state, in original order.
    pub fn filter<'a, I>(&self, records: I, state: &FilterState) -> FilteredView<'a, R>
    where
        I: IntoIterator<Item = &'a R>,
        R: 'a,
    {
        let needle = TextSearch::prepare(state.search());
        let mut total = 0usize;
        let rows: Vec<&'a R> = records
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|record| self.predicates.matches(record, state))
            .filter(|record| {
                needle
                    .as_deref()
                    .is_none_or(|needle| self.search.matches_prepared(*record, needle))
            })
            .collect();
        debug!(total, filtered = rows.len(), "filtered view recomputed");
        FilteredView { rows }
    }

    /// Filter then sort.
    pub fn run<'a, I>(
        &self,
        records: I,
        filter: &FilterState,
        sort: &SortState,
    ) -> Result<FilteredView<'a, R>>
    where
        I: IntoIterator<Item = &'a R>,
        R: 'a,
    {
        let comparator = build_comparator(&self.schema, sort)?;
        Ok(self.filter(records, filter).sorted(&comparator))
    }
}
