//! Named filter criteria and the state that selects among them.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use roster_model::{Record, Schema};

use crate::error::{EngineError, Result};

/// Selected value of one named filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FilterValue {
    /// The "no filter" sentinel: every record passes.
    #[default]
    Any,
    Is(String),
}

impl FilterValue {
    pub fn is(value: impl Into<String>) -> Self {
        Self::Is(value.into())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Is(value) => Some(value),
        }
    }
}

/// Filter selections plus the free-text search string.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilterState {
    values: BTreeMap<String, FilterValue>,
    search: String,
}

impl FilterState {
    /// Every named filter starts at the sentinel.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: names
                .into_iter()
                .map(|name| (name.into(), FilterValue::Any))
                .collect(),
            search: String::new(),
        }
    }

    pub fn value(&self, name: &str) -> &FilterValue {
        const ANY: &FilterValue = &FilterValue::Any;
        self.values.get(name).unwrap_or(ANY)
    }

    pub fn set(&mut self, name: impl Into<String>, value: FilterValue) {
        self.values.insert(name.into(), value);
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: FilterValue) -> Self {
        self.set(name, value);
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.set_search(text);
        self
    }

    /// Filter names currently holding a concrete value.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter_map(|(name, value)| value.selected().map(|v| (name.as_str(), v)))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// True when no filter is active and the search box is blank.
    pub fn is_default(&self) -> bool {
        self.active().next().is_none() && self.search.trim().is_empty()
    }

    /// Put every filter back to the sentinel and clear the search.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            *value = FilterValue::Any;
        }
        self.search.clear();
    }
}

type PredicateFn<R> = dyn Fn(&R, &str) -> bool + Send + Sync;

/// A boolean criterion over one record and the filter's selected value.
pub struct Predicate<R> {
    field: Option<String>,
    test: Arc<PredicateFn<R>>,
}

impl<R> Predicate<R> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&R, &str) -> bool + Send + Sync + 'static,
    {
        Self {
            field: None,
            test: Arc::new(test),
        }
    }

    /// Schema field this predicate reads, if it is field-based.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn test(&self, record: &R, selected: &str) -> bool {
        (self.test)(record, selected)
    }
}

impl<R: Record + 'static> Predicate<R> {
    /// Passes when the field's display form equals the selected value.
    ///
    /// Records without the field never pass.
    pub fn equals(field: impl Into<String>) -> Self {
        let field = field.into();
        let name = field.clone();
        Self {
            field: Some(field),
            test: Arc::new(move |record: &R, selected: &str| {
                record
                    .field(&name)
                    .is_some_and(|value| value.display() == selected)
            }),
        }
    }
}

impl<R> Clone for Predicate<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            test: Arc::clone(&self.test),
        }
    }
}

impl<R> fmt::Debug for Predicate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// Named predicates combined with logical AND.
#[derive(Debug, Clone)]
pub struct PredicateSet<R> {
    predicates: BTreeMap<String, Predicate<R>>,
}

impl<R> Default for PredicateSet<R> {
    fn default() -> Self {
        Self {
            predicates: BTreeMap::new(),
        }
    }
}

impl<R> PredicateSet<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a predicate under `name`.
    ///
    /// Field-based predicates are checked against `schema`; duplicate names
    /// are rejected.
    pub fn register(
        &mut self,
        schema: &Schema,
        name: impl Into<String>,
        predicate: Predicate<R>,
    ) -> Result<()> {
        let name = name.into();
        if self.predicates.contains_key(&name) {
            return Err(EngineError::DuplicateFilter { name });
        }
        if let Some(field) = predicate.field() {
            schema.require(field)?;
        }
        self.predicates.insert(name, predicate);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// A fresh state holding the sentinel for every registered filter.
    pub fn default_state(&self) -> FilterState {
        FilterState::new(self.names())
    }

    /// Fail when `state` names a filter that was never registered.
    pub fn validate(&self, state: &FilterState) -> Result<()> {
        match state.names().find(|name| !self.contains(name)) {
            Some(name) => Err(EngineError::UnknownFilter {
                name: name.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Conjunction of every active predicate.
    ///
    /// Expects a state already checked with [`Self::validate`]; the engine
    /// does so before every query, so an unregistered name never reaches here.
    pub fn matches(&self, record: &R, state: &FilterState) -> bool {
        state.active().all(|(name, selected)| {
            self.predicates
                .get(name)
                .is_none_or(|predicate| predicate.test(record, selected))
        })
    }
}
