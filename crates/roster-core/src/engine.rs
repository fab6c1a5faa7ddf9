//! The list engine: one instance per screen.
//!
//! [`ListEngine::reduce`] is a pure `(state, event) -> state` transition and
//! [`ListEngine::view`] derives everything the rendering layer paints. Both
//! recompute the filtered view from the full collection each time.

use roster_model::{Collection, Record, RecordId, Schema};
use tracing::{debug, trace};

use crate::error::{EngineError, Result};
use crate::filter::{Predicate, PredicateSet};
use crate::page::{DEFAULT_PAGE_SIZE, PageState, paginate};
use crate::query::{FilteredView, QueryEngine};
use crate::search::TextSearch;
use crate::snapshot::ExportSnapshot;
use crate::sort::SortState;
use crate::state::{ListEvent, ListState};

/// Output for the rendering layer, recomputed after every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a, R> {
    pub rows: Vec<&'a R>,
    pub total_filtered: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub window: Vec<usize>,
    /// 1-based index of the first visible row, 0 when empty.
    pub first_row: usize,
    /// 1-based index of the last visible row, 0 when empty.
    pub last_row: usize,
    /// Size of the selection set, including rows hidden by filters.
    pub selected_count: usize,
    /// Selected rows that are part of the filtered view.
    pub visible_selected: usize,
    /// Header checkbox state for the current page.
    pub page_all_selected: bool,
}

#[derive(Debug, Clone)]
pub struct ListEngine<R> {
    query: QueryEngine<R>,
    collection: Collection<R>,
    default_sort: SortState,
    page_size: usize,
}

impl<R: Record> ListEngine<R> {
    pub fn builder(schema: Schema, collection: Collection<R>) -> ListEngineBuilder<R> {
        ListEngineBuilder::new(schema, collection)
    }

    pub fn schema(&self) -> &Schema {
        self.query.schema()
    }

    pub fn query(&self) -> &QueryEngine<R> {
        &self.query
    }

    pub fn collection(&self) -> &Collection<R> {
        &self.collection
    }

    /// Sentinel filters, default sort, first page, nothing selected.
    pub fn initial_state(&self) -> ListState {
        ListState {
            filters: self.query.predicates().default_state(),
            sort: self.default_sort.clone(),
            page: PageState::new(self.page_size).unwrap_or_default(),
            selection: Default::default(),
        }
    }

    /// Apply one event.
    ///
    /// Changes to filters, search, sort or page size return to page 1; page
    /// navigation is clamped to the pages that exist. A state naming an
    /// unregistered filter is rejected before the event is looked at.
    pub fn reduce(&self, state: &ListState, event: ListEvent) -> Result<ListState> {
        trace!(?event, "reducing list event");
        self.query.predicates().validate(&state.filters)?;
        let reshapes = event.reshapes_view();
        let mut next = state.clone();
        match event {
            ListEvent::SetFilter { name, value } => {
                if !self.query.predicates().contains(&name) {
                    return Err(EngineError::UnknownFilter { name });
                }
                next.filters.set(name, value);
            }
            ListEvent::SetSearch { text } => next.filters.set_search(text),
            ListEvent::ResetFilters => next.filters.reset(),
            ListEvent::SortBy { key } => {
                self.require_sort_key(&key)?;
                next.sort.toggle(&key);
            }
            ListEvent::SetSort { sort } => {
                self.require_sort_key(&sort.key)?;
                next.sort = sort;
            }
            ListEvent::GoToPage { page } => next.page = next.page.with_page(page),
            ListEvent::NextPage => {
                next.page = next.page.with_page(next.page.current_page().saturating_add(1));
            }
            ListEvent::PreviousPage => {
                next.page = next.page.with_page(next.page.current_page().saturating_sub(1));
            }
            ListEvent::SetPageSize { size } => next.page = PageState::new(size)?,
            ListEvent::ToggleRow { id } => {
                next.selection.toggle(&id);
            }
            ListEvent::TogglePage => {
                let view = self.sorted_view(&next)?;
                let page = paginate(view.rows(), &next.page);
                let ids: Vec<RecordId> = page.rows.iter().map(|row| row.id().clone()).collect();
                next.selection.toggle_all_on_page(&ids);
            }
            ListEvent::ToggleAllFiltered => {
                let view = self.query.filter(&self.collection, &next.filters);
                next.selection.toggle_all(view.rows());
            }
            ListEvent::ClearSelection => next.selection.clear(),
        }
        if reshapes {
            next.page = next.page.first();
        }
        let filtered = self.query.filter(&self.collection, &next.filters).len();
        next.page = next.page.clamped(filtered);
        Ok(next)
    }

    /// Apply events in order, stopping at the first rejected one.
    pub fn reduce_all<I>(&self, state: &ListState, events: I) -> Result<ListState>
    where
        I: IntoIterator<Item = ListEvent>,
    {
        events
            .into_iter()
            .try_fold(state.clone(), |state, event| self.reduce(&state, event))
    }

    pub fn view(&self, state: &ListState) -> Result<ListView<'_, R>> {
        let view = self.sorted_view(state)?;
        let page = paginate(view.rows(), &state.page);
        let page_all_selected = state
            .selection
            .all_selected(page.rows.iter().map(|row| row.id()));
        let visible_selected = state.selection.visible_count(view.rows());
        debug!(
            total_filtered = view.len(),
            page = page.current_page,
            total_pages = page.total_pages,
            selected = state.selection.len(),
            "list view computed"
        );
        Ok(ListView {
            total_filtered: page.total_rows,
            total_pages: page.total_pages,
            current_page: page.current_page,
            window: page.window,
            first_row: page.first_row,
            last_row: page.last_row,
            selected_count: state.selection.len(),
            visible_selected,
            page_all_selected,
            rows: page.rows,
        })
    }

    /// The full filtered and sorted view, ignoring pagination.
    ///
    /// Computed fresh on every call; the state is only read.
    pub fn snapshot(&self, state: &ListState) -> Result<ExportSnapshot<'_, R>> {
        let view = self.sorted_view(state)?;
        debug!(rows = view.len(), sort = %state.sort.key, "export snapshot built");
        Ok(ExportSnapshot::new(view.into_rows()))
    }

    fn sorted_view(&self, state: &ListState) -> Result<FilteredView<'_, R>> {
        self.query.predicates().validate(&state.filters)?;
        self.query.run(&self.collection, &state.filters, &state.sort)
    }

    fn require_sort_key(&self, key: &str) -> Result<()> {
        if self.schema().contains(key) {
            Ok(())
        } else {
            Err(EngineError::UnknownSortKey {
                key: key.to_string(),
            })
        }
    }
}

/// Step-by-step configuration of a [`ListEngine`].
///
/// Every name is checked against the schema as it is added.
pub struct ListEngineBuilder<R> {
    schema: Schema,
    collection: Collection<R>,
    predicates: PredicateSet<R>,
    search: Option<TextSearch>,
    default_sort: Option<SortState>,
    page_size: usize,
}

impl<R: Record> ListEngineBuilder<R> {
    pub fn new(schema: Schema, collection: Collection<R>) -> Self {
        Self {
            schema,
            collection,
            predicates: PredicateSet::new(),
            search: None,
            default_sort: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn filter(mut self, name: impl Into<String>, predicate: Predicate<R>) -> Result<Self> {
        self.predicates.register(&self.schema, name, predicate)?;
        Ok(self)
    }

    /// Search over these fields instead of the schema's searchable ones.
    pub fn search<I, S>(mut self, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search = Some(TextSearch::new(&self.schema, fields)?);
        Ok(self)
    }

    pub fn default_sort(mut self, sort: SortState) -> Result<Self> {
        if !self.schema.contains(&sort.key) {
            return Err(EngineError::UnknownSortKey { key: sort.key });
        }
        self.default_sort = Some(sort);
        Ok(self)
    }

    pub fn page_size(mut self, size: usize) -> Result<Self> {
        self.page_size = PageState::new(size)?.page_size();
        Ok(self)
    }

    /// Finish; without an explicit default sort the first schema field is
    /// used ascending.
    pub fn build(self) -> Result<ListEngine<R>> {
        let default_sort = match self.default_sort {
            Some(sort) => sort,
            None => self
                .schema
                .fields()
                .first()
                .map(|field| SortState::new(field.name.clone()))
                .ok_or_else(|| EngineError::UnknownSortKey { key: String::new() })?,
        };
        let search = self
            .search
            .unwrap_or_else(|| TextSearch::from_schema(&self.schema));
        debug!(
            records = self.collection.len(),
            filters = self.predicates.len(),
            search_fields = search.fields().len(),
            "list engine built"
        );
        Ok(ListEngine {
            query: QueryEngine::new(self.schema, self.predicates, search),
            collection: self.collection,
            default_sort,
            page_size: self.page_size,
        })
    }
}

impl<R: Record + 'static> ListEngineBuilder<R> {
    /// Register an equality filter named after the field it reads.
    pub fn field_filter(self, field: &str) -> Result<Self> {
        self.filter(field, Predicate::equals(field))
    }
}
