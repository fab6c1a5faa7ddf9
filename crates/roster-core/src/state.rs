//! Screen state and the events that transition it.

use roster_model::RecordId;

use crate::filter::{FilterState, FilterValue};
use crate::page::PageState;
use crate::selection::Selection;
use crate::sort::SortState;

/// Everything the operator can change on a list screen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListState {
    pub filters: FilterState,
    pub sort: SortState,
    pub page: PageState,
    pub selection: Selection,
}

/// A discrete operator action, already decoded from the UI.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListEvent {
    SetFilter { name: String, value: FilterValue },
    SetSearch { text: String },
    ResetFilters,
    /// Header click: same key flips direction, new key sorts ascending.
    SortBy { key: String },
    SetSort { sort: SortState },
    GoToPage { page: usize },
    NextPage,
    PreviousPage,
    SetPageSize { size: usize },
    ToggleRow { id: RecordId },
    /// Select or deselect every row on the current page.
    TogglePage,
    /// Select or deselect every row of the filtered view.
    ToggleAllFiltered,
    ClearSelection,
}

impl ListEvent {
    pub fn filter(name: impl Into<String>, value: FilterValue) -> Self {
        Self::SetFilter {
            name: name.into(),
            value,
        }
    }

    pub fn search(text: impl Into<String>) -> Self {
        Self::SetSearch { text: text.into() }
    }

    pub fn sort_by(key: impl Into<String>) -> Self {
        Self::SortBy { key: key.into() }
    }

    pub fn go_to(page: usize) -> Self {
        Self::GoToPage { page }
    }

    pub fn toggle(id: RecordId) -> Self {
        Self::ToggleRow { id }
    }

    /// Whether the event changes which rows are in the view or their order.
    pub fn reshapes_view(&self) -> bool {
        matches!(
            self,
            Self::SetFilter { .. }
                | Self::SetSearch { .. }
                | Self::ResetFilters
                | Self::SortBy { .. }
                | Self::SetSort { .. }
                | Self::SetPageSize { .. }
        )
    }
}
