//! Translate command line query flags into list events.

use roster_core::{FilterValue, ListEvent, SortDirection, SortState};
use roster_model::RecordId;

/// Filter flag value; `any` or `*` clears the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterArg {
    pub name: String,
    pub value: FilterValue,
}

/// Parse `name=value`.
pub fn parse_filter(raw: &str) -> Result<FilterArg, String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing filter name in `{raw}`"));
    }
    let value = match value.trim() {
        "" | "*" => FilterValue::Any,
        v if v.eq_ignore_ascii_case("any") => FilterValue::Any,
        v => FilterValue::is(v),
    };
    Ok(FilterArg {
        name: name.to_string(),
        value,
    })
}

/// Parse `key`, `key:asc` or `key:desc`.
pub fn parse_sort(raw: &str) -> Result<SortState, String> {
    let (key, direction) = match raw.split_once(':') {
        Some((key, direction)) => (key, Some(direction)),
        None => (raw, None),
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing sort key in `{raw}`"));
    }
    let direction = match direction.map(|d| d.trim().to_ascii_lowercase()) {
        None => SortDirection::Asc,
        Some(d) if d == "asc" => SortDirection::Asc,
        Some(d) if d == "desc" => SortDirection::Desc,
        Some(d) => return Err(format!("sort direction must be asc or desc, got `{d}`")),
    };
    Ok(SortState::new(key).with_direction(direction))
}

/// Query flags common to every command that reads a screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPlan {
    pub filters: Vec<FilterArg>,
    pub search: Option<String>,
    pub sort: Option<SortState>,
    pub page_size: Option<usize>,
    pub page: Option<usize>,
    pub select: Vec<RecordId>,
    pub select_all: bool,
}

impl QueryPlan {
    /// Events in the order an operator would issue them: page size and
    /// view-shaping changes first, selection next, page navigation last.
    pub fn events(&self) -> Vec<ListEvent> {
        let mut events = Vec::new();
        if let Some(size) = self.page_size {
            events.push(ListEvent::SetPageSize { size });
        }
        events.extend(
            self.filters
                .iter()
                .map(|filter| ListEvent::filter(filter.name.clone(), filter.value.clone())),
        );
        if let Some(text) = &self.search {
            events.push(ListEvent::search(text.clone()));
        }
        if let Some(sort) = &self.sort {
            events.push(ListEvent::SetSort { sort: sort.clone() });
        }
        if self.select_all {
            events.push(ListEvent::ToggleAllFiltered);
        }
        events.extend(self.select.iter().cloned().map(ListEvent::toggle));
        if let Some(page) = self.page {
            events.push(ListEvent::go_to(page));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_any_spellings() {
        for raw in ["status=", "status=*", "status=ANY"] {
            assert_eq!(parse_filter(raw).unwrap().value, FilterValue::Any);
        }
        assert_eq!(
            parse_filter(" role = teacher ").unwrap(),
            FilterArg {
                name: "role".to_string(),
                value: FilterValue::is("teacher"),
            }
        );
        assert!(parse_filter("role").is_err());
        assert!(parse_filter("=teacher").is_err());
    }

    #[test]
    fn sort_direction_suffix() {
        assert_eq!(parse_sort("name").unwrap(), SortState::new("name"));
        assert_eq!(
            parse_sort("opened:DESC").unwrap(),
            SortState::new("opened").with_direction(SortDirection::Desc)
        );
        assert!(parse_sort("opened:up").is_err());
        assert!(parse_sort(":desc").is_err());
    }
}
