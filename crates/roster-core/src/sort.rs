//! Sort state and the comparator built from it.
//!
//! Every comparator falls back to the record identifier (always ascending)
//! when the primary key ties, so repeated sorts never reorder equal rows.

use std::cmp::Ordering;
use std::fmt;

use roster_model::{FieldKind, FieldValue, Record, Schema};

use crate::error::{EngineError, Result};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Header-click semantics: the same key flips direction, a new key
    /// starts ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key.to_string();
            self.direction = SortDirection::Asc;
        }
    }
}

/// Total order over records for one sort key and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    key: String,
    kind: FieldKind,
    direction: SortDirection,
}

/// Build the comparator for `state`, failing when the key is not in `schema`.
pub fn build_comparator(schema: &Schema, state: &SortState) -> Result<Comparator> {
    let field = schema
        .field(&state.key)
        .ok_or_else(|| EngineError::UnknownSortKey {
            key: state.key.clone(),
        })?;
    Ok(Comparator {
        key: field.name.clone(),
        kind: field.kind,
        direction: state.direction,
    })
}

impl Comparator {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        let primary = compare_fields(a.field(&self.key), b.field(&self.key));
        self.direction
            .apply(primary)
            .then_with(|| a.id().cmp(b.id()))
    }

    /// Stable in-place sort.
    pub fn sort<R: Record>(&self, rows: &mut [R]) {
        rows.sort_by(|a, b| self.compare(a, b));
    }
}

/// Ascending order of two possibly absent values; absent sorts last.
pub fn compare_fields(a: Option<FieldValue<'_>>, b: Option<FieldValue<'_>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_values(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn compare_values(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
    match (a, b) {
        // Adding 0.0 folds -0.0 into 0.0, so equal display forms compare equal.
        (FieldValue::Number(a), FieldValue::Number(b)) => (a + 0.0).total_cmp(&(b + 0.0)),
        (FieldValue::Text(a), FieldValue::Text(b)) => collate(a, b),
        (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(&b),
        (FieldValue::Flag(a), FieldValue::Flag(b)) => a.cmp(&b),
        (a, b) => kind_rank(a.kind()).cmp(&kind_rank(b.kind())),
    }
}

/// Case-folded ordering with the raw text as tie-break.
///
/// "alpha" and "Alpha" sort next to each other rather than split by case,
/// and the result is still a total order.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a).cmp(fold(b)).then_with(|| a.cmp(b))
}

fn fold(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().flat_map(char::to_lowercase)
}

fn kind_rank(kind: FieldKind) -> u8 {
    match kind {
        FieldKind::Number => 0,
        FieldKind::Date => 1,
        FieldKind::Text => 2,
        FieldKind::Flag => 3,
    }
}

#[cfg(test)]
mod tests {
    use roster_model::{CellValue, FieldDef, RecordId, Row};

    use super::*;

    fn schema() -> Schema {
        Schema::new(vec![FieldDef::text("name"), FieldDef::number("score")]).unwrap()
    }

    fn row(id: &str, name: &str, score: f64) -> Row {
        Row::new(RecordId::new(id).unwrap())
            .with("name", name)
            .with("score", score)
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|row| row.id.as_str()).collect()
    }

    #[test]
    fn toggle_flips_same_key_and_resets_new_key() {
        let mut state = SortState::new("name");
        state.toggle("name");
        assert_eq!(state.direction, SortDirection::Desc);
        state.toggle("score");
        assert_eq!(state, SortState::new("score"));
    }

    #[test]
    fn unknown_key_fails() {
        let err = build_comparator(&schema(), &SortState::new("age")).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownSortKey {
                key: "age".to_string()
            }
        );
    }

    #[test]
    fn numbers_compare_numerically() {
        let mut rows = vec![row("a", "x", 10.0), row("b", "y", 9.0), row("c", "z", 100.0)];
        build_comparator(&schema(), &SortState::new("score"))
            .unwrap()
            .sort(&mut rows);
        assert_eq!(ids(&rows), vec!["b", "a", "c"]);
    }

    #[test]
    fn text_ignores_case_first() {
        let mut rows = vec![row("1", "beta", 0.0), row("2", "Alpha", 0.0), row("3", "alpha", 0.0)];
        build_comparator(&schema(), &SortState::new("name"))
            .unwrap()
            .sort(&mut rows);
        assert_eq!(ids(&rows), vec!["2", "3", "1"]);
    }

    #[test]
    fn ties_break_by_id_in_both_directions() {
        let mut rows = vec![row("c", "x", 1.0), row("a", "x", 1.0), row("b", "x", 2.0)];
        let desc = SortState::new("score").with_direction(SortDirection::Desc);
        build_comparator(&schema(), &desc).unwrap().sort(&mut rows);
        assert_eq!(ids(&rows), vec!["b", "a", "c"]);
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        let mut rows = vec![
            Row::new(RecordId::new("b").unwrap()).with("score", CellValue::Number(-0.0)),
            row("a", "x", 0.0),
            row("c", "x", -1.0),
        ];
        build_comparator(&schema(), &SortState::new("score"))
            .unwrap()
            .sort(&mut rows);
        assert_eq!(ids(&rows), vec!["c", "a", "b"]);
    }

    #[test]
    fn absent_values_sort_last_ascending() {
        let bare = Row::new(RecordId::new("0").unwrap());
        let mut rows = vec![bare, row("1", "x", 5.0)];
        build_comparator(&schema(), &SortState::new("score"))
            .unwrap()
            .sort(&mut rows);
        assert_eq!(ids(&rows), vec!["1", "0"]);
    }
}
