//! List management engine.
//!
//! Composes named predicates, free-text search, a stable comparator,
//! pagination and a persistent selection set over an in-memory
//! [`roster_model::Collection`]. All operations are synchronous and pure over
//! the collection; the only mutable input is the [`ListState`] the caller
//! threads through [`ListEngine::reduce`].
//!
//! ```
//! use roster_core::{FilterValue, ListEngine, ListEvent, SortState};
//! use roster_model::{Collection, FieldDef, RecordId, Row, Schema};
//!
//! let schema = Schema::new(vec![
//!     FieldDef::text("name").searchable(),
//!     FieldDef::text("status"),
//! ])
//! .unwrap();
//! let rows = (1..=3)
//!     .map(|i| {
//!         Row::new(RecordId::new(format!("r{i}")).unwrap())
//!             .with("name", format!("Class {i}"))
//!             .with("status", if i == 2 { "archived" } else { "active" })
//!     })
//!     .collect();
//! let engine = ListEngine::builder(schema, Collection::new(rows).unwrap())
//!     .field_filter("status")
//!     .unwrap()
//!     .default_sort(SortState::new("name"))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let state = engine.initial_state();
//! let state = engine
//!     .reduce(&state, ListEvent::filter("status", FilterValue::is("active")))
//!     .unwrap();
//! let view = engine.view(&state).unwrap();
//! assert_eq!(view.total_filtered, 2);
//! ```

#![deny(unsafe_code)]

pub mod engine;
pub mod error;
pub mod filter;
pub mod page;
pub mod query;
pub mod search;
pub mod selection;
pub mod snapshot;
pub mod sort;
pub mod state;

pub use engine::{ListEngine, ListEngineBuilder, ListView};
pub use error::{EngineError, Result};
pub use filter::{FilterState, FilterValue, Predicate, PredicateSet};
pub use page::{
    DEFAULT_PAGE_SIZE, PAGE_WINDOW, Page, PageState, page_window, paginate, total_pages,
};
pub use query::{FilteredView, QueryEngine};
pub use search::TextSearch;
pub use selection::Selection;
pub use snapshot::ExportSnapshot;
pub use sort::{Comparator, SortDirection, SortState, build_comparator, collate};
pub use state::{ListEvent, ListState};
