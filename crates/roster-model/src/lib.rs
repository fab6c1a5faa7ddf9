//! Data model shared by the list management crates.
//!
//! Records are immutable once built; the engine only ever borrows them.

#![deny(unsafe_code)]

pub mod error;
pub mod ids;
pub mod record;
pub mod schema;
pub mod table;
pub mod value;

pub use error::{ModelError, Result};
pub use ids::RecordId;
pub use record::{Collection, Record};
pub use schema::{FieldDef, Schema};
pub use table::{CellValue, Row};
pub use value::{DATE_FORMAT, FieldKind, FieldValue};
