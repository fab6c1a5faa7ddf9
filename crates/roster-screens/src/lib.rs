//! Seeded administrative list screens.
//!
//! Each screen pairs a record type with its schema, filters, default sort and
//! export columns. [`seed`] generates a deterministic collection for one.

#![deny(unsafe_code)]

pub mod classes;
pub mod documents;
pub mod error;
pub mod screen;
pub mod tickets;
pub mod users;

pub use classes::ClassRecord;
pub use documents::DocumentRecord;
pub use error::{Result, ScreenError};
pub use screen::{Screen, ScreenDef, Seeded, seed};
pub use tickets::TicketRecord;
pub use users::UserRecord;
