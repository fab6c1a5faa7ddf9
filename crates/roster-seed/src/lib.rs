//! Deterministic synthetic datasets for seeding list screens.
//!
//! `generate::<R>(n)` called twice yields identical collections: every field
//! is derived from the record index and the static [`SeedTable`]s.

#![deny(unsafe_code)]

pub mod derive;
mod table;

use roster_model::{Collection, Record, Result};
use tracing::debug;

pub use derive::{cycle, date_offset, ranged, record_id, sparse};
pub use table::SeedTable;

/// A record type that can be synthesized from its index alone.
pub trait Generate: Record + Sized {
    fn generate_one(index: usize) -> Result<Self>;
}

/// Build `count` records of type `R`.
pub fn generate<R: Generate>(count: usize) -> Result<Collection<R>> {
    generate_with(count, R::generate_one)
}

/// Build `count` records with `build`, called with indices `0..count` in order.
pub fn generate_with<R, F>(count: usize, build: F) -> Result<Collection<R>>
where
    R: Record,
    F: FnMut(usize) -> Result<R>,
{
    let records = (0..count).map(build).collect::<Result<Vec<R>>>()?;
    debug!(count, "generated synthetic records");
    Collection::new(records)
}
