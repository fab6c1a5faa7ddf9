//! Index-derived field values.
//!
//! Every helper is a pure function of the record index and small constants,
//! so a generated collection is reproducible without a random source.

use chrono::{Days, NaiveDate};
use roster_model::{RecordId, Result};

use crate::table::slot;

/// `(index * stride + offset) % modulus`; a zero modulus is treated as 1.
pub fn cycle(index: usize, stride: usize, offset: usize, modulus: usize) -> usize {
    slot(index, stride, offset, modulus)
}

/// A value in `min..=max` derived from the index.
pub fn ranged(index: usize, stride: usize, offset: usize, min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let span = high.abs_diff(low).saturating_add(1);
    let span = usize::try_from(span).unwrap_or(usize::MAX);
    let step = slot(index, stride, offset, span);
    low.saturating_add(i64::try_from(step).unwrap_or(i64::MAX))
}

/// `base` plus an index-derived number of days below `span_days`.
pub fn date_offset(base: NaiveDate, index: usize, stride: usize, span_days: usize) -> NaiveDate {
    let days = slot(index, stride, 0, span_days) as u64;
    base.checked_add_days(Days::new(days)).unwrap_or(base)
}

/// Every `every`-th record (by index) gets `None`; the rest get `value`.
pub fn sparse<T>(index: usize, every: usize, value: T) -> Option<T> {
    if every > 0 && index % every == every - 1 {
        None
    } else {
        Some(value)
    }
}

/// `PREFIX-0001` style identifier for the record at `index`.
pub fn record_id(prefix: &str, index: usize) -> Result<RecordId> {
    RecordId::new(format!("{prefix}-{:04}", index + 1))
}
