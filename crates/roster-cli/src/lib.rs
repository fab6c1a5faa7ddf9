//! Library side of the roster command line shell.

pub mod logging;
pub mod query;
