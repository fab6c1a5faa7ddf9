//! Screen registry and the contract each screen implements.

use std::fmt;
use std::str::FromStr;

use roster_core::ListEngine;
use roster_model::{Collection, Schema};
use roster_output::ExportLayout;
use roster_seed::Generate;
use tracing::info;

use crate::error::{Result, ScreenError};

/// The administrative list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Screen {
    Classes,
    Users,
    Documents,
    Tickets,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Classes,
        Screen::Users,
        Screen::Documents,
        Screen::Tickets,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classes => "classes",
            Self::Users => "users",
            Self::Documents => "documents",
            Self::Tickets => "tickets",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Classes => "Classes",
            Self::Users => "User Accounts",
            Self::Documents => "Documents",
            Self::Tickets => "Support Tickets",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = ScreenError;

    fn from_str(value: &str) -> Result<Self> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|screen| screen.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScreenError::UnknownScreen(value.to_string()))
    }
}

/// What a record type provides to become a list screen.
pub trait ScreenDef: Generate + 'static {
    const SCREEN: Screen;

    fn schema() -> Result<Schema>;

    /// Filters, search fields, default sort and page size for the screen.
    fn engine(collection: Collection<Self>) -> Result<ListEngine<Self>>;

    /// Columns of the CSV and print exports.
    fn export_layout(schema: &Schema) -> Result<ExportLayout<Self>>;
}

/// A screen wired up over a generated collection.
pub struct Seeded<S> {
    pub engine: ListEngine<S>,
    pub layout: ExportLayout<S>,
}

impl<S> fmt::Debug for Seeded<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seeded")
            .field("columns", &self.layout.len())
            .finish_non_exhaustive()
    }
}

/// Generate `count` records and build the screen's engine and export layout.
pub fn seed<S: ScreenDef>(count: usize) -> Result<Seeded<S>> {
    let collection = roster_seed::generate::<S>(count)?;
    let engine = S::engine(collection)?;
    let layout = S::export_layout(engine.schema())?;
    info!(screen = %S::SCREEN, records = count, "screen seeded");
    Ok(Seeded { engine, layout })
}
