use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use roster_core::{ListEngine, ListEvent, ListState};
use roster_model::Record;
use roster_output::{CsvOptions, PrintOptions};
use roster_screens::{
    ClassRecord, DocumentRecord, Screen, ScreenDef, TicketRecord, UserRecord, seed,
};

use crate::cli::{ExportArgs, ListArgs, QueryArgs, ScreensArgs};
use crate::summary::{ScreenSummary, print_page, print_screens};

pub fn run_screens(args: &ScreensArgs) -> Result<()> {
    let summaries = Screen::ALL
        .into_iter()
        .map(|screen| match screen {
            Screen::Classes => describe::<ClassRecord>(args.count),
            Screen::Users => describe::<UserRecord>(args.count),
            Screen::Documents => describe::<DocumentRecord>(args.count),
            Screen::Tickets => describe::<TicketRecord>(args.count),
        })
        .collect::<Result<Vec<_>>>()?;
    print_screens(&summaries);
    Ok(())
}

pub fn run_list(args: &ListArgs) -> Result<()> {
    match args.query.screen {
        Screen::Classes => list::<ClassRecord>(&args.query),
        Screen::Users => list::<UserRecord>(&args.query),
        Screen::Documents => list::<DocumentRecord>(&args.query),
        Screen::Tickets => list::<TicketRecord>(&args.query),
    }
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    match args.query.screen {
        Screen::Classes => export::<ClassRecord>(args),
        Screen::Users => export::<UserRecord>(args),
        Screen::Documents => export::<DocumentRecord>(args),
        Screen::Tickets => export::<TicketRecord>(args),
    }
}

fn describe<S: ScreenDef>(count: usize) -> Result<ScreenSummary> {
    let seeded = seed::<S>(count).with_context(|| format!("seed {}", S::SCREEN))?;
    let engine = &seeded.engine;
    let sort = engine.initial_state().sort;
    Ok(ScreenSummary {
        screen: S::SCREEN,
        records: engine.collection().len(),
        filters: engine
            .query()
            .predicates()
            .names()
            .map(str::to_string)
            .collect(),
        sortable: engine
            .schema()
            .fields()
            .iter()
            .map(|field| field.name.clone())
            .collect(),
        default_sort: format!("{} {}", sort.key, sort.direction.as_str()),
    })
}

fn list<S: ScreenDef>(query: &QueryArgs) -> Result<()> {
    let span = info_span!("list", screen = %S::SCREEN);
    let _guard = span.enter();
    let seeded = seed::<S>(query.count).with_context(|| format!("seed {}", S::SCREEN))?;
    let state = resolve_state(&seeded.engine, query)?;
    let view = seeded.engine.view(&state).context("compute view")?;
    print_page(S::SCREEN, seeded.engine.schema(), &state, &view);
    save_state(query, &state)
}

fn export<S: ScreenDef>(args: &ExportArgs) -> Result<()> {
    let span = info_span!("export", screen = %S::SCREEN);
    let _guard = span.enter();
    let query = &args.query;
    let seeded = seed::<S>(query.count).with_context(|| format!("seed {}", S::SCREEN))?;
    let state = resolve_state(&seeded.engine, query)?;
    let snapshot = seeded.engine.snapshot(&state).context("build export snapshot")?;

    let format = args.format;
    let csv = CsvOptions::default().with_byte_order_mark(args.bom);
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| S::SCREEN.title().to_string());
    let mut print = PrintOptions::new(title)
        .with_generated_at(chrono::Local::now().format("%Y-%m-%d %H:%M").to_string())
        .with_auto_print(args.auto_print);
    if let Some(subtitle) = describe_query(&state) {
        print = print.with_subtitle(subtitle);
    }
    let rendered = format.render(&snapshot, &seeded.layout, &csv, &print)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format.file_name(S::SCREEN.name())));
    if output.as_os_str() == "-" {
        print!("{rendered}");
    } else {
        fs::write(&output, &rendered)
            .with_context(|| format!("write {}", output.display()))?;
        println!("Wrote {} rows to {}", snapshot.len(), output.display());
    }
    info!(
        rows = snapshot.len(),
        format = %format,
        mime = format.mime_type(),
        "export written"
    );
    save_state(query, &state)
}

/// Saved state, then the query flags, then the replayed event file.
fn resolve_state<R: Record>(engine: &ListEngine<R>, query: &QueryArgs) -> Result<ListState> {
    let start = match &query.state {
        Some(path) => read_json::<ListState>(path)?,
        None => engine.initial_state(),
    };
    let plan = query.plan()?;
    let mut state = engine
        .reduce_all(&start, plan.events())
        .context("apply query flags")?;
    if let Some(path) = &query.events {
        let events = read_json::<Vec<ListEvent>>(path)?;
        for event in events {
            match engine.reduce(&state, event.clone()) {
                Ok(next) => state = next,
                Err(error) => warn!(%error, ?event, "event rejected"),
            }
        }
    }
    Ok(state)
}

fn describe_query(state: &ListState) -> Option<String> {
    let mut parts: Vec<String> = state
        .filters
        .active()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect();
    let search = state.filters.search().trim();
    if !search.is_empty() {
        parts.push(format!("search: \"{search}\""));
    }
    (!parts.is_empty()).then(|| parts.join(" | "))
}

fn save_state(query: &QueryArgs, state: &ListState) -> Result<()> {
    let Some(path) = &query.save_state else {
        return Ok(());
    };
    let json = serde_json::to_string_pretty(state).context("serialize list state")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "list state saved");
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}
