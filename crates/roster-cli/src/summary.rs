use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_core::{ListState, ListView};
use roster_model::{FieldKind, Record, Schema};
use roster_screens::Screen;

/// One line of the `screens` command.
pub struct ScreenSummary {
    pub screen: Screen,
    pub records: usize,
    pub filters: Vec<String>,
    pub sortable: Vec<String>,
    pub default_sort: String,
}

pub fn print_screens(summaries: &[ScreenSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Screen"),
        header_cell("Title"),
        header_cell("Records"),
        header_cell("Filters"),
        header_cell("Sort keys"),
        header_cell("Default sort"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for summary in summaries {
        table.add_row(vec![
            Cell::new(summary.screen.name())
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.screen.title()),
            Cell::new(summary.records),
            Cell::new(summary.filters.join(", ")),
            Cell::new(summary.sortable.join(", ")),
            Cell::new(&summary.default_sort),
        ]);
    }
    println!("{table}");
}

pub fn print_page<R: Record>(
    screen: Screen,
    schema: &Schema,
    state: &ListState,
    view: &ListView<'_, R>,
) {
    println!("{}", screen.title());
    let active: Vec<String> = state
        .filters
        .active()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    if !active.is_empty() {
        println!("Filters: {}", active.join(", "));
    }
    if !state.filters.search().trim().is_empty() {
        println!("Search: {}", state.filters.search().trim());
    }
    println!("Sort: {} {}", state.sort.key, state.sort.direction.as_str());

    if view.rows.is_empty() {
        println!("No matching records.");
        print_selection(view);
        return;
    }

    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(schema.fields().iter().map(|field| {
        let cell = header_cell(&field.label);
        if field.name == state.sort.key {
            cell.fg(Color::Yellow)
        } else {
            cell
        }
    }));
    table.set_header(header);
    apply_table_style(&mut table);
    for (index, field) in schema.fields().iter().enumerate() {
        if field.kind == FieldKind::Number {
            align_column(&mut table, index + 1, CellAlignment::Right);
        }
    }
    for record in &view.rows {
        let marker = if state.selection.is_selected(record.id()) {
            Cell::new("✓")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("")
        };
        let mut row = vec![marker];
        row.extend(schema.fields().iter().map(|field| match record.field(&field.name) {
            Some(value) => Cell::new(value.display()),
            None => Cell::new("-").add_attribute(Attribute::Dim),
        }));
        table.add_row(row);
    }
    println!("{table}");
    println!(
        "Showing {}-{} of {}",
        view.first_row, view.last_row, view.total_filtered
    );
    println!(
        "Page {} of {}: {}",
        view.current_page,
        view.total_pages,
        page_links(&view.window, view.current_page)
    );
    print_selection(view);
}

fn print_selection<R>(view: &ListView<'_, R>) {
    if view.selected_count > 0 {
        println!(
            "Selected: {} ({} in view)",
            view.selected_count, view.visible_selected
        );
    }
}

/// `1 [2] 3` with the current page bracketed.
pub fn page_links(window: &[usize], current: usize) -> String {
    window
        .iter()
        .map(|&page| {
            if page == current {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}
