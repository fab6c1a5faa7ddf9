use roster_core::{
    EngineError, FilterValue, ListEngine, ListEvent, ListState, SortDirection, SortState,
};
use roster_model::{Collection, FieldDef, RecordId, Row, Schema};

const STATUSES: [&str; 3] = ["active", "pending", "archived"];

fn id(n: usize) -> RecordId {
    RecordId::new(format!("r{n:02}")).unwrap()
}

fn schema() -> Schema {
    Schema::new(vec![
        FieldDef::text("name").with_label("Name").searchable(),
        FieldDef::text("status").with_label("Status"),
        FieldDef::number("score").with_label("Score"),
        FieldDef::text("teacher").with_label("Teacher").searchable(),
    ])
    .unwrap()
}

/// Twelve records, four per status, scores all distinct.
fn twelve() -> Collection<Row> {
    let rows = (1..=12)
        .map(|n| {
            Row::new(id(n))
                .with("name", format!("Class {n}"))
                .with("status", STATUSES[(n - 1) % 3])
                .with("score", ((n * 37) % 101) as i64)
                .with("teacher", if n % 2 == 0 { "Tran Thi Binh" } else { "Le Van Cuong" })
        })
        .collect();
    Collection::new(rows).unwrap()
}

fn engine(collection: Collection<Row>) -> ListEngine<Row> {
    ListEngine::builder(schema(), collection)
        .field_filter("status")
        .unwrap()
        .default_sort(SortState::new("name"))
        .unwrap()
        .page_size(5)
        .unwrap()
        .build()
        .unwrap()
}

fn ids(rows: &[&Row]) -> Vec<String> {
    rows.iter().map(|row| row.id.to_string()).collect()
}

#[test]
fn status_filter_fits_on_one_page() {
    let engine = engine(twelve());
    let state = engine
        .reduce(
            &engine.initial_state(),
            ListEvent::filter("status", FilterValue::is("pending")),
        )
        .unwrap();
    let view = engine.view(&state).unwrap();
    assert_eq!(view.total_filtered, 4);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.rows.len(), 4);
    assert_eq!(view.window, vec![1]);
}

#[test]
fn numeric_sort_desc_then_asc_is_reversed() {
    let engine = engine(twelve());
    let filtered = engine
        .reduce(
            &engine.initial_state(),
            ListEvent::filter("status", FilterValue::is("active")),
        )
        .unwrap();
    let desc = engine
        .reduce(
            &filtered,
            ListEvent::SetSort {
                sort: SortState::new("score").with_direction(SortDirection::Desc),
            },
        )
        .unwrap();
    let asc = engine.reduce(&desc, ListEvent::sort_by("score")).unwrap();
    assert_eq!(asc.sort.direction, SortDirection::Asc);

    let mut desc_ids = ids(&engine.view(&desc).unwrap().rows);
    let asc_ids = ids(&engine.view(&asc).unwrap().rows);
    desc_ids.reverse();
    assert_eq!(desc_ids, asc_ids);
}

#[test]
fn hidden_selection_survives_filtering_until_cleared() {
    let engine = ListEngine::builder(schema(), twelve())
        .field_filter("status")
        .unwrap()
        .build()
        .unwrap();
    let mut state = engine.initial_state();
    for n in 1..=3 {
        state = engine.reduce(&state, ListEvent::toggle(id(n))).unwrap();
    }
    // r02 is the only one of the three that is "pending".
    let state = engine
        .reduce(&state, ListEvent::filter("status", FilterValue::is("active")))
        .unwrap();
    let state = engine.reduce(&state, ListEvent::search("class")).unwrap();
    let view = engine.view(&state).unwrap();
    assert!(view.rows.iter().all(|row| row.id != id(2)));
    assert_eq!(view.selected_count, 3);
    assert!(state.selection.is_selected(&id(2)));

    let cleared = engine.reduce(&state, ListEvent::ClearSelection).unwrap();
    assert_eq!(engine.view(&cleared).unwrap().selected_count, 0);
}

#[test]
fn filter_change_returns_to_first_page() {
    let engine = engine(twelve());
    let state = engine
        .reduce(&engine.initial_state(), ListEvent::go_to(3))
        .unwrap();
    assert_eq!(state.page.current_page(), 3);
    let state = engine
        .reduce(&state, ListEvent::filter("status", FilterValue::is("archived")))
        .unwrap();
    assert_eq!(state.page.current_page(), 1);
}

#[test]
fn navigation_is_clamped() {
    let engine = engine(twelve());
    let state = engine
        .reduce(&engine.initial_state(), ListEvent::go_to(99))
        .unwrap();
    assert_eq!(state.page.current_page(), 3);
    let state = engine.reduce(&state, ListEvent::NextPage).unwrap();
    assert_eq!(state.page.current_page(), 3);
    let view = engine.view(&state).unwrap();
    assert_eq!(view.rows.len(), 2);
    assert_eq!((view.first_row, view.last_row), (11, 12));

    let state = engine.reduce(&state, ListEvent::go_to(0)).unwrap();
    let state = engine.reduce(&state, ListEvent::PreviousPage).unwrap();
    assert_eq!(state.page.current_page(), 1);
}

#[test]
fn toggle_page_only_touches_current_page() {
    let engine = engine(twelve());
    let state = engine
        .reduce(&engine.initial_state(), ListEvent::go_to(2))
        .unwrap();
    let state = engine.reduce(&state, ListEvent::TogglePage).unwrap();
    let view = engine.view(&state).unwrap();
    assert_eq!(view.selected_count, 5);
    assert!(view.page_all_selected);
    for row in &view.rows {
        assert!(state.selection.is_selected(&row.id));
    }

    let first = engine.reduce(&state, ListEvent::go_to(1)).unwrap();
    assert!(!engine.view(&first).unwrap().page_all_selected);

    let undone = engine.reduce(&state, ListEvent::TogglePage).unwrap();
    assert!(undone.selection.is_empty());
}

#[test]
fn toggle_all_filtered_selects_whole_view() {
    let engine = engine(twelve());
    let state = engine
        .reduce(
            &engine.initial_state(),
            ListEvent::filter("status", FilterValue::is("archived")),
        )
        .unwrap();
    let state = engine.reduce(&state, ListEvent::ToggleAllFiltered).unwrap();
    let view = engine.view(&state).unwrap();
    assert_eq!(view.selected_count, 4);
    assert_eq!(view.visible_selected, 4);
}

#[test]
fn empty_result_degrades_to_one_empty_page() {
    let engine = engine(twelve());
    let state = engine
        .reduce(&engine.initial_state(), ListEvent::search("no such class"))
        .unwrap();
    let view = engine.view(&state).unwrap();
    assert_eq!(view.total_filtered, 0);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert!(view.rows.is_empty());
    assert!(!view.page_all_selected);
    assert!(engine.snapshot(&state).unwrap().is_empty());
}

#[test]
fn search_is_or_across_fields_and_anded_with_filters() {
    let engine = engine(twelve());
    let state = engine
        .reduce_all(
            &engine.initial_state(),
            [
                ListEvent::search("BINH"),
                ListEvent::filter("status", FilterValue::is("pending")),
            ],
        )
        .unwrap();
    let snapshot = engine.snapshot(&state).unwrap();
    let found: Vec<String> = snapshot.iter().map(|row| row.id.to_string()).collect();
    // even n with (n - 1) % 3 == 1: 2, 8
    assert_eq!(found, vec!["r02", "r08"]);
}

#[test]
fn snapshot_ignores_pagination_and_leaves_state_alone() {
    let engine = engine(twelve());
    let state = engine
        .reduce(&engine.initial_state(), ListEvent::go_to(2))
        .unwrap();
    let before = state.clone();
    let snapshot = engine.snapshot(&state).unwrap();
    assert_eq!(snapshot.len(), 12);
    assert_eq!(state, before);
}

#[test]
fn unknown_names_are_rejected() {
    let engine = engine(twelve());
    let state = engine.initial_state();
    assert_eq!(
        engine
            .reduce(&state, ListEvent::filter("room", FilterValue::Any))
            .unwrap_err(),
        EngineError::UnknownFilter {
            name: "room".to_string()
        }
    );
    assert_eq!(
        engine.reduce(&state, ListEvent::sort_by("room")).unwrap_err(),
        EngineError::UnknownSortKey {
            key: "room".to_string()
        }
    );
    assert_eq!(
        engine
            .reduce(&state, ListEvent::SetPageSize { size: 0 })
            .unwrap_err(),
        EngineError::ZeroPageSize
    );
}

#[test]
fn saved_state_with_unknown_filter_is_rejected() {
    let engine = engine(twelve());
    let mut json = serde_json::to_value(engine.initial_state()).expect("serialize state");
    json["filters"]["values"]["stauts"] = serde_json::json!({"kind": "is", "value": "active"});
    let state: ListState = serde_json::from_value(json).expect("deserialize state");
    let unknown = EngineError::UnknownFilter {
        name: "stauts".to_string(),
    };

    assert_eq!(engine.view(&state).unwrap_err(), unknown);
    assert_eq!(engine.snapshot(&state).unwrap_err(), unknown);
    assert_eq!(
        engine.reduce(&state, ListEvent::NextPage).unwrap_err(),
        unknown
    );
}

#[test]
fn builder_fails_fast_on_bad_configuration() {
    assert!(
        ListEngine::builder(schema(), twelve())
            .field_filter("room")
            .is_err()
    );
    assert!(
        ListEngine::builder(schema(), twelve())
            .default_sort(SortState::new("room"))
            .is_err()
    );
    assert!(
        ListEngine::builder(schema(), twelve())
            .search(["room"])
            .is_err()
    );
}

#[test]
fn state_round_trips_through_json() {
    let engine = engine(twelve());
    let state = engine
        .reduce_all(
            &engine.initial_state(),
            [
                ListEvent::filter("status", FilterValue::is("active")),
                ListEvent::toggle(id(4)),
                ListEvent::sort_by("score"),
            ],
        )
        .unwrap();
    let json = serde_json::to_string(&state).expect("serialize state");
    let round: ListState = serde_json::from_str(&json).expect("deserialize state");
    assert_eq!(round, state);

    let raw = r#"{"type":"set_filter","name":"status","value":{"kind":"is","value":"active"}}"#;
    let event: ListEvent = serde_json::from_str(raw).expect("deserialize event");
    assert_eq!(event, ListEvent::filter("status", FilterValue::is("active")));
}
