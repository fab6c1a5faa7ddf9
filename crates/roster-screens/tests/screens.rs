use insta::assert_snapshot;
use roster_core::{FilterValue, ListEvent};
use roster_model::Record;
use roster_output::to_csv;
use roster_screens::{
    ClassRecord, DocumentRecord, Screen, ScreenDef, ScreenError, TicketRecord, UserRecord, seed,
};

fn header<S: ScreenDef>() -> String {
    let seeded = seed::<S>(3).unwrap();
    let state = seeded.engine.initial_state();
    let snapshot = seeded.engine.snapshot(&state).unwrap();
    let csv = to_csv(&snapshot, &seeded.layout).unwrap();
    csv.lines().next().unwrap_or_default().to_string()
}

#[test]
fn generation_is_deterministic() {
    let first = roster_seed::generate::<TicketRecord>(50).unwrap();
    let second = roster_seed::generate::<TicketRecord>(50).unwrap();
    assert_eq!(first.records(), second.records());

    let first = roster_seed::generate::<UserRecord>(50).unwrap();
    let second = roster_seed::generate::<UserRecord>(50).unwrap();
    assert_eq!(first.records(), second.records());
}

#[test]
fn screen_names_parse() {
    assert_eq!("Tickets".parse::<Screen>().unwrap(), Screen::Tickets);
    assert_eq!(" users ".parse::<Screen>().unwrap(), Screen::Users);
    assert!(matches!(
        "grades".parse::<Screen>(),
        Err(ScreenError::UnknownScreen(name)) if name == "grades"
    ));
    for screen in Screen::ALL {
        assert_eq!(screen.to_string().parse::<Screen>().unwrap(), screen);
    }
}

#[test]
fn every_screen_builds() {
    assert_eq!(seed::<ClassRecord>(40).unwrap().engine.collection().len(), 40);
    assert_eq!(seed::<UserRecord>(40).unwrap().engine.collection().len(), 40);
    assert_eq!(seed::<DocumentRecord>(40).unwrap().engine.collection().len(), 40);
    assert_eq!(seed::<TicketRecord>(40).unwrap().engine.collection().len(), 40);
}

#[test]
fn class_status_filter_only_keeps_matches() {
    let seeded = seed::<ClassRecord>(60).unwrap();
    let engine = &seeded.engine;
    let state = engine
        .reduce(
            &engine.initial_state(),
            ListEvent::filter("status", FilterValue::is("archived")),
        )
        .unwrap();
    let snapshot = engine.snapshot(&state).unwrap();
    assert!(!snapshot.is_empty());
    assert!(
        snapshot
            .iter()
            .all(|class| class.status.as_str() == "archived")
    );
}

#[test]
fn class_capacity_filter_splits_the_collection() {
    let seeded = seed::<ClassRecord>(60).unwrap();
    let engine = &seeded.engine;
    let count = |value: &str| {
        let state = engine
            .reduce(
                &engine.initial_state(),
                ListEvent::filter("capacity", FilterValue::is(value)),
            )
            .unwrap();
        engine.view(&state).unwrap().total_filtered
    };
    assert_eq!(count("full") + count("open"), 60);
    assert!(count("full") > 0);
}

#[test]
fn users_never_logged_in_sort_last() {
    let seeded = seed::<UserRecord>(30).unwrap();
    let engine = &seeded.engine;
    let state = engine
        .reduce_all(
            &engine.initial_state(),
            [
                ListEvent::sort_by("last_login"),
                ListEvent::SetPageSize { size: 30 },
            ],
        )
        .unwrap();
    let view = engine.view(&state).unwrap();
    let missing = view
        .rows
        .iter()
        .skip_while(|user| user.last_login.is_some())
        .collect::<Vec<_>>();
    assert!(!missing.is_empty());
    assert!(missing.iter().all(|user| user.last_login.is_none()));
}

#[test]
fn tickets_default_to_highest_priority_first() {
    let seeded = seed::<TicketRecord>(25).unwrap();
    let engine = &seeded.engine;
    let view = engine.view(&engine.initial_state()).unwrap();
    let ranks: Vec<u8> = view.rows.iter().map(|ticket| ticket.priority.rank()).collect();
    assert_eq!(ranks.first(), Some(&4));
    assert!(ranks.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn unassigned_tickets_filter_and_search() {
    let seeded = seed::<TicketRecord>(40).unwrap();
    let engine = &seeded.engine;
    let state = engine
        .reduce_all(
            &engine.initial_state(),
            [
                ListEvent::filter("assignee", FilterValue::is("unassigned")),
                ListEvent::search("PRINTER"),
            ],
        )
        .unwrap();
    let snapshot = engine.snapshot(&state).unwrap();
    assert!(!snapshot.is_empty());
    for ticket in snapshot.iter() {
        assert!(ticket.assignee.is_none());
        assert_eq!(ticket.subject, "Printer jam");
        assert!(ticket.field("assignee").is_none());
    }
}

#[test]
fn documents_page_by_twenty() {
    let seeded = seed::<DocumentRecord>(45).unwrap();
    let engine = &seeded.engine;
    let state = engine
        .reduce(&engine.initial_state(), ListEvent::go_to(9))
        .unwrap();
    let view = engine.view(&state).unwrap();
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.current_page, 3);
    assert_eq!((view.first_row, view.last_row), (41, 45));
}

#[test]
fn export_headers() {
    assert_snapshot!(
        header::<ClassRecord>(),
        @"Class ID,Class,Grade,Subject,Homeroom Teacher,Students,Average Score,Status"
    );
    assert_snapshot!(
        header::<UserRecord>(),
        @"User ID,Full Name,Email,Role,Department,Status,Last Login"
    );
    assert_snapshot!(
        header::<DocumentRecord>(),
        @"Document ID,Title,Category,Type,Owner,Size (KB),Version,Visibility,Updated"
    );
    assert_snapshot!(
        header::<TicketRecord>(),
        @"Ticket,Subject,Requester,Priority,Status,Opened,Assignee,SLA"
    );
}
