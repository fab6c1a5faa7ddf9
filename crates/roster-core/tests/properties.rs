use proptest::prelude::*;
use roster_core::{
    FilterState, FilterValue, PageState, Predicate, PredicateSet, QueryEngine, Selection,
    SortDirection, SortState, TextSearch, build_comparator, page_window, paginate, total_pages,
};
use roster_model::{FieldDef, Record, RecordId, Row, Schema};

const STATUSES: [&str; 3] = ["open", "closed", "waiting"];

fn schema() -> Schema {
    Schema::new(vec![
        FieldDef::text("status"),
        FieldDef::number("score"),
        FieldDef::text("title").searchable(),
    ])
    .unwrap()
}

fn rows_from(spec: &[(usize, u8)]) -> Vec<Row> {
    spec.iter()
        .enumerate()
        .map(|(index, (status, score))| {
            Row::new(RecordId::new(format!("t{index:03}")).unwrap())
                .with("status", STATUSES[status % STATUSES.len()])
                .with("score", i64::from(*score))
                .with("title", format!("Ticket {index}"))
        })
        .collect()
}

fn query() -> QueryEngine<Row> {
    let schema = schema();
    let mut predicates = PredicateSet::new();
    predicates
        .register(&schema, "status", Predicate::equals("status"))
        .unwrap();
    let search = TextSearch::from_schema(&schema);
    QueryEngine::new(schema, predicates, search)
}

fn score(row: &Row) -> f64 {
    row.field("score").and_then(|v| v.as_number()).unwrap()
}

proptest! {
    #[test]
    fn filtering_never_reorders(
        spec in prop::collection::vec((0usize..3, any::<u8>()), 0..60),
        status in prop::option::of(0usize..3),
        search in prop::option::of("[0-9]{1,2}"),
    ) {
        let rows = rows_from(&spec);
        let mut state = FilterState::new(["status"]);
        if let Some(status) = status {
            state.set("status", FilterValue::is(STATUSES[status]));
        }
        if let Some(search) = search {
            state.set_search(search);
        }
        let view = query().filter(&rows, &state);
        let positions: Vec<usize> = view
            .rows()
            .iter()
            .map(|row| rows.iter().position(|r| r.id == row.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sort_is_stable_total_and_tie_broken_by_id(
        spec in prop::collection::vec((0usize..3, 0u8..8), 0..60),
        desc in any::<bool>(),
    ) {
        let rows = rows_from(&spec);
        let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
        let sort = SortState::new("score").with_direction(direction);
        let comparator = build_comparator(&schema(), &sort).unwrap();

        let mut once: Vec<&Row> = rows.iter().collect();
        comparator.sort(&mut once);
        let mut twice = once.clone();
        comparator.sort(&mut twice);
        prop_assert_eq!(&once, &twice);

        for pair in once.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if score(a) == score(b) {
                prop_assert!(a.id < b.id);
            } else if desc {
                prop_assert!(score(a) > score(b));
            } else {
                prop_assert!(score(a) < score(b));
            }
        }
    }

    #[test]
    fn pages_partition_the_view(count in 0usize..250, size in 1usize..40) {
        let rows: Vec<usize> = (0..count).collect();
        let pages = total_pages(count, size);
        prop_assert_eq!(pages, std::cmp::max(1, count.div_ceil(size)));
        let mut seen = 0;
        for page in 1..=pages {
            let state = PageState::new(size).unwrap().with_page(page);
            let slice = paginate(&rows, &state);
            prop_assert_eq!(slice.total_pages, pages);
            seen += slice.rows.len();
        }
        prop_assert_eq!(seen, count);
    }

    #[test]
    fn window_is_bounded_and_increasing(total in 1usize..80, current in 0usize..90) {
        let window = page_window(current, total);
        prop_assert_eq!(window.len(), total.min(5));
        prop_assert!(window.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(window.iter().all(|&page| (1..=total).contains(&page)));
        if (1..=total).contains(&current) {
            prop_assert!(window.contains(&current));
        }
    }

    #[test]
    fn toggling_a_page_twice_restores_selection(
        preselected in prop::collection::btree_set(0usize..20, 0..20),
        page in prop::collection::btree_set(0usize..20, 0..10),
    ) {
        let id = |n: usize| RecordId::new(format!("id{n}")).unwrap();
        let mut selection = Selection::new();
        for n in &preselected {
            selection.toggle(&id(*n));
        }
        let original = selection.clone();
        let page_ids: Vec<RecordId> = page.iter().map(|n| id(*n)).collect();
        selection.toggle_all_on_page(&page_ids);
        if !page_ids.is_empty() {
            prop_assert!(
                selection.all_selected(&page_ids)
                    || page_ids.iter().all(|i| !selection.is_selected(i))
            );
        }
        selection.toggle_all_on_page(&page_ids);
        // a page that started fully selected comes back fully selected
        if original.all_selected(&page_ids) {
            prop_assert_eq!(&selection, &original);
        } else {
            let mut expected = original.clone();
            for i in &page_ids {
                if expected.is_selected(i) {
                    expected.toggle(i);
                }
            }
            prop_assert_eq!(&selection, &expected);
        }
    }
}
