use timeline_rs::core::{
    CategoryToggles, DynastyDirectory, RawRecord, RecordCategory, TimelineItem, filter_visible,
    significance_threshold,
};

fn sample_items() -> Vec<TimelineItem> {
    let records = vec![
        RawRecord::new("dynasties-0", RecordCategory::Dynasty, "Achaemenid")
            .with_start_date("550 BC")
            .with_end_date("330 BC")
            .with_significance(5),
        RawRecord::new("kings-0", RecordCategory::King, "Cyrus")
            .with_start_date("559 BC")
            .with_end_date("530 BC")
            .with_significance(4),
        RawRecord::new("events-0", RecordCategory::Event, "Battle")
            .with_start_date("480 BC")
            .with_significance(2),
        RawRecord::new("scholars-0", RecordCategory::Scholar, "Avicenna")
            .with_start_date("980 AD")
            .with_end_date("1037 AD")
            .with_significance(1),
        RawRecord::new("events-1", RecordCategory::Event, "Footnote")
            .with_start_date("479 BC")
            .with_significance(0),
        RawRecord::new("extras-0", RecordCategory::Unclassified, "Oddity")
            .with_start_date("400 BC")
            .with_significance(5),
    ];
    let directory = DynastyDirectory::from_records(&records);
    timeline_rs::core::build_items(&records, &directory)
}

fn ids(items: &[TimelineItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn threshold_steps_at_span_boundaries() {
    let expectations = [
        (2_500.0, 5),
        (2_000.0, 4),
        (1_500.0, 4),
        (1_000.0, 3),
        (600.0, 3),
        (500.0, 2),
        (200.0, 2),
        (100.0, 1),
        (60.0, 1),
        (50.0, 0),
        (10.0, 0),
        (0.0, 0),
    ];
    for (span, expected) in expectations {
        assert_eq!(
            significance_threshold(span),
            expected,
            "threshold at span {span}"
        );
    }
}

#[test]
fn span_1500_shows_significance_four_and_up() {
    let items = sample_items();
    let visible = filter_visible(&items, 1_500.0, &CategoryToggles::all_enabled());

    assert_eq!(ids(&visible), vec!["dynasties-0", "kings-0", "extras-0"]);
}

#[test]
fn narrow_span_shows_everything_enabled() {
    let items = sample_items();
    let visible = filter_visible(&items, 40.0, &CategoryToggles::all_enabled());

    assert_eq!(visible.len(), items.len());
}

#[test]
fn zero_significance_items_survive_only_narrow_spans() {
    let items = sample_items();

    let narrow = filter_visible(&items, 50.0, &CategoryToggles::all_enabled());
    assert!(ids(&narrow).contains(&"events-1"));

    let wide = filter_visible(&items, 60.0, &CategoryToggles::all_enabled());
    assert!(!ids(&wide).contains(&"events-1"));
}

#[test]
fn disabled_categories_never_appear() {
    let items = sample_items();
    let toggles = CategoryToggles::all_enabled().with_kings(false);
    let visible = filter_visible(&items, 40.0, &toggles);

    assert!(!visible.iter().any(|item| item.category == RecordCategory::King));
    assert!(visible.iter().any(|item| item.category == RecordCategory::Dynasty));
}

#[test]
fn unclassified_is_hidden_by_default() {
    let items = sample_items();

    let default_visible = filter_visible(&items, 40.0, &CategoryToggles::default());
    assert!(!ids(&default_visible).contains(&"extras-0"));

    let opted_in = filter_visible(
        &items,
        40.0,
        &CategoryToggles::default().with_unclassified(true),
    );
    assert!(ids(&opted_in).contains(&"extras-0"));
}

#[test]
fn no_toggles_means_no_items() {
    let items = sample_items();
    let visible = filter_visible(&items, 40.0, &CategoryToggles::none_enabled());

    assert!(visible.is_empty());
}

#[test]
fn filter_is_idempotent() {
    let items = sample_items();
    let toggles = CategoryToggles::default();

    let once = filter_visible(&items, 700.0, &toggles);
    let twice = filter_visible(&once, 700.0, &toggles);
    assert_eq!(once, twice);
}

#[test]
fn filter_preserves_input_order() {
    let items = sample_items();
    let visible = filter_visible(&items, 40.0, &CategoryToggles::all_enabled());

    let positions: Vec<usize> = visible
        .iter()
        .map(|item| items.iter().position(|i| i.id == item.id).expect("item"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}
