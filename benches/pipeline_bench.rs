use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timeline_rs::core::{
    CategoryToggles, DynastyDirectory, RawRecord, RecordCategory, build_items, filter_visible,
    parse_era_date,
};
use timeline_rs::display::NullSink;
use timeline_rs::{TimelineEngine, TimelineEngineConfig, ViewEvent};

fn synthetic_records(count: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            let category = match i % 5 {
                0 => RecordCategory::Dynasty,
                1 => RecordCategory::King,
                2 => RecordCategory::Event,
                3 => RecordCategory::Scholar,
                _ => RecordCategory::Unclassified,
            };
            let year = -900 + (i as i32 % 2_800);
            let start = if year < 0 {
                format!("{} BC", -year)
            } else {
                format!("{year} AD")
            };
            let mut record =
                RawRecord::new(format!("gen-{i}"), category, format!("Synthetic {i}"))
                    .with_start_date(start)
                    .with_significance((i % 6) as i64);
            match category {
                RecordCategory::Dynasty => {
                    record = record.with_end_date("1950 AD").with_color("#4a6");
                }
                RecordCategory::King => {
                    record = record
                        .with_end_date("1950 AD")
                        .with_dynasty_reference(format!("Synthetic {}", i - 1));
                }
                RecordCategory::Scholar => {
                    record = record.with_end_date("1950 AD");
                }
                RecordCategory::Event | RecordCategory::Unclassified => {}
            }
            record
        })
        .collect()
}

fn bench_era_date_parse(c: &mut Criterion) {
    c.bench_function("era_date_parse", |b| {
        b.iter(|| {
            let _ = parse_era_date(black_box("3500 BC")).expect("valid era date");
            let _ = parse_era_date(black_box("1950 AD")).expect("valid era date");
        })
    });
}

fn bench_item_build_2k(c: &mut Criterion) {
    let records = synthetic_records(2_000);
    let directory = DynastyDirectory::from_records(&records);

    c.bench_function("item_build_2k", |b| {
        b.iter(|| {
            let items = build_items(black_box(&records), black_box(&directory));
            black_box(items.len())
        })
    });
}

fn bench_lod_filter_2k(c: &mut Criterion) {
    let records = synthetic_records(2_000);
    let directory = DynastyDirectory::from_records(&records);
    let items = build_items(&records, &directory);
    let toggles = CategoryToggles::default();

    c.bench_function("lod_filter_2k", |b| {
        b.iter(|| {
            let visible = filter_visible(black_box(&items), black_box(750.0), &toggles);
            black_box(visible.len())
        })
    });
}

fn bench_engine_window_event_2k(c: &mut Criterion) {
    let mut engine = TimelineEngine::new(NullSink::default(), TimelineEngineConfig::default())
        .expect("engine init");
    engine
        .load_records(synthetic_records(2_000))
        .expect("load records");
    let narrow = ViewEvent::WindowChanged {
        start: parse_era_date("100 AD").expect("start"),
        end: parse_era_date("180 AD").expect("end"),
    };
    let wide = ViewEvent::WindowChanged {
        start: parse_era_date("900 BC").expect("start"),
        end: parse_era_date("1900 AD").expect("end"),
    };

    c.bench_function("engine_window_event_2k", |b| {
        b.iter(|| {
            engine.handle_event(black_box(narrow)).expect("narrow window");
            engine.handle_event(black_box(wide)).expect("wide window");
        })
    });
}

fn bench_displayed_json_2k(c: &mut Criterion) {
    let mut engine = TimelineEngine::new(NullSink::default(), TimelineEngineConfig::default())
        .expect("engine init");
    engine
        .load_records(synthetic_records(2_000))
        .expect("load records");

    c.bench_function("displayed_json_2k", |b| {
        b.iter(|| {
            let json = engine.displayed_json_pretty().expect("displayed json");
            black_box(json.len())
        })
    });
}

criterion_group!(
    benches,
    bench_era_date_parse,
    bench_item_build_2k,
    bench_lod_filter_2k,
    bench_engine_window_event_2k,
    bench_displayed_json_2k
);
criterion_main!(benches);
