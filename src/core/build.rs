//! Raw records to display items.
//!
//! Pure and deterministic: identical input produces byte-identical output,
//! input order is preserved, and no clock, randomness, or unordered
//! iteration is involved.

use chrono::{DateTime, Utc};
use tracing::{trace, warn};

use super::dynasty::DynastyDirectory;
use super::era_date::{interpret_date, one_day};
use super::item::{GroupId, ItemShape, TimelineItem, VisualStyle};
use super::record::{RawRecord, RecordCategory};

/// Sort-key base for events; keeps the event band below every dynasty rank.
pub const EVENT_SORT_BASE: i64 = 10_000;

/// Sort-key base for records of unrecognized category.
pub const UNCLASSIFIED_SORT_BASE: i64 = 20_000;

/// Border and text color for scholar ranges.
pub const SCHOLAR_COLOR: &str = "#8B4513";

/// Placeholder when a source row has no description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Builds display items from raw records.
///
/// Records without a start date (absent or empty) are skipped; everything
/// else yields an item, malformed dates included (they land on the sentinel
/// instant).
#[must_use]
pub fn build_items(records: &[RawRecord], directory: &DynastyDirectory) -> Vec<TimelineItem> {
    let mut items = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    for (position, record) in records.iter().enumerate() {
        match build_item(position, record, directory) {
            Some(item) => items.push(item),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(
            skipped,
            built = items.len(),
            "records without start dates were excluded"
        );
    }
    items
}

/// Trailing numeric suffix of a synthesized id (`"events-7"` → 7).
#[must_use]
pub fn id_ordinal(id: &str) -> Option<i64> {
    id.rsplit_once('-').and_then(|(_, suffix)| suffix.parse().ok())
}

fn build_item(
    position: usize,
    record: &RawRecord,
    directory: &DynastyDirectory,
) -> Option<TimelineItem> {
    // An empty start string counts as absent.
    let start_date = record.start_date.as_deref().filter(|text| !text.is_empty())?;
    let start = interpret_date(Some(start_date));

    let shape = if record.category == RecordCategory::Event {
        ItemShape::Point
    } else {
        ItemShape::Range
    };

    let mut item = TimelineItem {
        id: record.id.clone(),
        display_content: record.name.clone(),
        start,
        end: None,
        shape,
        significance: record.significance.max(0),
        category: record.category,
        tooltip_html: render_tooltip(record),
        visual_style: None,
        css_class: None,
        group: None,
        sort_key: None,
    };

    // Ordinal for insertion-sequence sort keys; synthesized ids carry it as
    // their numeric suffix, anything else falls back to the input position.
    let ordinal = id_ordinal(&record.id).unwrap_or(position as i64);

    match record.category {
        RecordCategory::Dynasty => {
            if let Some(raw_end) = record.end_date.as_deref() {
                item.end = Some(dynasty_end(start, raw_end));
                item.visual_style = Some(VisualStyle::Fill {
                    background: directory.color_of(&record.name).to_owned(),
                    text: "white".to_owned(),
                });
                item.css_class = Some("dynasty".to_owned());
                item.group = Some(GroupId::Main);
                item.sort_key = Some(directory.rank_of(&record.name) as i64 * 1000);
            }
        }
        RecordCategory::King => {
            if let Some(raw_end) = record.end_date.as_deref() {
                let dynasty = record.dynasty_reference.as_deref().unwrap_or("");
                let color = directory.color_of(dynasty).to_owned();
                item.end = Some(interpret_date(Some(raw_end)));
                item.visual_style = Some(VisualStyle::Outline { color });
                item.css_class = Some("king".to_owned());
                item.group = Some(GroupId::Main);
                item.sort_key = Some(directory.rank_of(dynasty) as i64 * 1000 + 1);
                if let Some(image) = &record.image {
                    item.display_content = format!("<img src=\"{image}\">{}", record.name);
                }
            }
        }
        RecordCategory::Event => {
            // Events are points; a source end date is ignored.
            item.css_class = Some("event".to_owned());
            item.group = Some(GroupId::Main);
            item.sort_key = Some(EVENT_SORT_BASE.saturating_add(ordinal));
        }
        RecordCategory::Scholar => {
            if let Some(raw_end) = record.end_date.as_deref() {
                item.end = Some(interpret_date(Some(raw_end)));
                item.visual_style = Some(VisualStyle::Outline {
                    color: SCHOLAR_COLOR.to_owned(),
                });
                item.css_class = Some("scholar".to_owned());
                item.group = Some(GroupId::Scholars);
                item.sort_key = Some(ordinal);
            }
        }
        RecordCategory::Unclassified => {
            item.css_class = Some("unclassified".to_owned());
            item.group = Some(GroupId::Main);
            item.sort_key = Some(UNCLASSIFIED_SORT_BASE.saturating_add(ordinal));
        }
    }

    trace!(
        id = %item.id,
        category = record.category.as_str(),
        sort_key = ?item.sort_key,
        "built item"
    );
    Some(item)
}

// Dynasty bands must stay visible even on degenerate data, so an end at or
// before the start moves forward by one day. Other categories keep the
// interpreted end untouched.
fn dynasty_end(start: DateTime<Utc>, raw_end: &str) -> DateTime<Utc> {
    let end = interpret_date(Some(raw_end));
    if end <= start { start + one_day() } else { end }
}

fn render_tooltip(record: &RawRecord) -> String {
    let mut html = format!("<strong>{}</strong><br>", record.name);

    if let Some(start) = &record.start_date {
        match &record.end_date {
            Some(end) => html.push_str(&format!("Years: {start} - {end}<br>")),
            None => html.push_str(&format!("Years: {start}<br>")),
        }
    }
    if let Some(image) = &record.image {
        html.push_str(&format!(
            "<img src=\"{image}\" style=\"max-width: 100px;\"><br>"
        ));
    }
    // "none" is a source-data placeholder, not a dynasty.
    if let Some(dynasty) = record.dynasty_reference.as_deref() {
        if !dynasty.is_empty() && dynasty != "none" {
            html.push_str(&format!("Dynasty: {dynasty}<br>"));
        }
    }
    let description = record.description.as_deref().unwrap_or(NO_DESCRIPTION);
    html.push_str(&format!("Description: {description}"));
    html
}
