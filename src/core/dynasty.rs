use indexmap::IndexMap;
use tracing::debug;

use super::era_date::interpret_date;
use super::record::{RawRecord, RecordCategory};

/// Fallback color for names absent from the color table.
pub const DEFAULT_COLOR: &str = "#666";

/// Rank assigned to names absent from the chronology.
pub const UNKNOWN_RANK: usize = 999;

/// Name-keyed dynasty lookups: display color and chronological rank.
///
/// Built in a single pass per dataset load and never mutated afterwards;
/// callers thread it by reference into item building. Ranks follow
/// interpreted start instants ascending; ties keep input order. Duplicate
/// names keep the last write in both tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynastyDirectory {
    colors: IndexMap<String, String>,
    ranks: IndexMap<String, usize>,
}

impl DynastyDirectory {
    #[must_use]
    pub fn from_records(records: &[RawRecord]) -> Self {
        let mut colors = IndexMap::new();
        let mut chronology = Vec::new();

        for record in records {
            if record.category != RecordCategory::Dynasty || record.name.is_empty() {
                continue;
            }
            if let Some(color) = &record.color {
                colors.insert(record.name.clone(), color.clone());
            }
            chronology.push(record);
        }

        // Stable sort: equal start instants preserve input order.
        chronology.sort_by_key(|record| interpret_date(record.start_date.as_deref()));

        let mut ranks = IndexMap::new();
        for (rank, record) in chronology.iter().enumerate() {
            ranks.insert(record.name.clone(), rank);
        }

        debug!(
            ranked = ranks.len(),
            colored = colors.len(),
            "built dynasty directory"
        );
        Self { colors, ranks }
    }

    /// Display color for a dynasty name; unknown names get [`DEFAULT_COLOR`].
    #[must_use]
    pub fn color_of(&self, name: &str) -> &str {
        self.colors
            .get(name)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR)
    }

    /// Chronological rank for a dynasty name; unknown names get [`UNKNOWN_RANK`].
    #[must_use]
    pub fn rank_of(&self, name: &str) -> usize {
        self.ranks.get(name).copied().unwrap_or(UNKNOWN_RANK)
    }

    /// Number of ranked dynasties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
