//! Level-of-detail filtering.
//!
//! Visibility is a pure function of the full item collection, the visible
//! span in years, and the per-category toggles. The filter never clips by
//! time window; off-screen culling belongs to the display surface.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::item::TimelineItem;
use super::record::RecordCategory;

/// Minimum significance required at a given window span.
///
/// Wider windows raise the bar; at 50 years and below everything qualifies.
/// The finest-grain floor is 0, so zero-significance items do appear at
/// narrow spans.
#[must_use]
pub fn significance_threshold(span_years: f64) -> i64 {
    if span_years > 2000.0 {
        5
    } else if span_years > 1000.0 {
        4
    } else if span_years > 500.0 {
        3
    } else if span_years > 100.0 {
        2
    } else if span_years > 50.0 {
        1
    } else {
        0
    }
}

/// Per-category visibility switches.
///
/// Defaults mirror the stock UI: the four known categories on, unclassified
/// leftovers hidden until explicitly requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryToggles {
    pub dynasties: bool,
    pub kings: bool,
    pub events: bool,
    pub scholars: bool,
    pub unclassified: bool,
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self {
            dynasties: true,
            kings: true,
            events: true,
            scholars: true,
            unclassified: false,
        }
    }
}

impl CategoryToggles {
    #[must_use]
    pub fn all_enabled() -> Self {
        Self {
            dynasties: true,
            kings: true,
            events: true,
            scholars: true,
            unclassified: true,
        }
    }

    #[must_use]
    pub fn none_enabled() -> Self {
        Self {
            dynasties: false,
            kings: false,
            events: false,
            scholars: false,
            unclassified: false,
        }
    }

    #[must_use]
    pub fn with_dynasties(mut self, enabled: bool) -> Self {
        self.dynasties = enabled;
        self
    }

    #[must_use]
    pub fn with_kings(mut self, enabled: bool) -> Self {
        self.kings = enabled;
        self
    }

    #[must_use]
    pub fn with_events(mut self, enabled: bool) -> Self {
        self.events = enabled;
        self
    }

    #[must_use]
    pub fn with_scholars(mut self, enabled: bool) -> Self {
        self.scholars = enabled;
        self
    }

    #[must_use]
    pub fn with_unclassified(mut self, enabled: bool) -> Self {
        self.unclassified = enabled;
        self
    }

    #[must_use]
    pub fn enabled_for(&self, category: RecordCategory) -> bool {
        match category {
            RecordCategory::Dynasty => self.dynasties,
            RecordCategory::King => self.kings,
            RecordCategory::Event => self.events,
            RecordCategory::Scholar => self.scholars,
            RecordCategory::Unclassified => self.unclassified,
        }
    }

    pub fn set_enabled(&mut self, category: RecordCategory, enabled: bool) {
        match category {
            RecordCategory::Dynasty => self.dynasties = enabled,
            RecordCategory::King => self.kings = enabled,
            RecordCategory::Event => self.events = enabled,
            RecordCategory::Scholar => self.scholars = enabled,
            RecordCategory::Unclassified => self.unclassified = enabled,
        }
    }
}

/// Selects the displayed subset for a window span.
///
/// An item survives iff its significance meets the span threshold and its
/// category toggle is on. Input order is preserved; applying the filter to
/// its own output with the same arguments is a no-op.
#[must_use]
pub fn filter_visible(
    items: &[TimelineItem],
    span_years: f64,
    toggles: &CategoryToggles,
) -> Vec<TimelineItem> {
    let threshold = significance_threshold(span_years);
    let visible: Vec<TimelineItem> = items
        .iter()
        .filter(|item| item.significance >= threshold && toggles.enabled_for(item.category))
        .cloned()
        .collect();
    debug!(
        total = items.len(),
        visible = visible.len(),
        threshold,
        span_years,
        "filtered items for window"
    );
    visible
}
