use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    CategoryToggles, DynastyDirectory, RawRecord, TimelineItem, build_items, filter_visible,
    group_descriptors, span_in_years,
};
use crate::display::DisplaySink;
use crate::error::{TimelineError, TimelineResult};

use super::engine_config::TimelineEngineConfig;
use super::json_contract::to_json_contract_v1_pretty;
use super::view_event::ViewEvent;

/// Currently visible time window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl VisibleWindow {
    #[must_use]
    pub fn span_years(&self) -> f64 {
        span_in_years(self.start, self.end)
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns the normalized item collection, the dynasty
/// directory, and the view state. The display surface sits behind
/// [`DisplaySink`] and receives every visible-set change as a wholesale
/// replace.
pub struct TimelineEngine<S: DisplaySink> {
    sink: S,
    config: TimelineEngineConfig,
    window: VisibleWindow,
    toggles: CategoryToggles,
    directory: DynastyDirectory,
    items: Vec<TimelineItem>,
    displayed: Vec<TimelineItem>,
}

impl<S: DisplaySink> TimelineEngine<S> {
    /// Validates the config and pushes the lane descriptors into the sink.
    pub fn new(sink: S, config: TimelineEngineConfig) -> TimelineResult<Self> {
        let (start, end) = config.validated_window()?;
        let mut engine = Self {
            sink,
            config,
            window: VisibleWindow { start, end },
            toggles: CategoryToggles::default(),
            directory: DynastyDirectory::default(),
            items: Vec::new(),
            displayed: Vec::new(),
        };
        engine.sink.set_groups(&group_descriptors())?;
        Ok(engine)
    }

    /// Replaces the whole dataset.
    ///
    /// Rebuilds the dynasty directory and the item collection from scratch,
    /// resets the window to the configured bounds, and refreshes the sink.
    pub fn load_records(&mut self, records: Vec<RawRecord>) -> TimelineResult<()> {
        let directory = DynastyDirectory::from_records(&records);
        let items = build_items(&records, &directory);
        info!(
            records = records.len(),
            items = items.len(),
            dynasties = directory.len(),
            "loaded dataset"
        );
        self.directory = directory;
        self.items = items;
        let (start, end) = self.config.validated_window()?;
        self.window = VisibleWindow { start, end };
        self.refresh()
    }

    /// Single update path for view notifications.
    pub fn handle_event(&mut self, event: ViewEvent) -> TimelineResult<()> {
        match event {
            ViewEvent::WindowChanged { start, end } => {
                if end <= start {
                    return Err(TimelineError::InvalidWindow { start, end });
                }
                self.window = VisibleWindow { start, end };
            }
            ViewEvent::ToggleChanged { category, enabled } => {
                self.toggles.set_enabled(category, enabled);
            }
        }
        self.refresh()
    }

    /// Recomputes the displayed subset and hands it to the sink.
    ///
    /// A sink failure leaves the previous displayed snapshot and the item
    /// collection untouched.
    pub fn refresh(&mut self) -> TimelineResult<()> {
        let span_years = self.window.span_years();
        let displayed = filter_visible(&self.items, span_years, &self.toggles);
        self.sink.replace_items(&displayed)?;
        debug!(
            span_years,
            displayed = displayed.len(),
            "replaced displayed set"
        );
        self.displayed = displayed;
        Ok(())
    }

    /// Serializes the current displayed set under the v1 JSON contract.
    pub fn displayed_json_pretty(&self) -> TimelineResult<String> {
        to_json_contract_v1_pretty(&self.displayed)
    }

    #[must_use]
    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }

    #[must_use]
    pub fn displayed(&self) -> &[TimelineItem] {
        &self.displayed
    }

    #[must_use]
    pub fn visible_window(&self) -> VisibleWindow {
        self.window
    }

    #[must_use]
    pub fn toggles(&self) -> CategoryToggles {
        self.toggles
    }

    #[must_use]
    pub fn directory(&self) -> &DynastyDirectory {
        &self.directory
    }

    #[must_use]
    pub fn config(&self) -> &TimelineEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
