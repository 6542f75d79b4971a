mod null_sink;

pub use null_sink::NullSink;

use crate::core::{ItemGroup, TimelineItem};
use crate::error::TimelineResult;

/// Contract implemented by any display surface.
///
/// Surfaces receive the lane descriptors once, then full displayed sets on
/// every recompute. Updates are wholesale replaces (clear-then-add), never
/// incremental edits, so a toggle can never leave stale items behind.
pub trait DisplaySink {
    fn set_groups(&mut self, groups: &[ItemGroup]) -> TimelineResult<()>;
    fn replace_items(&mut self, items: &[TimelineItem]) -> TimelineResult<()>;
}
