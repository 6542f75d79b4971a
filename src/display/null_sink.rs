use crate::core::{ItemGroup, ItemShape, TimelineItem};
use crate::display::DisplaySink;
use crate::error::{TimelineError, TimelineResult};

/// No-op sink used by tests and headless engine usage.
///
/// It still validates pushed items so tests can catch broken shapes before a
/// real surface is wired up.
#[derive(Debug, Default)]
pub struct NullSink {
    pub group_count: usize,
    pub last_item_count: usize,
    pub replace_calls: usize,
}

impl DisplaySink for NullSink {
    fn set_groups(&mut self, groups: &[ItemGroup]) -> TimelineResult<()> {
        self.group_count = groups.len();
        Ok(())
    }

    fn replace_items(&mut self, items: &[TimelineItem]) -> TimelineResult<()> {
        for item in items {
            if item.shape == ItemShape::Point && item.end.is_some() {
                return Err(TimelineError::InvalidData(format!(
                    "point item `{}` carries an end instant",
                    item.id
                )));
            }
        }
        self.replace_calls += 1;
        self.last_item_count = items.len();
        Ok(())
    }
}
