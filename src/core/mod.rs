pub mod build;
pub mod dynasty;
pub mod era_date;
pub mod item;
pub mod lod;
pub mod record;

pub use build::{
    EVENT_SORT_BASE, NO_DESCRIPTION, SCHOLAR_COLOR, UNCLASSIFIED_SORT_BASE, build_items, id_ordinal,
};
pub use dynasty::{DEFAULT_COLOR, DynastyDirectory, UNKNOWN_RANK};
pub use era_date::{interpret_date, one_day, parse_era_date, sentinel_instant, span_in_years};
pub use item::{GroupId, ItemGroup, ItemShape, TimelineItem, VisualStyle, group_descriptors};
pub use lod::{CategoryToggles, filter_visible, significance_threshold};
pub use record::{RawRecord, RecordCategory, parse_significance};
