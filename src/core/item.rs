use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::RecordCategory;

/// How the surface draws an item on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemShape {
    Point,
    Range,
}

/// Horizontal lane an item is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupId {
    Main,
    Scholars,
}

impl GroupId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Scholars => "scholars",
        }
    }

    /// Vertical position of the lane; lower ranks sit above.
    #[must_use]
    pub fn layout_rank(self) -> u8 {
        match self {
            Self::Main => 0,
            Self::Scholars => 1,
        }
    }
}

/// Lane descriptor pushed to the display surface before any items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemGroup {
    pub id: GroupId,
    pub label: String,
    pub css_class: String,
}

/// The two fixed lanes in layout order (main above scholars).
#[must_use]
pub fn group_descriptors() -> Vec<ItemGroup> {
    vec![
        ItemGroup {
            id: GroupId::Main,
            label: String::new(),
            css_class: "main".to_owned(),
        },
        ItemGroup {
            id: GroupId::Scholars,
            label: String::new(),
            css_class: "scholars".to_owned(),
        },
    ]
}

/// Inline styling for an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum VisualStyle {
    /// Solid block, used for dynasty bands.
    Fill { background: String, text: String },
    /// Colored border and text, used for kings and scholars.
    Outline { color: String },
}

impl VisualStyle {
    /// Inline CSS the surface applies verbatim.
    #[must_use]
    pub fn css_fragment(&self) -> String {
        match self {
            Self::Fill { background, text } => {
                format!("background-color: {background}; color: {text};")
            }
            Self::Outline { color } => format!("border-color: {color}; color: {color};"),
        }
    }
}

/// One fully-built display item.
///
/// Plain data: the builder produces these, the filter copies them, the
/// surface consumes them. `end` is present only on ranged items that carried
/// an end date; "bare" items keep the range shape with no end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub id: String,
    pub display_content: String,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub shape: ItemShape,
    pub significance: i64,
    pub category: RecordCategory,
    pub tooltip_html: String,
    pub visual_style: Option<VisualStyle>,
    pub css_class: Option<String>,
    pub group: Option<GroupId>,
    pub sort_key: Option<i64>,
}
