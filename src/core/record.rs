use serde::{Deserialize, Serialize};

/// Source category of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordCategory {
    Dynasty,
    King,
    Event,
    Scholar,
    Unclassified,
}

impl RecordCategory {
    /// Maps the raw `type` column. Matching is exact and case-sensitive;
    /// anything unrecognized lands in [`RecordCategory::Unclassified`].
    #[must_use]
    pub fn from_source_type(source_type: &str) -> Self {
        match source_type {
            "dynasty" => Self::Dynasty,
            "king" => Self::King,
            "event" => Self::Event,
            "scholar" => Self::Scholar,
            _ => Self::Unclassified,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dynasty => "dynasty",
            Self::King => "king",
            Self::Event => "event",
            Self::Scholar => "scholar",
            Self::Unclassified => "unclassified",
        }
    }
}

/// One normalized input row.
///
/// Optionality is explicit; date strings stay verbatim so tooltips can echo
/// the source text unreformatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    pub category: RecordCategory,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default = "default_significance")]
    pub significance: i64,
    pub dynasty_reference: Option<String>,
    pub color: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl RawRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, category: RecordCategory, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            start_date: None,
            end_date: None,
            significance: default_significance(),
            dynasty_reference: None,
            color: None,
            image: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    #[must_use]
    pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    #[must_use]
    pub fn with_significance(mut self, significance: i64) -> Self {
        self.significance = significance;
        self
    }

    #[must_use]
    pub fn with_dynasty_reference(mut self, dynasty_reference: impl Into<String>) -> Self {
        self.dynasty_reference = Some(dynasty_reference.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Significance column rule: absent or unparseable text falls back to 1,
/// negative values clamp to 0 so item significance stays non-negative.
#[must_use]
pub fn parse_significance(raw: Option<&str>) -> i64 {
    let Some(text) = raw else {
        return default_significance();
    };
    match text.trim().parse::<i64>() {
        Ok(value) => value.max(0),
        Err(_) => default_significance(),
    }
}

fn default_significance() -> i64 {
    1
}
