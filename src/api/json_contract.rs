use serde::{Deserialize, Serialize};

use crate::core::TimelineItem;
use crate::error::{TimelineError, TimelineResult};

pub const DISPLAYED_ITEMS_JSON_SCHEMA_V1: u32 = 1;

/// Versioned export payload for out-of-process display surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayedItemsJsonContractV1 {
    pub schema_version: u32,
    pub items: Vec<TimelineItem>,
}

/// Serializes a displayed set under the v1 contract.
///
/// Serialization failures never touch engine state.
pub fn to_json_contract_v1_pretty(items: &[TimelineItem]) -> TimelineResult<String> {
    let payload = DisplayedItemsJsonContractV1 {
        schema_version: DISPLAYED_ITEMS_JSON_SCHEMA_V1,
        items: items.to_vec(),
    };
    serde_json::to_string_pretty(&payload).map_err(|e| {
        TimelineError::InvalidData(format!("failed to serialize displayed items contract v1: {e}"))
    })
}

/// Parses either a bare item array or the versioned wrapper.
pub fn from_json_compat_str(input: &str) -> TimelineResult<Vec<TimelineItem>> {
    if let Ok(items) = serde_json::from_str::<Vec<TimelineItem>>(input) {
        return Ok(items);
    }
    let payload: DisplayedItemsJsonContractV1 = serde_json::from_str(input).map_err(|e| {
        TimelineError::InvalidData(format!("failed to parse displayed items payload: {e}"))
    })?;
    if payload.schema_version != DISPLAYED_ITEMS_JSON_SCHEMA_V1 {
        return Err(TimelineError::InvalidData(format!(
            "unsupported displayed items schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.items)
}
