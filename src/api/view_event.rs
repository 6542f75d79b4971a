use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::RecordCategory;

/// Notifications the embedding shell feeds into the engine.
///
/// View state mutates only through these (and bulk loads); there is no
/// implicit widget callback wiring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// The visible window moved or zoomed.
    WindowChanged {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// One category toggle flipped.
    ToggleChanged {
        category: RecordCategory,
        enabled: bool,
    },
}
