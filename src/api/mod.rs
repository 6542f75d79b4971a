mod engine;
mod engine_config;
mod json_contract;
mod view_event;

pub use engine::{TimelineEngine, VisibleWindow};
pub use engine_config::TimelineEngineConfig;
pub use json_contract::{
    DISPLAYED_ITEMS_JSON_SCHEMA_V1, DisplayedItemsJsonContractV1, from_json_compat_str,
    to_json_contract_v1_pretty,
};
pub use view_event::ViewEvent;
