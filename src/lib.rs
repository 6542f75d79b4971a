//! timeline-rs: historical timeline data engine.
//!
//! This crate normalizes era-dated historical records (dynasties, rulers,
//! scholars, events) into deterministic display items and decides, for any
//! visible window, which items carry enough significance to show.

pub mod api;
pub mod core;
pub mod display;
pub mod error;
pub mod ingest;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig, ViewEvent};
pub use error::{TimelineError, TimelineResult};
