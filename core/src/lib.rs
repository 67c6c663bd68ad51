//! Detection-to-alert core for the site safety monitor.
//!
//! The modules turn a noisy per-frame stream of classified bounding boxes
//! into a stable breach/secure status with hysteresis, a deduplicated
//! rolling event log, and a rate-limited alarm gate.

pub mod feed;
pub mod pipeline;
pub mod prelude;
pub mod telemetry;

pub use prelude::{MonitorConfig, PipelineError, PipelineResult};
