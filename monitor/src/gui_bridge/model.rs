use serde::{Deserialize, Serialize};
use watchcore::pipeline::Violation;

/// Read-only per-frame snapshot consumed by an external renderer. The
/// renderer never feeds back into pipeline state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardModel {
    pub status: String,
    pub violations: Vec<Violation>,
    pub unrecognized: Vec<String>,
    pub event_log: Vec<String>,
    pub fps: f32,
    pub frames_processed: usize,
    pub alarms_fired: usize,
}
