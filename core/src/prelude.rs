use serde::{Deserialize, Serialize};

/// Static policy knobs shared by every pipeline component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Detections scoring below this confidence are ignored outright.
    pub conf_threshold: f32,
    /// Consecutive unsafe frames required before a breach is declared
    /// (strictly greater-than, so 5 means the 6th frame alarms).
    pub persistence_threshold: u32,
    /// Minimum seconds between audio alarm firings.
    pub beep_cooldown_secs: f64,
    /// Labels that count as safety violations.
    pub unsafe_labels: Vec<String>,
    /// Labels that count as compliant equipment.
    pub safe_labels: Vec<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            conf_threshold: 0.40,
            persistence_threshold: 5,
            beep_cooldown_secs: 3.0,
            unsafe_labels: default_unsafe_labels(),
            safe_labels: default_safe_labels(),
        }
    }
}

/// Label set the stand-in model ships with.
pub fn default_unsafe_labels() -> Vec<String> {
    ["No-Helmet", "No-Vest", "no_helmet", "no_vest", "head", "person"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn default_safe_labels() -> Vec<String> {
    ["Helmet", "Vest", "Hardhat", "helmet", "vest"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Common error type for pipeline execution.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("source exhausted: {0}")]
    SourceExhausted(String),
    #[error("invalid detection: {0}")]
    InvalidDetection(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_shipped_thresholds() {
        let config = MonitorConfig::default();
        assert_eq!(config.conf_threshold, 0.40);
        assert_eq!(config.persistence_threshold, 5);
        assert_eq!(config.beep_cooldown_secs, 3.0);
        assert!(config.unsafe_labels.contains(&"No-Helmet".to_string()));
        assert!(config.safe_labels.contains(&"Hardhat".to_string()));
    }
}
