use crate::prelude::MonitorConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Safety reading for one detection label.
///
/// `Unrecognized` labels are surfaced for display but never drive the
/// alarm; only `Unsafe` contributes to a frame's verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SafetyCategory {
    Safe,
    Unsafe,
    /// Below the confidence floor, regardless of label.
    Ignored,
    /// Label in neither configured set.
    Unrecognized,
}

/// Maps raw detector labels to safety categories against the static
/// label sets. Pure lookup, no side effects.
pub struct Classifier {
    unsafe_labels: HashSet<String>,
    safe_labels: HashSet<String>,
    conf_threshold: f32,
}

impl Classifier {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            unsafe_labels: config.unsafe_labels.iter().cloned().collect(),
            safe_labels: config.safe_labels.iter().cloned().collect(),
            conf_threshold: config.conf_threshold,
        }
    }

    pub fn classify(&self, label: &str, confidence: f32) -> SafetyCategory {
        if confidence < self.conf_threshold {
            return SafetyCategory::Ignored;
        }
        if self.unsafe_labels.contains(label) {
            SafetyCategory::Unsafe
        } else if self.safe_labels.contains(label) {
            SafetyCategory::Safe
        } else {
            SafetyCategory::Unrecognized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(&MonitorConfig::default())
    }

    #[test]
    fn below_confidence_floor_is_ignored() {
        assert_eq!(
            classifier().classify("No-Helmet", 0.39),
            SafetyCategory::Ignored
        );
    }

    #[test]
    fn at_confidence_floor_is_classified() {
        assert_eq!(
            classifier().classify("No-Helmet", 0.40),
            SafetyCategory::Unsafe
        );
    }

    #[test]
    fn known_labels_map_to_their_sets() {
        let c = classifier();
        assert_eq!(c.classify("Helmet", 0.9), SafetyCategory::Safe);
        assert_eq!(c.classify("no_vest", 0.9), SafetyCategory::Unsafe);
    }

    #[test]
    fn unknown_label_is_unrecognized_not_safe() {
        assert_eq!(
            classifier().classify("forklift", 0.9),
            SafetyCategory::Unrecognized
        );
    }
}
