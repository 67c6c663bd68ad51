use crate::feed::detection::Detection;
use crate::pipeline::classify::{Classifier, SafetyCategory};
use crate::prelude::MonitorConfig;
use serde::{Deserialize, Serialize};

/// Descriptor for one unsafe detection within a frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    pub label: String,
    pub confidence: f32,
}

/// Per-frame reduction of the detection list.
///
/// Invariant: `any_unsafe` is true exactly when `violations` is non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameVerdict {
    pub any_unsafe: bool,
    pub violations: Vec<Violation>,
    /// Labels seen above the floor but in neither configured set, kept
    /// for display only.
    pub unrecognized: Vec<String>,
}

/// Reduces one frame's detections into a [`FrameVerdict`]. Pure per-frame
/// pass, detection order preserved, no state carried between frames.
pub struct FrameAggregator {
    classifier: Classifier,
}

impl FrameAggregator {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            classifier: Classifier::new(config),
        }
    }

    pub fn aggregate(&self, detections: &[Detection]) -> FrameVerdict {
        let mut verdict = FrameVerdict::default();
        for det in detections {
            match self.classifier.classify(&det.label, det.confidence) {
                SafetyCategory::Unsafe => verdict.violations.push(Violation {
                    label: det.label.clone(),
                    confidence: det.confidence,
                }),
                SafetyCategory::Unrecognized => {
                    verdict.unrecognized.push(det.label.clone())
                }
                SafetyCategory::Safe | SafetyCategory::Ignored => {}
            }
        }
        verdict.any_unsafe = !verdict.violations.is_empty();
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::detection::BoundingBox;

    fn det(label: &str, conf: f32) -> Detection {
        Detection::new(label, conf, BoundingBox::default())
    }

    #[test]
    fn empty_frame_yields_secure_verdict() {
        let agg = FrameAggregator::new(&MonitorConfig::default());
        let verdict = agg.aggregate(&[]);
        assert!(!verdict.any_unsafe);
        assert!(verdict.violations.is_empty());
    }

    #[test]
    fn unsafe_detections_collected_in_detector_order() {
        let agg = FrameAggregator::new(&MonitorConfig::default());
        let verdict = agg.aggregate(&[
            det("No-Vest", 0.8),
            det("Helmet", 0.9),
            det("No-Helmet", 0.7),
        ]);
        assert!(verdict.any_unsafe);
        let labels: Vec<_> = verdict.violations.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["No-Vest", "No-Helmet"]);
    }

    #[test]
    fn low_confidence_violation_never_counts() {
        let agg = FrameAggregator::new(&MonitorConfig::default());
        let verdict = agg.aggregate(&[det("No-Helmet", 0.39)]);
        assert!(!verdict.any_unsafe);
        assert!(verdict.violations.is_empty());
    }

    #[test]
    fn unrecognized_labels_surface_without_alarming() {
        let agg = FrameAggregator::new(&MonitorConfig::default());
        let verdict = agg.aggregate(&[det("forklift", 0.95)]);
        assert!(!verdict.any_unsafe);
        assert_eq!(verdict.unrecognized, vec!["forklift".to_string()]);
    }

    #[test]
    fn any_unsafe_tracks_violations_invariant() {
        let agg = FrameAggregator::new(&MonitorConfig::default());
        for dets in [vec![], vec![det("person", 0.5)], vec![det("vest", 0.5)]] {
            let verdict = agg.aggregate(&dets);
            assert_eq!(verdict.any_unsafe, !verdict.violations.is_empty());
        }
    }
}
