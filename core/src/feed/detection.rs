use serde::{Deserialize, Serialize};

/// Axis-aligned box in pixel coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// One classified bounding box emitted by the detector for a single frame.
///
/// Detections are ephemeral: produced fresh each frame with no identity
/// carried across frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    pub confidence: f32,
    pub bbox: BoundingBox,
}

impl Detection {
    pub fn new(label: impl Into<String>, confidence: f32, bbox: BoundingBox) -> Self {
        Self {
            label: label.into(),
            confidence,
            bbox,
        }
    }
}

/// Handle for one captured frame as the pipeline sees it.
///
/// Pixel data never enters the core; the detector collaborator owns it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FramePayload {
    pub frame_index: u64,
    pub timestamp: f64,
}

impl FramePayload {
    pub fn new(frame_index: u64, timestamp: f64) -> Self {
        Self {
            frame_index,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_carries_detector_fields() {
        let det = Detection::new("Helmet", 0.91, BoundingBox::new(10, 20, 110, 220));
        assert_eq!(det.label, "Helmet");
        assert_eq!(det.bbox.x2, 110);
    }
}
