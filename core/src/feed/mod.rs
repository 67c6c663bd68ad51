pub mod collaborators;
pub mod detection;

pub use collaborators::{AlarmSink, Detector, FrameSource};
pub use detection::{BoundingBox, Detection, FramePayload};
