use crate::feed::detection::{Detection, FramePayload};
use crate::prelude::PipelineResult;

/// Produces frames on demand; `None` means the source is exhausted and the
/// processing loop should terminate.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<FramePayload>;
}

/// Runs inference for one frame. May return zero, one, or many detections,
/// with no temporal identity between frames.
pub trait Detector {
    fn detect(&mut self, frame: &FramePayload) -> PipelineResult<Vec<Detection>>;
}

/// Fire-and-forget audio alert. Best-effort: no return value, no delivery
/// confirmation, and implementations must never block or panic the caller.
pub trait AlarmSink {
    fn trigger(&self);
}
