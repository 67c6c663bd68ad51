use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use watchcore::feed::detection::{BoundingBox, Detection, FramePayload};
use watchcore::feed::{Detector, FrameSource};
use watchcore::prelude::PipelineResult;

/// Configuration for a scripted synthetic detection stream: a compliant
/// worker with one unsafe burst somewhere in the middle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub frames: u64,
    pub burst_start: u64,
    pub burst_frames: u64,
    pub unsafe_label: String,
    pub safe_label: String,
    pub base_confidence: f32,
    pub jitter: f32,
    pub seed: u64,
    pub frame_width: i32,
    pub frame_height: i32,
    pub nominal_fps: f64,
    pub description: Option<String>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            burst_start: 30,
            burst_frames: 12,
            unsafe_label: "No-Helmet".into(),
            safe_label: "Helmet".into(),
            base_confidence: 0.82,
            jitter: 0.05,
            seed: 0,
            frame_width: 1280,
            frame_height: 720,
            nominal_fps: 30.0,
            description: None,
        }
    }
}

impl ScenarioConfig {
    fn in_burst(&self, frame_index: u64) -> bool {
        frame_index >= self.burst_start && frame_index < self.burst_start + self.burst_frames
    }
}

/// Deterministic stand-in for the camera and detector collaborators,
/// driven entirely by the scenario script and a seeded RNG.
pub struct ScriptedFeed {
    config: ScenarioConfig,
    rng: StdRng,
    cursor: u64,
}

impl ScriptedFeed {
    pub fn new(config: ScenarioConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            rng,
            cursor: 0,
        }
    }

    fn jittered_confidence(&mut self) -> f32 {
        let jitter = self.config.jitter;
        let delta = if jitter > 0.0 {
            self.rng.gen_range(-jitter..jitter)
        } else {
            0.0
        };
        (self.config.base_confidence + delta).clamp(0.0, 1.0)
    }

    fn random_box(&mut self) -> BoundingBox {
        let w = self.config.frame_width.max(2);
        let h = self.config.frame_height.max(2);
        let x1 = self.rng.gen_range(0..w / 2);
        let y1 = self.rng.gen_range(0..h / 2);
        let x2 = self.rng.gen_range(x1 + 1..w);
        let y2 = self.rng.gen_range(y1 + 1..h);
        BoundingBox::new(x1, y1, x2, y2)
    }
}

impl FrameSource for ScriptedFeed {
    fn next_frame(&mut self) -> Option<FramePayload> {
        if self.cursor >= self.config.frames {
            return None;
        }
        let index = self.cursor;
        self.cursor += 1;
        let timestamp = index as f64 / self.config.nominal_fps.max(1.0);
        Some(FramePayload::new(index, timestamp))
    }
}

impl Detector for ScriptedFeed {
    fn detect(&mut self, frame: &FramePayload) -> PipelineResult<Vec<Detection>> {
        let label = if self.config.in_burst(frame.frame_index) {
            self.config.unsafe_label.clone()
        } else {
            self.config.safe_label.clone()
        };
        let confidence = self.jittered_confidence();
        let bbox = self.random_box();
        Ok(vec![Detection::new(label, confidence, bbox)])
    }
}
