/// Frame-rate estimate from inter-frame elapsed time.
///
/// The first tick, and any tick whose elapsed time rounds to zero (clock
/// resolution ties), returns the previous rate instead of dividing by the
/// zero interval.
pub struct FrameRateMeter {
    last_tick: Option<f64>,
    last_rate: f32,
}

impl FrameRateMeter {
    pub fn new() -> Self {
        Self {
            last_tick: None,
            last_rate: 0.0,
        }
    }

    pub fn tick(&mut self, now: f64) -> f32 {
        if let Some(last) = self.last_tick {
            let elapsed = now - last;
            if elapsed > 0.0 {
                self.last_rate = (1.0 / elapsed) as f32;
            }
        }
        self.last_tick = Some(now);
        self.last_rate
    }

    pub fn current(&self) -> f32 {
        self.last_rate
    }
}

impl Default for FrameRateMeter {
    fn default() -> Self {
        Self::new()
    }
}
