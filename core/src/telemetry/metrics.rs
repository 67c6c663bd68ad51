use std::sync::Mutex;

/// Process-lifetime counters read by the dashboard snapshot.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    frames_processed: usize,
    alarms_fired: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                frames_processed: 0,
                alarms_fired: 0,
            }),
        }
    }

    pub fn record_frame(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.frames_processed += 1;
        }
    }

    pub fn record_alarm(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.alarms_fired += 1;
        }
    }

    /// Returns (frames processed, alarms fired).
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.frames_processed, metrics.alarms_fired)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
