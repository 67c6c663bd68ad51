use chrono::Local;
use watchcore::feed::{AlarmSink, Detection};
use watchcore::pipeline::{
    AlarmClock, EventLog, FrameAggregator, FrameVerdict, PersistenceEngine, SiteStatus,
};
use watchcore::prelude::MonitorConfig;
use watchcore::telemetry::{FrameRateMeter, MetricsRecorder};

/// Outcome of pushing one frame through the pipeline.
pub struct FrameReport {
    pub status: SiteStatus,
    pub verdict: FrameVerdict,
    pub fps: f32,
    pub alarm_fired: bool,
}

/// Drives one frame at a time through aggregate, persistence, event log
/// and alarm gate. Owns all cross-frame state; single writer, created at
/// startup and never externally reset.
pub struct Runner {
    aggregator: FrameAggregator,
    persistence: PersistenceEngine,
    event_log: EventLog,
    alarm: AlarmClock,
    fps: FrameRateMeter,
    metrics: MetricsRecorder,
    sink: Box<dyn AlarmSink + Send>,
}

impl Runner {
    pub fn new(config: &MonitorConfig, sink: Box<dyn AlarmSink + Send>) -> Self {
        Self {
            aggregator: FrameAggregator::new(config),
            persistence: PersistenceEngine::new(config.persistence_threshold),
            event_log: EventLog::new(),
            alarm: AlarmClock::new(config.beep_cooldown_secs),
            fps: FrameRateMeter::new(),
            metrics: MetricsRecorder::new(),
            sink,
        }
    }

    /// `now` is monotonic seconds since the loop started; it feeds the
    /// frame-rate meter and the alarm cooldown, never the wall-clock log.
    pub fn process_frame(&mut self, detections: &[Detection], now: f64) -> FrameReport {
        let fps = self.fps.tick(now);
        let verdict = self.aggregator.aggregate(detections);
        let status = self.persistence.observe(&verdict);

        let mut alarm_fired = false;
        if status == SiteStatus::Breach {
            self.event_log.log_if_new(Local::now(), &verdict.violations);
            if self.alarm.try_fire(now) {
                self.sink.trigger();
                self.metrics.record_alarm();
                alarm_fired = true;
            }
        }
        self.metrics.record_frame();

        FrameReport {
            status,
            verdict,
            fps,
            alarm_fired,
        }
    }

    pub fn status(&self) -> SiteStatus {
        self.persistence.status()
    }

    /// Event log lines, oldest first, for the dashboard sidebar.
    pub fn event_lines(&self) -> Vec<String> {
        self.event_log.entries().map(|e| e.message.clone()).collect()
    }

    pub fn event_count(&self) -> usize {
        self.event_log.len()
    }

    /// Returns (frames processed, alarms fired).
    pub fn metrics(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }

    pub fn fps(&self) -> f32 {
        self.fps.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use watchcore::feed::detection::BoundingBox;

    struct CountingSink(Arc<AtomicUsize>);

    impl AlarmSink for CountingSink {
        fn trigger(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn runner_with_counter(threshold: u32, cooldown: f64) -> (Runner, Arc<AtomicUsize>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let config = MonitorConfig {
            persistence_threshold: threshold,
            beep_cooldown_secs: cooldown,
            ..MonitorConfig::default()
        };
        let runner = Runner::new(&config, Box::new(CountingSink(fired.clone())));
        (runner, fired)
    }

    fn unsafe_frame() -> Vec<Detection> {
        vec![Detection::new("No-Helmet", 0.9, BoundingBox::default())]
    }

    #[test]
    fn six_unsafe_frames_breach_then_one_safe_frame_recovers() {
        let (mut runner, _) = runner_with_counter(5, 3.0);
        let mut statuses = Vec::new();
        for i in 0..6 {
            statuses.push(runner.process_frame(&unsafe_frame(), i as f64).status);
        }
        statuses.push(runner.process_frame(&[], 6.0).status);
        assert_eq!(
            statuses,
            vec![
                SiteStatus::Secure,
                SiteStatus::Secure,
                SiteStatus::Secure,
                SiteStatus::Secure,
                SiteStatus::Secure,
                SiteStatus::Breach,
                SiteStatus::Secure,
            ]
        );
    }

    #[test]
    fn alarm_fires_once_per_cooldown_window() {
        let (mut runner, fired) = runner_with_counter(0, 3.0);
        // every frame unsafe at 0.5s spacing, breach from the first frame
        for i in 0..8 {
            runner.process_frame(&unsafe_frame(), i as f64 * 0.5);
        }
        // fires at t=0.0 and t=3.0
        assert_eq!(fired.load(Ordering::SeqCst), 2);
        let (frames, alarms) = runner.metrics();
        assert_eq!(frames, 8);
        assert_eq!(alarms, 2);
    }

    #[test]
    fn secure_frames_never_touch_log_or_alarm() {
        let (mut runner, fired) = runner_with_counter(5, 3.0);
        for i in 0..20 {
            let report = runner.process_frame(&[], i as f64);
            assert!(!report.alarm_fired);
        }
        assert_eq!(runner.event_count(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn sustained_breach_logs_one_deduplicated_line() {
        let (mut runner, _) = runner_with_counter(2, 100.0);
        for i in 0..30 {
            runner.process_frame(&unsafe_frame(), i as f64);
        }
        assert_eq!(runner.status(), SiteStatus::Breach);
        // same violation every frame collapses to a single entry
        assert_eq!(runner.event_count(), 1);
        assert!(runner.event_lines()[0].contains("VIOLATION: No-Helmet"));
    }
}
