use crate::pipeline::aggregate::Violation;
use crate::telemetry::log::LogManager;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Rolling log holds at most this many entries; oldest evicted first.
pub const EVENT_LOG_CAPACITY: usize = 10;

/// One timestamped violation record for the dashboard sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

/// Bounded rolling log of breach events with adjacent deduplication: an
/// entry is appended only when its message differs from the most recent
/// one, so an unbroken run of the same violation produces a single line.
/// The same message can reappear after a different message interrupts it.
pub struct EventLog {
    entries: VecDeque<EventLogEntry>,
    logger: LogManager,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
            logger: LogManager::new(),
        }
    }

    /// Records the frame's first violation, if it would not duplicate the
    /// most recent entry. Returns the appended entry, if any. Callers only
    /// invoke this while the site status is breach.
    pub fn log_if_new(
        &mut self,
        now: DateTime<Local>,
        violations: &[Violation],
    ) -> Option<&EventLogEntry> {
        let first = violations.first()?;
        let message = format!(
            "[{}] VIOLATION: {}",
            now.format("%H:%M:%S"),
            first.label
        );

        if self
            .entries
            .back()
            .is_some_and(|last| last.message == message)
        {
            return None;
        }

        if self.entries.len() == EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.logger.alert(&message);
        self.entries.push_back(EventLogEntry {
            timestamp: now,
            message,
        });
        self.entries.back()
    }

    pub fn entries(&self) -> impl Iterator<Item = &EventLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 1, 15, 9, 30, secs)
            .single()
            .unwrap()
    }

    fn violation(label: &str) -> Vec<Violation> {
        vec![Violation {
            label: label.into(),
            confidence: 0.8,
        }]
    }

    #[test]
    fn empty_violation_list_logs_nothing() {
        let mut log = EventLog::new();
        assert!(log.log_if_new(at(0), &[]).is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn message_uses_first_violation_only() {
        let mut log = EventLog::new();
        let mut violations = violation("No-Helmet");
        violations.extend(violation("No-Vest"));
        let entry = log.log_if_new(at(5), &violations).unwrap();
        assert_eq!(entry.message, "[09:30:05] VIOLATION: No-Helmet");
    }

    #[test]
    fn adjacent_duplicates_collapse() {
        let mut log = EventLog::new();
        assert!(log.log_if_new(at(1), &violation("No-Helmet")).is_some());
        assert!(log.log_if_new(at(1), &violation("No-Helmet")).is_none());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn same_message_returns_after_interruption() {
        let mut log = EventLog::new();
        log.log_if_new(at(1), &violation("No-Helmet"));
        log.log_if_new(at(2), &violation("No-Vest"));
        log.log_if_new(at(1), &violation("No-Helmet"));
        let helmet_lines = log
            .entries()
            .filter(|e| e.message.contains("No-Helmet"))
            .count();
        assert_eq!(helmet_lines, 2);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let mut log = EventLog::new();
        for i in 0..11u32 {
            log.log_if_new(at(i), &violation(&format!("label-{i}")));
        }
        assert_eq!(log.len(), EVENT_LOG_CAPACITY);
        let first = log.entries().next().unwrap();
        assert!(first.message.contains("label-1"));
        assert!(!log.entries().any(|e| e.message.contains("label-0")));
    }
}
