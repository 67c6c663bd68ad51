pub mod aggregate;
pub mod alarm;
pub mod classify;
pub mod event_log;
pub mod persistence;

pub use aggregate::{FrameAggregator, FrameVerdict, Violation};
pub use alarm::AlarmClock;
pub use classify::{Classifier, SafetyCategory};
pub use event_log::{EventLog, EventLogEntry};
pub use persistence::{PersistenceEngine, SiteStatus};
