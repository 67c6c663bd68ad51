use crate::pipeline::aggregate::FrameVerdict;
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};

/// Stable two-state alarm status. Initial state is `Secure`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SiteStatus {
    Secure,
    Breach,
}

impl SiteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Secure => "SECURE",
            SiteStatus::Breach => "BREACH",
        }
    }
}

/// Hysteresis state machine that debounces the per-frame unsafe signal.
///
/// Asymmetric by design: breach is declared only after the unsafe streak
/// strictly exceeds the persistence threshold, while a single safe frame
/// resets the streak and recovers immediately.
pub struct PersistenceEngine {
    streak: u32,
    threshold: u32,
    status: SiteStatus,
    logger: LogManager,
}

impl PersistenceEngine {
    pub fn new(threshold: u32) -> Self {
        Self {
            streak: 0,
            threshold,
            status: SiteStatus::Secure,
            logger: LogManager::new(),
        }
    }

    /// Folds one frame's verdict into the streak and returns the updated
    /// status. Invariant: status is `Breach` iff `streak > threshold`.
    pub fn observe(&mut self, verdict: &FrameVerdict) -> SiteStatus {
        if verdict.any_unsafe {
            self.streak = self.streak.saturating_add(1);
        } else {
            self.streak = 0;
        }

        let next = if self.streak > self.threshold {
            SiteStatus::Breach
        } else {
            SiteStatus::Secure
        };

        if next != self.status {
            match next {
                SiteStatus::Breach => self
                    .logger
                    .alert(&format!("breach declared after {} unsafe frames", self.streak)),
                SiteStatus::Secure => self.logger.record("site secure"),
            }
        }
        self.status = next;
        next
    }

    pub fn status(&self) -> SiteStatus {
        self.status
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }
}
