/// Cooldown gate between audio alarm firings, independent of frame rate.
///
/// Time is threaded in explicitly as monotonic seconds so the gate can be
/// driven deterministically in tests.
pub struct AlarmClock {
    last_fired: Option<f64>,
    cooldown_secs: f64,
}

impl AlarmClock {
    pub fn new(cooldown_secs: f64) -> Self {
        Self {
            last_fired: None,
            cooldown_secs,
        }
    }

    /// Returns true when the alarm may fire, and records the firing time.
    /// A clock that has never fired always fires. Callers only invoke this
    /// while the site status is breach.
    pub fn try_fire(&mut self, now: f64) -> bool {
        let due = match self.last_fired {
            None => true,
            Some(last) => now - last >= self.cooldown_secs,
        };
        if due {
            self.last_fired = Some(now);
        }
        due
    }

    pub fn last_fired(&self) -> Option<f64> {
        self.last_fired
    }
}
