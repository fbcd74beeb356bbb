use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// Source of "now" for elapsed-time computation.
///
/// The builder is generic over the clock so that tests and replays can pin
/// time without touching the system clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    /// Move the clock forward (or backward, for negative values) by `millis`.
    pub fn advance(&self, millis: i64) {
        let mut guard = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *guard = *guard + Duration::milliseconds(millis);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Milliseconds between `start` and `now`.
///
/// A clock that appears to run backwards yields 0 rather than a negative
/// duration; the anomaly is reported as a warning.
pub fn elapsed_millis(start: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = (now - start).num_milliseconds();
    if millis < 0 {
        tracing::warn!(
            start = %start.to_rfc3339(),
            now = %now.to_rfc3339(),
            skew_ms = millis,
            "clock went backwards, clamping response time to 0"
        );
        return 0;
    }
    millis as u64
}
