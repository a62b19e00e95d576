//! Per-stage elapsed time reporting.

use std::time::Instant;

/// Reports how long each pipeline stage took since the previous lap.
///
/// A disabled timer does nothing, so callers can thread one through
/// unconditionally.
#[derive(Debug)]
pub struct StageTimer {
    last: Option<Instant>,
}

impl StageTimer {
    /// A timer that logs every lap.
    pub fn enabled() -> Self {
        Self {
            last: Some(Instant::now()),
        }
    }

    /// A timer that ignores laps.
    pub const fn disabled() -> Self {
        Self { last: None }
    }

    /// Create a timer from a flag.
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self::enabled()
        } else {
            Self::disabled()
        }
    }

    /// Whether laps are logged.
    pub const fn is_enabled(&self) -> bool {
        self.last.is_some()
    }

    /// Log the time spent on `stage` and restart the clock.
    ///
    /// Returns the elapsed milliseconds when enabled.
    pub fn lap(&mut self, stage: &str) -> Option<f64> {
        let last = self.last.as_mut()?;
        let now = Instant::now();
        let elapsed_ms = now.duration_since(*last).as_secs_f64() * 1000.0;
        *last = now;
        tracing::info!(stage, elapsed_ms, "stage finished");
        Some(elapsed_ms)
    }
}

impl Default for StageTimer {
    fn default() -> Self {
        Self::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_timer_reports_nothing() {
        let mut timer = StageTimer::disabled();
        assert!(!timer.is_enabled());
        assert!(timer.lap("scope").is_none());
    }

    #[test]
    fn enabled_timer_reports_non_negative_laps() {
        let mut timer = StageTimer::new(true);
        let first = timer.lap("scope").unwrap();
        let second = timer.lap("expand").unwrap();
        assert!(first >= 0.0);
        assert!(second >= 0.0);
    }
}
