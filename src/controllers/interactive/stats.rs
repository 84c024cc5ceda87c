use std::time::{Duration, Instant};

/// Counts ticks and reports the tick rate once per interval.
#[derive(Debug, Clone)]
pub struct FrameStats {
    interval: Duration,
    window_start: Option<Instant>,
    ticks: u32,
    last_fps: Option<f64>,
}

impl FrameStats {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: None,
            ticks: 0,
            last_fps: None,
        }
    }

    /// Returns the measured rate when an interval has just closed.
    pub fn record_tick(&mut self, now: Instant) -> Option<f64> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return None;
        };

        self.ticks += 1;
        let elapsed = now.saturating_duration_since(start);

        if elapsed < self.interval || elapsed.is_zero() {
            return None;
        }

        let fps = f64::from(self.ticks) / elapsed.as_secs_f64();
        self.window_start = Some(now);
        self.ticks = 0;
        self.last_fps = Some(fps);

        Some(fps)
    }

    #[must_use]
    pub fn last_fps(&self) -> Option<f64> {
        self.last_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_once_per_interval() {
        let mut stats = FrameStats::new(Duration::from_secs(1));
        let start = Instant::now();

        assert_eq!(stats.record_tick(start), None);
        for i in 1..15 {
            assert_eq!(stats.record_tick(start + Duration::from_millis(i * 66)), None);
        }

        let fps = stats.record_tick(start + Duration::from_secs(1)).unwrap();

        assert!((fps - 15.0).abs() < 1e-9);
        assert_eq!(stats.last_fps(), Some(fps));
    }

    #[test]
    fn test_window_restarts_after_report() {
        let mut stats = FrameStats::new(Duration::from_millis(100));
        let start = Instant::now();

        stats.record_tick(start);
        assert!(stats.record_tick(start + Duration::from_millis(100)).is_some());
        assert_eq!(stats.record_tick(start + Duration::from_millis(150)), None);
        assert!(stats.record_tick(start + Duration::from_millis(200)).is_some());
    }

    #[test]
    fn test_zero_interval_never_divides_by_zero() {
        let mut stats = FrameStats::new(Duration::ZERO);
        let start = Instant::now();

        stats.record_tick(start);

        assert_eq!(stats.record_tick(start), None);
    }
}
