// SPDX-License-Identifier: MPL-2.0
//! Wall-clock playback position for videos.
//!
//! Videos are not decoded; the clock advances the nominal position while
//! playing and wraps at the end, producing the time updates the viewer
//! consumes.

use std::time::{Duration, Instant};

/// Interval between time updates while playing.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Default)]
pub struct PlaybackClock {
    position_secs: f64,
    duration_secs: f64,
    /// Instant of the last tick; `None` while paused.
    running_since: Option<Instant>,
}

impl PlaybackClock {
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs: sanitize(duration_secs),
            ..Self::default()
        }
    }

    pub fn play(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    pub fn pause(&mut self) {
        self.running_since = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Jumps to `position_secs`, clamped to the duration.
    pub fn seek(&mut self, position_secs: f64, now: Instant) {
        self.position_secs = sanitize(position_secs).min(self.duration_secs);
        if self.running_since.is_some() {
            self.running_since = Some(now);
        }
    }

    /// Advances to `now` and returns `(position, duration)` in seconds.
    ///
    /// Returns `None` while paused. Past the end, the position wraps to the
    /// start.
    pub fn tick(&mut self, now: Instant) -> Option<(f64, f64)> {
        let since = self.running_since?;
        let elapsed = now.saturating_duration_since(since).as_secs_f64();
        self.running_since = Some(now);

        if self.duration_secs > 0.0 {
            self.position_secs = (self.position_secs + elapsed) % self.duration_secs;
        }
        Some((self.position_secs, self.duration_secs))
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }
}

fn sanitize(secs: f64) -> f64 {
    if secs.is_finite() && secs > 0.0 {
        secs
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn paused_clock_does_not_tick() {
        let mut clock = PlaybackClock::new(10.0);
        assert_eq!(clock.tick(Instant::now()), None);
    }

    #[test]
    fn running_clock_advances() {
        let start = Instant::now();
        let mut clock = PlaybackClock::new(10.0);
        clock.play(start);

        let (position, duration) = clock
            .tick(start + Duration::from_millis(1500))
            .expect("running");
        assert_relative_eq!(position, 1.5, epsilon = 1e-9);
        assert_relative_eq!(duration, 10.0);
    }

    #[test]
    fn position_wraps_at_end() {
        let start = Instant::now();
        let mut clock = PlaybackClock::new(4.0);
        clock.seek(3.0, start);
        clock.play(start);

        let (position, _) = clock.tick(start + Duration::from_secs(2)).expect("running");
        assert_relative_eq!(position, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_duration_stays_at_start() {
        let start = Instant::now();
        let mut clock = PlaybackClock::new(f64::NAN);
        clock.play(start);
        assert_eq!(clock.tick(start + Duration::from_secs(3)), Some((0.0, 0.0)));
    }

    #[test]
    fn seek_clamps_to_duration() {
        let mut clock = PlaybackClock::new(8.0);
        clock.seek(20.0, Instant::now());
        assert_relative_eq!(clock.position_secs(), 8.0);
        clock.seek(-2.0, Instant::now());
        assert_relative_eq!(clock.position_secs(), 0.0);
    }

    #[test]
    fn pause_stops_advancing() {
        let start = Instant::now();
        let mut clock = PlaybackClock::new(10.0);
        clock.play(start);
        clock.tick(start + Duration::from_secs(1));
        clock.pause();
        assert!(!clock.is_running());
        assert_eq!(clock.tick(start + Duration::from_secs(5)), None);
        assert_relative_eq!(clock.position_secs(), 1.0, epsilon = 1e-9);
    }
}
