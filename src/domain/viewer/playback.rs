// SPDX-License-Identifier: MPL-2.0
//! Video playback values.

/// Playback progress, guaranteed to be a finite value within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressFraction(f64);

impl ProgressFraction {
    /// Creates a progress value, clamping to `[0, 1]`. NaN becomes `0`.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Progress of `current` within `duration`.
    ///
    /// A zero, negative or non-finite duration yields `0`.
    #[must_use]
    pub fn from_position(current_secs: f64, duration_secs: f64) -> Self {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Self(0.0);
        }
        Self::new(current_secs / duration_secs)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Position in seconds for a media of the given duration.
    #[must_use]
    pub fn position_in(self, duration_secs: f64) -> f64 {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return 0.0;
        }
        self.0 * duration_secs
    }
}

/// Playback status of the opened video.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    pub is_playing: bool,
    pub is_muted: bool,
    pub progress: ProgressFraction,
}

impl Default for Playback {
    /// Videos open paused, muted, at the start.
    fn default() -> Self {
        Self {
            is_playing: false,
            is_muted: true,
            progress: ProgressFraction::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_duration_yields_zero_progress() {
        let progress = ProgressFraction::from_position(0.0, 0.0);
        assert_eq!(progress.value(), 0.0);
        assert!(progress.value().is_finite());
    }

    #[test]
    fn non_finite_duration_yields_zero_progress() {
        assert_eq!(ProgressFraction::from_position(3.0, f64::NAN).value(), 0.0);
        assert_eq!(ProgressFraction::from_position(3.0, f64::INFINITY).value(), 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_relative_eq!(ProgressFraction::new(1.5).value(), 1.0);
        assert_relative_eq!(ProgressFraction::new(-0.5).value(), 0.0);
        assert_relative_eq!(ProgressFraction::new(f64::NAN).value(), 0.0);
        assert_relative_eq!(ProgressFraction::from_position(12.0, 10.0).value(), 1.0);
    }

    #[test]
    fn position_in_scales_by_duration() {
        assert_relative_eq!(ProgressFraction::new(0.25).position_in(40.0), 10.0);
        assert_relative_eq!(ProgressFraction::new(0.25).position_in(0.0), 0.0);
    }

    #[test]
    fn default_playback_is_paused_and_muted() {
        let playback = Playback::default();
        assert!(!playback.is_playing);
        assert!(playback.is_muted);
        assert_eq!(playback.progress.value(), 0.0);
    }
}
