// SPDX-License-Identifier: MPL-2.0
//! Slide transition between two images.
//!
//! A transition is an explicit `Idle → Running → Idle` state machine. It is
//! started by an accepted navigation, advanced by frame ticks, and completed
//! either when a tick lands at or past the configured duration or when
//! [`Transition::finish`] is called. While it runs the viewer drops further
//! navigation requests.

use super::navigation::Direction;
use std::time::{Duration, Instant};

/// Interval between animation frames while a transition runs.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Transition {
    #[default]
    Idle,
    Running {
        direction: Direction,
        started_at: Instant,
        /// Eased progress as of the last tick, in `0.0..=1.0`.
        progress: f32,
    },
}

impl Transition {
    #[must_use]
    pub fn begin(direction: Direction, now: Instant) -> Self {
        Transition::Running {
            direction,
            started_at: now,
            progress: 0.0,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, Transition::Running { .. })
    }

    /// Direction of the running transition, `None` when idle.
    #[must_use]
    pub fn direction(&self) -> Direction {
        match self {
            Transition::Idle => Direction::None,
            Transition::Running { direction, .. } => *direction,
        }
    }

    /// Eased progress of the entering image; `1.0` when idle.
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self {
            Transition::Idle => 1.0,
            Transition::Running { progress, .. } => *progress,
        }
    }

    /// Advances the animation to `now`.
    ///
    /// Returns `true` if this tick completed the transition.
    pub fn tick(&mut self, now: Instant, duration: Duration) -> bool {
        let Transition::Running {
            started_at,
            progress,
            ..
        } = self
        else {
            return false;
        };

        let elapsed = now.saturating_duration_since(*started_at);
        if duration.is_zero() || elapsed >= duration {
            *self = Transition::Idle;
            return true;
        }

        *progress = ease_out_cubic(elapsed.as_secs_f32() / duration.as_secs_f32());
        false
    }

    /// Completes the transition immediately.
    pub fn finish(&mut self) {
        *self = Transition::Idle;
    }
}

/// Cubic ease-out: fast start, gentle landing.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(400);

    #[test]
    fn idle_is_complete() {
        let transition = Transition::default();
        assert!(!transition.is_running());
        assert_eq!(transition.progress(), 1.0);
        assert_eq!(transition.direction(), Direction::None);
    }

    #[test]
    fn tick_before_duration_keeps_running_and_advances() {
        let start = Instant::now();
        let mut transition = Transition::begin(Direction::Forward, start);

        assert!(!transition.tick(start + Duration::from_millis(100), DURATION));
        assert!(transition.is_running());
        let early = transition.progress();

        assert!(!transition.tick(start + Duration::from_millis(300), DURATION));
        assert!(transition.progress() > early);
        assert!(transition.progress() < 1.0);
        assert_eq!(transition.direction(), Direction::Forward);
    }

    #[test]
    fn tick_at_duration_completes() {
        let start = Instant::now();
        let mut transition = Transition::begin(Direction::Backward, start);
        assert!(transition.tick(start + DURATION, DURATION));
        assert_eq!(transition, Transition::Idle);
        assert!(!transition.tick(start + DURATION * 2, DURATION));
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let start = Instant::now();
        let mut transition = Transition::begin(Direction::Forward, start);
        assert!(transition.tick(start, Duration::ZERO));
    }

    #[test]
    fn finish_returns_to_idle() {
        let mut transition = Transition::begin(Direction::Forward, Instant::now());
        transition.finish();
        assert!(!transition.is_running());
    }

    #[test]
    fn ease_out_is_monotonic_and_bounded() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        let mut last = 0.0;
        for step in 1..=10 {
            let value = ease_out_cubic(step as f32 / 10.0);
            assert!(value >= last);
            last = value;
        }
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
