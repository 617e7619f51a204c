//! One running animation of one property

use std::time::{Duration, Instant};

use crate::keyframes::KeyframeTween;
use crate::spring::Spring;

/// Window used to estimate the speed of tweens.
const VELOCITY_SAMPLE: Duration = Duration::from_millis(5);

/// Furthest ahead a finish instant is reported, one year.
pub const MAX_SPAN: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// The concrete interpolation a property follows once its delay is over.
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    /// Switch straight to the value.
    Step(f32),
    Tween(KeyframeTween),
    Spring(Spring),
}

impl Motion {
    pub fn value(&self, elapsed: Duration) -> f32 {
        match self {
            Motion::Step(value) => *value,
            Motion::Tween(tween) => tween.sample(elapsed),
            Motion::Spring(spring) => spring.position(elapsed),
        }
    }

    /// Speed in units per second of motion time.
    pub fn velocity(&self, elapsed: Duration) -> f32 {
        match self {
            Motion::Step(_) => 0.0,
            Motion::Spring(spring) => spring.velocity(elapsed),
            Motion::Tween(tween) => {
                if tween.is_finished(elapsed) {
                    return 0.0;
                }
                let earlier = elapsed.saturating_sub(VELOCITY_SAMPLE);
                let span = (elapsed - earlier).as_secs_f32();
                if span <= 0.0 {
                    return 0.0;
                }
                (tween.sample(elapsed) - tween.sample(earlier)) / span
            }
        }
    }

    pub fn final_value(&self) -> f32 {
        match self {
            Motion::Step(value) => *value,
            Motion::Tween(tween) => tween.last(),
            Motion::Spring(spring) => spring.target(),
        }
    }

    /// How long the motion runs, excluding any delay.
    pub fn length(&self) -> Duration {
        match self {
            Motion::Step(_) => Duration::ZERO,
            Motion::Tween(tween) => tween.duration(),
            Motion::Spring(spring) => spring.settle_time(),
        }
    }
}

/// A [`Motion`] anchored in time for a single property.
///
/// Until the delay has passed the property holds `origin`, the value it had
/// when the track was started.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTrack {
    motion: Motion,
    origin: f32,
    started_at: Instant,
    delay: Duration,
    time_scale: f32,
}

impl PropertyTrack {
    /// `time_scale` above 1 plays the track (and its delay) slower.
    pub fn new(
        motion: Motion,
        origin: f32,
        started_at: Instant,
        delay: Duration,
        time_scale: f32,
    ) -> Self {
        Self {
            motion,
            origin,
            started_at,
            delay,
            time_scale,
        }
    }

    /// Motion time elapsed since the delay ended, or `None` while still delayed.
    fn motion_elapsed(&self, now: Instant) -> Option<Duration> {
        let real = now.saturating_duration_since(self.started_at);
        let scaled = if self.time_scale == 1.0 {
            real
        } else {
            Duration::try_from_secs_f64(real.as_secs_f64() / self.time_scale as f64)
                .unwrap_or(Duration::MAX)
        };
        scaled.checked_sub(self.delay)
    }

    pub fn sample(&self, now: Instant) -> f32 {
        match self.motion_elapsed(now) {
            Some(elapsed) => self.motion.value(elapsed),
            None => self.origin,
        }
    }

    /// Current speed in units per wall-clock second.
    pub fn velocity(&self, now: Instant) -> f32 {
        match self.motion_elapsed(now) {
            Some(elapsed) => self.motion.velocity(elapsed) / self.time_scale,
            None => 0.0,
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.motion_elapsed(now)
            .is_some_and(|elapsed| elapsed >= self.motion.length())
    }

    pub fn final_value(&self) -> f32 {
        self.motion.final_value()
    }

    /// Wall-clock instant at which the track reaches its final value.
    ///
    /// Runs longer than [`MAX_SPAN`] are reported as ending at the horizon.
    pub fn finishes_at(&self) -> Instant {
        let nominal = self.delay.saturating_add(self.motion.length());
        let scaled = if self.time_scale == 1.0 {
            nominal
        } else {
            // Padded so sampling at the returned instant sees the track finished.
            let pad = Duration::from_nanos(self.time_scale.ceil() as u64);
            Duration::try_from_secs_f64(nominal.as_secs_f64() * self.time_scale as f64)
                .map_or(Duration::MAX, |scaled| scaled.saturating_add(pad))
        };
        self.started_at
            .checked_add(scaled.min(MAX_SPAN))
            .unwrap_or(self.started_at)
    }
}
