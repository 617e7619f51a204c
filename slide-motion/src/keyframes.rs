//! Time-based tween through a sequence of evenly spaced keyframes

use std::time::Duration;

use crate::easing::Easing;

/// Plays `values` in order over `duration`, easing every segment separately.
///
/// A plain two-value tween is the degenerate case with a single segment.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTween {
    values: Vec<f32>,
    duration: Duration,
    ease: Easing,
}

impl KeyframeTween {
    /// `values` must not be empty.
    pub fn new(values: Vec<f32>, duration: Duration, ease: Easing) -> Self {
        debug_assert!(!values.is_empty(), "keyframe tween needs at least one value");
        Self {
            values,
            duration,
            ease,
        }
    }

    pub fn between(from: f32, to: f32, duration: Duration, ease: Easing) -> Self {
        Self::new(vec![from, to], duration, ease)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn first(&self) -> f32 {
        self.values.first().copied().unwrap_or_default()
    }

    pub fn last(&self) -> f32 {
        self.values.last().copied().unwrap_or_default()
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    pub fn sample(&self, elapsed: Duration) -> f32 {
        if self.values.len() < 2 || self.is_finished(elapsed) {
            return self.last();
        }

        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let segments = (self.values.len() - 1) as f32;
        let scaled = progress.clamp(0.0, 1.0) * segments;
        let index = (scaled.floor() as usize).min(self.values.len() - 2);
        let local = self.ease.apply(scaled - index as f32);

        let from = self.values[index];
        let to = self.values[index + 1];
        from + (to - from) * local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn passes_through_every_keyframe() {
        let tween = KeyframeTween::new(
            vec![0.0, -20.0, -10.0, 10.0, 0.0],
            ms(500),
            Easing::EaseInOut,
        );
        assert_eq!(tween.sample(ms(0)), 0.0);
        assert!((tween.sample(ms(125)) + 20.0).abs() < 1e-3);
        assert!((tween.sample(ms(250)) + 10.0).abs() < 1e-3);
        assert!((tween.sample(ms(375)) - 10.0).abs() < 1e-3);
        assert_eq!(tween.sample(ms(500)), 0.0);
        assert_eq!(tween.sample(ms(900)), 0.0);
    }

    #[test]
    fn segments_are_eased_independently() {
        let tween = KeyframeTween::new(vec![0.0, 30.0, 0.0], ms(1000), Easing::EaseIn);
        // a quarter of the way through is the middle of the first segment
        let value = tween.sample(ms(250));
        assert!(value > 0.0 && value < 15.0);
    }

    #[test]
    fn zero_duration_jumps_to_the_end() {
        let tween = KeyframeTween::between(1.0, 0.0, Duration::ZERO, Easing::Linear);
        assert_eq!(tween.sample(Duration::ZERO), 0.0);
        assert!(tween.is_finished(Duration::ZERO));
    }

    #[test]
    fn single_value_is_constant() {
        let tween = KeyframeTween::new(vec![0.4], ms(300), Easing::Linear);
        assert_eq!(tween.sample(ms(10)), 0.4);
        assert_eq!(tween.first(), tween.last());
    }
}
