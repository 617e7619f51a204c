//! Transition options and their resolution into concrete motions
//!
//! A [`TransitionSpec`] is the loose option bag a preset carries: a delay,
//! an optional animation type and whichever timing or physics keys the
//! author cared to set. Resolving it for one property and one target picks
//! the actual [`Motion`]:
//!
//! - z-index switches once the delay has elapsed
//! - nothing specified: transforms get a stiff spring, other values a short tween
//! - three or more keyframes always play as a keyframe tween
//! - `type = "spring"` gives a physical spring when any of stiffness, damping
//!   or mass is set, otherwise one derived from duration and bounce
//! - anything else is an eased tween

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::keyframes::KeyframeTween;
use crate::spring::{self, Spring, SpringConfig};
use crate::track::Motion;
use crate::value::{Property, Target};

/// Default spring for transform values animated without a transition.
const DEFAULT_TRANSFORM_STIFFNESS: f32 = 500.0;
const DEFAULT_TRANSFORM_DAMPING: f32 = 25.0;
const DEFAULT_TRANSFORM_REST_SPEED: f32 = 10.0;

/// Longest delay or duration a preset may ask for, in seconds.
pub const MAX_TIMING_S: f32 = 600.0;

/// Default tween length for values animated without a transition.
const DEFAULT_VALUE_DURATION_S: f32 = 0.3;

/// Default length of a keyframe sequence without a transition.
const DEFAULT_KEYFRAMES_DURATION_S: f32 = 0.8;

/// Tween length when a transition names no duration.
const DEFAULT_TWEEN_DURATION_S: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Tween,
    Spring,
}

/// Timing of a preset. All times are in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionSpec {
    pub delay: f32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransitionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounce: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damping: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f32>,
}

impl TransitionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn spring(mut self) -> Self {
        self.kind = Some(TransitionKind::Spring);
        self
    }

    pub fn tween(mut self) -> Self {
        self.kind = Some(TransitionKind::Tween);
        self
    }

    pub fn bounce(mut self, bounce: f32) -> Self {
        self.bounce = Some(bounce);
        self
    }

    pub fn stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = Some(stiffness);
        self
    }

    pub fn damping(mut self, damping: f32) -> Self {
        self.damping = Some(damping);
        self
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn delay_duration(&self) -> Duration {
        secs(self.delay)
    }

    /// True when nothing but (at most) a delay was given.
    pub fn is_unspecified(&self) -> bool {
        self.kind.is_none()
            && self.duration.is_none()
            && self.ease.is_none()
            && self.bounce.is_none()
            && !self.has_physics()
    }

    fn has_physics(&self) -> bool {
        self.stiffness.is_some() || self.damping.is_some() || self.mass.is_some()
    }

    /// Spring description chosen for `type = "spring"`.
    pub fn spring_config(&self) -> SpringConfig {
        if self.has_physics() {
            SpringConfig::Physics {
                stiffness: self.stiffness.unwrap_or(spring::DEFAULT_STIFFNESS),
                damping: self.damping.unwrap_or(spring::DEFAULT_DAMPING),
                mass: self.mass.unwrap_or(spring::DEFAULT_MASS),
            }
        } else {
            SpringConfig::Duration {
                duration: self.duration.unwrap_or(spring::DEFAULT_DURATION_S),
                bounce: self.bounce.unwrap_or(spring::DEFAULT_BOUNCE),
            }
        }
    }

    /// Pick the motion that takes `property` from `origin` to `target`.
    ///
    /// `velocity` is the property's current speed (units per second) and only
    /// matters for springs. Returns `None` for an empty keyframe list.
    pub fn resolve(
        &self,
        property: Property,
        target: &Target,
        origin: f32,
        velocity: f32,
    ) -> Option<Motion> {
        let values = target.values();
        let last = *values.last()?;

        if property.is_discrete() {
            return Some(Motion::Step(last));
        }

        if values.len() > 2 {
            let (duration, ease) = if self.is_unspecified() {
                (DEFAULT_KEYFRAMES_DURATION_S, Easing::EaseInOut)
            } else {
                (
                    self.duration.unwrap_or(DEFAULT_TWEEN_DURATION_S),
                    self.ease.unwrap_or_default(),
                )
            };
            return Some(Motion::Tween(KeyframeTween::new(
                values.to_vec(),
                secs(duration),
                ease,
            )));
        }

        // An explicit two-frame list starts from its first frame, not from
        // wherever the property happens to be.
        let (from, velocity) = match values {
            [first, _] => (*first, 0.0),
            _ => (origin, velocity),
        };

        if self.is_unspecified() {
            return Some(if property.is_transform() {
                let params = SpringConfig::Physics {
                    stiffness: DEFAULT_TRANSFORM_STIFFNESS,
                    damping: DEFAULT_TRANSFORM_DAMPING,
                    mass: spring::DEFAULT_MASS,
                }
                .resolve();
                Motion::Spring(
                    Spring::new(params, from, last, velocity)
                        .with_rest_speed(DEFAULT_TRANSFORM_REST_SPEED),
                )
            } else {
                Motion::Tween(KeyframeTween::between(
                    from,
                    last,
                    secs(DEFAULT_VALUE_DURATION_S),
                    Easing::DEFAULT_VALUE_CURVE,
                ))
            });
        }

        if self.kind == Some(TransitionKind::Spring) {
            let params = self.spring_config().resolve();
            return Some(Motion::Spring(Spring::new(params, from, last, velocity)));
        }

        Some(Motion::Tween(KeyframeTween::between(
            from,
            last,
            secs(self.duration.unwrap_or(DEFAULT_TWEEN_DURATION_S)),
            self.ease.unwrap_or_default(),
        )))
    }

    /// Describe the first problem with these options, if any.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=MAX_TIMING_S).contains(&self.delay) {
            return Err(format!(
                "delay must be within 0..={MAX_TIMING_S} seconds, got {}",
                self.delay
            ));
        }
        if let Some(duration) = self.duration {
            if !(0.0..=MAX_TIMING_S).contains(&duration) {
                return Err(format!(
                    "duration must be within 0..={MAX_TIMING_S} seconds, got {duration}"
                ));
            }
        }
        if let Some(bounce) = self.bounce {
            if !(0.0..=1.0).contains(&bounce) {
                return Err(format!("bounce must be within 0..=1, got {bounce}"));
            }
        }
        if let Some(mass) = self.mass {
            if !(mass.is_finite() && mass > 0.0) {
                return Err(format!("mass must be positive, got {mass}"));
            }
        }
        if let Some(stiffness) = self.stiffness {
            if !(stiffness.is_finite() && stiffness > 0.0) {
                return Err(format!("stiffness must be positive, got {stiffness}"));
            }
        }
        if let Some(damping) = self.damping {
            if !(damping.is_finite() && damping >= 0.0) {
                return Err(format!("damping must be non-negative, got {damping}"));
            }
        }
        if let Some(ease) = self.ease {
            if !ease.is_valid() {
                return Err(format!("invalid easing curve {ease:?}"));
            }
        }
        Ok(())
    }
}

/// Saturates: timings too long for a `Duration` never play.
fn secs(seconds: f32) -> Duration {
    Duration::try_from_secs_f32(seconds.max(0.0)).unwrap_or(Duration::MAX)
}
