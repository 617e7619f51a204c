//! Damped harmonic spring used for physical motion
//!
//! Springs are either described physically (stiffness, damping, mass) or
//! perceptually (duration, bounce). The perceptual form is converted to a
//! physical one by searching for the undamped frequency whose envelope has
//! decayed to near zero by the requested duration.

use std::time::Duration;

/// Settled-envelope threshold used while searching for a spring frequency.
const SAFE_MIN: f64 = 0.001;
const MIN_DURATION_S: f64 = 0.01;
const MAX_DURATION_S: f64 = 10.0;
const MIN_DAMPING_RATIO: f64 = 0.05;
const MAX_DAMPING_RATIO: f64 = 1.0;
const ROOT_ITERATIONS: usize = 12;

/// Step and horizon for estimating when a spring comes to rest.
const SETTLE_STEP_S: f64 = 0.05;
const SETTLE_LIMIT_S: f64 = 20.0;

/// Displacement below which a spring is treated as fine-grained (opacity-like).
const GRANULAR_SCALE: f64 = 5.0;

/// Physical parameters used when a spring only names some of them.
pub const DEFAULT_STIFFNESS: f32 = 100.0;
pub const DEFAULT_DAMPING: f32 = 10.0;
pub const DEFAULT_MASS: f32 = 1.0;

/// Perceptual parameters used when a spring names neither physics nor duration.
pub const DEFAULT_DURATION_S: f32 = 0.8;
pub const DEFAULT_BOUNCE: f32 = 0.25;

/// How a spring is described in a preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpringConfig {
    Physics {
        stiffness: f32,
        damping: f32,
        mass: f32,
    },
    /// `duration` in seconds; `bounce` 0 is critically damped, 1 barely damped.
    Duration { duration: f32, bounce: f32 },
}

impl SpringConfig {
    pub fn resolve(&self) -> SpringParams {
        match *self {
            SpringConfig::Physics {
                stiffness,
                damping,
                mass,
            } => SpringParams {
                stiffness: stiffness as f64,
                damping: damping as f64,
                mass: mass as f64,
            },
            SpringConfig::Duration { duration, bounce } => {
                find_spring(duration as f64, bounce as f64, 0.0)
            }
        }
    }
}

/// Resolved physical description of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringParams {
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn undamped_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS as f64,
            damping: DEFAULT_DAMPING as f64,
            mass: DEFAULT_MASS as f64,
        }
    }
}

fn damped_frequency(undamped: f64, damping_ratio: f64) -> f64 {
    undamped * (1.0 - damping_ratio * damping_ratio).sqrt()
}

/// Convert a perceptual (duration, bounce) spring into physical parameters.
fn find_spring(duration: f64, bounce: f64, velocity: f64) -> SpringParams {
    let ratio = (1.0 - bounce).clamp(MIN_DAMPING_RATIO, MAX_DAMPING_RATIO);
    let duration = duration.clamp(MIN_DURATION_S, MAX_DURATION_S);

    let envelope = |freq: f64| -> f64 {
        if ratio < 1.0 {
            let decay = freq * ratio;
            let a = decay - velocity;
            let b = damped_frequency(freq, ratio);
            SAFE_MIN - (a / b) * (-decay * duration).exp()
        } else {
            let a = (-freq * duration).exp();
            let b = (freq - velocity) * duration + 1.0;
            -SAFE_MIN + a * b
        }
    };

    let derivative = |freq: f64| -> f64 {
        if ratio < 1.0 {
            let decay = freq * ratio;
            let delta = decay * duration;
            let d = delta * velocity + velocity;
            let e = ratio * ratio * freq * freq * duration;
            let f = (-delta).exp();
            let g = damped_frequency(freq * freq, ratio);
            let factor = if -envelope(freq) + SAFE_MIN > 0.0 {
                -1.0
            } else {
                1.0
            };
            factor * ((d - e) * f) / g
        } else {
            let a = (-freq * duration).exp();
            let b = (velocity - freq) * duration * duration;
            a * b
        }
    };

    let mut freq = 5.0 / duration;
    for _ in 1..ROOT_ITERATIONS {
        freq -= envelope(freq) / derivative(freq);
    }

    if !freq.is_finite() {
        log::debug!(
            "spring search diverged for duration {duration}s bounce {bounce}, using defaults"
        );
        return SpringParams::default();
    }

    let mass = DEFAULT_MASS as f64;
    let stiffness = freq * freq * mass;
    SpringParams {
        stiffness,
        damping: ratio * 2.0 * (mass * stiffness).sqrt(),
        mass,
    }
}

/// A spring travelling from one value to another, sampled analytically.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    params: SpringParams,
    from: f64,
    to: f64,
    initial_velocity: f64,
    rest_speed: f64,
    rest_delta: f64,
    settle: Duration,
}

impl Spring {
    /// `velocity` is in units per second, carried over from an interrupted motion.
    pub fn new(params: SpringParams, from: f32, to: f32, velocity: f32) -> Self {
        let (from, to) = (from as f64, to as f64);
        let granular = (to - from).abs() < GRANULAR_SCALE;
        let (rest_speed, rest_delta) = if granular { (0.01, 0.005) } else { (2.0, 0.5) };

        let mut spring = Self {
            params,
            from,
            to,
            initial_velocity: velocity as f64,
            rest_speed,
            rest_delta,
            settle: Duration::ZERO,
        };
        spring.settle = Duration::from_secs_f64(spring.estimate_settle_time());
        spring
    }

    /// Override the speed below which the spring may come to rest.
    pub fn with_rest_speed(mut self, rest_speed: f32) -> Self {
        self.rest_speed = rest_speed as f64;
        self.settle = Duration::from_secs_f64(self.estimate_settle_time());
        self
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    pub fn target(&self) -> f32 {
        self.to as f32
    }

    /// Time after which the spring reports exactly its target.
    pub fn settle_time(&self) -> Duration {
        self.settle
    }

    pub fn position(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.settle {
            return self.to as f32;
        }
        (self.to + self.displacement(elapsed.as_secs_f64())) as f32
    }

    pub fn velocity(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.settle {
            return 0.0;
        }
        self.raw_velocity(elapsed.as_secs_f64()) as f32
    }

    /// Offset from the target at time `t`.
    fn displacement(&self, t: f64) -> f64 {
        let d0 = self.from - self.to;
        let v0 = self.initial_velocity;
        let ratio = self.params.damping_ratio();
        let omega = self.params.undamped_frequency();

        if (ratio - 1.0).abs() < 1e-6 {
            (-omega * t).exp() * (d0 + (v0 + omega * d0) * t)
        } else if ratio < 1.0 {
            let damped = damped_frequency(omega, ratio);
            let envelope = (-ratio * omega * t).exp();
            envelope
                * (d0 * (damped * t).cos()
                    + (v0 + ratio * omega * d0) / damped * (damped * t).sin())
        } else {
            let spread = omega * (ratio * ratio - 1.0).sqrt();
            let fast = -ratio * omega - spread;
            let slow = -ratio * omega + spread;
            let a = (v0 - fast * d0) / (slow - fast);
            let b = d0 - a;
            a * (slow * t).exp() + b * (fast * t).exp()
        }
    }

    fn raw_velocity(&self, t: f64) -> f64 {
        const H: f64 = 1e-4;
        (self.displacement(t + H) - self.displacement(t - H)) / (2.0 * H)
    }

    fn at_rest(&self, t: f64) -> bool {
        self.raw_velocity(t).abs() <= self.rest_speed
            && self.displacement(t).abs() <= self.rest_delta
    }

    fn estimate_settle_time(&self) -> f64 {
        let invalid = !(self.params.stiffness > 0.0 && self.params.mass > 0.0)
            || self.params.damping < 0.0;
        if invalid {
            return 0.0;
        }
        let mut t = 0.0;
        while t < SETTLE_LIMIT_S {
            if self.at_rest(t) {
                return t;
            }
            t += SETTLE_STEP_S;
        }
        SETTLE_LIMIT_S
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    fn peak(spring: &Spring) -> f32 {
        (0..300)
            .map(|step| spring.position(secs(step as f64 / 100.0)))
            .fold(f32::MIN, f32::max)
    }

    #[test]
    fn duration_spring_matches_requested_bounce() {
        let params = SpringConfig::Duration {
            duration: 1.0,
            bounce: 0.2,
        }
        .resolve();
        assert!((params.damping_ratio() - 0.8).abs() < 1e-6);
        assert_eq!(params.mass, 1.0);
        assert!(params.stiffness > 60.0 && params.stiffness < 100.0);
    }

    #[test]
    fn duration_spring_settles_near_requested_duration() {
        let params = SpringConfig::Duration {
            duration: 1.0,
            bounce: 0.2,
        }
        .resolve();
        let spring = Spring::new(params, 0.0, 294.0, 0.0);
        let settle = spring.settle_time();
        assert!(
            settle > secs(0.6) && settle < secs(1.6),
            "settled after {settle:?}"
        );
        assert_eq!(spring.position(settle), 294.0);
        assert_eq!(spring.velocity(settle + secs(1.0)), 0.0);
    }

    #[test]
    fn bouncy_spring_overshoots() {
        let params = SpringConfig::Duration {
            duration: 1.0,
            bounce: 0.5,
        }
        .resolve();
        let spring = Spring::new(params, 0.0, 294.0, 0.0);
        assert!(peak(&spring) > 294.0 + 20.0);
    }

    #[test]
    fn overdamped_spring_never_overshoots() {
        let params = SpringConfig::Physics {
            stiffness: 100.0,
            damping: 10.0,
            mass: 0.2,
        }
        .resolve();
        assert!(params.damping_ratio() > 1.0);
        let spring = Spring::new(params, 0.0, 100.0, 0.0);
        assert!(peak(&spring) <= 100.0 + 1e-3);
        assert!(spring.settle_time() <= secs(1.0));
    }

    #[test]
    fn starts_at_origin_with_carried_velocity() {
        let params = SpringConfig::Physics {
            stiffness: 500.0,
            damping: 25.0,
            mass: 1.0,
        }
        .resolve();
        let spring = Spring::new(params, 294.0, 0.0, -120.0);
        assert!((spring.position(Duration::ZERO) - 294.0).abs() < 1e-3);
        assert!((spring.velocity(Duration::ZERO) + 120.0).abs() < 0.5);
    }

    #[test]
    fn critically_damped_spring_approaches_monotonically() {
        let params = SpringConfig::Duration {
            duration: 0.5,
            bounce: 0.0,
        }
        .resolve();
        assert!((params.damping_ratio() - 1.0).abs() < 1e-6);
        let spring = Spring::new(params, 0.0, 50.0, 0.0);
        let mut previous = 0.0;
        for step in 0..200 {
            let value = spring.position(secs(step as f64 / 100.0));
            assert!(value + 1e-3 >= previous);
            previous = value;
        }
    }

    #[test]
    fn stationary_spring_is_settled_immediately() {
        let spring = Spring::new(SpringParams::default(), 3.0, 3.0, 0.0);
        assert_eq!(spring.settle_time(), Duration::ZERO);
        assert_eq!(spring.position(secs(0.3)), 3.0);
    }

    #[test]
    fn looser_rest_speed_settles_sooner() {
        let params = SpringConfig::Physics {
            stiffness: 500.0,
            damping: 25.0,
            mass: 1.0,
        }
        .resolve();
        let strict = Spring::new(params, 0.0, 294.0, 0.0);
        let loose = Spring::new(params, 0.0, 294.0, 0.0).with_rest_speed(10.0);
        assert!(loose.settle_time() <= strict.settle_time());
        assert_eq!(loose.position(loose.settle_time()), 294.0);
    }
}
