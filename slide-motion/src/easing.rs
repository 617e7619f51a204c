//! Easing curves for tweens and keyframe segments

use serde::{Deserialize, Serialize};

const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 12;

/// Easing function types for tweens
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    /// CSS-style cubic Bezier with control points `[x1, y1, x2, y2]`.
    CubicBezier([f32; 4]),
}

impl Easing {
    /// Curve used for non-transform values when no transition is given.
    pub const DEFAULT_VALUE_CURVE: Easing = Easing::CubicBezier([0.25, 0.1, 0.35, 1.0]);

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier([x1, y1, x2, y2]) => cubic_bezier(*x1, *y1, *x2, *y2, t),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            // x control points must stay inside the unit interval for the
            // curve to be a function of time
            Easing::CubicBezier([x1, y1, x2, y2]) => {
                (0.0..=1.0).contains(x1)
                    && (0.0..=1.0).contains(x2)
                    && y1.is_finite()
                    && y2.is_finite()
            }
            _ => true,
        }
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if x1 == y1 && x2 == y2 {
        return t;
    }
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);
    let curve_t = solve_for_x(t as f64, x1, x2);
    bezier_component(curve_t, y1, y2) as f32
}

/// One coordinate of the curve at parameter `t`, with endpoints 0 and 1.
fn bezier_component(t: f64, a1: f64, a2: f64) -> f64 {
    (((1.0 - 3.0 * a2 + 3.0 * a1) * t + (3.0 * a2 - 6.0 * a1)) * t + 3.0 * a1) * t
}

fn solve_for_x(x: f64, x1: f64, x2: f64) -> f64 {
    let mut lower = 0.0;
    let mut upper = 1.0;
    let mut current_t = 0.5;
    for _ in 0..SUBDIVISION_MAX_ITERATIONS {
        current_t = lower + (upper - lower) / 2.0;
        let current_x = bezier_component(current_t, x1, x2) - x;
        if current_x.abs() <= SUBDIVISION_PRECISION {
            break;
        }
        if current_x > 0.0 {
            upper = current_t;
        } else {
            lower = current_t;
        }
    }
    current_t
}
