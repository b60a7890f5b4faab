//! Easing functions for timed transitions
//!
//! Provides the curves used by the reveal variants. The page's entrance
//! transition uses a cubic bezier biased toward deceleration so content
//! reads as settling into place.

/// Easing function applied to normalized animation progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Constant rate
    Linear,
    /// Quadratic ease-out (fast start, slow end)
    EaseOut,
    /// Cubic bezier with control points (x1, y1), (x2, y2),
    /// anchored at (0,0) and (1,1) like CSS `cubic-bezier()`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// The decelerating "settle" curve used by the fade-up variant
    pub fn settle() -> Self {
        Easing::CubicBezier(0.22, 1.0, 0.36, 1.0)
    }

    /// Apply the easing to progress `t` in [0, 1]
    ///
    /// Exact at the endpoints: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Evaluate a CSS-style cubic bezier at horizontal position `x`
///
/// Solves for the curve parameter where the bezier's x component equals the
/// input, then returns the y component at that parameter. Newton-Raphson
/// with a bisection fallback for flat regions.
fn cubic_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let t = solve_curve_x(x, x1, x2);
    sample_axis(t, y1, y2)
}

/// One bezier axis: B(t) with anchors 0 and 1, control points c1 and c2
fn sample_axis(t: f32, c1: f32, c2: f32) -> f32 {
    // Horner form of 3*c1*t(1-t)^2 + 3*c2*t^2(1-t) + t^3
    let a = 1.0 + 3.0 * (c1 - c2);
    let b = 3.0 * (c2 - 2.0 * c1);
    let c = 3.0 * c1;
    ((a * t + b) * t + c) * t
}

/// Derivative of one bezier axis
fn sample_axis_derivative(t: f32, c1: f32, c2: f32) -> f32 {
    let a = 1.0 + 3.0 * (c1 - c2);
    let b = 3.0 * (c2 - 2.0 * c1);
    let c = 3.0 * c1;
    (3.0 * a * t + 2.0 * b) * t + c
}

fn solve_curve_x(x: f32, x1: f32, x2: f32) -> f32 {
    // Newton-Raphson is fast when the slope is healthy
    let mut t = x;
    for _ in 0..8 {
        let err = sample_axis(t, x1, x2) - x;
        if err.abs() < 1e-6 {
            return t;
        }
        let d = sample_axis_derivative(t, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        t -= err / d;
    }

    // Bisection fallback when Newton stalls
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    while hi - lo > 1e-6 {
        if sample_axis(t, x1, x2) < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_identity() {
        let e = Easing::Linear;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(0.25), 0.25);
        assert_eq!(e.apply(1.0), 1.0);
    }

    #[test]
    fn test_endpoints_exact() {
        for e in [Easing::Linear, Easing::EaseOut, Easing::settle()] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_input_clamped() {
        let e = Easing::settle();
        assert_eq!(e.apply(-0.5), 0.0);
        assert_eq!(e.apply(1.5), 1.0);
    }

    #[test]
    fn test_settle_decelerates() {
        // Deceleration bias: the curve covers most of its range early
        let e = Easing::settle();
        assert!(e.apply(0.5) > 0.8);
        // And stays monotonic
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = e.apply(i as f32 / 100.0);
            assert!(v >= prev - 1e-4, "not monotonic at step {i}");
            prev = v;
        }
    }

    #[test]
    fn test_ease_out_midpoint() {
        assert!((Easing::EaseOut.apply(0.5) - 0.75).abs() < 1e-6);
    }
}
