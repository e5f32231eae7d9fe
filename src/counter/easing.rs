//! Timing curves for the count-up.
//!
//! Curves are CSS-style cubic béziers anchored at (0, 0) and (1, 1), so the
//! counter moves the way the browser would animate a `transition` with the
//! same timing function.

const EPSILON: f64 = 1e-7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// CSS `ease-out`: fast start, slow finish.
    pub const EASE_OUT: Self = Self::new(0.0, 0.0, 0.58, 1.0);

    #[cfg(test)]
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Maps time progress (0.0 to 1.0) to value progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 || t >= 1.0 {
            return t;
        }
        let s = self.solve_for_x(t);
        sample(self.y1, self.y2, s)
    }

    /// Finds the curve parameter whose x equals `x`. Newton first, bisection
    /// when the slope flattens out.
    fn solve_for_x(self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..8 {
            let error = sample(self.x1, self.x2, s) - x;
            if error.abs() < EPSILON {
                return s;
            }
            let derivative = slope(self.x1, self.x2, s);
            if derivative.abs() < 1e-6 {
                break;
            }
            s = (s - error / derivative).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0, 1.0);
        s = x;
        while high - low > EPSILON {
            let current = sample(self.x1, self.x2, s);
            if (current - x).abs() < EPSILON {
                break;
            }
            if current < x {
                low = s;
            } else {
                high = s;
            }
            s = (low + high) / 2.0;
        }
        s
    }
}

fn sample(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn slope(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}
