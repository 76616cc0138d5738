// src/utilities/curve.rs
//
// piecewise-linear value mapping over ordered control points
// clamps to the first/last output outside the defined domain

#[derive(Debug, Clone)]
pub struct Curve {
    points: Vec<(f32, f32)>,
}

impl Curve {
    /// Control points must be ordered by ascending input value.
    pub fn new(points: Vec<(f32, f32)>) -> Self {
        debug_assert!(
            points.windows(2).all(|w| w[0].0 <= w[1].0),
            "curve control points must be ordered by input"
        );
        Self { points }
    }

    pub fn sample(&self, t: f32) -> f32 {
        let first = match self.points.first() {
            Some(p) => p,
            None => return 0.0,
        };
        let last = self.points.last().unwrap();

        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }

        for w in self.points.windows(2) {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            if t <= x1 {
                let span = x1 - x0;
                if span <= f32::EPSILON {
                    return y1;
                }
                let s = (t - x0) / span;
                return y0 + (y1 - y0) * s;
            }
        }

        last.1
    }

    pub fn control_points(&self) -> &[(f32, f32)] {
        &self.points
    }
}
