use crate::math::{Point3, SAMPLE_EPS};

/// Arclength parameterization of a chain's polyline.
///
/// Maps between arclength fractions in `[0, 1]` and positions or vertex
/// indices, which is how points are carried across two rails of different
/// vertex density.
#[derive(Debug, Clone)]
pub struct ArcLength {
    lengths: Vec<f64>,
    total: f64,
}

impl ArcLength {
    /// Measures the consecutive segment lengths of `points`.
    ///
    /// Fewer than two points yield no segments and a total of zero.
    #[must_use]
    pub fn new(points: &[Point3]) -> Self {
        let lengths: Vec<f64> = points.windows(2).map(|w| (w[1] - w[0]).norm()).collect();
        let total = lengths.iter().sum();
        Self { lengths, total }
    }

    /// Total arclength of the polyline.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Ordered segment lengths.
    #[must_use]
    pub fn segment_lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Position at fraction `u` of the total arclength along `points`.
    ///
    /// `u = 0` is the first point and `u = 1` the last. A degenerate chain
    /// (zero total length) maps every `u` to the first point.
    #[must_use]
    pub fn position_at(&self, points: &[Point3], u: f64) -> Point3 {
        let Some(&first) = points.first() else {
            return Point3::origin();
        };
        if self.total == 0.0 {
            return first;
        }

        let target = u * self.total;
        let mut walked = 0.0;
        for (i, &length) in self.lengths.iter().enumerate() {
            if walked + length >= target - SAMPLE_EPS {
                let factor = if length > 0.0 {
                    (target - walked) / length
                } else {
                    0.0
                };
                return points[i] + (points[i + 1] - points[i]) * factor;
            }
            walked += length;
        }
        points.last().copied().unwrap_or(first)
    }

    /// Arclength fraction of the chain vertex at `index`.
    ///
    /// The sum of segment lengths before the vertex, divided by the total.
    /// Monotonically non-decreasing in `index`; zero for a degenerate chain.
    #[must_use]
    pub fn fraction_at(&self, index: usize) -> f64 {
        if self.total == 0.0 {
            return 0.0;
        }
        let walked: f64 = self.lengths.iter().take(index).sum();
        walked / self.total
    }
}
