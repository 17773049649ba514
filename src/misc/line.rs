use nalgebra::{Point2, Vector2};

use super::FloatingPoint;

/// A struct representing a line segment in 2D space.
#[derive(Clone, Debug)]
pub struct Line<T: FloatingPoint> {
    start: Point2<T>,
    end: Point2<T>,
}

impl<T: FloatingPoint> Line<T> {
    pub fn new(start: Point2<T>, end: Point2<T>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Point2<T> {
        &self.start
    }

    pub fn end(&self) -> &Point2<T> {
        &self.end
    }

    pub fn tangent(&self) -> Vector2<T> {
        self.end - self.start
    }

    /// Intersection between two line segments.
    /// Returns the intersection point with the parameters on both segments,
    /// or None if the segments are parallel or do not overlap.
    /// Parameters are accepted in [0, 1] with a slack of `epsilon` on both ends
    /// and clamped into the unit interval.
    pub fn intersection(&self, other: &Line<T>, epsilon: T) -> Option<(Point2<T>, T, T)> {
        let d0 = self.tangent();
        let d1 = other.tangent();
        let denominator = d0.perp(&d1);
        if denominator.abs() <= T::default_epsilon() {
            return None;
        }

        let diff = other.start - self.start;
        let u0 = diff.perp(&d1) / denominator;
        let u1 = diff.perp(&d0) / denominator;

        let min = -epsilon;
        let max = T::one() + epsilon;
        if u0 < min || u0 > max || u1 < min || u1 > max {
            return None;
        }

        let u0 = u0.clamp(T::zero(), T::one());
        let u1 = u1.clamp(T::zero(), T::one());
        Some((self.start + d0 * u0, u0, u1))
    }

    /// Squared distance from a point to this segment.
    pub fn distance_squared_to_point(&self, point: &Point2<T>) -> T {
        let d = self.tangent();
        let l2 = d.norm_squared();
        if l2 <= T::default_epsilon() {
            return (point - self.start).norm_squared();
        }
        let t = ((point - self.start).dot(&d) / l2).clamp(T::zero(), T::one());
        let projected = self.start + d * t;
        (point - projected).norm_squared()
    }
}
