use nalgebra::Point2;

use crate::bounding_box::BoundingBox;
use crate::error::BooleanError;
use crate::misc::FloatingPoint;

/// Hard cap for adaptive flattening recursion.
const MAX_TESSELLATION_DEPTH: usize = 24;

/// A cubic Bezier curve segment in 2D space.
/// A straight line is the degenerate case where both inner control points
/// lie on their neighboring end points.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicBezier<T: FloatingPoint> {
    control_points: [Point2<T>; 4],
}

impl<T: FloatingPoint> CubicBezier<T> {
    pub fn new(p0: Point2<T>, p1: Point2<T>, p2: Point2<T>, p3: Point2<T>) -> Self {
        Self {
            control_points: [p0, p1, p2, p3],
        }
    }

    /// Create a straight segment between two points.
    pub fn line(start: Point2<T>, end: Point2<T>) -> Self {
        Self::new(start, start, end, end)
    }

    pub fn control_points(&self) -> &[Point2<T>; 4] {
        &self.control_points
    }

    pub fn first_point(&self) -> &Point2<T> {
        &self.control_points[0]
    }

    pub fn end_point(&self) -> &Point2<T> {
        &self.control_points[3]
    }

    /// Evaluate the curve at parameter `t` by de Casteljau's algorithm.
    /// # Example
    /// ```
    /// use nalgebra::Point2;
    /// use taglio::prelude::*;
    /// let line = CubicBezier::line(Point2::new(0., 0.), Point2::new(2., 0.));
    /// assert_eq!(line.point_at(0.5), Point2::new(1., 0.));
    /// ```
    pub fn point_at(&self, t: T) -> Point2<T> {
        let [p0, p1, p2, p3] = self.control_points;
        let q0 = p0.coords.lerp(&p1.coords, t);
        let q1 = p1.coords.lerp(&p2.coords, t);
        let q2 = p2.coords.lerp(&p3.coords, t);
        let r0 = q0.lerp(&q1, t);
        let r1 = q1.lerp(&q2, t);
        r0.lerp(&r1, t).into()
    }

    pub fn midpoint(&self) -> Point2<T> {
        self.point_at(T::from_f64(0.5).unwrap())
    }

    /// Split the curve at parameter `t` into two sub-curves meeting at the
    /// split point.
    /// # Example
    /// ```
    /// use nalgebra::Point2;
    /// use taglio::prelude::*;
    /// let line = CubicBezier::line(Point2::new(0., 0.), Point2::new(2., 2.));
    /// let (left, right) = line.try_split(0.5).unwrap();
    /// assert_eq!(left.end_point(), right.first_point());
    /// assert_eq!(*left.end_point(), Point2::new(1., 1.));
    /// ```
    pub fn try_split(&self, t: T) -> anyhow::Result<(Self, Self)> {
        anyhow::ensure!(
            t >= T::zero() && t <= T::one(),
            "Split parameter out of range"
        );
        let [p0, p1, p2, p3] = self.control_points;
        let q0: Point2<T> = p0.coords.lerp(&p1.coords, t).into();
        let q1: Point2<T> = p1.coords.lerp(&p2.coords, t).into();
        let q2: Point2<T> = p2.coords.lerp(&p3.coords, t).into();
        let r0: Point2<T> = q0.coords.lerp(&q1.coords, t).into();
        let r1: Point2<T> = q1.coords.lerp(&q2.coords, t).into();
        let s: Point2<T> = r0.coords.lerp(&r1.coords, t).into();
        if !(s.x.is_finite() && s.y.is_finite()) {
            return Err(BooleanError::DegenerateGeometry("curve subdivision").into());
        }
        Ok((Self::new(p0, q0, r0, s), Self::new(s, r1, q2, p3)))
    }

    /// Whether both inner control points lie within `tolerance` of the
    /// chord, so the curve can stand in for its chord. Exact for straight
    /// segments, whose handles sit on the chord itself.
    pub fn is_flat_enough(&self, tolerance: T) -> bool {
        let [p0, p1, p2, p3] = self.control_points;
        let chord = p3 - p0;
        let length_squared = chord.norm_squared();
        let limit = tolerance * tolerance;
        if length_squared <= T::default_epsilon() {
            return (p1 - p0).norm_squared() <= limit && (p2 - p0).norm_squared() <= limit;
        }
        let d1 = chord.perp(&(p1 - p0));
        let d2 = chord.perp(&(p2 - p0));
        (d1 * d1).max(d2 * d2) <= limit * length_squared
    }

    /// The control polygon hull box; conservative over the exact extrema.
    pub fn bounding_box(&self) -> BoundingBox<T> {
        BoundingBox::new_with_points(self.control_points.iter().copied())
    }

    /// Approximate the curve with a polyline within the given tolerance.
    /// The returned points include both end points.
    pub fn tessellate(&self, tolerance: Option<T>) -> Vec<Point2<T>> {
        let tolerance = tolerance.unwrap_or_else(|| T::from_f64(1e-5).unwrap());
        let mut points = vec![self.control_points[0]];
        self.flatten_into(tolerance, 0, &mut points);
        points
    }

    pub(crate) fn flatten_into(&self, tolerance: T, depth: usize, points: &mut Vec<Point2<T>>) {
        if depth >= MAX_TESSELLATION_DEPTH || self.is_flat_enough(tolerance) {
            points.push(self.control_points[3]);
            return;
        }
        let half = T::from_f64(0.5).unwrap();
        // splitting at an interior parameter of a finite curve cannot fail
        if let Ok((left, right)) = self.try_split(half) {
            left.flatten_into(tolerance, depth + 1, points);
            right.flatten_into(tolerance, depth + 1, points);
        } else {
            points.push(self.control_points[3]);
        }
    }
}
