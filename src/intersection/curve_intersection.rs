use nalgebra::Point2;

use crate::misc::FloatingPoint;

/// A single transversal intersection between two curves, with the
/// parameter of the intersection point on each of them.
#[derive(Clone, Copy, Debug)]
pub struct CurveIntersection<T: FloatingPoint> {
    point: Point2<T>,
    a: T,
    b: T,
}

impl<T: FloatingPoint> CurveIntersection<T> {
    pub fn new(point: Point2<T>, a: T, b: T) -> Self {
        Self { point, a, b }
    }

    pub fn point(&self) -> &Point2<T> {
        &self.point
    }

    /// Parameter on the first curve.
    pub fn a(&self) -> T {
        self.a
    }

    /// Parameter on the second curve.
    pub fn b(&self) -> T {
        self.b
    }
}
