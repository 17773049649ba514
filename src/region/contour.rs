use itertools::Itertools;
use nalgebra::Point2;

use crate::bounding_box::BoundingBox;
use crate::curve::CubicBezier;
use crate::misc::{FloatingPoint, Invertible, Line};

use super::Anchor;

/// One closed cycle of cubic Bezier segments, stored as a sequence of
/// anchors. The segment between consecutive anchors (including the closing
/// one back to the first) is the cubic with control points
/// `a.point`, `a.point + a.handle_out`, `b.point + b.handle_in`, `b.point`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour<T: FloatingPoint> {
    anchors: Vec<Anchor<T>>,
}

impl<T: FloatingPoint> Contour<T> {
    pub fn new(anchors: Vec<Anchor<T>>) -> Self {
        Self { anchors }
    }

    /// Create a closed polygonal contour from its corner points.
    /// A trailing point equal to the first is dropped; the closing segment
    /// is implicit.
    /// # Example
    /// ```
    /// use nalgebra::Point2;
    /// use taglio::prelude::*;
    /// let square = Contour::polyline(&[
    ///     Point2::new(0., 0.),
    ///     Point2::new(1., 0.),
    ///     Point2::new(1., 1.),
    ///     Point2::new(0., 1.),
    /// ]);
    /// assert_eq!(square.segments().len(), 4);
    /// ```
    pub fn polyline(points: &[Point2<T>]) -> Self {
        let mut points = points.to_vec();
        if points.len() > 1 {
            let closed = (points[points.len() - 1] - points[0]).norm_squared()
                <= T::default_epsilon();
            if closed {
                points.pop();
            }
        }
        Self {
            anchors: points.into_iter().map(Anchor::corner).collect(),
        }
    }

    pub fn anchors(&self) -> &[Anchor<T>] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// The curve segments of the cycle, in order, closing back to the first
    /// anchor.
    pub fn segments(&self) -> Vec<CubicBezier<T>> {
        if self.anchors.len() < 2 {
            return vec![];
        }
        self.anchors
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| {
                CubicBezier::new(
                    a.point,
                    a.point + a.handle_out,
                    b.point + b.handle_in,
                    b.point,
                )
            })
            .collect()
    }

    /// Approximate the closed boundary with a polyline within the given
    /// tolerance. The first point is not repeated at the end.
    pub fn tessellate(&self, tolerance: Option<T>) -> Vec<Point2<T>> {
        let segments = self.segments();
        if segments.is_empty() {
            return self.anchors.iter().map(|a| a.point).collect();
        }
        let tolerance = tolerance.unwrap_or_else(|| T::from_f64(1e-5).unwrap());
        let mut points = vec![self.anchors[0].point];
        for segment in segments.iter() {
            segment.flatten_into(tolerance, 0, &mut points);
        }
        // the last flattened point closes onto the first anchor
        points.pop();
        points
    }

    /// Signed area of the enclosed region, positive for counter-clockwise
    /// winding.
    pub fn signed_area(&self, tolerance: Option<T>) -> T {
        let points = self.tessellate(tolerance);
        let two = T::from_f64(2.).unwrap();
        points
            .iter()
            .circular_tuple_windows()
            .fold(T::zero(), |acc, (a, b)| acc + a.coords.perp(&b.coords))
            / two
    }

    pub fn bounding_box(&self) -> BoundingBox<T> {
        self.segments()
            .iter()
            .map(|s| s.bounding_box())
            .reduce(|a, b| a.union(&b))
            .unwrap_or_else(|| {
                BoundingBox::new_with_points(self.anchors.iter().map(|a| a.point))
            })
    }

    /// Distance from a point to the nearest point of the flattened boundary.
    pub fn boundary_distance(&self, point: &Point2<T>, tolerance: Option<T>) -> T {
        let points = self.tessellate(tolerance);
        if points.is_empty() {
            return T::max_value().unwrap();
        }
        if points.len() == 1 {
            return (point - points[0]).norm();
        }
        points
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| Line::new(*a, *b).distance_squared_to_point(point))
            .reduce(|a, b| a.min(b))
            .unwrap_or_else(|| T::max_value().unwrap())
            .sqrt()
    }
}

impl<T: FloatingPoint> Invertible for Contour<T> {
    /// Reverse the traversal direction: anchors in reverse order with
    /// swapped handles.
    fn invert(&mut self) {
        self.anchors.reverse();
        for anchor in self.anchors.iter_mut() {
            std::mem::swap(&mut anchor.handle_in, &mut anchor.handle_out);
        }
    }
}
