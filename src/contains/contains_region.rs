use itertools::Itertools;
use nalgebra::Point2;

use crate::intersection::CurveIntersectionOptions;
use crate::misc::{orientation, FloatingPoint, Orientation};
use crate::region::{Contour, Region};

use super::Contains;

/// Crossing count of a rightward ray from `point` against a closed
/// polyline, for the even-odd rule. Returns None when the point lies on
/// the boundary itself, so callers never misclassify boundary points by
/// counting parity.
fn ray_crossings<T: FloatingPoint>(polyline: &[Point2<T>], point: &Point2<T>) -> Option<usize> {
    let mut count = 0;
    for (a, b) in polyline.iter().circular_tuple_windows() {
        if orientation(a, b, point) == Orientation::Collinear
            && point.x >= a.x.min(b.x)
            && point.x <= a.x.max(b.x)
            && point.y >= a.y.min(b.y)
            && point.y <= a.y.max(b.y)
        {
            return None;
        }
        // half-open spans keep a crossing through a vertex from counting twice
        let upward = a.y <= point.y && b.y > point.y;
        let downward = b.y <= point.y && a.y > point.y;
        if (upward && orientation(a, b, point) == Orientation::CounterClockwise)
            || (downward && orientation(a, b, point) == Orientation::Clockwise)
        {
            count += 1;
        }
    }
    Some(count)
}

impl<T: FloatingPoint> Contains<T> for Contour<T> {
    type Option = Option<CurveIntersectionOptions<T>>;

    /// Even-odd test against the flattened boundary.
    /// Points on the boundary count as contained.
    /// # Example
    /// ```
    /// use nalgebra::Point2;
    /// use taglio::prelude::*;
    /// let square = Contour::polyline(&[
    ///     Point2::new(0., 0.),
    ///     Point2::new(2., 0.),
    ///     Point2::new(2., 2.),
    ///     Point2::new(0., 2.),
    /// ]);
    /// assert!(square.contains(&Point2::new(1., 1.), None).unwrap());
    /// assert!(!square.contains(&Point2::new(3., 1.), None).unwrap());
    /// ```
    fn contains(&self, point: &Point2<T>, option: Self::Option) -> anyhow::Result<bool> {
        anyhow::ensure!(self.len() >= 2, "Contour must be closed");
        let options = option.unwrap_or_default();
        if !self
            .bounding_box()
            .contains(point, Some(options.distance_tolerance))
        {
            return Ok(false);
        }
        let points = self.tessellate(Some(options.flatness_tolerance));
        match ray_crossings(&points, point) {
            None => Ok(true),
            Some(c) => Ok(c % 2 == 1),
        }
    }
}

impl<T: FloatingPoint> Contains<T> for Region<T> {
    type Option = Option<CurveIntersectionOptions<T>>;

    /// Even-odd test across all contours: a point inside a hole contour is
    /// outside the region again.
    fn contains(&self, point: &Point2<T>, option: Self::Option) -> anyhow::Result<bool> {
        let options = option.unwrap_or_default();
        if !self
            .bounding_box()
            .contains(point, Some(options.distance_tolerance))
        {
            return Ok(false);
        }
        let mut total = 0;
        for contour in self.contours() {
            if contour.len() < 2 {
                continue;
            }
            let points = contour.tessellate(Some(options.flatness_tolerance));
            match ray_crossings(&points, point) {
                None => return Ok(true),
                Some(c) => total += c,
            }
        }
        Ok(total % 2 == 1)
    }
}
