use nalgebra::{Point2, Vector2};

use crate::misc::FloatingPoint;

/// A struct representing an axis-aligned bounding box in 2D space.
#[derive(Clone, Debug)]
pub struct BoundingBox<T: FloatingPoint> {
    min: Point2<T>,
    max: Point2<T>,
}

impl<T: FloatingPoint> BoundingBox<T> {
    /// Create a new bounding box from two corner points.
    pub fn new(a: Point2<T>, b: Point2<T>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Create a new bounding box from a point iterator.
    pub fn new_with_points<I: IntoIterator<Item = Point2<T>>>(iter: I) -> Self {
        let huge = T::max_value().unwrap();
        let mut min = Point2::new(huge, huge);
        let mut max = Point2::new(-huge, -huge);
        for point in iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }
        Self { min, max }
    }

    pub fn min(&self) -> &Point2<T> {
        &self.min
    }

    pub fn max(&self) -> &Point2<T> {
        &self.max
    }

    pub fn size(&self) -> Vector2<T> {
        self.max - self.min
    }

    pub fn center(&self) -> Point2<T> {
        self.min + self.size() / (T::one() + T::one())
    }

    /// Merge two bounding boxes into one covering both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Check if the bounding box contains a point,
    /// with an optional tolerance to grow the box.
    pub fn contains(&self, point: &Point2<T>, epsilon: Option<T>) -> bool {
        let eps = epsilon.unwrap_or_else(T::zero);
        point.x >= self.min.x - eps
            && point.x <= self.max.x + eps
            && point.y >= self.min.y - eps
            && point.y <= self.max.y + eps
    }

    /// Check if two bounding boxes touch or overlap,
    /// with an optional tolerance to grow both boxes.
    pub fn intersects(&self, other: &Self, epsilon: Option<T>) -> bool {
        let eps = epsilon.unwrap_or_else(T::zero);
        self.min.x <= other.max.x + eps
            && other.min.x <= self.max.x + eps
            && self.min.y <= other.max.y + eps
            && other.min.y <= self.max.y + eps
    }
}
