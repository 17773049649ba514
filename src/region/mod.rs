pub mod anchor;
pub mod contour;

pub use anchor::*;
pub use contour::*;

use crate::bounding_box::BoundingBox;
use crate::misc::{FloatingPoint, Invertible};

/// A closed planar region bounded by one or more closed contours.
/// The first contour is the base (outer) boundary; later contours are holes
/// or further disjoint components, interpreted with the even-odd rule.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region<T: FloatingPoint> {
    contours: Vec<Contour<T>>,
}

impl<T: FloatingPoint> Region<T> {
    pub fn new(contours: Vec<Contour<T>>) -> Self {
        Self { contours }
    }

    /// A region with no boundary at all. Produced by e.g. intersecting
    /// disjoint regions.
    pub fn empty() -> Self {
        Self { contours: vec![] }
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn contours(&self) -> &[Contour<T>] {
        &self.contours
    }

    pub fn into_contours(self) -> Vec<Contour<T>> {
        self.contours
    }

    /// The base (outer) contour, if any.
    pub fn base(&self) -> Option<&Contour<T>> {
        self.contours.first()
    }

    /// Sum of the signed areas of all contours; holes wind opposite to the
    /// outer boundary and subtract from the total.
    pub fn signed_area(&self, tolerance: Option<T>) -> T {
        self.contours
            .iter()
            .fold(T::zero(), |acc, c| acc + c.signed_area(tolerance))
    }

    pub fn bounding_box(&self) -> BoundingBox<T> {
        self.contours
            .iter()
            .map(|c| c.bounding_box())
            .reduce(|a, b| a.union(&b))
            .unwrap_or_else(|| BoundingBox::new_with_points(std::iter::empty()))
    }

    /// Distance from a point to the nearest boundary point of the region.
    pub fn boundary_distance(&self, point: &nalgebra::Point2<T>, tolerance: Option<T>) -> T {
        self.contours
            .iter()
            .map(|c| c.boundary_distance(point, tolerance))
            .reduce(|a, b| a.min(b))
            .unwrap_or_else(|| T::max_value().unwrap())
    }
}

impl<T: FloatingPoint> Invertible for Region<T> {
    fn invert(&mut self) {
        self.contours.iter_mut().for_each(|c| c.invert());
    }
}

impl<T: FloatingPoint> From<Contour<T>> for Region<T> {
    fn from(value: Contour<T>) -> Self {
        Self::new(vec![value])
    }
}
