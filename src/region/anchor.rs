use nalgebra::{Point2, Vector2};

use crate::misc::FloatingPoint;

/// An on-curve point of a contour with its relative control handles.
/// The segment leaving an anchor is shaped by `handle_out`, the segment
/// arriving at it by `handle_in`; zero handles make a straight join.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor<T: FloatingPoint> {
    pub point: Point2<T>,
    pub handle_in: Vector2<T>,
    pub handle_out: Vector2<T>,
}

impl<T: FloatingPoint> Anchor<T> {
    pub fn new(point: Point2<T>, handle_in: Vector2<T>, handle_out: Vector2<T>) -> Self {
        Self {
            point,
            handle_in,
            handle_out,
        }
    }

    /// An anchor with zero handles, joining two straight segments.
    pub fn corner(point: Point2<T>) -> Self {
        Self::new(point, Vector2::zeros(), Vector2::zeros())
    }
}
