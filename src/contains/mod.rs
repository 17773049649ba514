pub mod contains_region;

pub use contains_region::*;

use nalgebra::Point2;

use crate::misc::FloatingPoint;

/// Trait for determining if a point is inside a closed boundary.
pub trait Contains<T: FloatingPoint> {
    type Option;
    fn contains(&self, point: &Point2<T>, option: Self::Option) -> anyhow::Result<bool>;
}

#[cfg(test)]
mod tests;
