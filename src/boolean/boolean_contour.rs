use crate::intersection::CurveIntersectionOptions;
use crate::misc::FloatingPoint;
use crate::region::{Contour, Region};

use super::operation::BooleanOperation;
use super::Boolean;

/// Boolean operations between two bare contours, as single-contour
/// regions.
impl<'a, T: FloatingPoint> Boolean<&'a Contour<T>> for Contour<T> {
    type Output = anyhow::Result<Region<T>>;
    type Option = Option<CurveIntersectionOptions<T>>;

    fn union(&self, other: &'a Contour<T>, option: Self::Option) -> Self::Output {
        self.boolean(BooleanOperation::Union, other, option)
    }

    fn intersection(&self, other: &'a Contour<T>, option: Self::Option) -> Self::Output {
        self.boolean(BooleanOperation::Intersection, other, option)
    }

    fn difference(&self, other: &'a Contour<T>, option: Self::Option) -> Self::Output {
        self.boolean(BooleanOperation::Difference, other, option)
    }

    fn boolean(
        &self,
        operation: BooleanOperation,
        other: &'a Contour<T>,
        option: Self::Option,
    ) -> Self::Output {
        let a: Region<T> = self.clone().into();
        let b: Region<T> = other.clone().into();
        a.boolean(operation, &b, option)
    }
}
