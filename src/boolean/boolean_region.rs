use itertools::Itertools;

use crate::intersection::CurveIntersectionOptions;
use crate::misc::{FloatingPoint, Invertible};
use crate::region::Region;

use super::graph::{Graph, Operand};
use super::operation::BooleanOperation;
use super::validate::validate_operands;
use super::Boolean;

/// Boolean operations between two regions through the intersection graph
/// pipeline: build, resolve, split, classify, merge, extract.
impl<'a, T: FloatingPoint> Boolean<&'a Region<T>> for Region<T> {
    type Output = anyhow::Result<Region<T>>;
    type Option = Option<CurveIntersectionOptions<T>>;

    fn union(&self, other: &'a Region<T>, option: Self::Option) -> Self::Output {
        self.boolean(BooleanOperation::Union, other, option)
    }

    fn intersection(&self, other: &'a Region<T>, option: Self::Option) -> Self::Output {
        self.boolean(BooleanOperation::Intersection, other, option)
    }

    fn difference(&self, other: &'a Region<T>, option: Self::Option) -> Self::Output {
        self.boolean(BooleanOperation::Difference, other, option)
    }

    fn boolean(
        &self,
        operation: BooleanOperation,
        other: &'a Region<T>,
        option: Self::Option,
    ) -> Self::Output {
        let options = option.unwrap_or_default();
        validate_operands(self, other, &options)?;

        // the graph works on clones; the operands are never touched.
        // reversing the subtracted boundary keeps traversal direction
        // around it consistent with the kept one.
        let a = self.clone();
        let b = if operation == BooleanOperation::Difference {
            other.inverse()
        } else {
            other.clone()
        };

        let mut graph = Graph::new();
        graph.add_region(&a, Operand::A);
        graph.add_region(&b, Operand::B);
        log::debug!("{} over {} edges", operation, graph.edges.len());

        graph.resolve_intersections(&options)?;
        graph.split_edges(&options)?;
        graph.classify(operation, &a, &b, &options)?;
        graph.merge_intersection_nodes();
        let contours = graph.extract_contours()?;

        // reduce: drop degenerate zero-area leftovers
        let contours = contours
            .into_iter()
            .filter(|c| {
                c.len() >= 2
                    && c.signed_area(Some(options.flatness_tolerance)).abs()
                        > options.distance_tolerance
            })
            .collect_vec();
        Ok(Region::new(contours))
    }
}
