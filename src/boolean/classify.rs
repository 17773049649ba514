use crate::contains::Contains;
use crate::intersection::CurveIntersectionOptions;
use crate::misc::FloatingPoint;
use crate::region::Region;

use super::graph::{EdgeId, Graph, Operand};
use super::operation::BooleanOperation;

impl<T: FloatingPoint> Graph<T> {
    /// Decide for every surviving edge whether it belongs to the result
    /// boundary, by testing its midpoint against the other operand's
    /// region and applying the operation's predicate.
    ///
    /// An edge is never tested against its own region: self-membership is
    /// definitionally true, and a containment test right on the boundary
    /// would be at the mercy of numerical noise.
    pub(crate) fn classify(
        &mut self,
        operation: BooleanOperation,
        region_a: &Region<T>,
        region_b: &Region<T>,
        options: &CurveIntersectionOptions<T>,
    ) -> anyhow::Result<()> {
        let mut discarded = 0;
        for index in 0..self.edges.len() {
            if !self.edges[index].valid {
                continue;
            }
            let midpoint = self.edge_curve(EdgeId(index)).midpoint();
            let operand = self.edges[index].operand;
            let inside_a =
                operand != Operand::A && region_a.contains(&midpoint, Some(*options))?;
            let inside_b =
                operand != Operand::B && region_b.contains(&midpoint, Some(*options))?;
            if !operation.keep(operand, inside_a, inside_b) {
                self.invalidate_edge(EdgeId(index));
                discarded += 1;
            }
        }
        log::debug!(
            "classifier discarded {} of {} edges",
            discarded,
            self.edges.len()
        );
        Ok(())
    }

    /// Rejected edges stay in the arena so merge bookkeeping can still see
    /// them, but the nodes' slots are cleared so traversal skips them.
    fn invalidate_edge(&mut self, id: EdgeId) {
        let (start, end) = {
            let edge = &mut self.edges[id.0];
            edge.valid = false;
            (edge.start, edge.end)
        };
        if self.nodes[start.0].outgoing == Some(id) {
            self.nodes[start.0].outgoing = None;
        }
        if self.nodes[end.0].incoming == Some(id) {
            self.nodes[end.0].incoming = None;
        }
    }
}
