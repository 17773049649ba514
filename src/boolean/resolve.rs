use crate::intersection::{intersect_curves, CurveIntersectionOptions};
use crate::misc::FloatingPoint;

use super::graph::{EdgeId, Graph, IntersectionRecord, Operand};

impl<T: FloatingPoint> Graph<T> {
    /// Locate every intersection between edges of different operands and
    /// register it on both edges under a fresh pairing id. Edges of the
    /// same operand are never tested against each other; self-intersecting
    /// boundaries are outside the contract.
    pub(crate) fn resolve_intersections(
        &mut self,
        options: &CurveIntersectionOptions<T>,
    ) -> anyhow::Result<()> {
        let count = self.edges.len();
        let mut pairs = 0;
        for i in 0..count {
            if self.edges[i].operand != Operand::A {
                continue;
            }
            let curve_a = self.edge_curve(EdgeId(i));
            for j in 0..count {
                if self.edges[j].operand != Operand::B {
                    continue;
                }
                let curve_b = self.edge_curve(EdgeId(j));
                for it in intersect_curves(&curve_a, &curve_b, options)? {
                    let pairing = self.next_pairing();
                    self.edges[i].intersections.push(IntersectionRecord {
                        point: *it.point(),
                        parameter: it.a(),
                        pairing,
                    });
                    self.edges[j].intersections.push(IntersectionRecord {
                        point: *it.point(),
                        parameter: it.b(),
                        pairing,
                    });
                    pairs += 1;
                }
            }
        }
        log::debug!("found {} intersection pairs among {} edges", pairs, count);
        Ok(())
    }
}
