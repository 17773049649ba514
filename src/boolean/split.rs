use std::cmp::Ordering;

use crate::intersection::CurveIntersectionOptions;
use crate::misc::FloatingPoint;

use super::graph::{EdgeId, Graph, GraphEdge, GraphNode, NodeId, NodeKind, PairingId};

impl<T: FloatingPoint> Graph<T> {
    /// Split every edge carrying intersection records into sub-edges at
    /// the recorded parameters, in ascending order, materializing an
    /// intersection node at each split point.
    ///
    /// The edge itself shrinks towards its original end node as left
    /// pieces are peeled off, so connectivity through the original end
    /// nodes survives the restructuring unchanged.
    pub(crate) fn split_edges(
        &mut self,
        options: &CurveIntersectionOptions<T>,
    ) -> anyhow::Result<()> {
        let eps = options.parameter_tolerance;
        let initial = self.edges.len();
        for index in 0..initial {
            if self.edges[index].intersections.is_empty() {
                continue;
            }
            let mut records = std::mem::take(&mut self.edges[index].intersections);
            // stable: records at the same parameter keep discovery order
            records.sort_by(|a, b| {
                a.parameter
                    .partial_cmp(&b.parameter)
                    .unwrap_or(Ordering::Equal)
            });

            // `consumed` is the original-edge parameter where the
            // remaining tail now starts
            let mut tail = EdgeId(index);
            let mut consumed = T::zero();
            for record in records {
                let span = T::one() - consumed;
                let local = if span <= eps {
                    T::one()
                } else {
                    (record.parameter - consumed) / span
                };

                if local <= eps {
                    // lands on the tail's start node; also collapses a
                    // repeat of the previous split position
                    self.promote_to_intersection(self.edges[tail.0].start, record.pairing);
                    continue;
                }
                if local >= T::one() - eps {
                    // lands on the original end node
                    self.promote_to_intersection(self.edges[tail.0].end, record.pairing);
                    continue;
                }

                let curve = self.edge_curve(tail);
                let (left, right) = curve.try_split(local)?;
                log::trace!(
                    "splitting an edge of contour {} at {:?}",
                    self.edges[tail.0].contour,
                    record.point
                );

                let (start, end, operand, contour, base) = {
                    let edge = &self.edges[tail.0];
                    (edge.start, edge.end, edge.operand, edge.contour, edge.base)
                };

                let split_point = *right.first_point();
                let node_id = NodeId(self.nodes.len());
                self.nodes.push(GraphNode {
                    position: split_point,
                    handle_in: left.control_points()[2] - split_point,
                    handle_out: right.control_points()[1] - split_point,
                    kind: NodeKind::Intersection,
                    operand,
                    base,
                    visited: false,
                    pairing: Some(record.pairing),
                    incoming: None,
                    outgoing: Some(tail),
                    shadow: None,
                });

                // neighbor handles shrink to the subdivided control polygon
                let start_position = self.nodes[start.0].position;
                self.nodes[start.0].handle_out = left.control_points()[1] - start_position;
                let end_position = self.nodes[end.0].position;
                self.nodes[end.0].handle_in = right.control_points()[2] - end_position;

                let left_id = EdgeId(self.edges.len());
                self.edges.push(GraphEdge {
                    start,
                    end: node_id,
                    operand,
                    contour,
                    base,
                    intersections: vec![],
                    valid: true,
                });
                self.nodes[start.0].outgoing = Some(left_id);
                self.nodes[node_id.0].incoming = Some(left_id);
                self.edges[tail.0].start = node_id;

                consumed = record.parameter;
            }
        }
        Ok(())
    }

    /// Mark an existing node as an intersection without subdividing.
    /// The first pairing to land on a node wins; a later one at the same
    /// position stays unpaired, which the merger tolerates.
    fn promote_to_intersection(&mut self, id: NodeId, pairing: PairingId) {
        let node = &mut self.nodes[id.0];
        node.kind = NodeKind::Intersection;
        if node.pairing.is_none() {
            node.pairing = Some(pairing);
        }
    }
}
