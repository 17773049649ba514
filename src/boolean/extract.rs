use nalgebra::Vector2;

use crate::error::BooleanError;
use crate::misc::FloatingPoint;
use crate::region::{Anchor, Contour};

use super::graph::{EdgeId, Graph, GraphEdge, NodeId, NodeKind};

impl<T: FloatingPoint> Graph<T> {
    /// Walk the surviving, merged graph and emit one closed contour per
    /// walk until every valid edge is consumed.
    ///
    /// The first walk prefers an edge of a base contour so the outermost
    /// boundary comes out before holes. Every walk must return to its
    /// start node within the total edge count, and every valid edge must
    /// be traversed exactly once; anything else is a connectivity bug
    /// reported as a consistency error rather than an endless loop.
    pub(crate) fn extract_contours(&mut self) -> anyhow::Result<Vec<Contour<T>>> {
        let limit = self.edges.len();
        let surviving = self.edges.iter().filter(|e| e.valid).count();
        let mut traversed = 0;
        let mut contours = vec![];
        let mut base_found = false;

        while let Some(start_edge) = self.find_start_edge(base_found) {
            base_found = true;
            let start = self.edges[start_edge.0].start;
            let mut anchors = vec![];
            let mut current = start;
            let mut steps = 0;
            loop {
                self.resolve_effective(current);
                let node = &mut self.nodes[current.0];
                node.visited = true;
                anchors.push(Anchor::new(node.position, node.handle_in, node.handle_out));

                let outgoing = node.outgoing.ok_or_else(|| {
                    BooleanError::GraphConsistency(format!(
                        "walk stalled on a node with no outgoing edge after {} anchors",
                        anchors.len()
                    ))
                })?;
                let edge = &self.edges[outgoing.0];
                if !edge.valid {
                    return Err(BooleanError::GraphConsistency(
                        "walk entered a discarded edge".into(),
                    )
                    .into());
                }
                traversed += 1;
                steps += 1;
                if steps > limit {
                    return Err(BooleanError::GraphConsistency(
                        "walk did not close within the total edge count".into(),
                    )
                    .into());
                }
                current = edge.end;
                if current == start {
                    break;
                }
            }
            log::trace!("extracted a contour with {} anchors", anchors.len());
            contours.push(Contour::new(anchors));
        }

        if traversed != surviving {
            return Err(BooleanError::GraphConsistency(format!(
                "traversed {} edges but {} survived classification",
                traversed, surviving
            ))
            .into());
        }
        Ok(contours)
    }

    /// An edge whose start node has not been visited seeds the next walk.
    /// Until the first contour is out, edges of a base contour are
    /// preferred; if none survived, any remaining edge will do.
    fn find_start_edge(&self, base_found: bool) -> Option<EdgeId> {
        let available =
            |edge: &GraphEdge<T>| edge.valid && !self.nodes[edge.start.0].visited;
        let preferred = self
            .edges
            .iter()
            .position(|edge| available(edge) && (base_found || edge.base));
        match preferred {
            Some(index) => Some(EdgeId(index)),
            None if !base_found => self.edges.iter().position(available).map(EdgeId),
            None => None,
        }
    }

    /// The first traversal touch of an intersection node freezes its
    /// effective connectivity: primary slots win, the shadow side fills
    /// the gaps, and each handle follows the link it belongs to. Once
    /// resolved, the choice never changes.
    fn resolve_effective(&mut self, id: NodeId) {
        if self.nodes[id.0].kind != NodeKind::Intersection {
            return;
        }
        let node = &mut self.nodes[id.0];
        // a side whose link is gone contributes no handle either
        if node.incoming.is_none() {
            node.handle_in = Vector2::zeros();
        }
        if node.outgoing.is_none() {
            node.handle_out = Vector2::zeros();
        }
        if let Some(side) = node.shadow.take() {
            if node.incoming.is_none() {
                node.incoming = side.incoming;
                if side.incoming.is_some() {
                    node.handle_in = side.handle_in;
                }
            }
            if node.outgoing.is_none() {
                node.outgoing = side.outgoing;
                if side.outgoing.is_some() {
                    node.handle_out = side.handle_out;
                }
            }
            node.base = node.base || side.base;
        }
        let incoming = node.incoming;
        let outgoing = node.outgoing;
        if let Some(edge) = incoming {
            self.edges[edge.0].end = id;
        }
        if let Some(edge) = outgoing {
            self.edges[edge.0].start = id;
        }
    }
}
