use nalgebra::{Point2, Vector2};

use crate::curve::CubicBezier;
use crate::misc::FloatingPoint;
use crate::region::Region;

/// Index of a node in the graph arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// Index of an edge in the graph arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct EdgeId(pub(crate) usize);

/// Key linking the two intersection nodes born from one geometric
/// crossing, one per operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct PairingId(u64);

/// Which input region an entity belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operand {
    A,
    B,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Ordinary,
    Intersection,
}

/// A pending intersection on an edge, accumulated by the resolver and
/// consumed by the splitter.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IntersectionRecord<T: FloatingPoint> {
    pub(crate) point: Point2<T>,
    pub(crate) parameter: T,
    pub(crate) pairing: PairingId,
}

/// What a merged node keeps from its fused counterpart. Effective
/// connectivity prefers the primary slots and falls back to these.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MergedSide<T: FloatingPoint> {
    pub(crate) incoming: Option<EdgeId>,
    pub(crate) outgoing: Option<EdgeId>,
    pub(crate) handle_in: Vector2<T>,
    pub(crate) handle_out: Vector2<T>,
    pub(crate) operand: Operand,
    pub(crate) base: bool,
}

/// A boundary point of the graph: position, relative handles for the
/// curves meeting here, and one incoming/outgoing edge slot per side.
#[derive(Clone, Debug)]
pub(crate) struct GraphNode<T: FloatingPoint> {
    pub(crate) position: Point2<T>,
    pub(crate) handle_in: Vector2<T>,
    pub(crate) handle_out: Vector2<T>,
    pub(crate) kind: NodeKind,
    pub(crate) operand: Operand,
    pub(crate) base: bool,
    pub(crate) visited: bool,
    pub(crate) pairing: Option<PairingId>,
    pub(crate) incoming: Option<EdgeId>,
    pub(crate) outgoing: Option<EdgeId>,
    pub(crate) shadow: Option<MergedSide<T>>,
}

/// One boundary curve segment between two nodes. A node's outgoing slot
/// and its edge's start (and incoming/end) are kept mutually consistent
/// through every graph edit.
#[derive(Clone, Debug)]
pub(crate) struct GraphEdge<T: FloatingPoint> {
    pub(crate) start: NodeId,
    pub(crate) end: NodeId,
    pub(crate) operand: Operand,
    pub(crate) contour: usize,
    pub(crate) base: bool,
    pub(crate) intersections: Vec<IntersectionRecord<T>>,
    pub(crate) valid: bool,
}

/// Arena holding the intersection graph of one boolean invocation.
///
/// Nodes and edges reference each other by index into the arena vectors;
/// ids never move because both vectors are append-only. All id counters
/// live here, so concurrent invocations share no state, and the whole
/// graph dies with the call.
pub(crate) struct Graph<T: FloatingPoint> {
    pub(crate) nodes: Vec<GraphNode<T>>,
    pub(crate) edges: Vec<GraphEdge<T>>,
    pairing_counter: u64,
}

impl<T: FloatingPoint> Graph<T> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![],
            edges: vec![],
            pairing_counter: 0,
        }
    }

    /// Add every contour of a region as a closed cycle of nodes and edges.
    /// Contour 0 is the operand's base boundary; contours too short to
    /// bound anything contribute nothing.
    pub(crate) fn add_region(&mut self, region: &Region<T>, operand: Operand) {
        for (contour_index, contour) in region.contours().iter().enumerate() {
            let anchors = contour.anchors();
            if anchors.len() < 2 {
                continue;
            }
            let base = contour_index == 0;
            let first = self.nodes.len();
            for anchor in anchors {
                self.nodes.push(GraphNode {
                    position: anchor.point,
                    handle_in: anchor.handle_in,
                    handle_out: anchor.handle_out,
                    kind: NodeKind::Ordinary,
                    operand,
                    base,
                    visited: false,
                    pairing: None,
                    incoming: None,
                    outgoing: None,
                    shadow: None,
                });
            }
            let count = anchors.len();
            for offset in 0..count {
                let start = NodeId(first + offset);
                let end = NodeId(first + (offset + 1) % count);
                let id = EdgeId(self.edges.len());
                self.edges.push(GraphEdge {
                    start,
                    end,
                    operand,
                    contour: contour_index,
                    base,
                    intersections: vec![],
                    valid: true,
                });
                self.nodes[start.0].outgoing = Some(id);
                self.nodes[end.0].incoming = Some(id);
            }
            log::trace!(
                "operand {:?}: contour {} contributed {} edges",
                operand,
                contour_index,
                count
            );
        }
    }

    /// The curve an edge currently describes, assembled from its end
    /// nodes' positions and handles.
    pub(crate) fn edge_curve(&self, id: EdgeId) -> CubicBezier<T> {
        let edge = &self.edges[id.0];
        let start = &self.nodes[edge.start.0];
        let end = &self.nodes[edge.end.0];
        CubicBezier::new(
            start.position,
            start.position + start.handle_out,
            end.position + end.handle_in,
            end.position,
        )
    }

    pub(crate) fn next_pairing(&mut self) -> PairingId {
        self.pairing_counter += 1;
        PairingId(self.pairing_counter)
    }
}
