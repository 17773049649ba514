use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::misc::FloatingPoint;

use super::graph::{Graph, MergedSide, NodeId, NodeKind, PairingId};

impl<T: FloatingPoint> Graph<T> {
    /// Fuse the intersection-node pairs that share a pairing id, so a walk
    /// can cross from one operand's boundary onto the other's at that
    /// point. Counterpart lookup goes through a map keyed by pairing id,
    /// built incrementally in the same pass.
    ///
    /// A pairing whose counterpart never shows up (its node was collapsed
    /// onto another, or belongs only to discarded edges) stays unmerged;
    /// such nodes are ordinary turn points and need no handling.
    pub(crate) fn merge_intersection_nodes(&mut self) {
        let mut seen: HashMap<PairingId, NodeId> = HashMap::new();
        for index in 0..self.nodes.len() {
            if self.nodes[index].kind != NodeKind::Intersection {
                continue;
            }
            let Some(pairing) = self.nodes[index].pairing else {
                continue;
            };
            match seen.entry(pairing) {
                Entry::Vacant(vacant) => {
                    vacant.insert(NodeId(index));
                }
                Entry::Occupied(occupied) => {
                    let other = occupied.remove();
                    if self.nodes[other.0].operand == self.nodes[index].operand {
                        self.swap_crossing(other, NodeId(index));
                    } else {
                        self.fuse_pair(other, NodeId(index));
                    }
                }
            }
        }
    }

    /// A pairing within one operand is a self-crossing (only reachable if
    /// same-operand intersection detection is ever enabled): swapping the
    /// two outgoing links unknots it into two independent cycles.
    fn swap_crossing(&mut self, a: NodeId, b: NodeId) {
        let out_a = self.nodes[a.0].outgoing;
        let out_b = self.nodes[b.0].outgoing;
        self.nodes[a.0].outgoing = out_b;
        self.nodes[b.0].outgoing = out_a;
        if let Some(edge) = out_b {
            self.edges[edge.0].start = a;
        }
        if let Some(edge) = out_a {
            self.edges[edge.0].start = b;
        }
        let handle = self.nodes[a.0].handle_out;
        self.nodes[a.0].handle_out = self.nodes[b.0].handle_out;
        self.nodes[b.0].handle_out = handle;
        for id in [a, b] {
            self.nodes[id.0].kind = NodeKind::Ordinary;
            self.nodes[id.0].pairing = None;
        }
    }

    /// Cross-operand pairing, the normal case: the later node absorbs the
    /// earlier one. The counterpart's links and handles go into the
    /// survivor's shadow side, its neighbor edges are redirected onto the
    /// survivor, and it drops out of the graph. Slots already cleared by
    /// the classifier carry over as absent.
    fn fuse_pair(&mut self, other: NodeId, survivor: NodeId) {
        let side = {
            let node = &self.nodes[other.0];
            MergedSide {
                incoming: node.incoming,
                outgoing: node.outgoing,
                handle_in: node.handle_in,
                handle_out: node.handle_out,
                operand: node.operand,
                base: node.base,
            }
        };
        log::trace!(
            "{:?} absorbs {:?} (the {:?} side of the pairing)",
            survivor,
            other,
            side.operand
        );
        if let Some(edge) = side.incoming {
            self.edges[edge.0].end = survivor;
        }
        if let Some(edge) = side.outgoing {
            self.edges[edge.0].start = survivor;
        }
        let node = &mut self.nodes[other.0];
        node.incoming = None;
        node.outgoing = None;
        node.pairing = None;
        let node = &mut self.nodes[survivor.0];
        node.shadow = Some(side);
        node.pairing = None;
    }
}
