use std::fmt::Display;

use super::graph::Operand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOperation {
    Union,
    Intersection,
    Difference,
}

impl BooleanOperation {
    /// Whether an edge of `operand` survives, given the containment of its
    /// midpoint in the other operand's region.
    pub(crate) fn keep(&self, operand: Operand, inside_a: bool, inside_b: bool) -> bool {
        match self {
            // interior edges of either operand are redundant in a union
            BooleanOperation::Union => !(inside_a || inside_b),
            // only mutually interior edges survive an intersection
            BooleanOperation::Intersection => inside_a || inside_b,
            // the difference keeps the left boundary outside the right
            // operand, plus the reversed right boundary inside the left
            BooleanOperation::Difference => match operand {
                Operand::A => !inside_b,
                Operand::B => inside_a,
            },
        }
    }
}

impl Display for BooleanOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BooleanOperation::Union => write!(f, "Union"),
            BooleanOperation::Intersection => write!(f, "Intersection"),
            BooleanOperation::Difference => write!(f, "Difference"),
        }
    }
}
