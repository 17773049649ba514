use thiserror::Error;

/// Failure taxonomy of the boolean pipeline.
/// All fallible operations surface these through `anyhow`, so callers can
/// downcast when they need to distinguish the cases.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BooleanError {
    /// The algorithm's contract excludes self-intersecting operands and
    /// operands whose boundaries coincide exactly; rejecting them beats
    /// silently producing a wrong result.
    #[error("unsupported input: {0}")]
    UnsupportedInput(&'static str),

    /// Curve subdivision or intersection produced NaN or infinite
    /// coordinates; continuing would emit an unclosed or self-crossing
    /// boundary.
    #[error("degenerate geometry in {0}: non-finite coordinates")]
    DegenerateGeometry(&'static str),

    /// A traversal invariant of the intersection graph was violated.
    #[error("graph consistency: {0}")]
    GraphConsistency(String),
}
