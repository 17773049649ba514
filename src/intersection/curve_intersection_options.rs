use crate::misc::FloatingPoint;

/// Options for the curve intersection solver and for the tolerances the
/// boolean pipeline derives from it.
#[derive(Clone, Copy, Debug)]
pub struct CurveIntersectionOptions<T: FloatingPoint> {
    /// Curves flatter than this are intersected as their chords.
    pub flatness_tolerance: T,
    /// Parameters closer than this are considered the same position on a
    /// curve (duplicate suppression, split idempotence, endpoint
    /// coincidence).
    pub parameter_tolerance: T,
    /// Geometric tolerance for on-boundary and coincidence tests.
    pub distance_tolerance: T,
    /// Recursion cap for the subdivision solver.
    pub max_depth: usize,
}

impl<T: FloatingPoint> Default for CurveIntersectionOptions<T> {
    fn default() -> Self {
        Self {
            flatness_tolerance: T::from_f64(1e-5).unwrap(),
            parameter_tolerance: T::from_f64(1e-6).unwrap(),
            distance_tolerance: T::from_f64(1e-6).unwrap(),
            max_depth: 32,
        }
    }
}
