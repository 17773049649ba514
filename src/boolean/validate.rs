use nalgebra::Point2;

use crate::curve::CubicBezier;
use crate::error::BooleanError;
use crate::intersection::{intersect_curves, CurveIntersectionOptions};
use crate::misc::FloatingPoint;
use crate::region::Region;

/// Reject inputs the algorithm's contract excludes: self-intersecting
/// boundaries and exactly coincident operands. Runs before any graph is
/// built, so unsupported input never produces a silently wrong result.
pub(crate) fn validate_operands<T: FloatingPoint>(
    a: &Region<T>,
    b: &Region<T>,
    options: &CurveIntersectionOptions<T>,
) -> anyhow::Result<()> {
    ensure_simple(a, options)?;
    ensure_simple(b, options)?;
    ensure_distinct(a, b, options)?;
    Ok(())
}

/// A region is simple when no two of its segments cross anywhere except at
/// the shared anchor of consecutive segments.
fn ensure_simple<T: FloatingPoint>(
    region: &Region<T>,
    options: &CurveIntersectionOptions<T>,
) -> anyhow::Result<()> {
    let mut segments: Vec<(usize, usize, usize, CubicBezier<T>)> = vec![];
    for (contour_index, contour) in region.contours().iter().enumerate() {
        let contour_segments = contour.segments();
        let count = contour_segments.len();
        for (segment_index, segment) in contour_segments.into_iter().enumerate() {
            segments.push((contour_index, segment_index, count, segment));
        }
    }

    let eps = options.parameter_tolerance;
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            let (ci, si, count, ref sa) = segments[i];
            let (cj, sj, _, ref sb) = segments[j];
            if !sa
                .bounding_box()
                .intersects(&sb.bounding_box(), Some(options.distance_tolerance))
            {
                continue;
            }
            let consecutive = ci == cj && sj == si + 1;
            let wrapped = ci == cj && si == 0 && sj == count - 1;
            for it in intersect_curves(sa, sb, options)? {
                let at_shared_anchor = (consecutive
                    && it.a() >= T::one() - eps
                    && it.b() <= eps)
                    || (wrapped && it.a() <= eps && it.b() >= T::one() - eps);
                if !at_shared_anchor {
                    return Err(
                        BooleanError::UnsupportedInput("self-intersecting boundary").into()
                    );
                }
            }
        }
    }
    Ok(())
}

/// Exactly coincident operands are detected as: every sampled boundary
/// point of each region lies within tolerance on the other's boundary.
fn ensure_distinct<T: FloatingPoint>(
    a: &Region<T>,
    b: &Region<T>,
    options: &CurveIntersectionOptions<T>,
) -> anyhow::Result<()> {
    if a.is_empty() || b.is_empty() {
        return Ok(());
    }
    // the boundary is measured against a flattened stand-in, so the
    // tolerance cannot be tighter than the flattening error
    let tolerance = options.distance_tolerance.max(options.flatness_tolerance);
    let on_other = |points: &[Point2<T>], other: &Region<T>| {
        points
            .iter()
            .all(|p| other.boundary_distance(p, Some(options.flatness_tolerance)) <= tolerance)
    };
    if on_other(&boundary_samples(a), b) && on_other(&boundary_samples(b), a) {
        return Err(BooleanError::UnsupportedInput("coincident boundaries").into());
    }
    Ok(())
}

fn boundary_samples<T: FloatingPoint>(region: &Region<T>) -> Vec<Point2<T>> {
    let mut points = vec![];
    for contour in region.contours() {
        for segment in contour.segments() {
            points.push(*segment.first_point());
            points.push(segment.midpoint());
        }
    }
    points
}
