use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::curve::CubicBezier;
use crate::error::BooleanError;
use crate::misc::{FloatingPoint, Line};

use super::{CurveIntersection, CurveIntersectionOptions};

/// Find the transversal intersections between two cubic Bezier curves.
///
/// Both curves are subdivided recursively while their bounding boxes
/// overlap; once both halves are flat enough their chords are intersected
/// and the crossing parameter is refined on the exact curve by bisection.
/// Duplicate solutions reported by adjacent flat pieces meeting at a shared
/// point are suppressed, so one geometric crossing yields one record.
pub fn intersect_curves<T: FloatingPoint>(
    a: &CubicBezier<T>,
    b: &CubicBezier<T>,
    options: &CurveIntersectionOptions<T>,
) -> anyhow::Result<Vec<CurveIntersection<T>>> {
    let mut found = vec![];
    add_intersections(
        a,
        b,
        (T::zero(), T::one()),
        (T::zero(), T::one()),
        0,
        options,
        &mut found,
    )?;

    found.sort_by(|x, y| x.a().partial_cmp(&y.a()).unwrap_or(Ordering::Equal));

    let eps = options.parameter_tolerance;
    let mut unique: Vec<CurveIntersection<T>> = vec![];
    for it in found {
        let duplicate = unique
            .iter()
            .any(|kept| (kept.a() - it.a()).abs() <= eps && (kept.b() - it.b()).abs() <= eps);
        if !duplicate {
            unique.push(it);
        }
    }
    Ok(unique)
}

#[allow(clippy::too_many_arguments)]
fn add_intersections<T: FloatingPoint>(
    a: &CubicBezier<T>,
    b: &CubicBezier<T>,
    a_span: (T, T),
    b_span: (T, T),
    depth: usize,
    options: &CurveIntersectionOptions<T>,
    found: &mut Vec<CurveIntersection<T>>,
) -> anyhow::Result<()> {
    if !a
        .bounding_box()
        .intersects(&b.bounding_box(), Some(options.distance_tolerance))
    {
        return Ok(());
    }

    let flat = a.is_flat_enough(options.flatness_tolerance)
        && b.is_flat_enough(options.flatness_tolerance);
    if flat || depth >= options.max_depth {
        let chord_a = Line::new(*a.first_point(), *a.end_point());
        let chord_b = Line::new(*b.first_point(), *b.end_point());
        if let Some((point, ua, ub)) = chord_a.intersection(&chord_b, options.parameter_tolerance)
        {
            if !(point.x.is_finite() && point.y.is_finite()) {
                return Err(BooleanError::DegenerateGeometry("curve intersection").into());
            }
            let ua = refine_crossing(a, &chord_b, ua, options);
            let ub = refine_crossing(b, &chord_a, ub, options);
            let ta = a_span.0 + (a_span.1 - a_span.0) * ua;
            let tb = b_span.0 + (b_span.1 - b_span.0) * ub;
            found.push(CurveIntersection::new(a.point_at(ua), ta, tb));
        }
        return Ok(());
    }

    let half = T::from_f64(0.5).unwrap();
    let (a0, a1) = a.try_split(half)?;
    let (b0, b1) = b.try_split(half)?;
    let am = (a_span.0 + a_span.1) * half;
    let bm = (b_span.0 + b_span.1) * half;
    add_intersections(&a0, &b0, (a_span.0, am), (b_span.0, bm), depth + 1, options, found)?;
    add_intersections(&a0, &b1, (a_span.0, am), (bm, b_span.1), depth + 1, options, found)?;
    add_intersections(&a1, &b0, (am, a_span.1), (b_span.0, bm), depth + 1, options, found)?;
    add_intersections(&a1, &b1, (am, a_span.1), (bm, b_span.1), depth + 1, options, found)?;
    Ok(())
}

/// Pin down the parameter where `piece` crosses the line carrying `chord`.
///
/// The chord intersection gives the crossing position along the chord, but
/// a cubic does not move linearly along its chord, so the linear fraction
/// is only a seed. The signed distance to the chord line changes sign
/// across a transversal crossing; bisection on it recovers the parameter to
/// full precision. Falls back to the seed when the piece does not straddle
/// the line (tangential contact).
fn refine_crossing<T: FloatingPoint>(
    piece: &CubicBezier<T>,
    chord: &Line<T>,
    seed: T,
    options: &CurveIntersectionOptions<T>,
) -> T {
    let tangent = chord.tangent();
    let normal = Vector2::new(-tangent.y, tangent.x);
    let offset = normal.dot(&chord.start().coords);
    let distance = |u: T| normal.dot(&piece.point_at(u).coords) - offset;

    let eps = options.distance_tolerance;
    let mut lo = T::zero();
    let mut hi = T::one();
    let d_lo = distance(lo);
    let d_hi = distance(hi);
    if d_lo.abs() <= eps {
        return T::zero();
    }
    if d_hi.abs() <= eps {
        return T::one();
    }
    if (d_lo > T::zero()) == (d_hi > T::zero()) {
        return seed;
    }

    let half = T::from_f64(0.5).unwrap();
    for _ in 0..64 {
        let mid = (lo + hi) * half;
        let d_mid = distance(mid);
        if d_mid == T::zero() {
            return mid;
        }
        if (d_mid > T::zero()) == (d_lo > T::zero()) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) * half
}
