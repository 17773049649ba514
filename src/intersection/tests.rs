use approx::assert_relative_eq;
use nalgebra::Point2;

use crate::prelude::*;

#[test]
fn test_crossing_diagonals() {
    let a = CubicBezier::line(Point2::new(0., 0.), Point2::new(2., 2.));
    let b = CubicBezier::line(Point2::new(0., 2.), Point2::new(2., 0.));
    let options = CurveIntersectionOptions::default();
    let found = intersect_curves(&a, &b, &options).unwrap();
    assert_eq!(found.len(), 1);
    let it = &found[0];
    assert_relative_eq!(it.point().x, 1., epsilon = 1e-9);
    assert_relative_eq!(it.point().y, 1., epsilon = 1e-9);
    assert_relative_eq!(it.a(), 0.5, epsilon = 1e-9);
    assert_relative_eq!(it.b(), 0.5, epsilon = 1e-9);
}

#[test]
fn test_asymmetric_crossing_reports_curve_parameters() {
    let a = CubicBezier::line(Point2::new(0., 0.), Point2::new(4., 0.));
    let b = CubicBezier::line(Point2::new(1., -1.), Point2::new(1., 1.));
    let options = CurveIntersectionOptions::default();
    let found = intersect_curves(&a, &b, &options).unwrap();
    assert_eq!(found.len(), 1);
    let it = &found[0];
    // the parameters must evaluate back to the crossing point on each
    // curve, even though a straight segment's cubic parameter is not the
    // linear fraction along it
    let on_a = a.point_at(it.a());
    let on_b = b.point_at(it.b());
    assert_relative_eq!(on_a.x, 1., epsilon = 1e-9);
    assert_relative_eq!(on_a.y, 0., epsilon = 1e-9);
    assert_relative_eq!(on_b.x, 1., epsilon = 1e-9);
    assert_relative_eq!(on_b.y, 0., epsilon = 1e-9);
}

#[test]
fn test_s_curve_crosses_a_line_three_times() {
    let s_curve = CubicBezier::new(
        Point2::new(0., 0.),
        Point2::new(1., 2.),
        Point2::new(2., -2.),
        Point2::new(3., 0.),
    );
    let line = CubicBezier::line(Point2::new(-1., 0.), Point2::new(4., 0.));
    let options = CurveIntersectionOptions::default();
    let found = intersect_curves(&s_curve, &line, &options).unwrap();
    assert_eq!(found.len(), 3);
    // sorted by the parameter on the s-curve: both end points lie on the
    // line, plus the crossing in the middle
    assert_relative_eq!(found[0].a(), 0., epsilon = 1e-6);
    assert_relative_eq!(found[1].a(), 0.5, epsilon = 1e-6);
    assert_relative_eq!(found[2].a(), 1., epsilon = 1e-6);
    assert_relative_eq!(found[1].point().x, 1.5, epsilon = 1e-6);
    assert_relative_eq!(found[1].point().y, 0., epsilon = 1e-6);
}

#[test]
fn test_arc_against_diagonal() {
    let kappa = 0.5522847498307936;
    let arc = CubicBezier::new(
        Point2::new(1., 0.),
        Point2::new(1., kappa),
        Point2::new(kappa, 1.),
        Point2::new(0., 1.),
    );
    let diagonal = CubicBezier::line(Point2::new(0., 0.), Point2::new(2., 2.));
    let options = CurveIntersectionOptions::default();
    let found = intersect_curves(&arc, &diagonal, &options).unwrap();
    assert_eq!(found.len(), 1);
    let point = found[0].point();
    assert_relative_eq!(point.x, point.y, epsilon = 1e-4);
    assert_relative_eq!(point.coords.norm(), 1., epsilon = 1e-3);
}

#[test]
fn test_disjoint_curves() {
    let a = CubicBezier::line(Point2::new(0., 0.), Point2::new(1., 0.));
    let b = CubicBezier::line(Point2::new(0., 1.), Point2::new(1., 1.));
    let options = CurveIntersectionOptions::default();
    assert!(intersect_curves(&a, &b, &options).unwrap().is_empty());
}
