use nalgebra::{Point2, Vector2};

use crate::prelude::*;

const KAPPA: f64 = 0.5522847498307936;

#[test]
fn test_square_contour() {
    let square = Contour::polyline(&[
        Point2::new(0., 0.),
        Point2::new(2., 0.),
        Point2::new(2., 2.),
        Point2::new(0., 2.),
    ]);
    assert!(square.contains(&Point2::new(1., 1.), None).unwrap());
    assert!(!square.contains(&Point2::new(3., 1.), None).unwrap());
    assert!(!square.contains(&Point2::new(1., -1.), None).unwrap());
    // boundary and corner points count as contained
    assert!(square.contains(&Point2::new(2., 1.), None).unwrap());
    assert!(square.contains(&Point2::new(0., 0.), None).unwrap());
}

#[test]
fn test_circle_contour() {
    let k = KAPPA;
    let circle = Contour::new(vec![
        Anchor::new(Point2::new(1., 0.), Vector2::new(0., -k), Vector2::new(0., k)),
        Anchor::new(Point2::new(0., 1.), Vector2::new(k, 0.), Vector2::new(-k, 0.)),
        Anchor::new(Point2::new(-1., 0.), Vector2::new(0., k), Vector2::new(0., -k)),
        Anchor::new(Point2::new(0., -1.), Vector2::new(-k, 0.), Vector2::new(k, 0.)),
    ]);
    assert!(circle.contains(&Point2::new(-0.2, 0.2), None).unwrap());
    assert!(!circle.contains(&Point2::new(2., 0.), None).unwrap());
    assert!(!circle.contains(&Point2::new(0., 1.1), None).unwrap());
    assert!(circle.contains(&Point2::new(0., -0.99), None).unwrap());
}

#[test]
fn test_region_with_hole() {
    let region = Region::new(vec![
        Contour::polyline(&[
            Point2::new(0., 0.),
            Point2::new(4., 0.),
            Point2::new(4., 4.),
            Point2::new(0., 4.),
        ]),
        Contour::polyline(&[
            Point2::new(1., 1.),
            Point2::new(3., 1.),
            Point2::new(3., 3.),
            Point2::new(1., 3.),
        ]),
    ]);
    // inside the hole is outside the region
    assert!(!region.contains(&Point2::new(2., 2.), None).unwrap());
    assert!(region.contains(&Point2::new(0.5, 2.), None).unwrap());
    assert!(region.contains(&Point2::new(2., 3.5), None).unwrap());
    assert!(!region.contains(&Point2::new(5., 2.), None).unwrap());
    // the hole boundary itself is part of the region
    assert!(region.contains(&Point2::new(1., 2.), None).unwrap());
}

#[test]
fn test_degenerate_contour_is_rejected() {
    let dot = Contour::new(vec![Anchor::corner(Point2::new(1., 1.))]);
    assert!(dot.contains(&Point2::new(1., 1.), None).is_err());
}
