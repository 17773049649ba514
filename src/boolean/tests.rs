use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::prelude::*;

use super::graph::{Graph, Operand};

const KAPPA: f64 = 0.5522847498307936;

fn square(origin: Point2<f64>, size: f64) -> Contour<f64> {
    Contour::polyline(&[
        origin,
        Point2::new(origin.x + size, origin.y),
        Point2::new(origin.x + size, origin.y + size),
        Point2::new(origin.x, origin.y + size),
    ])
}

fn circle(center: Point2<f64>, radius: f64) -> Contour<f64> {
    let k = KAPPA * radius;
    Contour::new(vec![
        Anchor::new(
            center + Vector2::new(radius, 0.),
            Vector2::new(0., -k),
            Vector2::new(0., k),
        ),
        Anchor::new(
            center + Vector2::new(0., radius),
            Vector2::new(k, 0.),
            Vector2::new(-k, 0.),
        ),
        Anchor::new(
            center + Vector2::new(-radius, 0.),
            Vector2::new(0., k),
            Vector2::new(0., -k),
        ),
        Anchor::new(
            center + Vector2::new(0., -radius),
            Vector2::new(-k, 0.),
            Vector2::new(k, 0.),
        ),
    ])
}

fn area(region: &Region<f64>) -> f64 {
    region.signed_area(None)
}

/// Every contour of a result must close back onto its first anchor.
fn assert_closed(region: &Region<f64>) {
    for contour in region.contours() {
        let segments = contour.segments();
        assert!(!segments.is_empty());
        for window in segments.windows(2) {
            assert_relative_eq!(window[0].end_point().x, window[1].first_point().x);
            assert_relative_eq!(window[0].end_point().y, window[1].first_point().y);
        }
        let last = segments.last().unwrap();
        let first = segments.first().unwrap();
        assert_relative_eq!(last.end_point().x, first.first_point().x);
        assert_relative_eq!(last.end_point().y, first.first_point().y);
    }
}

#[test]
fn test_graph_construction() {
    let annulus = Region::new(vec![
        square(Point2::new(0., 0.), 4.),
        square(Point2::new(1., 1.), 2.),
    ]);
    let mut graph = Graph::new();
    graph.add_region(&annulus, Operand::A);
    assert_eq!(graph.nodes.len(), 8);
    assert_eq!(graph.edges.len(), 8);
    // cycles are closed and tagged: contour 0 is the base boundary
    assert!(graph.edges[..4].iter().all(|e| e.base));
    assert!(graph.edges[4..].iter().all(|e| !e.base));
    for (index, edge) in graph.edges.iter().enumerate() {
        assert_eq!(graph.nodes[edge.start.0].outgoing, Some(super::graph::EdgeId(index)));
        assert_eq!(graph.nodes[edge.end.0].incoming, Some(super::graph::EdgeId(index)));
    }
}

#[test]
fn test_intersection_of_overlapping_squares() {
    let a = square(Point2::new(0., 0.), 1.);
    let b = square(Point2::new(0.5, 0.5), 1.);
    let result = a.intersection(&b, None).unwrap();
    assert_closed(&result);
    assert_eq!(result.contours().len(), 1);
    assert_eq!(result.contours()[0].len(), 4);
    assert_relative_eq!(area(&result), 0.25, epsilon = 1e-9);
}

#[test]
fn test_union_of_overlapping_squares() {
    let a = square(Point2::new(0., 0.), 1.);
    let b = square(Point2::new(0.5, 0.5), 1.);
    let result = a.union(&b, None).unwrap();
    assert_closed(&result);
    assert_eq!(result.contours().len(), 1);
    // six corners of the two squares survive, plus the two crossings
    assert_eq!(result.contours()[0].len(), 8);
    assert_relative_eq!(area(&result), 1.75, epsilon = 1e-9);
}

#[test]
fn test_difference_of_overlapping_squares() {
    let a = square(Point2::new(0., 0.), 1.);
    let b = square(Point2::new(0.5, 0.5), 1.);
    let result = a.difference(&b, None).unwrap();
    assert_closed(&result);
    assert_eq!(result.contours().len(), 1);
    assert_eq!(result.contours()[0].len(), 6);
    assert_relative_eq!(area(&result), 0.75, epsilon = 1e-9);
}

#[test]
fn test_disjoint_squares() {
    let a = square(Point2::new(0., 0.), 1.);
    let b = square(Point2::new(2., 0.), 1.);

    let intersection = a.intersection(&b, None).unwrap();
    assert!(intersection.is_empty());

    let union = a.union(&b, None).unwrap();
    assert_closed(&union);
    assert_eq!(union.contours().len(), 2);
    assert_relative_eq!(union.contours()[0].signed_area(None), 1., epsilon = 1e-9);
    assert_relative_eq!(union.contours()[1].signed_area(None), 1., epsilon = 1e-9);

    let difference = a.difference(&b, None).unwrap();
    assert_closed(&difference);
    assert_eq!(difference.contours().len(), 1);
    assert_relative_eq!(area(&difference), 1., epsilon = 1e-9);
}

#[test]
fn test_contained_square() {
    let inner = square(Point2::new(0., 0.), 1.);
    let outer = square(Point2::new(-1., -1.), 3.);

    let intersection = inner.intersection(&outer, None).unwrap();
    assert_relative_eq!(area(&intersection), 1., epsilon = 1e-9);

    let union = inner.union(&outer, None).unwrap();
    assert_eq!(union.contours().len(), 1);
    assert_relative_eq!(area(&union), 9., epsilon = 1e-9);

    let difference = inner.difference(&outer, None).unwrap();
    assert!(difference.is_empty());
}

#[test]
fn test_difference_produces_hole() {
    let outer = square(Point2::new(-1., -1.), 3.);
    let inner = square(Point2::new(0., 0.), 1.);
    let result = outer.difference(&inner, None).unwrap();
    assert_closed(&result);
    assert_eq!(result.contours().len(), 2);
    // the outer boundary comes first, the hole winds the other way
    assert!(result.contours()[0].signed_area(None) > 0.);
    assert!(result.contours()[1].signed_area(None) < 0.);
    assert_relative_eq!(area(&result), 8., epsilon = 1e-9);
    // a point inside the hole is outside the result
    assert!(!result.contains(&Point2::new(0.5, 0.5), None).unwrap());
    assert!(result.contains(&Point2::new(-0.5, -0.5), None).unwrap());
}

#[test]
fn test_commutativity_by_area() {
    let a: Region<f64> = square(Point2::new(0., 0.), 2.).into();
    let b: Region<f64> = circle(Point2::new(0., 0.), 1.).into();

    let ab = a.union(&b, None).unwrap();
    let ba = b.union(&a, None).unwrap();
    assert_relative_eq!(area(&ab), area(&ba), epsilon = 1e-6);

    let ab = a.intersection(&b, None).unwrap();
    let ba = b.intersection(&a, None).unwrap();
    assert_relative_eq!(area(&ab), area(&ba), epsilon = 1e-6);
}

#[test]
fn test_circle_x_square() {
    let circle = circle(Point2::new(0., 0.), 1.);
    let square = square(Point2::new(0., 0.), 2.);
    let circle_area = circle.signed_area(None);

    // the circle meets the square right at two of its anchors, so both
    // crossings land on existing vertices of the circle
    let quarter = circle.intersection(&square, None).unwrap();
    assert_closed(&quarter);
    assert_eq!(quarter.contours().len(), 1);
    assert_relative_eq!(area(&quarter), circle_area / 4., epsilon = 1e-4);
    assert_relative_eq!(area(&quarter), std::f64::consts::FRAC_PI_4, epsilon = 1e-2);

    let rest = circle.difference(&square, None).unwrap();
    assert_closed(&rest);
    assert_eq!(rest.contours().len(), 1);

    // complement identity: (circle - square) + (circle & square) == circle
    assert_relative_eq!(area(&rest) + area(&quarter), circle_area, epsilon = 1e-6);

    let union = circle.union(&square, None).unwrap();
    assert_closed(&union);
    assert_relative_eq!(
        area(&union),
        4. + circle_area * 3. / 4.,
        epsilon = 1e-6
    );
}

#[test]
fn test_complement_identity_squares() {
    let a: Region<f64> = square(Point2::new(0., 0.), 1.).into();
    let b: Region<f64> = square(Point2::new(0.25, 0.5), 1.).into();
    let difference = a.difference(&b, None).unwrap();
    let intersection = a.intersection(&b, None).unwrap();
    assert_relative_eq!(
        area(&difference) + area(&intersection),
        area(&a),
        epsilon = 1e-9
    );
}

#[test]
fn test_intersection_on_existing_vertex() {
    // two diamond corners lie exactly on the square's right edge, so the
    // crossings coincide with existing vertices of the diamond
    let square = square(Point2::new(0., 0.), 2.);
    let diamond = Contour::polyline(&[
        Point2::new(1.5, 1.),
        Point2::new(2., 0.5),
        Point2::new(2.5, 1.),
        Point2::new(2., 1.5),
    ]);

    let intersection = square.intersection(&diamond, None).unwrap();
    assert_closed(&intersection);
    assert_eq!(intersection.contours().len(), 1);
    assert_relative_eq!(area(&intersection), 0.25, epsilon = 1e-9);

    let union = square.union(&diamond, None).unwrap();
    assert_closed(&union);
    assert_eq!(union.contours().len(), 1);
    assert_relative_eq!(area(&union), 4.25, epsilon = 1e-9);

    let difference = square.difference(&diamond, None).unwrap();
    assert_closed(&difference);
    assert_relative_eq!(area(&difference), 3.75, epsilon = 1e-9);
}

#[test]
fn test_point_membership_is_consistent() {
    let a: Region<f64> = square(Point2::new(0., 0.), 1.).into();
    let b: Region<f64> = square(Point2::new(0.5, 0.5), 1.).into();
    let intersection = a.intersection(&b, None).unwrap();
    let union = a.union(&b, None).unwrap();

    let inside = Point2::new(0.75, 0.75);
    assert!(intersection.contains(&inside, None).unwrap());
    assert!(a.contains(&inside, None).unwrap());
    assert!(b.contains(&inside, None).unwrap());

    let outside = Point2::new(2., 2.);
    assert!(!union.contains(&outside, None).unwrap());
    assert!(!a.contains(&outside, None).unwrap());
    assert!(!b.contains(&outside, None).unwrap());
}

#[test]
fn test_coincident_operands_are_rejected() {
    let a = square(Point2::new(0., 0.), 1.);
    let error = a.union(&a.clone(), None).unwrap_err();
    assert_eq!(
        error.downcast_ref::<BooleanError>(),
        Some(&BooleanError::UnsupportedInput("coincident boundaries"))
    );
}

#[test]
fn test_self_intersecting_operand_is_rejected() {
    let bowtie = Contour::polyline(&[
        Point2::new(0., 0.),
        Point2::new(2., 2.),
        Point2::new(2., 0.),
        Point2::new(0., 2.),
    ]);
    let other = square(Point2::new(5., 5.), 1.);
    let error = bowtie.union(&other, None).unwrap_err();
    assert_eq!(
        error.downcast_ref::<BooleanError>(),
        Some(&BooleanError::UnsupportedInput("self-intersecting boundary"))
    );
}

#[test]
fn test_empty_operand() {
    let a: Region<f64> = square(Point2::new(0., 0.), 1.).into();
    let empty = Region::empty();

    let union = a.union(&empty, None).unwrap();
    assert_relative_eq!(area(&union), 1., epsilon = 1e-9);

    let intersection = a.intersection(&empty, None).unwrap();
    assert!(intersection.is_empty());

    let difference = a.difference(&empty, None).unwrap();
    assert_relative_eq!(area(&difference), 1., epsilon = 1e-9);
}
