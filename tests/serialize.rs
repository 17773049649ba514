#![cfg(feature = "serde")]

use nalgebra::{Point2, Vector2};
use taglio::prelude::*;

#[test]
fn test_region_roundtrip() {
    let kappa = 0.5522847498307936;
    let region = Region::new(vec![
        Contour::polyline(&[
            Point2::new(0., 0.),
            Point2::new(4., 0.),
            Point2::new(4., 4.),
            Point2::new(0., 4.),
        ]),
        Contour::new(vec![
            Anchor::new(
                Point2::new(3., 2.),
                Vector2::new(0., -kappa),
                Vector2::new(0., kappa),
            ),
            Anchor::new(
                Point2::new(2., 3.),
                Vector2::new(kappa, 0.),
                Vector2::new(-kappa, 0.),
            ),
            Anchor::new(
                Point2::new(1., 2.),
                Vector2::new(0., kappa),
                Vector2::new(0., -kappa),
            ),
            Anchor::new(
                Point2::new(2., 1.),
                Vector2::new(-kappa, 0.),
                Vector2::new(kappa, 0.),
            ),
        ]),
    ]);
    let json = serde_json::to_string_pretty(&region).unwrap();
    let deserialized: Region<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, region);
}
