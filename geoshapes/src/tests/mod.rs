//! Cross-module properties of the public functions.

use crate::geodesic::{
    approximate, normalize_azimuth, GeoPoint2d, InverseRequest, InverseSolver, Wgs84Solver,
};
use crate::{bearing, distance, distance_any, inverse, overlaps, GeodesicResult};
use approx::assert_abs_diff_eq;

/// Meridian distance from pole to pole on WGS84.
const HALF_MERIDIAN: f64 = 20_003_931.4586;

fn exact(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> GeodesicResult {
    let solution = Wgs84Solver
        .solve(
            &GeoPoint2d::latlon(lat1, lon1),
            &GeoPoint2d::latlon(lat2, lon2),
            InverseRequest::All,
        )
        .unwrap();

    GeodesicResult {
        distance: solution.distance().unwrap(),
        azimuth: normalize_azimuth(solution.azimuth().unwrap()),
    }
}

fn shapes() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 0.0],
        vec![-1.5, 0.0],
        vec![2.0, 0.0],
        vec![1.0, 1.0],
        vec![-1.0, -1.0, 1.0, 1.0],
        vec![-0.4, -0.4, 0.4, 0.4],
        vec![-0.6, -0.6, 0.6, 0.6],
        vec![3.0, 3.0, 4.0, 4.0],
        vec![-1.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 1.0],
        vec![-2.0, 0.0, 0.0, -2.0, 2.0, 0.0, 0.0, 2.0],
        vec![
            -2.0, 0.0, 0.0, -2.0, 2.0, 0.0, 0.0, 2.0, -2.0, 0.0, -1.0, 0.0, 0.0, 1.0, 1.0, 0.0,
            0.0, -1.0, -1.0, 0.0,
        ],
        vec![1.0, 0.0, -1.0, 2.0, -3.0, 0.0, -1.0, -2.0],
        vec![0.5, 0.5, 5.0, 0.5, 5.0, 5.0],
    ]
}

#[test]
fn overlaps_is_symmetric() {
    let shapes = shapes();
    for a in &shapes {
        for b in &shapes {
            assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn shapes_overlap_themselves() {
    for shape in shapes() {
        assert_eq!(overlaps(&shape, &shape), Ok(true), "{shape:?}");
    }
}

#[test]
fn pole_to_pole() {
    assert_abs_diff_eq!(distance(90.0, 0.0, -90.0, 0.0).unwrap(), HALF_MERIDIAN, epsilon = 1.0);
    assert_abs_diff_eq!(distance(0.0, 0.0, 0.0, 180.0).unwrap(), HALF_MERIDIAN, epsilon = 1.0);
}

#[test]
fn nashville_to_los_angeles() {
    assert_abs_diff_eq!(
        distance(36.12, -86.67, 33.94, -118.4).unwrap(),
        2_892_777.0,
        epsilon = 1.0
    );
}

#[test]
fn baghdad_osaka_bearings() {
    assert_abs_diff_eq!(bearing(35.0, 45.0, 35.0, 135.0).unwrap(), 60.0, epsilon = 1.0);
    assert_abs_diff_eq!(bearing(35.0, 135.0, 35.0, 45.0).unwrap(), 300.0, epsilon = 1.0);
}

/// Pairs a few kilometers apart at different latitudes.
const SHORT_SPANS: [[f64; 4]; 14] = [
    [0.0, 0.0, 0.02, 0.01],
    [10.0, 20.0, 10.01, 20.03],
    [25.0, -80.0, 25.02, -80.01],
    [33.9, -118.4, 33.93, -118.38],
    [45.0, 7.0, 44.98, 7.02],
    [51.5, -0.12, 51.52, -0.1],
    [60.0, 10.0, 60.01, 10.03],
    [64.0, -21.0, 64.02, -20.98],
    [70.0, 25.0, 70.005, 25.02],
    [74.0, -40.0, 73.99, -39.97],
    [-33.9, 151.2, -33.92, 151.23],
    [-54.8, -68.3, -54.79, -68.28],
    [80.0, 5.0, 80.01, 5.05],
    [85.0, -120.0, 85.005, -119.9],
];

#[test]
fn approximation_is_close_to_exact_on_short_spans() {
    for [lat1, lon1, lat2, lon2] in SHORT_SPANS {
        let fast = approximate(lat1, lon1, lat2, lon2);
        let exact = exact(lat1, lon1, lat2, lon2);

        assert_abs_diff_eq!(fast.distance, exact.distance, epsilon = exact.distance * 1e-3);
        assert_abs_diff_eq!(fast.azimuth, exact.azimuth, epsilon = 0.1);
    }
}

#[test]
fn approximation_distance_is_close_to_exact_at_100_km() {
    for [lat1, lon1, lat2, lon2] in [
        [40.0, -74.0, 40.6, -73.2],
        [0.0, 0.0, 0.9, 0.0],
        [0.0, 0.0, 0.0, 0.9],
        [60.0, 10.0, 60.3, 11.5],
        [70.0, 25.0, 70.5, 26.5],
        [74.5, 0.0, 74.0, 2.5],
        [-45.0, 170.0, -45.5, 171.0],
    ] {
        let fast = approximate(lat1, lon1, lat2, lon2);
        let exact = exact(lat1, lon1, lat2, lon2);

        assert_abs_diff_eq!(fast.distance, exact.distance, epsilon = exact.distance * 1e-3);
    }
}

#[test]
fn dispatcher_agrees_with_exact() {
    for [lat1, lon1, lat2, lon2] in SHORT_SPANS {
        let result = inverse(lat1, lon1, lat2, lon2).unwrap();
        let exact = exact(lat1, lon1, lat2, lon2);

        assert_abs_diff_eq!(result.distance, exact.distance, epsilon = exact.distance * 1e-3);
        assert_abs_diff_eq!(result.azimuth, exact.azimuth, epsilon = 0.1);

        if lat1.abs().max(lat2.abs()) >= 75.0 {
            assert_eq!(result, exact);
        }
    }
}

#[test]
fn bearings_are_in_range() {
    for [lat1, lon1, lat2, lon2] in [
        [0.0, 0.0, 0.0, -0.001],
        [0.0, 0.0, -0.001, 0.0],
        [10.0, 10.0, 10.0, -170.0],
        [-89.0, 0.0, 89.0, 0.0],
        [89.0, 0.0, -89.0, 0.0],
        [80.0, 0.0, 80.0, -10.0],
    ] {
        let bearing = bearing(lat1, lon1, lat2, lon2).unwrap();
        assert!((0.0..360.0).contains(&bearing), "{bearing}");
    }
}

#[test]
fn functions_are_pure() {
    let a = inverse(48.85, 2.35, 52.52, 13.4).unwrap();
    let b = inverse(48.85, 2.35, 52.52, 13.4).unwrap();
    assert_eq!(a.distance.to_bits(), b.distance.to_bits());
    assert_eq!(a.azimuth.to_bits(), b.azimuth.to_bits());

    let shapes = [[52.5, 13.4], [48.1, 11.6]];
    let a = distance_any(&[48.85, 2.35], shapes).unwrap();
    let b = distance_any(&[48.85, 2.35], shapes).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}
