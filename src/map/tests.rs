use crate::map::models::LatLng;
use crate::map::{distance, points};

#[test]
fn test_identical_coordinates_score_the_maximum() {
    let spot = LatLng { lat: 53.0, lng: 84.0 };

    let meters = distance(spot, spot);

    assert_eq!(meters, 0.0);
    assert_eq!(points(meters), 5_000);
}

#[test]
fn test_distance_is_symmetric() {
    let barnaul = LatLng {
        lat: 53.347378,
        lng: 83.77841,
    };
    let moscow = LatLng {
        lat: 55.751244,
        lng: 37.618423,
    };

    assert!((distance(barnaul, moscow) - distance(moscow, barnaul)).abs() < 1e-6);
}

#[test]
fn test_one_degree_of_latitude() {
    let a = LatLng { lat: 53.0, lng: 84.0 };
    let b = LatLng { lat: 54.0, lng: 84.0 };

    // R * 1° in radians under the configured sphere radius.
    assert!((distance(a, b) - 111_319.49).abs() < 0.01);
}

#[test]
fn test_points_curve() {
    assert_eq!(points(0.0), 5_000);
    assert_eq!(points(25.0), 5_000);
    assert_eq!(points(26.0), 4_995);
    assert_eq!(points(1_000.0), 125);
    assert_eq!(points(1_025.0), 0);
    assert_eq!(points(10_000.0), 0);
}

#[test]
fn test_points_never_increase_with_distance() {
    let mut previous = points(0.0);
    for tenth_of_meter in 0..=11_000 {
        let current = points(tenth_of_meter as f64 * 0.1);
        assert!(current <= previous);
        assert!(current <= 5_000);
        previous = current;
    }
}
