use super::*;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn pivot_is_fixed_and_distance_preserved() {
    let pivot = DVec3::new(0.0, 0.0, 2.0);
    let p = DVec3::new(3.0, -1.0, 4.0);
    assert_eq!(
        rotate_about_point(pivot, pivot, DVec3::Y, 1.234).unwrap(),
        pivot
    );

    let rotated = rotate_about_point(p, pivot, DVec3::new(1.0, 1.0, 0.0), 0.77).unwrap();
    let before = (p - pivot).length();
    let after = (rotated - pivot).length();
    assert!((before - after).abs() < 1e-9);
}

#[test]
fn quarter_turn_about_up_through_a_pivot() {
    // The scenes spin whole groups about ORIGIN + 2*OUT with axis UP.
    let pivot = DVec3::new(0.0, 0.0, 2.0);
    let p = DVec3::new(1.0, 0.0, 2.0);
    let rotated = rotate_about_point(p, pivot, DVec3::Y, FRAC_PI_2).unwrap();
    assert!((rotated - DVec3::new(0.0, 0.0, 1.0)).length() < 1e-9);
}

#[test]
fn half_turn_is_its_own_inverse() {
    let pivot = DVec3::new(1.0, 1.0, 1.0);
    let p = DVec3::new(4.0, -2.0, 0.5);
    let once = rotate_about_point(p, pivot, DVec3::Z, PI).unwrap();
    let twice = rotate_about_point(once, pivot, DVec3::Z, PI).unwrap();
    assert!((twice - p).length() < 1e-9);
}

#[test]
fn axis_normalization_does_not_change_the_result() {
    let p = DVec3::new(2.0, 3.0, -1.0);
    let a = rotate_about_point(p, DVec3::ZERO, DVec3::Y, 0.9).unwrap();
    let b = rotate_about_point(p, DVec3::ZERO, DVec3::Y * 10.0, 0.9).unwrap();
    assert!((a - b).length() < 1e-12);
}

#[test]
fn zero_axis_is_rejected() {
    assert!(rotate_about_point(DVec3::X, DVec3::ZERO, DVec3::ZERO, 1.0).is_err());
}
