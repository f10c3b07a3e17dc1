use super::*;

#[test]
fn matches_the_worked_scene_example() {
    // near = 4, point (-4, 2, -8) from the pinhole walkthrough scene.
    let near = NearPlane::new(4.0).unwrap();
    let p = project_point(near, DVec3::new(-4.0, 2.0, -8.0)).unwrap();
    assert_eq!(p, DVec3::new(-2.0, 1.0, -4.0));
}

#[test]
fn image_lands_on_the_near_plane() {
    let near = NearPlane::new(2.5).unwrap();
    for p in [
        DVec3::new(1.0, 1.0, -1.0),
        DVec3::new(-3.0, 0.5, -10.0),
        DVec3::new(0.0, 0.0, 7.0),
    ] {
        assert_eq!(project_point(near, p).unwrap().z, -2.5);
    }
}

#[test]
fn projection_depends_only_on_direction() {
    let near = NearPlane::new(4.0).unwrap();
    let p = DVec3::new(-4.0, 2.0, -8.0);
    let base = project_point(near, p).unwrap();
    for k in [0.5, 2.0, -3.0, 1e6] {
        let scaled = project_point(near, p * k).unwrap();
        assert!((scaled - base).length() < 1e-9);
    }
}

#[test]
fn camera_plane_point_is_rejected() {
    let near = NearPlane::new(1.0).unwrap();
    let err = project_point(near, DVec3::new(3.0, -2.0, 0.0)).unwrap_err();
    assert!(matches!(err, AnimaError::Projection(_)));
    assert!(err.to_string().contains("camera plane"));
}
