use approx::assert_relative_eq;
use bevy::prelude::*;
use scene_viewer::core::bounds::Bounds;
use scene_viewer::core::fit_spec::{FitSpec, Placement};
use scene_viewer::spawning::transformation::{fit_and_place, fit_scale};

fn unrotated(target: f32, offset: Vec3) -> FitSpec {
    FitSpec {
        target_max_dimension: target,
        placement: Placement::Offset(offset),
        rotation_y: None,
    }
}

#[test]
fn largest_dimension_matches_target() {
    let local = Bounds::new(Vec3::new(-3.0, 0.0, 1.0), Vec3::new(1.0, 2.5, 2.0));

    for target in [1.0, 8.0, 0.25] {
        let mut transform = Transform::default();
        fit_and_place(&mut transform, Some(local), &unrotated(target, Vec3::ZERO));
        let fitted = local.transformed(&transform.compute_affine());
        assert_relative_eq!(fitted.max_dimension(), target, epsilon = 1e-5);
    }
}

#[test]
fn recentered_position_is_offset_from_scaled_center() {
    let local = Bounds::new(Vec3::ZERO, Vec3::new(4.0, 2.0, 2.0));
    let mut transform = Transform::default();
    let report = fit_and_place(&mut transform, Some(local), &FitSpec::background());

    assert_relative_eq!(report.scale, 2.0);
    assert_eq!(report.center, Vec3::new(4.0, 2.0, 2.0));
    assert_eq!(transform.translation, -report.center + Vec3::new(-1.0, 0.0, 1.0));
    assert_eq!(transform.translation, Vec3::new(-5.0, -2.0, -1.0));

    let fitted = local.transformed(&transform.compute_affine());
    assert!(fitted.center().abs_diff_eq(Vec3::new(-1.0, 0.0, 1.0), 1e-5));
}

#[test]
fn two_four_eight_box_needs_no_scaling() {
    assert_eq!(fit_scale(Vec3::new(2.0, 4.0, 8.0), 8.0), 1.0);

    let mut transform = Transform::default();
    let local = Bounds::new(Vec3::ZERO, Vec3::new(2.0, 4.0, 8.0));
    let report = fit_and_place(&mut transform, Some(local), &FitSpec::background());
    assert_eq!(report.scale, 1.0);
    assert_eq!(transform.scale, Vec3::ONE);
}

#[test]
fn empty_object_keeps_unit_scale_and_still_moves() {
    let mut transform = Transform::default();
    let report = fit_and_place(&mut transform, None, &FitSpec::background());

    assert!(report.degenerate);
    assert_eq!(report.scale, 1.0);
    assert_eq!(transform.scale, Vec3::ONE);
    assert_eq!(transform.translation, Vec3::new(-1.0, 0.0, 1.0));
}

#[test]
fn flat_point_object_is_degenerate_not_nan() {
    let mut transform = Transform::default();
    let point = Bounds::new(Vec3::splat(2.0), Vec3::splat(2.0));
    let report = fit_and_place(&mut transform, Some(point), &FitSpec::character());

    assert!(report.degenerate);
    assert_eq!(report.scale, 1.0);
    assert!(transform.translation.is_finite());
    assert_eq!(transform.translation, Vec3::new(0.6, -2.5, 1.5));
}
