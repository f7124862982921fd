use bevy::prelude::*;
use bevy::math::Affine3A;
use bevy::render::mesh::MeshAabb;
use crate::core::bounds::Bounds;
use crate::core::fit_spec::{FitSpec, Placement};

/// What a fit did, for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport {
    pub original_size: Vec3,
    pub scale: f32,
    pub center: Vec3,
    pub final_position: Vec3,
    pub degenerate: bool,
}

/// Uniform scale that brings the largest side of `size` to `target`.
/// Empty or zero-size geometry keeps a scale of 1.
pub fn fit_scale(size: Vec3, target: f32) -> f32 {
    let largest = size.max_element();
    if !largest.is_finite() || largest <= 0.0 {
        return 1.0;
    }
    target / largest
}

/// Scales, re-centers and places an object. `local_bounds` is the geometry in the
/// object's own space, before its transform; `None` means nothing renderable.
pub fn fit_and_place(transform: &mut Transform, local_bounds: Option<Bounds>, spec: &FitSpec) -> FitReport {
    let current = local_bounds.map(|bounds| bounds.transformed(&transform.compute_affine()));
    let original_size = current.map(|bounds| bounds.size()).unwrap_or(Vec3::ZERO);
    let degenerate = current.map_or(true, |bounds| bounds.is_degenerate());

    let scale = fit_scale(original_size, spec.target_max_dimension);
    transform.scale = Vec3::splat(scale);

    let center = local_bounds
        .map(|bounds| bounds.transformed(&transform.compute_affine()).center())
        .unwrap_or(Vec3::ZERO);
    transform.translation -= center;

    match spec.placement {
        Placement::Offset(offset) => transform.translation += offset,
        Placement::Absolute(position) => transform.translation = position,
    }

    if let Some(yaw) = spec.rotation_y {
        transform.rotation = Quat::from_rotation_y(yaw);
    }

    FitReport {
        original_size,
        scale,
        center,
        final_position: transform.translation,
        degenerate,
    }
}

/// Bounds of every mesh below `root`, expressed in `root`'s local space.
pub fn hierarchy_local_bounds(
    root: Entity,
    children: &Query<&Children>,
    nodes: &Query<(&Transform, Option<&Mesh3d>)>,
    meshes: &Assets<Mesh>,
) -> Option<Bounds> {
    let mut bounds = None;
    collect_bounds(root, Affine3A::IDENTITY, children, nodes, meshes, &mut bounds);
    bounds
}

fn collect_bounds(
    entity: Entity,
    affine: Affine3A,
    children: &Query<&Children>,
    nodes: &Query<(&Transform, Option<&Mesh3d>)>,
    meshes: &Assets<Mesh>,
    bounds: &mut Option<Bounds>,
) {
    if let Ok((_, Some(mesh))) = nodes.get(entity) {
        if let Some(aabb) = meshes.get(&mesh.0).and_then(|mesh| mesh.compute_aabb()) {
            let mesh_bounds = Bounds::from_center_half_extents(aabb.center.into(), aabb.half_extents.into())
                .transformed(&affine);
            *bounds = Some(match bounds.take() {
                Some(accumulated) => accumulated.union(&mesh_bounds),
                None => mesh_bounds,
            });
        }
    }

    if let Ok(child_list) = children.get(entity) {
        for &child in child_list.iter() {
            let child_affine = nodes
                .get(child)
                .map(|(transform, _)| affine * transform.compute_affine())
                .unwrap_or(affine);
            collect_bounds(child, child_affine, children, nodes, meshes, bounds);
        }
    }
}
