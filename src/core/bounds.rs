use bevy::math::{Affine3A, Vec3};

/// Axis-aligned box in some reference space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Bounds {
            min: min.min(max),
            max: max.max(min),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Bounds::new(center - half_extents, center + half_extents)
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn max_dimension(&self) -> f32 {
        self.size().max_element()
    }

    /// True when the box has no extent to scale against.
    pub fn is_degenerate(&self) -> bool {
        let largest = self.max_dimension();
        !largest.is_finite() || largest <= 0.0
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Box around the eight corners after `affine`, so rotation grows the result.
    pub fn transformed(&self, affine: &Affine3A) -> Bounds {
        let mut corners = self.corners().into_iter().map(|corner| affine.transform_point3(corner));
        let first = corners.next().unwrap_or(Vec3::ZERO);
        let (min, max) = corners.fold((first, first), |(min, max), point| (min.min(point), max.max(point)));

        Bounds { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bevy::math::Quat;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn size_and_center() {
        let bounds = Bounds::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 4.0, 10.0));
        assert_eq!(bounds.size(), Vec3::new(2.0, 4.0, 8.0));
        assert_eq!(bounds.center(), Vec3::new(0.0, 2.0, 6.0));
        assert_eq!(bounds.max_dimension(), 8.0);
    }

    #[test]
    fn new_orders_corners() {
        let bounds = Bounds::new(Vec3::splat(1.0), Vec3::splat(-1.0));
        assert_eq!(bounds.min, Vec3::splat(-1.0));
        assert_eq!(bounds.max, Vec3::splat(1.0));
    }

    #[test]
    fn point_box_is_degenerate() {
        assert!(Bounds::new(Vec3::ONE, Vec3::ONE).is_degenerate());
        assert!(!Bounds::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.5)).is_degenerate());
    }

    #[test]
    fn union_covers_both() {
        let a = Bounds::new(Vec3::ZERO, Vec3::ONE);
        let b = Bounds::new(Vec3::splat(-2.0), Vec3::splat(-1.0));
        let joined = a.union(&b);
        assert_eq!(joined.min, Vec3::splat(-2.0));
        assert_eq!(joined.max, Vec3::ONE);
    }

    #[test]
    fn transform_scales_and_rotates() {
        let bounds = Bounds::new(Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0));
        let affine = Affine3A::from_scale_rotation_translation(
            Vec3::splat(2.0),
            Quat::from_rotation_y(FRAC_PI_2),
            Vec3::new(0.0, 1.0, 0.0),
        );
        let moved = bounds.transformed(&affine);

        assert_relative_eq!(moved.size().x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(moved.size().y, 2.0, epsilon = 1e-5);
        assert_relative_eq!(moved.size().z, 4.0, epsilon = 1e-5);
        assert_relative_eq!(moved.min.y, 1.0, epsilon = 1e-5);
    }
}
